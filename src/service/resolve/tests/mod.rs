use std::time::Duration;

use serde_json::json;

use crate::{
    error::{FetchError, ResolveError},
    model::swapi::{Person, Reference, ReferenceKind},
    service::{
        resolve::{BatchResolver, EntityResolver},
        retry::RetryPolicy,
    },
    util::test::FakeFetcher,
};

mod resolve_all;

const BASE: &str = "https://swapi.example/api";

fn url(collection: &str, id: i64) -> String {
    format!("{}/{}/{}/", BASE, collection, id)
}

fn named(collection: &str, id: i64, name: &str) -> serde_json::Value {
    json!({ "name": name, "url": url(collection, id) })
}
