use std::{sync::Arc, time::Duration};

use serde_json::{json, Value};

use crate::{
    error::{Error, FetchError, FlattenError, ResolveError},
    model::swapi::ReferenceKind,
    service::{
        pipeline::{chunk_count, partition, person_url, PipelineConfig, PipelineDriver},
        retry::RetryPolicy,
    },
    util::test::{FakeFetcher, RecordingSink},
};


const BASE: &str = "https://swapi.example/api";

fn url(collection: &str, id: i64) -> String {
    format!("{}/{}/{}/", BASE, collection, id)
}

/// Person appearing in film 1 and living on planet 1
fn person(id: i64) -> Value {
    json!({
        "name": format!("Person {}", id),
        "height": "172",
        "url": url("people", id),
        "films": [url("films", 1)],
        "homeworld": url("planets", 1),
        "species": [],
        "starships": [],
        "vehicles": [],
    })
}

/// Fetcher serving people `ids` together with film 1 and planet 1
fn fetcher_with_people(ids: impl IntoIterator<Item = i64>) -> FakeFetcher {
    let mut fetcher = FakeFetcher::new()
        .with_json(url("films", 1), json!({ "title": "A New Hope" }))
        .with_json(url("planets", 1), json!({ "name": "Tatooine" }));

    for id in ids {
        fetcher = fetcher.with_json(url("people", id), person(id));
    }

    fetcher
}

fn driver(
    fetcher: &FakeFetcher,
    sink: &RecordingSink,
    ids: std::ops::Range<i64>,
    chunk_size: usize,
) -> PipelineDriver<FakeFetcher, RecordingSink> {
    let config = PipelineConfig::new(BASE, ids, chunk_size).with_retry(RetryPolicy::no_retry());

    PipelineDriver::new(Arc::new(fetcher.clone()), Arc::new(sink.clone()), config)
}
