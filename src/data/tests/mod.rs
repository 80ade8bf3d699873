use sea_orm::{ConnectionTrait, EntityTrait};
use swapi_test_utils::prelude::*;

use crate::{
    data::{PeopleRepository, PersistenceSink},
    model::record::FlatRecord,
};


fn record(id: i32) -> FlatRecord {
    FlatRecord {
        id,
        name: Some(format!("Person {}", id)),
        height: Some("172".to_string()),
        homeworld: Some("Planet 1".to_string()),
        films: "Film 1, Film 2".to_string(),
        ..Default::default()
    }
}
