//! Data models for the SWAPI loader.
//!
//! - `swapi` - typed views of the JSON returned by the API (people and their references)
//! - `record` - the flattened, persistence-ready row

pub mod record;
pub mod swapi;
