//! Service layer of the SWAPI loader.
//!
//! - `retry` - exponential backoff around individual fetches
//! - `resolve` - batch and per-person reference resolution
//! - `flatten` - mapping of a resolved person into a flat record
//! - `pipeline` - chunked, concurrent driver that feeds the persistence sink

pub mod flatten;
pub mod pipeline;
pub mod resolve;
pub mod retry;
