//! Shared test harness for the SWAPI loader.
//!
//! Tests are set up in two phases. Phase 1 declares the environment through [`TestBuilder`]
//! (tables, mock endpoints); phase 2 works with the resulting [`TestContext`], which owns an
//! in-memory SQLite database, a mockito server standing in for the SWAPI host and an HTTP
//! client, plus fixture helpers for SWAPI payloads.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::swapi::factory, TestBuilder, TestContext, TestError};
}
