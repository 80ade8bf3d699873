//! Error types for the SWAPI loader.
//!
//! Each concern of the pipeline owns a dedicated error enum (configuration, HTTP fetching,
//! reference resolution, flattening). All of them are aggregated by [`Error`] through
//! `thiserror`'s `#[from]` conversions so the `?` operator can propagate failures from any
//! layer up to the pipeline driver, which records them per chunk.

pub mod config;
pub mod fetch;
pub mod flatten;
pub mod resolve;
pub mod retry;

use thiserror::Error;

pub use config::ConfigError;
pub use fetch::FetchError;
pub use flatten::FlattenError;
pub use resolve::ResolveError;

/// Main error type for the SWAPI loader.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Fetch errors (transport failures, non-success HTTP status, undecodable bodies)
/// - Resolution errors (a reference field of a person failed to resolve)
/// - Flatten errors (malformed identifiers, missing display names)
/// - External library errors (database, HTTP client construction)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Failure fetching a primary entity.
    #[error(transparent)]
    FetchError(#[from] FetchError),
    /// Failure resolving one of a person's reference fields.
    #[error(transparent)]
    ResolveError(#[from] ResolveError),
    /// Failure mapping a resolved person into a flat record.
    #[error(transparent)]
    FlattenError(#[from] FlattenError),
    /// Internal error indicating a bug, e.g. a chunk task that panicked.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// The global tracing subscriber could not be installed.
    #[error("Failed to initialize tracing: {0}")]
    TracingError(String),
    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClientError(#[from] reqwest::Error),
    /// Database error (connection issues, schema reset, insert failures).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
