//! Test configuration constants.

/// User agent sent by the test HTTP client.
pub static TEST_USER_AGENT: &str = "swapi-loader-tests/0.1 (+https://swapi.py4e.com)";

/// In-memory SQLite URL; SeaORM pins in-memory databases to a single pooled connection.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";
