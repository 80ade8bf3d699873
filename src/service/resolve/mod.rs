//! Concurrent resolution of SWAPI resources.
//!
//! [`BatchResolver`] fetches an ordered list of URLs concurrently and returns the decoded
//! resources in input order, failing fast on the first error. [`EntityResolver`] fans out one
//! batch per reference field of a person and runs the five batches concurrently.

pub mod batch;
pub mod entity;

pub use batch::BatchResolver;
pub use entity::EntityResolver;

#[cfg(test)]
mod tests;
