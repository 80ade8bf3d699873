//! Persistence of flattened records.
//!
//! [`PersistenceSink`] is the storage seam used by the pipeline driver. [`PeopleRepository`] is
//! the SeaORM implementation writing to the `swapi_people` table.

pub mod people;

use async_trait::async_trait;
use sea_orm::DbErr;

use crate::model::record::FlatRecord;

pub use people::PeopleRepository;

/// Destination of the flat records produced by a run.
#[async_trait]
pub trait PersistenceSink: Send + Sync {
    /// Drop and recreate the schema, discarding every stored record.
    async fn reset(&self) -> Result<(), DbErr>;

    /// Persist one chunk of records atomically.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of records inserted
    /// - `Err(DbErr)` - The insert or commit failed; nothing of the batch is stored
    async fn insert_batch(&self, records: Vec<FlatRecord>) -> Result<u64, DbErr>;
}

#[cfg(test)]
mod tests;
