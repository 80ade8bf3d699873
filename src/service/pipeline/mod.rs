//! Chunked fetch, resolve and persist pipeline.
//!
//! The driver splits the configured ID range into fixed-size chunks. For every chunk the people
//! are fetched concurrently, then a detached task resolves their references, flattens them and
//! persists the chunk in one batch while the driver moves on to the next chunk. Once every chunk
//! has been submitted the driver drains the outstanding tasks.
//!
//! Failures are isolated per chunk: a chunk that fails to fetch, resolve, flatten or persist is
//! recorded in the [`RunSummary`] and the run continues with the remaining chunks. Only a failed
//! schema reset aborts the run.

pub mod config;
pub mod summary;

use std::{collections::HashMap, ops::Range, sync::Arc};

use futures::future::try_join_all;
use tokio::task::JoinSet;

use crate::{
    data::PersistenceSink,
    error::{Error, FetchError},
    fetcher::Fetcher,
    model::swapi::Person,
    service::{
        flatten::flatten,
        resolve::{BatchResolver, EntityResolver},
        retry::RetryPolicy,
    },
};

pub use config::PipelineConfig;
pub use summary::{ChunkOutcome, ChunkSpan, RunSummary};

/// Split an upper-bound-exclusive ID range into consecutive chunks of `chunk_size` IDs.
///
/// The last chunk holds the remainder and may be shorter. Every ID of the range appears in
/// exactly one chunk. A `chunk_size` of zero is treated as one. Chunks are produced lazily,
/// only one chunk's IDs are held at a time.
pub fn partition(
    id_range: Range<i64>,
    chunk_size: usize,
) -> impl Iterator<Item = Vec<i64>> {
    let chunk_size = chunk_size.max(1);
    let step = i64::try_from(chunk_size).unwrap_or(i64::MAX);
    let end = id_range.end;

    id_range
        .step_by(chunk_size)
        .map(move |start| (start..start.saturating_add(step).min(end)).collect::<Vec<_>>())
}

/// Number of chunks [`partition`] yields for the same arguments
pub fn chunk_count(id_range: &Range<i64>, chunk_size: usize) -> u64 {
    let len = id_range.end.saturating_sub(id_range.start).max(0) as u64;

    len.div_ceil(chunk_size.max(1) as u64)
}

/// URL of the person with the given ID
pub fn person_url(base_url: &str, id: i64) -> String {
    format!("{}/people/{}/", base_url.trim_end_matches('/'), id)
}

/// Driver for a complete load run
pub struct PipelineDriver<F, S> {
    fetcher: Arc<F>,
    sink: Arc<S>,
    config: PipelineConfig,
}

impl<F, S> PipelineDriver<F, S>
where
    F: Fetcher + 'static,
    S: PersistenceSink + 'static,
{
    pub fn new(fetcher: Arc<F>, sink: Arc<S>, config: PipelineConfig) -> Self {
        Self {
            fetcher,
            sink,
            config,
        }
    }

    /// Reset the store, then load every chunk of the configured ID range.
    ///
    /// Returns only after every spawned chunk task has finished.
    ///
    /// # Returns
    /// - `Ok(RunSummary)` - Outcome of every chunk, including failed ones
    /// - `Err(Error::DbErr)` - The schema reset failed; no chunk was processed
    pub async fn run(&self) -> Result<RunSummary, Error> {
        self.sink.reset().await?;
        tracing::info!("Reset people table");

        tracing::info!(
            "Loading people {:?} in {} chunks of up to {}",
            self.config.id_range,
            chunk_count(&self.config.id_range, self.config.chunk_size),
            self.config.chunk_size
        );

        let mut tasks = JoinSet::new();
        let mut spans = HashMap::new();
        let mut outcomes = Vec::new();

        let chunks = partition(self.config.id_range.clone(), self.config.chunk_size);
        for (index, ids) in chunks.enumerate() {
            let chunk = ChunkSpan::new(index, &ids);

            let people = match self.fetch_chunk(&ids).await {
                Ok(people) => people,
                Err(e) => {
                    tracing::error!("Failed to fetch {}: {}", chunk, e);
                    outcomes.push(ChunkOutcome::Failed {
                        chunk,
                        error: e.into(),
                    });
                    continue;
                }
            };

            tracing::debug!("Fetched {} people for {}", people.len(), chunk);

            let handle = tasks.spawn(resolve_and_persist(
                self.fetcher.clone(),
                self.sink.clone(),
                self.config.retry.clone(),
                chunk,
                people,
            ));
            spans.insert(handle.id(), chunk);
        }

        while let Some(joined) = tasks.join_next_with_id().await {
            match joined {
                Ok((_, outcome)) => outcomes.push(outcome),
                Err(e) => {
                    let chunk = spans.get(&e.id()).copied().unwrap_or_default();
                    tracing::error!("Task for {} did not complete: {}", chunk, e);
                    outcomes.push(ChunkOutcome::Failed {
                        chunk,
                        error: Error::InternalError(e.to_string()),
                    });
                }
            }
        }

        let summary = RunSummary::new(outcomes);
        tracing::info!(
            "Persisted {} people in {}/{} chunks ({} failed, {} skipped without url)",
            summary.records_persisted(),
            summary.succeeded(),
            summary.chunks(),
            summary.failed(),
            summary.entities_skipped()
        );

        Ok(summary)
    }

    /// Fetch every person of a chunk concurrently, failing on the first error
    async fn fetch_chunk(&self, ids: &[i64]) -> Result<Vec<Person>, FetchError> {
        let urls: Vec<String> = ids
            .iter()
            .map(|id| person_url(&self.config.base_url, *id))
            .collect();
        let urls: Vec<&str> = urls.iter().map(String::as_str).collect();

        BatchResolver::new(self.fetcher.as_ref(), &self.config.retry)
            .resolve_all::<Person>(&urls)
            .await
    }
}

/// Detached body of a chunk task, never fails and reports its outcome instead
async fn resolve_and_persist<F, S>(
    fetcher: Arc<F>,
    sink: Arc<S>,
    retry: RetryPolicy,
    chunk: ChunkSpan,
    people: Vec<Person>,
) -> ChunkOutcome
where
    F: Fetcher,
    S: PersistenceSink,
{
    match persist_chunk(fetcher.as_ref(), sink.as_ref(), &retry, chunk, people).await {
        Ok((records, skipped)) => {
            tracing::info!("Persisted {} people for {}", records, chunk);
            ChunkOutcome::Persisted {
                chunk,
                records,
                skipped,
            }
        }
        Err(error) => {
            tracing::error!("Failed to load {}: {}", chunk, error);
            ChunkOutcome::Failed { chunk, error }
        }
    }
}

async fn persist_chunk<F, S>(
    fetcher: &F,
    sink: &S,
    retry: &RetryPolicy,
    chunk: ChunkSpan,
    people: Vec<Person>,
) -> Result<(u64, usize), Error>
where
    F: Fetcher,
    S: PersistenceSink,
{
    let (people, missing_url): (Vec<Person>, Vec<Person>) = people
        .into_iter()
        .partition(|person| person.self_url().is_some());

    for person in &missing_url {
        tracing::warn!(
            "Skipping person {:?} in {}: response has no url",
            person.name,
            chunk
        );
    }

    let resolver = EntityResolver::new(fetcher, retry);
    let resolved = try_join_all(people.iter().map(|person| resolver.resolve(person))).await?;

    let records = people
        .iter()
        .zip(&resolved)
        .map(|(person, references)| flatten(person, references))
        .collect::<Result<Vec<_>, _>>()?;

    let persisted = sink.insert_batch(records).await?;

    Ok((persisted, missing_url.len()))
}

#[cfg(test)]
mod tests;
