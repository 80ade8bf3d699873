use std::fmt;

use crate::error::Error;

/// Position and ID bounds of a chunk, used to label its outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChunkSpan {
    /// Zero-based position of the chunk within the run
    pub index: usize,
    pub first_id: i64,
    pub last_id: i64,
}

impl ChunkSpan {
    pub fn new(index: usize, ids: &[i64]) -> Self {
        Self {
            index,
            first_id: ids.first().copied().unwrap_or_default(),
            last_id: ids.last().copied().unwrap_or_default(),
        }
    }
}

impl fmt::Display for ChunkSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chunk {} (ids {}..={})",
            self.index, self.first_id, self.last_id
        )
    }
}

/// Result of processing one chunk
#[derive(Debug)]
pub enum ChunkOutcome {
    /// The chunk's records were committed
    Persisted {
        chunk: ChunkSpan,
        /// Rows written by the chunk's batch insert
        records: u64,
        /// Entities dropped because they had no self URL
        skipped: usize,
    },
    /// Fetching, resolving, flattening or persisting the chunk failed; nothing was stored
    Failed { chunk: ChunkSpan, error: Error },
}

impl ChunkOutcome {
    pub fn chunk(&self) -> &ChunkSpan {
        match self {
            Self::Persisted { chunk, .. } | Self::Failed { chunk, .. } => chunk,
        }
    }
}

/// Per-chunk outcomes of a pipeline run, ordered by chunk index.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<ChunkOutcome>,
}

impl RunSummary {
    pub fn new(mut outcomes: Vec<ChunkOutcome>) -> Self {
        outcomes.sort_by_key(|outcome| outcome.chunk().index);
        Self { outcomes }
    }

    pub fn chunks(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, ChunkOutcome::Persisted { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.chunks() - self.succeeded()
    }

    pub fn records_persisted(&self) -> u64 {
        self.outcomes
            .iter()
            .map(|outcome| match outcome {
                ChunkOutcome::Persisted { records, .. } => *records,
                ChunkOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    pub fn entities_skipped(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| match outcome {
                ChunkOutcome::Persisted { skipped, .. } => *skipped,
                ChunkOutcome::Failed { .. } => 0,
            })
            .sum()
    }

    /// Failed chunks with the error that aborted them
    pub fn failures(&self) -> impl Iterator<Item = (&ChunkSpan, &Error)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            ChunkOutcome::Failed { chunk, error } => Some((chunk, error)),
            ChunkOutcome::Persisted { .. } => None,
        })
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }
}
