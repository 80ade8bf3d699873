use std::ops::Range;

use crate::{config::Config, service::retry::RetryPolicy};

/// Settings of a single pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// API base URL, e.g. `https://swapi.py4e.com/api`
    pub base_url: String,
    /// Person IDs to load, upper bound exclusive
    pub id_range: Range<i64>,
    /// Number of IDs fetched together and persisted in one batch
    pub chunk_size: usize,
    pub retry: RetryPolicy,
}

impl PipelineConfig {
    pub fn new(base_url: impl Into<String>, id_range: Range<i64>, chunk_size: usize) -> Self {
        Self {
            base_url: base_url.into(),
            id_range,
            chunk_size,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }
}

impl From<&Config> for PipelineConfig {
    fn from(config: &Config) -> Self {
        Self::new(&config.swapi_url, config.id_range(), config.chunk_size)
            .with_retry(config.retry_policy())
    }
}
