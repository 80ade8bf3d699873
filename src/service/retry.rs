//! Retry logic with exponential backoff for fetch operations.
//!
//! [`RetryPolicy`] wraps a single fetch and repeats it while the failure is classified as
//! transient by [`FetchError::to_retry_strategy`]. Permanent failures (client errors, decode
//! errors) are returned immediately.

use std::{future::Future, time::Duration};

use crate::error::{retry::ErrorRetryStrategy, FetchError};

/// Exponential backoff policy applied to every fetch of a run.
///
/// # Retry Behavior
///
/// - **Max attempts**: 3 (default), `1` disables retries entirely
/// - **Backoff strategy**: Exponential from `initial_backoff` (500ms, 1s, 2s, ...)
/// - **Retry conditions**: Only errors with `ErrorRetryStrategy::Retry` are retried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Max attempts before failure
    pub max_attempts: u32,
    /// Backoff before the first retry, doubled for every further retry
    pub initial_backoff: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    pub const DEFAULT_INITIAL_BACKOFF: Duration = Duration::from_millis(500);

    pub fn new(max_attempts: u32, initial_backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            initial_backoff,
        }
    }

    /// Policy performing a single attempt with no retries
    pub fn no_retry() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Backoff to wait after the given number of failed attempts
    pub fn backoff(&self, failed_attempts: u32) -> Duration {
        self.initial_backoff
            .saturating_mul(2_u32.saturating_pow(failed_attempts.saturating_sub(1)))
    }

    /// Execute an operation with automatic retry logic
    ///
    /// # Arguments
    /// - `description`: Description of the operation for logging (usually the URL)
    /// - `operation`: Produces a fresh future for every attempt
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        operation: F,
    ) -> Result<R, FetchError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<R, FetchError>>,
    {
        let mut attempt_count = 0;

        loop {
            let result = operation().await;

            match result {
                Ok(result) => return Ok(result),
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::debug!("Permanent error for {}: {}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= self.max_attempts {
                            if self.max_attempts > 1 {
                                tracing::error!(
                                    "Max attempts ({}) exceeded for {}: {}",
                                    self.max_attempts,
                                    description,
                                    e
                                );
                            }
                            return Err(e);
                        }

                        let backoff = self.backoff(attempt_count);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {}",
                            description,
                            attempt_count + 1,
                            self.max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_INITIAL_BACKOFF)
    }
}
