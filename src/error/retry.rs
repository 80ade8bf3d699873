use super::fetch::FetchError;

/// Strategy for handling errors in a retry context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorRetryStrategy {
    /// Retry with exponential backoff (transient failures)
    Retry,
    /// Failed permanently
    Fail,
}

impl FetchError {
    /// Determine retry strategy based upon the kind of fetch failure
    pub fn to_retry_strategy(&self) -> ErrorRetryStrategy {
        match self {
            // Timeouts, resets and DNS hiccups are usually transient
            Self::Transport { .. } => ErrorRetryStrategy::Retry,

            // A malformed URL stays malformed
            Self::InvalidUrl { .. } => ErrorRetryStrategy::Fail,

            Self::HttpStatus { status, .. } => match *status {
                // 429 - Too Many Requests
                429 => ErrorRetryStrategy::Retry,

                // 500 - Internal Server Error
                //
                // The API is temporarily unavailable, backoff and retry later.
                s if (500..600).contains(&s) => ErrorRetryStrategy::Retry,

                // 400 - Client Error
                //
                // Missing resources and bad requests won't change on a second attempt.
                _ => ErrorRetryStrategy::Fail,
            },

            // The body will decode the same way next time
            Self::Decode { .. } => ErrorRetryStrategy::Fail,
        }
    }
}
