use thiserror::Error;

/// Boxed transport-level cause, kept opaque so fetchers other than reqwest can report failures.
pub type TransportCause = Box<dyn std::error::Error + Send + Sync>;

/// Failure of a single `GET` + JSON decode round trip.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network-level failure: timeout, DNS, connection reset or an interrupted body.
    #[error("Transport error while fetching {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: TransportCause,
    },
    /// The URL could not be turned into a request, e.g. empty or without scheme.
    #[error("Invalid request URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// The server answered with a non-2xx status.
    #[error("Request to {url} failed with HTTP status {status}")]
    HttpStatus { status: u16, url: String },
    /// The body was not JSON, or not the JSON shape expected for the resource.
    #[error("Response from {url} could not be decoded: {reason}")]
    Decode { url: String, reason: String },
}

impl FetchError {
    /// URL of the request that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } => url,
            Self::InvalidUrl { url, .. } => url,
            Self::HttpStatus { url, .. } => url,
            Self::Decode { url, .. } => url,
        }
    }
}
