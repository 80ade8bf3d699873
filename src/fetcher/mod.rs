//! HTTP fetching of SWAPI resources.
//!
//! The [`Fetcher`] trait is the transport capability used by the resolvers: one `GET`, one JSON
//! document, no retries. [`SwapiClient`] is the production implementation backed by a shared
//! `reqwest::Client`, so every fetch of a run reuses the same connection pool.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;

/// Capability to fetch a URL and parse its body as JSON.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Issue a single `GET` for `url` and parse the response body as JSON.
    ///
    /// # Returns
    /// - `Ok(Value)` - The parsed JSON body of a 2xx response
    /// - `Err(FetchError::HttpStatus)` - The server answered with a non-2xx status
    /// - `Err(FetchError::Transport)` - The request or body read failed at the network level
    /// - `Err(FetchError::InvalidUrl)` - `url` cannot be turned into a request
    /// - `Err(FetchError::Decode)` - The body is not valid JSON
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// Fetch `url` and decode it into `T`.
///
/// Every SWAPI resource is a JSON object; any other document, or an object that does not match
/// the shape of `T`, is reported as [`FetchError::Decode`] against the same URL.
pub async fn fetch_as<T, F>(fetcher: &F, url: &str) -> Result<T, FetchError>
where
    T: DeserializeOwned,
    F: Fetcher + ?Sized,
{
    let value = fetcher.fetch_json(url).await?;

    // Derived struct deserializers also accept arrays, filling fields by position
    if !value.is_object() {
        return Err(FetchError::Decode {
            url: url.to_string(),
            reason: "expected a JSON object".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// [`Fetcher`] backed by a shared `reqwest::Client`.
#[derive(Clone, Debug)]
pub struct SwapiClient {
    http: reqwest::Client,
}

impl SwapiClient {
    /// Creates a new instance of [`SwapiClient`] around an existing HTTP client
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Fetcher for SwapiClient {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!("Fetching {}", url);

        let transport = |e: reqwest::Error| {
            if e.is_builder() {
                FetchError::InvalidUrl {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            } else {
                FetchError::Transport {
                    url: url.to_string(),
                    source: Box::new(e),
                }
            }
        };

        let response = self.http.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(transport)?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests;
