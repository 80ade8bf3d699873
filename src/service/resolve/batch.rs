use futures::future::try_join_all;
use serde::de::DeserializeOwned;

use crate::{
    error::FetchError,
    fetcher::{fetch_as, Fetcher},
    service::retry::RetryPolicy,
};

/// Resolver fetching a batch of URLs concurrently while preserving input order
pub struct BatchResolver<'a, F: ?Sized> {
    fetcher: &'a F,
    retry: &'a RetryPolicy,
}

impl<'a, F> BatchResolver<'a, F>
where
    F: Fetcher + ?Sized,
{
    /// Creates a new instance of [`BatchResolver`]
    pub fn new(fetcher: &'a F, retry: &'a RetryPolicy) -> Self {
        Self { fetcher, retry }
    }

    /// Fetch every URL concurrently and decode each body into `T`.
    ///
    /// The result at index `i` always corresponds to `urls[i]`, regardless of the order in which
    /// the requests complete. The first failing fetch aborts the whole batch; requests still in
    /// flight are dropped.
    ///
    /// # Returns
    /// - `Ok(Vec<T>)` - One decoded resource per input URL, in input order
    /// - `Err(FetchError)` - The first failure among the concurrent fetches
    pub async fn resolve_all<T>(&self, urls: &[&str]) -> Result<Vec<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        if urls.is_empty() {
            return Ok(Vec::new());
        }

        try_join_all(urls.iter().map(|url| self.resolve_one(url))).await
    }

    /// Fetch a single URL through the retry policy
    pub async fn resolve_one<T>(&self, url: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
    {
        self.retry
            .execute_with_retry(url, || fetch_as::<T, F>(self.fetcher, url))
            .await
    }
}
