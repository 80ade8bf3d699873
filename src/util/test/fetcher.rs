use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use async_trait::async_trait;
use serde_json::Value;

use crate::{error::FetchError, fetcher::Fetcher};

#[derive(Clone, Debug)]
enum FakeResponse {
    Json(Value),
    Status(u16),
}

#[derive(Clone, Debug)]
struct Route {
    delay: Duration,
    response: FakeResponse,
    transient_failures: u32,
}

/// Fetcher serving canned responses from memory.
///
/// Routes can delay their answer to force out-of-order completion, and can fail with transport
/// errors a fixed number of times before answering. Unknown URLs answer 404.
#[derive(Clone, Default)]
pub struct FakeFetcher {
    routes: Arc<Mutex<HashMap<String, Route>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, url: impl Into<String>, body: Value) -> Self {
        self.with_delayed_json(url, Duration::ZERO, body)
    }

    pub fn with_delayed_json(self, url: impl Into<String>, delay: Duration, body: Value) -> Self {
        self.insert(url.into(), delay, FakeResponse::Json(body));
        self
    }

    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        self.insert(url.into(), Duration::ZERO, FakeResponse::Status(status));
        self
    }

    /// Make the next `count` requests for `url` fail with a transport error
    pub fn with_transient_failures(self, url: &str, count: u32) -> Self {
        if let Some(route) = self.routes.lock().unwrap().get_mut(url) {
            route.transient_failures = count;
        }
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls_to(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == url).count()
    }

    fn insert(&self, url: String, delay: Duration, response: FakeResponse) {
        self.routes.lock().unwrap().insert(
            url,
            Route {
                delay,
                response,
                transient_failures: 0,
            },
        );
    }
}

#[async_trait]
impl Fetcher for FakeFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());

        let route = {
            let mut routes = self.routes.lock().unwrap();
            match routes.get_mut(url) {
                Some(route) if route.transient_failures > 0 => {
                    route.transient_failures -= 1;
                    return Err(FetchError::Transport {
                        url: url.to_string(),
                        source: "connection reset by peer".into(),
                    });
                }
                Some(route) => route.clone(),
                None => {
                    return Err(FetchError::HttpStatus {
                        status: 404,
                        url: url.to_string(),
                    })
                }
            }
        };

        if !route.delay.is_zero() {
            tokio::time::sleep(route.delay).await;
        }

        match route.response {
            FakeResponse::Json(body) => Ok(body),
            FakeResponse::Status(status) => Err(FetchError::HttpStatus {
                status,
                url: url.to_string(),
            }),
        }
    }
}
