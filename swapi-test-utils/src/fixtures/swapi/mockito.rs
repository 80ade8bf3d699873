//! SWAPI HTTP mock endpoint creation utilities.
//!
//! Endpoints are registered with the mockito server of the test context and verify they were
//! called the expected number of times.

use mockito::Mock;
use serde_json::Value;

use crate::fixtures::swapi::SwapiFixtures;

impl<'a> SwapiFixtures<'a> {
    /// Create a mock HTTP endpoint for a person.
    ///
    /// Sets up a mock GET endpoint at `/people/{id}/` returning `body` as JSON.
    ///
    /// # Arguments
    /// - `id` - The person ID for the endpoint path
    /// - `body` - JSON payload to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_person_endpoint(&mut self, id: i64, body: Value, expected_requests: usize) -> Mock {
        let path = format!("/people/{}/", id);
        self.create_resource_endpoint(&path, body, expected_requests)
    }

    /// Create a mock HTTP endpoint returning `body` as JSON with status 200.
    ///
    /// # Arguments
    /// - `path` - Absolute path on the mock server, e.g. `/films/1/`
    /// - `body` - JSON payload to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_resource_endpoint(
        &mut self,
        path: &str,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock HTTP endpoint answering with a bare status code.
    ///
    /// # Arguments
    /// - `path` - Absolute path on the mock server
    /// - `status` - HTTP status to answer with
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_status_endpoint(&mut self, path: &str, status: usize, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(r#"{"detail":"Not found"}"#)
            .expect(expected_requests)
            .create()
    }
}
