//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for phase 2 test execution.
//! The context includes an in-memory SQLite database, a mock SWAPI server and an HTTP client.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::{TEST_DATABASE_URL, TEST_USER_AGENT},
    error::TestError,
    fixtures::swapi::factory,
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_people_table().build().await?;
///
/// // Point the loader at the mock server
/// let base_url = test.base_url();
///
/// // Register extra endpoints after build
/// let endpoint = test.swapi().create_status_endpoint("/people/9/", 500, 1);
///
/// // Assert all builder mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// HTTP client shared by every fetch in the test
    pub http_client: reqwest::Client,

    /// Mock HTTP server standing in for the SWAPI host
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::HttpClientError)` - HTTP client construction failed
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let http_client = reqwest::Client::builder()
            .user_agent(TEST_USER_AGENT)
            .build()?;

        let db = Database::connect(TEST_DATABASE_URL).await?;

        Ok(TestContext {
            db,
            http_client,
            server,
            mocks: Vec::new(),
        })
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Base URL of the mock SWAPI server, without trailing slash
    pub fn base_url(&self) -> String {
        self.server.url()
    }

    /// Self URL of the person with the given ID on the mock server
    pub fn person_url(&self, id: i64) -> String {
        factory::resource_url(&self.server.url(), "people", id)
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
