//! Declarative test builder for phase 1 setup.
//!
//! The builder pattern allows chaining configuration methods; every operation is queued and
//! executed during the final `build()` call.

use mockito::{Mock, ServerGuard};
use sea_orm::Schema;

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and mock SWAPI
/// endpoints. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    include_people_table: bool,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    person_endpoints: Vec<(i64, usize)>, // (person_id, expected_requests)
    film_endpoints: Vec<(i64, usize)>,
    named_endpoints: Vec<(String, i64, usize)>, // (collection, id, expected_requests)
    status_endpoints: Vec<(String, usize, usize)>, // (path, status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            include_people_table: false,
            mock_builders: Vec::new(),
            person_endpoints: Vec::new(),
            film_endpoints: Vec::new(),
            named_endpoints: Vec::new(),
            status_endpoints: Vec::new(),
        }
    }

    /// Add the `swapi_people` table to the test database.
    pub fn with_people_table(mut self) -> Self {
        self.include_people_table = true;
        self
    }

    /// Add a mock endpoint at `/people/{id}/` serving `factory::person`.
    ///
    /// The person lives on planet 1 and appears in film 1; pair with
    /// [`with_film_endpoint`](Self::with_film_endpoint) and
    /// [`with_planet_endpoint`](Self::with_planet_endpoint) to make it resolvable.
    pub fn with_person_endpoint(mut self, id: i64, expected_requests: usize) -> Self {
        self.person_endpoints.push((id, expected_requests));
        self
    }

    /// Add a mock endpoint at `/films/{id}/` serving `factory::film`.
    pub fn with_film_endpoint(mut self, id: i64, expected_requests: usize) -> Self {
        self.film_endpoints.push((id, expected_requests));
        self
    }

    /// Add a mock endpoint at `/planets/{id}/` serving `factory::named`.
    pub fn with_planet_endpoint(self, id: i64, expected_requests: usize) -> Self {
        self.with_named_endpoint("planets", id, expected_requests)
    }

    /// Add a mock endpoint at `/{collection}/{id}/` serving `factory::named`.
    pub fn with_named_endpoint(
        mut self,
        collection: impl Into<String>,
        id: i64,
        expected_requests: usize,
    ) -> Self {
        self.named_endpoints
            .push((collection.into(), id, expected_requests));
        self
    }

    /// Add a mock endpoint at `path` answering with a bare `status`.
    pub fn with_status_endpoint(
        mut self,
        path: impl Into<String>,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.status_endpoints
            .push((path.into(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (the people table if specified)
    /// 2. Creates mock HTTP endpoints (custom endpoints first, then shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database connection or table creation failed
    /// - `Err(TestError::HttpClientError)` - HTTP client construction failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_people_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::SwapiPeople));
        }

        setup.with_tables(all_tables).await?;

        // 2. Create mock endpoints
        // Note: Custom endpoints are created first so tests can layer several mocks on the
        // same path and rely on mockito's registration order.
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (id, expected) in self.person_endpoints {
            let body = setup.swapi().mock_person(id);
            mocks.push(setup.swapi().create_person_endpoint(id, body, expected));
        }

        for (id, expected) in self.film_endpoints {
            let body = setup.swapi().mock_film(id);
            let path = format!("/films/{}/", id);
            mocks.push(setup.swapi().create_resource_endpoint(&path, body, expected));
        }

        for (collection, id, expected) in self.named_endpoints {
            let body = setup.swapi().mock_named(&collection, id);
            let path = format!("/{}/{}/", collection, id);
            mocks.push(setup.swapi().create_resource_endpoint(&path, body, expected));
        }

        for (path, status, expected) in self.status_endpoints {
            mocks.push(setup.swapi().create_status_endpoint(&path, status, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
