use std::sync::Arc;

use swapi_loader::{
    data::PeopleRepository,
    fetcher::SwapiClient,
    service::{
        pipeline::{PipelineConfig, PipelineDriver},
        retry::RetryPolicy,
    },
};
use swapi_test_utils::prelude::*;

mod run;

fn driver(
    test: &TestContext,
    ids: std::ops::Range<i64>,
    chunk_size: usize,
) -> PipelineDriver<SwapiClient, PeopleRepository> {
    let config = PipelineConfig::new(test.base_url(), ids, chunk_size)
        .with_retry(RetryPolicy::no_retry());

    PipelineDriver::new(
        Arc::new(SwapiClient::new(test.http_client.clone())),
        Arc::new(PeopleRepository::new(test.db.clone())),
        config,
    )
}
