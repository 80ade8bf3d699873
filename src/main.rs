use std::sync::Arc;

use chrono::{TimeDelta, Utc};
use swapi_loader::{
    config::Config,
    data::PeopleRepository,
    error::Error,
    fetcher::SwapiClient,
    service::pipeline::{PipelineConfig, PipelineDriver, RunSummary},
    startup,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    dotenvy::dotenv().ok();

    if let Err(e) = startup::init_tracing("info") {
        eprintln!("{}", e);
    }

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let started = Utc::now();
    let result = run(&config).await;
    println!("Finished in {}", format_elapsed(Utc::now() - started));

    match result {
        Ok(summary) if summary.is_success() => {}
        Ok(summary) => {
            for (chunk, error) in summary.failures() {
                tracing::error!("{} failed: {}", chunk, error);
            }
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Load aborted: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(config: &Config) -> Result<RunSummary, Error> {
    let http_client = startup::build_http_client(config)?;
    let db = startup::connect_to_database(config).await?;

    let driver = PipelineDriver::new(
        Arc::new(SwapiClient::new(http_client)),
        Arc::new(PeopleRepository::new(db)),
        PipelineConfig::from(config),
    );

    driver.run().await
}

/// Format a duration as `H:MM:SS.ffffff`
fn format_elapsed(elapsed: TimeDelta) -> String {
    let micros = elapsed.num_microseconds().unwrap_or(i64::MAX).max(0);
    let seconds = micros / 1_000_000;

    format!(
        "{}:{:02}:{:02}.{:06}",
        seconds / 3600,
        seconds % 3600 / 60,
        seconds % 60,
        micros % 1_000_000
    )
}
