use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use crate::{config::Config, error::Error};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; `default_filter` is used when it is unset or invalid.
pub fn init_tracing(default_filter: &str) -> Result<(), Error> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::TracingError(e.to_string()))
}

/// Build the HTTP client shared by every fetch of a run
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

    if let Some(timeout) = config.http_timeout() {
        builder = builder.timeout(timeout);
    }

    Ok(builder.build()?)
}

/// Connect to the database
///
/// The schema is not migrated here; the pipeline resets it at the start of every run.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Ok(db)
}
