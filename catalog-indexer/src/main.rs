//! Catalog Indexer Main Entry Point
//!
//! Loads the product catalog, discounts one category, and publishes the
//! result to the configured Algolia index.

use catalog_indexer::{Dependencies, IndexingError, JobConfig};
use dotenv::dotenv;
use std::env;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("catalog_indexer=info,catalog_indexer_repository=info")
    });

    let json_logs = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true).pretty())
            .init();
    }

    info!(
        service_name = "catalog-indexer",
        service_version = env!("CARGO_PKG_VERSION"),
        json = json_logs,
        "Tracing initialized"
    );
}

#[tokio::main]
async fn main() -> Result<(), IndexingError> {
    // Load environment variables from the nearest .env file
    dotenv().ok();

    init_tracing();

    info!("Starting catalog indexer");

    let config = match JobConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            return Err(e);
        }
    };

    let deps = match Dependencies::new(config) {
        Ok(deps) => {
            info!("Dependencies initialized successfully");
            deps
        }
        Err(e) => {
            error!(error = %e, "Failed to initialize dependencies");
            return Err(e);
        }
    };

    match deps.orchestrator.run().await {
        Ok(summary) => {
            info!(
                records_saved = summary.records_saved,
                "Catalog indexer completed successfully"
            );
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Catalog indexer failed");
            Err(e.into())
        }
    }
}
