//! One-shot report of hotels and venues the fixer would touch.
//!
//! Connects directly to the database, logs the counts and exits. Exits
//! non-zero when the database is unreachable or a query fails.

use venuebook::server::{config::Config, error::AppError, service::maintenance::MaintenanceService, startup};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("check-venues failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;

    let report = MaintenanceService::new(&db).check_venues().await?;

    tracing::info!(
        "{} unverified hotel(s), {} deactivated hotel(s), {} inactive venue(s)",
        report.unverified_hotels,
        report.deactivated_hotels,
        report.inactive_venues
    );
    if report.is_clean() {
        tracing::info!("Nothing to fix");
    }

    Ok(())
}
