//! One-shot fixer making every hotel verified and every venue active.
//!
//! Runs two unfiltered bulk updates and reports the rows affected. Running
//! it twice leaves the same end state. Exits non-zero when the database is
//! unreachable or an update fails.

use venuebook::server::{config::Config, error::AppError, service::maintenance::MaintenanceService, startup};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!("fix-venues failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_tracing(&config);

    let db = startup::connect_to_database(&config).await?;

    let report = MaintenanceService::new(&db).fix_venues().await?;

    tracing::info!(
        "Updated {} hotel(s) and {} venue(s)",
        report.hotels_updated,
        report.venues_updated
    );

    Ok(())
}
