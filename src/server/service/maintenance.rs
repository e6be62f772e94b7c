//! Maintenance service backing the check-venues and fix-venues scripts.
//!
//! Runs in-process so the scripts stay thin wrappers and the logic is
//! testable against an in-memory database.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hotel::HotelRepository, venue::VenueRepository},
    error::AppError,
    model::maintenance::{VenueCheckReport, VenueFixReport},
};

/// Service providing the one-shot maintenance operations.
pub struct MaintenanceService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MaintenanceService<'a> {
    /// Creates a new MaintenanceService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Counts hotels and venues that the fixer would touch. Read-only.
    ///
    /// # Returns
    /// - `Ok(VenueCheckReport)` - Counts of unverified hotels, deactivated
    ///   hotels and inactive venues
    /// - `Err(AppError::DbErr)` - Database error during a count query
    pub async fn check_venues(&self) -> Result<VenueCheckReport, AppError> {
        let hotel_repo = HotelRepository::new(self.db);
        let venue_repo = VenueRepository::new(self.db);

        let report = VenueCheckReport {
            unverified_hotels: hotel_repo.count_unverified().await?,
            deactivated_hotels: hotel_repo.count_deactivated().await?,
            inactive_venues: venue_repo.count_inactive().await?,
        };

        Ok(report)
    }

    /// Marks every hotel verified and not deactivated, and every venue
    /// active.
    ///
    /// Both updates are unfiltered bulk statements; running the fixer twice
    /// leaves the same end state. No dry run, no rollback.
    ///
    /// # Returns
    /// - `Ok(VenueFixReport)` - Rows affected per table
    /// - `Err(AppError::DbErr)` - Database error during an update
    pub async fn fix_venues(&self) -> Result<VenueFixReport, AppError> {
        let hotel_repo = HotelRepository::new(self.db);
        let venue_repo = VenueRepository::new(self.db);

        let hotels_updated = hotel_repo.mark_all_verified().await?;
        let venues_updated = venue_repo.activate_all().await?;

        Ok(VenueFixReport {
            hotels_updated,
            venues_updated,
        })
    }
}
