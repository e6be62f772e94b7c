//! Billing service computing per-hotel revenue summaries.

use rust_decimal::prelude::ToPrimitive;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::booking::BookingRepository, error::AppError, model::billing::BillingSummary,
};

/// Service aggregating booking revenue for one hotel.
pub struct BillingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BillingService<'a> {
    /// Creates a new BillingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the billing summary for a hotel.
    ///
    /// Folds every booking of the hotel into five aggregates: the all-time
    /// figures cover every booking regardless of status, completed revenue
    /// covers completed bookings and pending revenue covers confirmed ones.
    /// Decimal amounts are converted to f64 before summation. A hotel with
    /// no bookings yields all zeros. Read-only.
    ///
    /// # Arguments
    /// - `hotel_id` - The caller's hotel, already resolved by the auth guard
    ///
    /// # Returns
    /// - `Ok(BillingSummary)` - The five aggregates
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_summary(&self, hotel_id: i32) -> Result<BillingSummary, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let bookings = booking_repo.list_by_hotel(hotel_id).await?;

        let mut summary = BillingSummary::default();

        for booking in bookings {
            let total = booking.total_amount.to_f64().unwrap_or_default();
            let vat = booking.vat.to_f64().unwrap_or_default();
            let service_charge = booking.service_charge.to_f64().unwrap_or_default();

            summary.all_time_revenue += total;
            summary.all_time_vat += vat;
            summary.all_time_service_charge += service_charge;

            match booking.status {
                entity::booking::BookingStatus::Completed => {
                    summary.completed_revenue += total;
                }
                entity::booking::BookingStatus::Confirmed => {
                    summary.pending_revenue += total;
                }
                entity::booking::BookingStatus::Pending
                | entity::booking::BookingStatus::Cancelled => {}
            }
        }

        Ok(summary)
    }
}
