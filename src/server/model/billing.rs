//! Billing summary domain model.

use crate::model::billing::BillingSummaryDto;

/// Aggregated booking revenue for one hotel.
///
/// All five aggregates are folds over the hotel's bookings: the all-time
/// figures cover every booking regardless of status, completed revenue
/// covers completed bookings, and pending revenue covers confirmed bookings.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BillingSummary {
    pub all_time_revenue: f64,
    pub all_time_vat: f64,
    pub all_time_service_charge: f64,
    pub completed_revenue: f64,
    pub pending_revenue: f64,
}

impl BillingSummary {
    /// Converts the billing summary domain model to a DTO for API responses.
    pub fn into_dto(self) -> BillingSummaryDto {
        BillingSummaryDto {
            all_time_revenue: self.all_time_revenue,
            all_time_vat: self.all_time_vat,
            all_time_service_charge: self.all_time_service_charge,
            completed_revenue: self.completed_revenue,
            pending_revenue: self.pending_revenue,
        }
    }
}
