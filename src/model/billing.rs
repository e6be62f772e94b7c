use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct BillingSummaryDto {
    pub all_time_revenue: f64,
    pub all_time_vat: f64,
    pub all_time_service_charge: f64,
    pub completed_revenue: f64,
    pub pending_revenue: f64,
}
