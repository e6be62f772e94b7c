use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone)]
pub struct BookingDto {
    pub id: i32,
    pub hotel_id: i32,
    pub venue_id: i32,
    pub user_id: i32,
    pub total_amount: f64,
    pub vat: f64,
    pub service_charge: f64,
    pub status: BookingStatus,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CreateBookingDto {
    pub venue_id: i32,
    pub total_amount: f64,
    pub vat: f64,
    pub service_charge: f64,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatus,
}
