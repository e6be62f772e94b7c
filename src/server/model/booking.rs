//! Booking domain models and parameters.

use chrono::{DateTime, Utc};
use entity::booking::BookingStatus;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::model::booking::BookingDto;

/// Booking of a venue by a customer.
///
/// Monetary fields stay decimal inside the domain; conversion to floating
/// point happens at the DTO boundary and in billing aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub hotel_id: i32,
    pub venue_id: i32,
    pub user_id: i32,
    pub total_amount: Decimal,
    pub vat: Decimal,
    pub service_charge: Decimal,
    pub status: BookingStatus,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            venue_id: entity.venue_id,
            user_id: entity.user_id,
            total_amount: entity.total_amount,
            vat: entity.vat,
            service_charge: entity.service_charge,
            status: entity.status,
            starts_at: entity.starts_at,
            ends_at: entity.ends_at,
            created_at: entity.created_at,
        }
    }

    /// Converts the booking domain model to a DTO for API responses.
    ///
    /// Stored amounts are always in f64 range, so the decimal conversion
    /// falls back to 0 rather than failing the whole response.
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            hotel_id: self.hotel_id,
            venue_id: self.venue_id,
            user_id: self.user_id,
            total_amount: self.total_amount.to_f64().unwrap_or_default(),
            vat: self.vat.to_f64().unwrap_or_default(),
            service_charge: self.service_charge.to_f64().unwrap_or_default(),
            status: self.status,
            starts_at: self.starts_at,
            ends_at: self.ends_at,
        }
    }
}

/// Parameters for creating a booking.
///
/// The hotel is derived from the venue by the booking service, never taken
/// from the caller.
#[derive(Debug, Clone)]
pub struct CreateBookingParam {
    pub venue_id: i32,
    pub user_id: i32,
    pub total_amount: Decimal,
    pub vat: Decimal,
    pub service_charge: Decimal,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}
