//! Booking factory for creating test booking entities.

use chrono::{DateTime, Duration, Utc};
use entity::booking::BookingStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, hotel.id, venue.id, customer.id)
///     .total_amount(Decimal::new(100, 0))
///     .status(BookingStatus::Completed)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    venue_id: i32,
    user_id: i32,
    total_amount: Decimal,
    vat: Decimal,
    service_charge: Decimal,
    status: BookingStatus,
    created_at: DateTime<Utc>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - total_amount: `100`
    /// - vat: `10`
    /// - service_charge: `5`
    /// - status: `BookingStatus::Pending`
    /// - starts_at/ends_at: one day ahead, two hours apart
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `hotel_id` - Hotel the booking belongs to
    /// - `venue_id` - Venue being booked
    /// - `user_id` - Customer making the booking
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32, venue_id: i32, user_id: i32) -> Self {
        Self {
            db,
            hotel_id,
            venue_id,
            user_id,
            total_amount: Decimal::new(100, 0),
            vat: Decimal::new(10, 0),
            service_charge: Decimal::new(5, 0),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Sets the total amount.
    pub fn total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = total_amount;
        self
    }

    /// Sets the VAT amount.
    pub fn vat(mut self, vat: Decimal) -> Self {
        self.vat = vat;
        self
    }

    /// Sets the service charge amount.
    pub fn service_charge(mut self, service_charge: Decimal) -> Self {
        self.service_charge = service_charge;
        self
    }

    /// Sets the booking status.
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp, for ordering tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let starts_at = Utc::now() + Duration::days(1);
        entity::booking::ActiveModel {
            hotel_id: ActiveValue::Set(self.hotel_id),
            venue_id: ActiveValue::Set(self.venue_id),
            user_id: ActiveValue::Set(self.user_id),
            total_amount: ActiveValue::Set(self.total_amount),
            vat: ActiveValue::Set(self.vat),
            service_charge: ActiveValue::Set(self.service_charge),
            status: ActiveValue::Set(self.status),
            starts_at: ActiveValue::Set(starts_at),
            ends_at: ActiveValue::Set(starts_at + Duration::hours(2)),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending booking with default amounts.
pub async fn create_booking(
    db: &DatabaseConnection,
    hotel_id: i32,
    venue_id: i32,
    user_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, hotel_id, venue_id, user_id).build().await
}
