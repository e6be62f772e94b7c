//! Booking service for business logic.
//!
//! Creation validates the venue's effective visibility and derives the
//! booking's hotel from the venue, never from the caller. New bookings
//! notify the hotel's owners.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking::BookingRepository, notification::NotificationRepository, user::UserRepository,
        venue::VenueRepository,
    },
    error::AppError,
    model::{
        booking::{Booking, CreateBookingParam},
        notification::CreateNotificationParam,
    },
};

/// Service providing business logic for bookings.
pub struct BookingService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new BookingService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking in the pending state.
    ///
    /// The venue must be effectively visible (active, hotel verified and not
    /// deactivated), the amounts non-negative and the time range ordered.
    /// The hotel's owners each receive a notification; a failed notification
    /// is logged and does not fail the booking.
    ///
    /// # Arguments
    /// - `param` - Booking parameters; user_id comes from the auth guard
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(AppError::NotFound)` - Venue missing or not visible
    /// - `Err(AppError::BadRequest)` - Negative amount or inverted time range
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn create(&self, param: CreateBookingParam) -> Result<Booking, AppError> {
        if param.total_amount < Decimal::ZERO
            || param.vat < Decimal::ZERO
            || param.service_charge < Decimal::ZERO
        {
            return Err(AppError::BadRequest(
                "Booking amounts must be non-negative".to_string(),
            ));
        }
        if param.starts_at >= param.ends_at {
            return Err(AppError::BadRequest(
                "Booking must start before it ends".to_string(),
            ));
        }

        let venue_repo = VenueRepository::new(self.db);

        let Some(venue) = venue_repo.find_visible_by_id(param.venue_id).await? else {
            return Err(AppError::NotFound("Venue not found".to_string()));
        };

        let booking_repo = BookingRepository::new(self.db);
        let booking = booking_repo.create(param, venue.hotel_id).await?;

        // The fan-out is best effort; the booking is already persisted.
        if let Err(err) = self.notify_owners(&booking, &venue.name).await {
            tracing::warn!("Failed to notify owners of booking {}: {}", booking.id, err);
        }

        Ok(booking)
    }

    /// Lists the caller's bookings, newest first.
    ///
    /// # Arguments
    /// - `user_id` - The caller, already resolved by the auth guard
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - The caller's bookings
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_mine(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let bookings = booking_repo.list_by_user(user_id).await?;
        Ok(bookings)
    }

    /// Lists the owner's hotel bookings, newest first.
    ///
    /// # Arguments
    /// - `hotel_id` - The caller's hotel, already resolved by the auth guard
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - The hotel's bookings
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_for_hotel(&self, hotel_id: i32) -> Result<Vec<Booking>, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let bookings = booking_repo.list_by_hotel(hotel_id).await?;
        Ok(bookings)
    }

    /// Updates the status of a booking belonging to the owner's hotel.
    ///
    /// Bookings of other hotels are indistinguishable from missing ones.
    ///
    /// # Arguments
    /// - `booking_id` - Database ID of the booking
    /// - `hotel_id` - The caller's hotel, already resolved by the auth guard
    /// - `status` - New lifecycle status
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking with its new status
    /// - `Err(AppError::NotFound)` - Booking missing or owned by another hotel
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update_status(
        &self,
        booking_id: i32,
        hotel_id: i32,
        status: entity::booking::BookingStatus,
    ) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let Some(booking) = booking_repo.find_by_id(booking_id).await? else {
            return Err(AppError::NotFound("Booking not found".to_string()));
        };
        if booking.hotel_id != hotel_id {
            return Err(AppError::NotFound("Booking not found".to_string()));
        }

        booking_repo.update_status(booking_id, status).await?;

        Ok(Booking { status, ..booking })
    }

    /// Notifies the hotel's owners of a new booking.
    async fn notify_owners(&self, booking: &Booking, venue_name: &str) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);
        let notification_repo = NotificationRepository::new(self.db);

        let owners = user_repo.list_owners_by_hotel(booking.hotel_id).await?;

        for owner in owners {
            notification_repo
                .create(CreateNotificationParam {
                    user_id: owner.id,
                    title: "New booking received".to_string(),
                    body: format!(
                        "{} was booked from {} to {}.",
                        venue_name, booking.starts_at, booking.ends_at
                    ),
                })
                .await?;
        }

        Ok(())
    }
}
