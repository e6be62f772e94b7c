//! Booking data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::booking::{Booking, CreateBookingParam};

/// Repository providing database operations for bookings.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking in the pending state.
    ///
    /// # Arguments
    /// - `param` - Booking creation parameters, already validated
    /// - `hotel_id` - Hotel derived from the booked venue
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateBookingParam,
        hotel_id: i32,
    ) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            hotel_id: ActiveValue::Set(hotel_id),
            venue_id: ActiveValue::Set(param.venue_id),
            user_id: ActiveValue::Set(param.user_id),
            total_amount: ActiveValue::Set(param.total_amount),
            vat: ActiveValue::Set(param.vat),
            service_charge: ActiveValue::Set(param.service_charge),
            status: ActiveValue::Set(entity::booking::BookingStatus::Pending),
            starts_at: ActiveValue::Set(param.starts_at),
            ends_at: ActiveValue::Set(param.ends_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Finds a booking by its ID.
    ///
    /// # Arguments
    /// - `booking_id` - Database ID of the booking
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, booking_id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(booking_id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Lists a user's bookings, newest first.
    ///
    /// # Arguments
    /// - `user_id` - Customer whose bookings to list
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - The user's bookings
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_user(&self, user_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Lists a hotel's bookings, newest first.
    ///
    /// Also the input to the billing summary fold, which consumes every
    /// booking of the hotel regardless of status.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel whose bookings to list
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - The hotel's bookings
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_hotel(&self, hotel_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::HotelId.eq(hotel_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Updates a booking's status.
    ///
    /// # Arguments
    /// - `booking_id` - Database ID of the booking
    /// - `status` - New lifecycle status
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        booking_id: i32,
        status: entity::booking::BookingStatus,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .filter(entity::booking::Column::Id.eq(booking_id))
            .col_expr(
                entity::booking::Column::Status,
                sea_orm::sea_query::Expr::value(status),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
