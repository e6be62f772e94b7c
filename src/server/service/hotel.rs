//! Hotel service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::hotel::HotelRepository,
    error::AppError,
    model::hotel::{Hotel, SetVerificationParam, UpdateHotelParam},
};

/// Service providing business logic for hotel tenants.
pub struct HotelService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    /// Creates a new HotelService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists all publicly visible hotels, ordered by name.
    ///
    /// Visibility requires the hotel to be verified and not deactivated.
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - Visible hotels
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_visible(&self) -> Result<Vec<Hotel>, AppError> {
        let hotel_repo = HotelRepository::new(self.db);
        let hotels = hotel_repo.list_visible().await?;
        Ok(hotels)
    }

    /// Retrieves a publicly visible hotel by ID.
    ///
    /// Hidden hotels are indistinguishable from missing ones.
    ///
    /// # Arguments
    /// - `hotel_id` - Database ID of the hotel
    ///
    /// # Returns
    /// - `Ok(Hotel)` - Visible hotel found
    /// - `Err(AppError::NotFound)` - No such hotel, or it is hidden
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_visible(&self, hotel_id: i32) -> Result<Hotel, AppError> {
        let hotel_repo = HotelRepository::new(self.db);

        let Some(hotel) = hotel_repo.find_visible_by_id(hotel_id).await? else {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        };

        Ok(hotel)
    }

    /// Updates the owner's hotel details.
    ///
    /// # Arguments
    /// - `hotel_id` - The caller's hotel, already resolved by the auth guard
    /// - `param` - Fields to update; `None` fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The updated hotel
    /// - `Err(AppError::NotFound)` - Hotel no longer exists
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update(&self, hotel_id: i32, param: UpdateHotelParam) -> Result<Hotel, AppError> {
        let hotel_repo = HotelRepository::new(self.db);

        let Some(hotel) = hotel_repo.update_details(hotel_id, param).await? else {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        };

        Ok(hotel)
    }

    /// Sets a hotel's verification and deactivation flags.
    ///
    /// Admin operation; the guard has already enforced the tier.
    ///
    /// # Arguments
    /// - `param` - Target hotel and the new flag values
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The hotel with its new flags
    /// - `Err(AppError::NotFound)` - No hotel with that ID
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_verification(&self, param: SetVerificationParam) -> Result<Hotel, AppError> {
        let hotel_repo = HotelRepository::new(self.db);

        let updated = hotel_repo
            .set_verification(param.hotel_id, param.is_verified, param.is_deactivated)
            .await?;
        if updated == 0 {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        }

        let Some(hotel) = hotel_repo.find_by_id(param.hotel_id).await? else {
            return Err(AppError::NotFound("Hotel not found".to_string()));
        };

        Ok(hotel)
    }
}
