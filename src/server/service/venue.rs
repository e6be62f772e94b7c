//! Venue service for business logic.
//!
//! Owner operations are tenant-scoped: every mutation checks the venue
//! belongs to the caller's hotel before touching it.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::venue::VenueRepository,
    error::AppError,
    model::venue::{CreateVenueParam, UpdateVenueParam, Venue},
};

/// Service providing business logic for venues.
pub struct VenueService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> VenueService<'a> {
    /// Creates a new VenueService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the effectively visible venues of a hotel.
    ///
    /// A venue is effectively visible when it is active and its hotel is
    /// verified and not deactivated.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel whose venues to list
    ///
    /// # Returns
    /// - `Ok(Vec<Venue>)` - Visible venues
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_visible_by_hotel(&self, hotel_id: i32) -> Result<Vec<Venue>, AppError> {
        let venue_repo = VenueRepository::new(self.db);
        let venues = venue_repo.list_visible_by_hotel(hotel_id).await?;
        Ok(venues)
    }

    /// Lists every venue of the owner's hotel, including inactive ones.
    ///
    /// # Arguments
    /// - `hotel_id` - The caller's hotel, already resolved by the auth guard
    ///
    /// # Returns
    /// - `Ok(Vec<Venue>)` - All venues of the hotel
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn list_by_hotel(&self, hotel_id: i32) -> Result<Vec<Venue>, AppError> {
        let venue_repo = VenueRepository::new(self.db);
        let venues = venue_repo.list_by_hotel(hotel_id).await?;
        Ok(venues)
    }

    /// Creates a venue under the owner's hotel.
    ///
    /// # Arguments
    /// - `param` - Venue name and capacity; hotel_id comes from the auth guard
    ///
    /// # Returns
    /// - `Ok(Venue)` - The created venue, active by default
    /// - `Err(AppError::BadRequest)` - Empty name or non-positive capacity
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateVenueParam) -> Result<Venue, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Venue name is required".to_string()));
        }
        if param.capacity <= 0 {
            return Err(AppError::BadRequest(
                "Venue capacity must be positive".to_string(),
            ));
        }

        let venue_repo = VenueRepository::new(self.db);
        let venue = venue_repo.create(param).await?;

        Ok(venue)
    }

    /// Updates a venue of the owner's hotel.
    ///
    /// Venues of other hotels are indistinguishable from missing ones.
    ///
    /// # Arguments
    /// - `venue_id` - Database ID of the venue
    /// - `hotel_id` - The caller's hotel, already resolved by the auth guard
    /// - `param` - Fields to update; `None` fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(Venue)` - The updated venue
    /// - `Err(AppError::NotFound)` - Venue missing or owned by another hotel
    /// - `Err(AppError::BadRequest)` - Non-positive capacity
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        venue_id: i32,
        hotel_id: i32,
        param: UpdateVenueParam,
    ) -> Result<Venue, AppError> {
        if let Some(capacity) = param.capacity {
            if capacity <= 0 {
                return Err(AppError::BadRequest(
                    "Venue capacity must be positive".to_string(),
                ));
            }
        }

        let venue_repo = VenueRepository::new(self.db);

        let Some(venue) = venue_repo.find_by_id(venue_id).await? else {
            return Err(AppError::NotFound("Venue not found".to_string()));
        };
        if venue.hotel_id != hotel_id {
            return Err(AppError::NotFound("Venue not found".to_string()));
        }

        let Some(venue) = venue_repo.update(venue_id, param).await? else {
            return Err(AppError::NotFound("Venue not found".to_string()));
        };

        Ok(venue)
    }
}
