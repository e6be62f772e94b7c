//! Venue domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::venue::VenueDto;

/// Bookable venue belonging to exactly one hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct Venue {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub capacity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Venue {
    /// Converts an entity model to a venue domain model at the repository boundary.
    pub fn from_entity(entity: entity::venue::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            name: entity.name,
            capacity: entity.capacity,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }

    /// Converts the venue domain model to a DTO for API responses.
    pub fn into_dto(self) -> VenueDto {
        VenueDto {
            id: self.id,
            hotel_id: self.hotel_id,
            name: self.name,
            capacity: self.capacity,
            is_active: self.is_active,
        }
    }
}

/// Parameters for creating a venue under the owner's hotel.
#[derive(Debug, Clone)]
pub struct CreateVenueParam {
    pub hotel_id: i32,
    pub name: String,
    pub capacity: i32,
}

/// Parameters for updating a venue. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateVenueParam {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub is_active: Option<bool>,
}
