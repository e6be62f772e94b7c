//! Hotel domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::hotel::HotelDto;

/// Hotel tenant with visibility flags.
///
/// A hotel is publicly visible when it is verified and not deactivated;
/// its venues additionally require their own active flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub is_verified: bool,
    pub is_deactivated: bool,
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    /// Converts an entity model to a hotel domain model at the repository boundary.
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            is_verified: entity.is_verified,
            is_deactivated: entity.is_deactivated,
            created_at: entity.created_at,
        }
    }

    /// Converts the hotel domain model to a DTO for API responses.
    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            name: self.name,
            city: self.city,
            is_verified: self.is_verified,
            is_deactivated: self.is_deactivated,
        }
    }
}

/// Parameters for updating a hotel's details. `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateHotelParam {
    pub name: Option<String>,
    pub city: Option<String>,
}

/// Parameters for the admin verification flip.
#[derive(Debug, Clone)]
pub struct SetVerificationParam {
    pub hotel_id: i32,
    pub is_verified: bool,
    pub is_deactivated: bool,
}
