//! User domain models and parameters.
//!
//! The domain `User` deliberately omits the stored password hash; credential
//! verification happens at the data boundary in the auth service.

use chrono::{DateTime, Utc};
use entity::user::Role;

use crate::model::user::{PaginatedUsersDto, UserDto};

/// Application user with role and optional managed hotel.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: String,
    /// Account role; drives the privilege tier checks.
    pub role: Role,
    /// Hotel the user manages; set for owners only.
    pub hotel_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role,
            hotel_id: entity.hotel_id,
            created_at: entity.created_at,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
            hotel_id: self.hotel_id,
        }
    }
}

/// Parameters for creating a user during sign-up.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub email: String,
    pub name: String,
    /// Already-hashed password; never the plaintext.
    pub password_hash: String,
    pub role: Role,
    pub hotel_id: Option<i32>,
}

/// Paginated collection of users with metadata.
///
/// Used by the admin user listing to build navigation controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    /// Users for this page.
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    /// Number of users per page.
    pub per_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
}

impl PaginatedUsers {
    /// Converts the paginated users domain model to a DTO for API responses.
    pub fn into_dto(self) -> PaginatedUsersDto {
        let users = self.users.into_iter().map(|u| u.into_dto()).collect();

        PaginatedUsersDto {
            users,
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Parameters for the sign-up operation, carrying the plaintext password.
#[derive(Debug, Clone)]
pub struct SignUpParam {
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
    pub hotel_id: Option<i32>,
}

/// Parameters for the sign-in operation.
#[derive(Debug, Clone)]
pub struct SignInParam {
    pub email: String,
    pub password: String,
}
