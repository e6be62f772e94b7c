//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels with customizable fields.
///
/// Defaults to a verified, active hotel so listing and booking tests work
/// without extra setup. Use `is_verified(false)` or `is_deactivated(true)`
/// to test the visibility rules.
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    city: String,
    is_verified: bool,
    is_deactivated: bool,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"` where id is auto-incremented
    /// - city: `"Kathmandu"`
    /// - is_verified: `true`
    /// - is_deactivated: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Hotel {}", id),
            city: "Kathmandu".to_string(),
            is_verified: true,
            is_deactivated: false,
        }
    }

    /// Sets the hotel name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the hotel city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the verification flag.
    pub fn is_verified(mut self, is_verified: bool) -> Self {
        self.is_verified = is_verified;
        self
    }

    /// Sets the deactivation flag.
    pub fn is_deactivated(mut self, is_deactivated: bool) -> Self {
        self.is_deactivated = is_deactivated;
        self
    }

    /// Builds and inserts the hotel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hotel::Model)` - Created hotel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            name: ActiveValue::Set(self.name),
            city: ActiveValue::Set(self.city),
            is_verified: ActiveValue::Set(self.is_verified),
            is_deactivated: ActiveValue::Set(self.is_deactivated),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a verified, active hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
