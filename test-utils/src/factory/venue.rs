//! Venue factory for creating test venue entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test venues with customizable fields.
pub struct VenueFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    name: String,
    capacity: i32,
    is_active: bool,
}

impl<'a> VenueFactory<'a> {
    /// Creates a new VenueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Venue {id}"` where id is auto-incremented
    /// - capacity: `100`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection
    /// - `hotel_id` - Hotel the venue belongs to
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id,
            name: format!("Venue {}", id),
            capacity: 100,
            is_active: true,
        }
    }

    /// Sets the venue name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the venue capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the active flag.
    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the venue entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::venue::Model)` - Created venue entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::venue::Model, DbErr> {
        entity::venue::ActiveModel {
            hotel_id: ActiveValue::Set(self.hotel_id),
            name: ActiveValue::Set(self.name),
            capacity: ActiveValue::Set(self.capacity),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active venue for the given hotel with default values.
pub async fn create_venue(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::venue::Model, DbErr> {
    VenueFactory::new(db, hotel_id).build().await
}
