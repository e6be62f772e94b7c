//! Venue data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::venue::{CreateVenueParam, UpdateVenueParam, Venue};

/// Repository providing database operations for venues.
///
/// Effective venue visibility is the AND of the venue's own active flag and
/// the owning hotel's verified/not-deactivated flags; the `*_visible_*`
/// queries join the hotel table to enforce that in one statement.
pub struct VenueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VenueRepository<'a> {
    /// Creates a new VenueRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new venue under a hotel. New venues start active.
    ///
    /// # Arguments
    /// - `param` - Venue creation parameters
    ///
    /// # Returns
    /// - `Ok(Venue)` - The created venue
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateVenueParam) -> Result<Venue, DbErr> {
        let entity = entity::venue::ActiveModel {
            hotel_id: ActiveValue::Set(param.hotel_id),
            name: ActiveValue::Set(param.name),
            capacity: ActiveValue::Set(param.capacity),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Venue::from_entity(entity))
    }

    /// Finds a venue by its ID regardless of visibility.
    ///
    /// # Arguments
    /// - `venue_id` - Database ID of the venue
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - Venue found
    /// - `Ok(None)` - No venue with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, venue_id: i32) -> Result<Option<Venue>, DbErr> {
        let entity = entity::prelude::Venue::find_by_id(venue_id).one(self.db).await?;

        Ok(entity.map(Venue::from_entity))
    }

    /// Finds an effectively visible venue by its ID.
    ///
    /// Joins the hotel table so a venue under an unverified or deactivated
    /// hotel is treated as missing.
    ///
    /// # Arguments
    /// - `venue_id` - Database ID of the venue
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - Visible venue found
    /// - `Ok(None)` - No such venue, or it is hidden
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_visible_by_id(&self, venue_id: i32) -> Result<Option<Venue>, DbErr> {
        let entity = entity::prelude::Venue::find_by_id(venue_id)
            .filter(entity::venue::Column::IsActive.eq(true))
            .join(JoinType::InnerJoin, entity::venue::Relation::Hotel.def())
            .filter(entity::hotel::Column::IsVerified.eq(true))
            .filter(entity::hotel::Column::IsDeactivated.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Venue::from_entity))
    }

    /// Lists every venue of a hotel, visible or not, ordered by name.
    ///
    /// Owner-facing listing; the public variant is `list_visible_by_hotel`.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel whose venues to list
    ///
    /// # Returns
    /// - `Ok(Vec<Venue>)` - All venues of the hotel
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_by_hotel(&self, hotel_id: i32) -> Result<Vec<Venue>, DbErr> {
        let entities = entity::prelude::Venue::find()
            .filter(entity::venue::Column::HotelId.eq(hotel_id))
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Venue::from_entity).collect())
    }

    /// Lists the effectively visible venues of a hotel, ordered by name.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel whose venues to list
    ///
    /// # Returns
    /// - `Ok(Vec<Venue>)` - Active venues under a verified, non-deactivated hotel
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_visible_by_hotel(&self, hotel_id: i32) -> Result<Vec<Venue>, DbErr> {
        let entities = entity::prelude::Venue::find()
            .filter(entity::venue::Column::HotelId.eq(hotel_id))
            .filter(entity::venue::Column::IsActive.eq(true))
            .join(JoinType::InnerJoin, entity::venue::Relation::Hotel.def())
            .filter(entity::hotel::Column::IsVerified.eq(true))
            .filter(entity::hotel::Column::IsDeactivated.eq(false))
            .order_by_asc(entity::venue::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Venue::from_entity).collect())
    }

    /// Updates a venue, leaving `None` fields unchanged.
    ///
    /// # Arguments
    /// - `venue_id` - Database ID of the venue
    /// - `param` - Fields to update
    ///
    /// # Returns
    /// - `Ok(Some(Venue))` - The updated venue
    /// - `Ok(None)` - No venue with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update(
        &self,
        venue_id: i32,
        param: UpdateVenueParam,
    ) -> Result<Option<Venue>, DbErr> {
        let Some(entity) = entity::prelude::Venue::find_by_id(venue_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::venue::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(capacity) = param.capacity {
            active.capacity = ActiveValue::Set(capacity);
        }
        if let Some(is_active) = param.is_active {
            active.is_active = ActiveValue::Set(is_active);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Venue::from_entity(updated)))
    }

    /// Marks every venue active.
    ///
    /// Used by the fix-venues maintenance script. Unfiltered by design.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected
    /// - `Err(DbErr)` - Database error during update
    pub async fn activate_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Venue::update_many()
            .col_expr(
                entity::venue::Column::IsActive,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts venues that are not active.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of inactive venues
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_inactive(&self) -> Result<u64, DbErr> {
        entity::prelude::Venue::find()
            .filter(entity::venue::Column::IsActive.eq(false))
            .count(self.db)
            .await
    }
}
