//! Hotel data repository for database operations.

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::hotel::{Hotel, UpdateHotelParam};

/// Repository providing database operations for hotel tenants.
pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    /// Creates a new HotelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a hotel by its ID regardless of visibility flags.
    ///
    /// # Arguments
    /// - `hotel_id` - Database ID of the hotel
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - Hotel found
    /// - `Ok(None)` - No hotel with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, hotel_id: i32) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(hotel_id).one(self.db).await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Finds a publicly visible hotel by its ID.
    ///
    /// A hotel is visible when it is verified and not deactivated.
    ///
    /// # Arguments
    /// - `hotel_id` - Database ID of the hotel
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - Visible hotel found
    /// - `Ok(None)` - No such hotel, or it is hidden
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_visible_by_id(&self, hotel_id: i32) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(hotel_id)
            .filter(entity::hotel::Column::IsVerified.eq(true))
            .filter(entity::hotel::Column::IsDeactivated.eq(false))
            .one(self.db)
            .await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Lists all publicly visible hotels, ordered by name.
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - Verified, non-deactivated hotels
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_visible(&self) -> Result<Vec<Hotel>, DbErr> {
        let entities = entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::IsVerified.eq(true))
            .filter(entity::hotel::Column::IsDeactivated.eq(false))
            .order_by_asc(entity::hotel::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }

    /// Updates a hotel's details, leaving `None` fields unchanged.
    ///
    /// # Arguments
    /// - `hotel_id` - Database ID of the hotel
    /// - `param` - Fields to update
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - The updated hotel
    /// - `Ok(None)` - No hotel with that ID
    /// - `Err(DbErr)` - Database error during query or update
    pub async fn update_details(
        &self,
        hotel_id: i32,
        param: UpdateHotelParam,
    ) -> Result<Option<Hotel>, DbErr> {
        use sea_orm::ActiveModelTrait;

        let Some(entity) = entity::prelude::Hotel::find_by_id(hotel_id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::hotel::ActiveModel = entity.into();
        if let Some(name) = param.name {
            active.name = sea_orm::ActiveValue::Set(name);
        }
        if let Some(city) = param.city {
            active.city = sea_orm::ActiveValue::Set(city);
        }

        let updated = active.update(self.db).await?;

        Ok(Some(Hotel::from_entity(updated)))
    }

    /// Sets a hotel's verification and deactivation flags.
    ///
    /// # Arguments
    /// - `hotel_id` - Database ID of the hotel
    /// - `is_verified` - New verification flag
    /// - `is_deactivated` - New deactivation flag
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_verification(
        &self,
        hotel_id: i32,
        is_verified: bool,
        is_deactivated: bool,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Hotel::update_many()
            .filter(entity::hotel::Column::Id.eq(hotel_id))
            .col_expr(
                entity::hotel::Column::IsVerified,
                sea_orm::sea_query::Expr::value(is_verified),
            )
            .col_expr(
                entity::hotel::Column::IsDeactivated,
                sea_orm::sea_query::Expr::value(is_deactivated),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks every hotel verified and not deactivated.
    ///
    /// Used by the fix-venues maintenance script. Unfiltered by design; the
    /// statement's atomicity is the only transactional guarantee.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_all_verified(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Hotel::update_many()
            .col_expr(
                entity::hotel::Column::IsVerified,
                sea_orm::sea_query::Expr::value(true),
            )
            .col_expr(
                entity::hotel::Column::IsDeactivated,
                sea_orm::sea_query::Expr::value(false),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Counts hotels that are not verified.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of unverified hotels
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_unverified(&self) -> Result<u64, DbErr> {
        entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::IsVerified.eq(false))
            .count(self.db)
            .await
    }

    /// Counts hotels that are deactivated.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of deactivated hotels
    /// - `Err(DbErr)` - Database error during count query
    pub async fn count_deactivated(&self) -> Result<u64, DbErr> {
        entity::prelude::Hotel::find()
            .filter(entity::hotel::Column::IsDeactivated.eq(true))
            .count(self.db)
            .await
    }
}
