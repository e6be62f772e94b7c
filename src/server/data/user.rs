//! User data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, User};
use chrono::Utc;

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user from sign-up parameters.
    ///
    /// The email column carries a unique constraint; callers check for an
    /// existing email first to surface a validation error instead of a
    /// database error.
    ///
    /// # Arguments
    /// - `param` - User creation parameters with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert (including unique violations)
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            password_hash: ActiveValue::Set(param.password_hash),
            role: ActiveValue::Set(param.role),
            hotel_id: ActiveValue::Set(param.hotel_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by their database ID.
    ///
    /// Returns the raw entity model because the auth guard needs it for
    /// permission checks before any domain conversion happens.
    ///
    /// # Arguments
    /// - `user_id` - Database ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(entity::user::Model))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Finds a user by email for credential verification.
    ///
    /// Returns the raw entity model including the stored password hash; the
    /// auth service verifies the hash and converts to a domain model.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(entity::user::Model))` - User found with stored credentials
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Updates a user's display name.
    ///
    /// # Arguments
    /// - `user_id` - Database ID of the user
    /// - `name` - New display name
    ///
    /// # Returns
    /// - `Ok(())` - Name updated (or no matching user found)
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_name(&self, user_id: i32, name: String) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Name,
                sea_orm::sea_query::Expr::value(name),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets all users with pagination, ordered alphabetically by name.
    ///
    /// Used by the admin user management endpoint.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), DbErr> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities.into_iter().map(User::from_entity).collect();

        Ok((users, total))
    }

    /// Lists the owner accounts assigned to a hotel.
    ///
    /// Used when fanning out booking notifications to a tenant's owners.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel whose owners to list
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Owners of the hotel (possibly empty)
    /// - `Err(DbErr)` - Database error during query
    pub async fn list_owners_by_hotel(&self, hotel_id: i32) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::HotelId.eq(hotel_id))
            .filter(entity::user::Column::Role.eq(entity::user::Role::Owner))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }
}
