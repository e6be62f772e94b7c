//! User service for business logic.
//!
//! Orchestrates profile queries and the admin user listing, working with
//! domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, PaginatedUsers, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by ID.
    ///
    /// # Arguments
    /// - `user_id` - Database ID of the user
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        let user = user_repo.find_by_id(user_id).await?;
        Ok(user.map(User::from_entity))
    }

    /// Updates a user's display name.
    ///
    /// # Arguments
    /// - `user_id` - Database ID of the user
    /// - `name` - New display name
    ///
    /// # Returns
    /// - `Ok(())` - Name updated
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn update_name(&self, user_id: i32, name: String) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }

        let user_repo = UserRepository::new(self.db);
        user_repo.update_name(user_id, name).await?;

        Ok(())
    }

    /// Retrieves all users with pagination, ordered by name.
    ///
    /// Calculates total pages from the per_page parameter and the total
    /// user count. A per_page of zero is treated as one.
    ///
    /// # Arguments
    /// - `param` - Parameters specifying page number and users per page
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        // Zero would divide the page count to infinity.
        let per_page = param.per_page.max(1);

        let (users, total_items) = user_repo.get_all_paginated(param.page, per_page).await?;

        let total_pages = (total_items as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedUsers {
            users,
            total: total_items,
            page: param.page,
            per_page,
            total_pages,
        })
    }
}
