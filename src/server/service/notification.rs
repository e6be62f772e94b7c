//! Notification service for the user inbox.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::notification::NotificationRepository, error::AppError, model::notification::Notification,
};

/// Number of notifications returned by the recent-inbox query.
const RECENT_LIMIT: u64 = 10;

/// Service providing business logic for the notification inbox.
pub struct NotificationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    /// Creates a new NotificationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the caller's 10 most recent notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - The caller, already resolved by the auth guard
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Up to 10 notifications
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_recent(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        let notification_repo = NotificationRepository::new(self.db);
        let notifications = notification_repo.get_recent(user_id, RECENT_LIMIT).await?;
        Ok(notifications)
    }

    /// Marks one of the caller's notifications read.
    ///
    /// Notifications of other users are indistinguishable from missing ones.
    ///
    /// # Arguments
    /// - `notification_id` - Database ID of the notification
    /// - `user_id` - The caller, already resolved by the auth guard
    ///
    /// # Returns
    /// - `Ok(())` - Notification marked read
    /// - `Err(AppError::NotFound)` - Missing or owned by another user
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn mark_read(&self, notification_id: i32, user_id: i32) -> Result<(), AppError> {
        let notification_repo = NotificationRepository::new(self.db);

        let Some(notification) = notification_repo.find_by_id(notification_id).await? else {
            return Err(AppError::NotFound("Notification not found".to_string()));
        };
        if notification.user_id != user_id {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        notification_repo.mark_read(notification_id).await?;

        Ok(())
    }

    /// Marks all of the caller's unread notifications read.
    ///
    /// # Arguments
    /// - `user_id` - The caller, already resolved by the auth guard
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications updated
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        let notification_repo = NotificationRepository::new(self.db);
        let updated = notification_repo.mark_all_read(user_id).await?;
        Ok(updated)
    }
}
