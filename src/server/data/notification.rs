//! Notification data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::notification::{CreateNotificationParam, Notification};

/// Repository providing database operations for user notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new unread notification.
    ///
    /// # Arguments
    /// - `param` - Notification creation parameters
    ///
    /// # Returns
    /// - `Ok(Notification)` - The created notification
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        param: CreateNotificationParam,
    ) -> Result<Notification, DbErr> {
        let entity = entity::notification::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            is_read: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Finds a notification by its ID.
    ///
    /// The service layer checks ownership before acting on the result.
    ///
    /// # Arguments
    /// - `notification_id` - Database ID of the notification
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Notification found
    /// - `Ok(None)` - No notification with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(
        &self,
        notification_id: i32,
    ) -> Result<Option<Notification>, DbErr> {
        let entity = entity::prelude::Notification::find_by_id(notification_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Notification::from_entity))
    }

    /// Gets a user's most recent notifications, newest first.
    ///
    /// # Arguments
    /// - `user_id` - User whose inbox to read
    /// - `limit` - Maximum number of notifications to return
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - Up to `limit` notifications
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_recent(
        &self,
        user_id: i32,
        limit: u64,
    ) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Marks a single notification read.
    ///
    /// # Arguments
    /// - `notification_id` - Database ID of the notification
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows affected (0 or 1)
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_read(&self, notification_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::Id.eq(notification_id))
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Marks all of a user's unread notifications read.
    ///
    /// Filtered by owner and unread state, so other users' inboxes and
    /// already-read rows are untouched.
    ///
    /// # Arguments
    /// - `user_id` - User whose unread notifications to flip
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows updated
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .filter(entity::notification::Column::UserId.eq(user_id))
            .filter(entity::notification::Column::IsRead.eq(false))
            .col_expr(
                entity::notification::Column::IsRead,
                sea_orm::sea_query::Expr::value(true),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
