//! Notification domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

/// Notification in a user's inbox.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub body: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Converts an entity model to a notification domain model at the repository boundary.
    pub fn from_entity(entity: entity::notification::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            title: entity.title,
            body: entity.body,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }

    /// Converts the notification domain model to a DTO for API responses.
    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            title: self.title,
            body: self.body,
            is_read: self.is_read,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a notification.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub user_id: i32,
    pub title: String,
    pub body: String,
}
