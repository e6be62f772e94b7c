use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::notification::MarkAllReadDto,
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::notification::NotificationService, state::AppState,
    },
};

/// GET /api/notifications - Get the caller's 10 most recent notifications
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `200 OK`: JSON array of NotificationDto, newest first
pub async fn get_recent_notifications(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);
    let notifications = notification_service.get_recent(user.id).await?;

    let notifications_dto: Vec<_> = notifications.into_iter().map(|n| n.into_dto()).collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}

/// PUT /api/notifications/{notification_id}/read - Mark one notification read
///
/// Only the notification's owner may mark it; anyone else sees a 404.
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `204 No Content`: Notification marked read
/// - `404 Not Found`: Missing or owned by another user
pub async fn mark_notification_read(
    State(state): State<AppState>,
    Path(notification_id): Path<i32>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);
    notification_service.mark_read(notification_id, user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/notifications/read-all - Mark all unread notifications read
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `200 OK`: MarkAllReadDto with the number of rows updated
pub async fn mark_all_notifications_read(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let notification_service = NotificationService::new(&state.db);
    let updated = notification_service.mark_all_read(user.id).await?;

    Ok((StatusCode::OK, Json(MarkAllReadDto { updated })))
}
