use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::UpdateProfileDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::user::User,
        service::user::UserService,
        state::AppState,
    },
};

/// GET /api/user/profile - Get the caller's profile
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `200 OK`: UserDto of the caller
/// - `401 Unauthorized`: Not signed in
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    Ok((StatusCode::OK, Json(User::from_entity(user).into_dto())))
}

/// PUT /api/user/profile - Update the caller's display name
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `200 OK`: UserDto with the new name
/// - `400 Bad Request`: Empty name
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let user_service = UserService::new(&state.db);
    user_service.update_name(user.id, dto.name).await?;

    let Some(updated) = user_service.get_user(user.id).await? else {
        return Err(AppError::NotFound("User not found".to_string()));
    };

    Ok((StatusCode::OK, Json(updated.into_dto())))
}
