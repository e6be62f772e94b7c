use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::user::{SignInDto, SignUpDto},
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{SignInParam, SignUpParam, User},
        service::auth::AuthService,
        state::AppState,
    },
};

/// POST /api/auth/sign-up - Register a new account
///
/// Creates the user, signs the session in and returns the new user. The
/// requested role defaults to customer; admin accounts cannot be
/// self-registered.
///
/// # Authentication
/// Public
///
/// # Returns
/// - `201 Created`: UserDto of the new account
/// - `400 Bad Request`: Invalid input, duplicate email or admin role requested
pub async fn sign_up(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let role = dto.role.unwrap_or(entity::user::Role::Customer);
    if role == entity::user::Role::Admin {
        return Err(AppError::BadRequest(
            "Admin accounts cannot be self-registered".to_string(),
        ));
    }

    let auth_service = AuthService::new(&state.db);
    let user = auth_service
        .sign_up(SignUpParam {
            email: dto.email,
            name: dto.name,
            password: dto.password,
            role,
            hotel_id: None,
        })
        .await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_user_id(user.id).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// POST /api/auth/sign-in - Sign in with email and password
///
/// # Authentication
/// Public
///
/// # Returns
/// - `200 OK`: UserDto of the signed-in account
/// - `401 Unauthorized`: Invalid credentials
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.db);
    let user = auth_service
        .sign_in(SignInParam {
            email: dto.email,
            password: dto.password,
        })
        .await?;

    let auth_session = AuthSession::new(&session);
    auth_session.set_user_id(user.id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// POST /api/auth/sign-out - Sign out the current user
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `204 No Content`: Session cleared
pub async fn sign_out(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[]).await?;

    let auth_session = AuthSession::new(&session);
    auth_session.clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/auth/user - Get the current user
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `200 OK`: UserDto of the signed-in account
/// - `401 Unauthorized`: Not signed in
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    Ok((StatusCode::OK, Json(User::from_entity(user).into_dto())))
}
