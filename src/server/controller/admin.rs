use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::hotel::SetHotelVerificationDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{hotel::SetVerificationParam, user::GetAllUsersParam},
        service::{hotel::HotelService, user::UserService},
        state::AppState,
    },
};

/// Pagination query parameters for the admin user listing.
#[derive(Deserialize)]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

/// GET /api/admin/users - List all users, paginated and ordered by name
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `200 OK`: PaginatedUsersDto
/// - `403 Forbidden`: Not an admin
pub async fn get_all_users(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let user_service = UserService::new(&state.db);
    let users = user_service
        .get_all_users(GetAllUsersParam {
            page: query.page.unwrap_or(0),
            per_page: query.per_page.unwrap_or(20),
        })
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

/// PUT /api/admin/hotels/{hotel_id}/verification - Set a hotel's flags
///
/// Flips is_verified and is_deactivated for one hotel, controlling its
/// public visibility.
///
/// # Authentication
/// Requires the admin role
///
/// # Returns
/// - `200 OK`: HotelDto with the new flags
/// - `404 Not Found`: No hotel with that ID
pub async fn set_hotel_verification(
    State(state): State<AppState>,
    Path(hotel_id): Path<i32>,
    session: Session,
    Json(dto): Json<SetHotelVerificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    auth_guard.require(&[Permission::Admin]).await?;

    let hotel_service = HotelService::new(&state.db);
    let hotel = hotel_service
        .set_verification(SetVerificationParam {
            hotel_id,
            is_verified: dto.is_verified,
            is_deactivated: dto.is_deactivated,
        })
        .await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}
