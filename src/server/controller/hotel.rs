use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::hotel::UpdateHotelDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::hotel::UpdateHotelParam,
        service::hotel::HotelService,
        state::AppState,
    },
};

/// GET /api/hotels - List publicly visible hotels
///
/// Only hotels that are verified and not deactivated appear, ordered by name.
///
/// # Authentication
/// Public
///
/// # Returns
/// - `200 OK`: JSON array of HotelDto
pub async fn list_hotels(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let hotel_service = HotelService::new(&state.db);
    let hotels = hotel_service.list_visible().await?;

    let hotels_dto: Vec<_> = hotels.into_iter().map(|h| h.into_dto()).collect();

    Ok((StatusCode::OK, Json(hotels_dto)))
}

/// GET /api/hotels/{hotel_id} - Get one publicly visible hotel
///
/// # Authentication
/// Public
///
/// # Returns
/// - `200 OK`: HotelDto
/// - `404 Not Found`: No such hotel, or it is hidden
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hotel_service = HotelService::new(&state.db);
    let hotel = hotel_service.get_visible(hotel_id).await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

/// PUT /api/owner/hotel - Update the caller's hotel details
///
/// # Authentication
/// Requires the owner role with an assigned hotel
///
/// # Returns
/// - `200 OK`: HotelDto with the new details
/// - `403 Forbidden`: Not an owner, or no hotel assigned
pub async fn update_hotel(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<UpdateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let (_user, hotel_id) = auth_guard.require_owner_hotel().await?;

    let hotel_service = HotelService::new(&state.db);
    let hotel = hotel_service
        .update(
            hotel_id,
            UpdateHotelParam {
                name: dto.name,
                city: dto.city,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}
