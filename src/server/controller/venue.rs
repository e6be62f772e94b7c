use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::venue::{CreateVenueDto, UpdateVenueDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::venue::{CreateVenueParam, UpdateVenueParam},
        service::venue::VenueService,
        state::AppState,
    },
};

/// GET /api/hotels/{hotel_id}/venues - List a hotel's visible venues
///
/// A venue appears only when it is active and its hotel is verified and not
/// deactivated.
///
/// # Authentication
/// Public
///
/// # Returns
/// - `200 OK`: JSON array of VenueDto
pub async fn list_venues_by_hotel(
    State(state): State<AppState>,
    Path(hotel_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let venue_service = VenueService::new(&state.db);
    let venues = venue_service.list_visible_by_hotel(hotel_id).await?;

    let venues_dto: Vec<_> = venues.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(venues_dto)))
}

/// GET /api/owner/venues - List every venue of the caller's hotel
///
/// Includes inactive venues, unlike the public listing.
///
/// # Authentication
/// Requires the owner role with an assigned hotel
///
/// # Returns
/// - `200 OK`: JSON array of VenueDto
pub async fn list_own_venues(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let (_user, hotel_id) = auth_guard.require_owner_hotel().await?;

    let venue_service = VenueService::new(&state.db);
    let venues = venue_service.list_by_hotel(hotel_id).await?;

    let venues_dto: Vec<_> = venues.into_iter().map(|v| v.into_dto()).collect();

    Ok((StatusCode::OK, Json(venues_dto)))
}

/// POST /api/owner/venues - Create a venue under the caller's hotel
///
/// # Authentication
/// Requires the owner role with an assigned hotel
///
/// # Returns
/// - `201 Created`: VenueDto of the new venue
/// - `400 Bad Request`: Empty name or non-positive capacity
pub async fn create_venue(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateVenueDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let (_user, hotel_id) = auth_guard.require_owner_hotel().await?;

    let venue_service = VenueService::new(&state.db);
    let venue = venue_service
        .create(CreateVenueParam {
            hotel_id,
            name: dto.name,
            capacity: dto.capacity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(venue.into_dto())))
}

/// PUT /api/owner/venues/{venue_id} - Update a venue of the caller's hotel
///
/// # Authentication
/// Requires the owner role with an assigned hotel
///
/// # Returns
/// - `200 OK`: VenueDto with the new fields
/// - `404 Not Found`: Venue missing or owned by another hotel
pub async fn update_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<i32>,
    session: Session,
    Json(dto): Json<UpdateVenueDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let (_user, hotel_id) = auth_guard.require_owner_hotel().await?;

    let venue_service = VenueService::new(&state.db);
    let venue = venue_service
        .update(
            venue_id,
            hotel_id,
            UpdateVenueParam {
                name: dto.name,
                capacity: dto.capacity,
                is_active: dto.is_active,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(venue.into_dto())))
}
