use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use rust_decimal::Decimal;
use tower_sessions::Session;

use crate::{
    model::booking::{CreateBookingDto, UpdateBookingStatusDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::CreateBookingParam,
        service::booking::BookingService,
        state::AppState,
    },
};

fn to_decimal(value: f64, field: &str) -> Result<Decimal, AppError> {
    Decimal::try_from(value)
        .map_err(|_| AppError::BadRequest(format!("Invalid amount for {}", field)))
}

/// POST /api/bookings - Book a venue
///
/// The venue must be effectively visible; the booking's hotel is derived
/// from the venue and the booking starts in the pending state.
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `201 Created`: BookingDto of the new booking
/// - `400 Bad Request`: Negative amount or inverted time range
/// - `404 Not Found`: Venue missing or not visible
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let booking_service = BookingService::new(&state.db);
    let booking = booking_service
        .create(CreateBookingParam {
            venue_id: dto.venue_id,
            user_id: user.id,
            total_amount: to_decimal(dto.total_amount, "total_amount")?,
            vat: to_decimal(dto.vat, "vat")?,
            service_charge: to_decimal(dto.service_charge, "service_charge")?,
            starts_at: dto.starts_at,
            ends_at: dto.ends_at,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// GET /api/bookings - List the caller's bookings, newest first
///
/// # Authentication
/// Requires user to be signed in
///
/// # Returns
/// - `200 OK`: JSON array of BookingDto
pub async fn list_my_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let user = auth_guard.require(&[]).await?;

    let booking_service = BookingService::new(&state.db);
    let bookings = booking_service.list_mine(user.id).await?;

    let bookings_dto: Vec<_> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings_dto)))
}

/// GET /api/owner/bookings - List the caller's hotel bookings, newest first
///
/// # Authentication
/// Requires the owner role with an assigned hotel
///
/// # Returns
/// - `200 OK`: JSON array of BookingDto
pub async fn list_hotel_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let (_user, hotel_id) = auth_guard.require_owner_hotel().await?;

    let booking_service = BookingService::new(&state.db);
    let bookings = booking_service.list_for_hotel(hotel_id).await?;

    let bookings_dto: Vec<_> = bookings.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bookings_dto)))
}

/// PUT /api/owner/bookings/{booking_id}/status - Update a booking's status
///
/// # Authentication
/// Requires the owner role with an assigned hotel
///
/// # Returns
/// - `200 OK`: BookingDto with the new status
/// - `404 Not Found`: Booking missing or owned by another hotel
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(booking_id): Path<i32>,
    session: Session,
    Json(dto): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let (_user, hotel_id) = auth_guard.require_owner_hotel().await?;

    let booking_service = BookingService::new(&state.db);
    let booking = booking_service
        .update_status(booking_id, hotel_id, dto.status)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}
