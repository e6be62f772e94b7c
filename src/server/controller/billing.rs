use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{
    error::AppError, middleware::auth::AuthGuard, service::billing::BillingService,
    state::AppState,
};

/// GET /api/owner/billing/summary - Aggregate the caller's hotel revenue
///
/// Folds every booking of the hotel into five aggregates; a hotel with no
/// bookings yields all zeros. An owner without an assigned hotel is rejected
/// by the guard before any booking is read.
///
/// # Authentication
/// Requires the owner role with an assigned hotel
///
/// # Returns
/// - `200 OK`: BillingSummaryDto
/// - `403 Forbidden`: Not an owner, or no hotel assigned
pub async fn get_billing_summary(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_guard = AuthGuard::new(&state.db, &session);
    let (_user, hotel_id) = auth_guard.require_owner_hotel().await?;

    let billing_service = BillingService::new(&state.db);
    let summary = billing_service.get_summary(hotel_id).await?;

    Ok((StatusCode::OK, Json(summary.into_dto())))
}
