use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::server::{
    controller::{admin, auth, billing, booking, hotel, notification, redirect, user, venue},
    state::AppState,
};

/// Builds the API router with every endpoint of the application.
pub fn router() -> Router<AppState> {
    Router::new()
        // Auth
        .route("/api/auth/sign-up", post(auth::sign_up))
        .route("/api/auth/sign-in", post(auth::sign_in))
        .route("/api/auth/sign-out", post(auth::sign_out))
        .route("/api/auth/user", get(auth::get_user))
        // Role dispatchers for the sign-in/sign-up pages
        .route("/auth/sign-in", get(redirect::dispatch_sign_in))
        .route("/auth/sign-up", get(redirect::dispatch_sign_up))
        // Profile
        .route(
            "/api/user/profile",
            get(user::get_profile).put(user::update_profile),
        )
        // Public catalogue
        .route("/api/hotels", get(hotel::list_hotels))
        .route("/api/hotels/{hotel_id}", get(hotel::get_hotel))
        .route(
            "/api/hotels/{hotel_id}/venues",
            get(venue::list_venues_by_hotel),
        )
        // Bookings
        .route(
            "/api/bookings",
            post(booking::create_booking).get(booking::list_my_bookings),
        )
        // Notifications
        .route(
            "/api/notifications",
            get(notification::get_recent_notifications),
        )
        .route(
            "/api/notifications/read-all",
            put(notification::mark_all_notifications_read),
        )
        .route(
            "/api/notifications/{notification_id}/read",
            put(notification::mark_notification_read),
        )
        // Owner endpoints, tenant-scoped through the caller's hotel
        .route("/api/owner/hotel", put(hotel::update_hotel))
        .route(
            "/api/owner/venues",
            get(venue::list_own_venues).post(venue::create_venue),
        )
        .route("/api/owner/venues/{venue_id}", put(venue::update_venue))
        .route("/api/owner/bookings", get(booking::list_hotel_bookings))
        .route(
            "/api/owner/bookings/{booking_id}/status",
            put(booking::update_booking_status),
        )
        .route(
            "/api/owner/billing/summary",
            get(billing::get_billing_summary),
        )
        // Admin endpoints
        .route("/api/admin/users", get(admin::get_all_users))
        .route(
            "/api/admin/hotels/{hotel_id}/verification",
            put(admin::set_hotel_verification),
        )
        .layer(CorsLayer::permissive())
}
