use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session.
    ///
    /// The caller invoked an endpoint above the public tier without being
    /// signed in. Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// The session carries a user ID but no matching row was found, e.g.
    /// after the database was reset. Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email/password combination did not match a stored credential.
    ///
    /// Deliberately does not say whether the email or the password was wrong.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Caller's role does not satisfy the endpoint's privilege tier.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Owner-tier operation invoked by a user with no assigned hotel.
    ///
    /// Raised before any tenant-scoped query runs. Results in a 403
    /// Forbidden response.
    #[error("User {0} has no hotel assigned")]
    NoHotelAssigned(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` / `InvalidCredentials` → 401 Unauthorized
/// - `AccessDenied` / `NoHotelAssigned` → 403 Forbidden
///
/// Errors are logged at debug level for diagnostics while client-facing
/// messages stay generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be signed in to do that.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid email or password.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) | Self::NoHotelAssigned(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to do that.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
