//! Type-safe session management wrapper.
//!
//! Wraps the underlying tower-sessions `Session` with a small, typed
//! interface for authentication state, preventing key typos and keeping
//! session-related logic in one place.

use tower_sessions::Session;

use crate::server::error::AppError;

/// Session key for the signed-in user's ID.
const SESSION_AUTH_USER_ID: &str = "auth:user_id";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's ID and session
/// lifecycle operations (sign-in, sign-out).
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    ///
    /// # Arguments
    /// - `session` - Reference to the tower-sessions Session to wrap
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's ID in the session, signing them in.
    ///
    /// # Arguments
    /// - `user_id` - Database ID of the authenticated user
    ///
    /// # Returns
    /// - `Ok(())` - User ID stored
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn set_user_id(&self, user_id: i32) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;
        Ok(())
    }

    /// Reads the signed-in user's ID from the session, if any.
    ///
    /// # Returns
    /// - `Ok(Some(i32))` - A user is signed in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn user_id(&self) -> Result<Option<i32>, AppError> {
        let user_id = self.session.get::<i32>(SESSION_AUTH_USER_ID).await?;
        Ok(user_id)
    }

    /// Clears the session entirely, signing the user out.
    ///
    /// # Returns
    /// - `Ok(())` - Session deleted from the store
    /// - `Err(AppError::SessionErr)` - Session store failure
    pub async fn clear(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
