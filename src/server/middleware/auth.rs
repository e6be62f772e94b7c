use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
};

/// Privilege tiers an endpoint can require beyond being signed in.
///
/// Public endpoints skip the guard entirely; `require(&[])` enforces the
/// authenticated tier.
pub enum Permission {
    /// Caller must have the admin role.
    Admin,
    /// Caller must have the owner role.
    Owner,
}

/// Authorization guard enforcing an endpoint's privilege tier.
///
/// Resolves the session's user against the database and checks the required
/// permissions, short-circuiting with a typed auth error before any business
/// logic runs.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Requires a signed-in user holding all of the given permissions.
    ///
    /// # Arguments
    /// - `permissions` - Permissions to enforce; empty for the authenticated tier
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - The authenticated caller
    /// - `Err(AuthError::UserNotInSession)` - No user in session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AccessDenied)` - Caller's role is insufficient
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => match user.role {
                    entity::user::Role::Admin => {}
                    entity::user::Role::Owner | entity::user::Role::Customer => {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "admin role required".to_string(),
                        )
                        .into());
                    }
                },
                Permission::Owner => match user.role {
                    entity::user::Role::Owner => {}
                    entity::user::Role::Admin | entity::user::Role::Customer => {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "owner role required".to_string(),
                        )
                        .into());
                    }
                },
            }
        }

        Ok(user)
    }

    /// Requires an owner with an assigned hotel, returning both.
    ///
    /// Used by tenant-scoped endpoints (billing, venue management). Fails
    /// with an authorization error before any tenant data is queried when
    /// the owner has no hotel.
    ///
    /// # Returns
    /// - `Ok((entity::user::Model, i32))` - The caller and their hotel ID
    /// - `Err(AuthError::NoHotelAssigned)` - Owner without a hotel
    /// - Any error `require(&[Permission::Owner])` can produce
    pub async fn require_owner_hotel(&self) -> Result<(entity::user::Model, i32), AppError> {
        let user = self.require(&[Permission::Owner]).await?;

        let Some(hotel_id) = user.hotel_id else {
            return Err(AuthError::NoHotelAssigned(user.id).into());
        };

        Ok((user, hotel_id))
    }
}
