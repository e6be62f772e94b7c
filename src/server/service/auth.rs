//! Authentication service for credential handling.
//!
//! Sign-up and sign-in verify or create credentials and return the domain
//! user; the controller owns the session write so this service stays
//! database-only and unit-testable.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, SignInParam, SignUpParam, User},
    util::password::{hash_password, verify_password},
};

/// Service providing business logic for authentication.
pub struct AuthService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Validates the input, rejects duplicate emails, hashes the password
    /// with bcrypt and stores the user.
    ///
    /// # Arguments
    /// - `param` - Sign-up parameters with the plaintext password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Invalid input or email already in use
    /// - `Err(AppError::DbErr)` - Database error during query or insert
    pub async fn sign_up(&self, param: SignUpParam) -> Result<User, AppError> {
        if param.email.trim().is_empty() || !param.email.contains('@') {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required".to_string()));
        }
        if param.password.len() < 8 {
            return Err(AppError::BadRequest(
                "Password must be at least 8 characters".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_email(&param.email).await?.is_some() {
            return Err(AppError::BadRequest("Email is already in use".to_string()));
        }

        let password_hash = hash_password(&param.password)?;

        let user = user_repo
            .create(CreateUserParam {
                email: param.email,
                name: param.name,
                password_hash,
                role: param.role,
                hotel_id: param.hotel_id,
            })
            .await?;

        Ok(user)
    }

    /// Verifies an email/password pair.
    ///
    /// The same error is returned for an unknown email and a wrong password
    /// so the response does not reveal which field failed.
    ///
    /// # Arguments
    /// - `param` - Sign-in parameters
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials valid
    /// - `Err(AppError::AuthErr)` - Invalid credentials
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn sign_in(&self, param: SignInParam) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(&param.email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(&param.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(user))
    }
}
