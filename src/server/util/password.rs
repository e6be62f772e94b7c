use crate::server::error::AppError;

/// Hashes a plaintext password with bcrypt at the default cost.
///
/// # Returns
/// - `Ok(String)` - The bcrypt hash to store
/// - `Err(AppError::InternalError)` - Hashing failed
pub fn hash_password(password: &str) -> Result<String, AppError> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST)
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Verifies a plaintext password against a stored bcrypt hash.
///
/// # Returns
/// - `Ok(bool)` - Whether the password matches
/// - `Err(AppError::InternalError)` - The stored hash is malformed
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, hash)
        .map_err(|e| AppError::InternalError(format!("Failed to verify password: {}", e)))
}
