//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. `DatabaseConnection` is a
//! connection pool, so clones share the same pool; constructing it once per
//! process is what keeps concurrent handlers from opening new connections.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    ///
    /// Shared across all requests; pooling and transaction isolation are
    /// delegated to the underlying sqlx driver.
    pub db: DatabaseConnection,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// Called once during server startup after the database connection has
    /// been established.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
