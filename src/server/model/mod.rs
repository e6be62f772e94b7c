//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary
//! and transformed to DTOs at the controller boundary. They provide type-safe
//! representations with business logic separated from database and API
//! concerns.

pub mod billing;
pub mod booking;
pub mod hotel;
pub mod maintenance;
pub mod notification;
pub mod user;
pub mod venue;
