//! SeaORM entity models for the venuebook database schema.
//!
//! Each module maps one table. Enum columns (user role, booking status) are
//! defined alongside the entity that owns them and stored as short strings.

pub mod booking;
pub mod hotel;
pub mod notification;
pub mod prelude;
pub mod user;
pub mod venue;
