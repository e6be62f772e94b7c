//! Data transfer objects shared across the API surface.
//!
//! These are the serialized shapes returned to clients. Domain models in
//! `server::model` convert into these at the controller boundary.

pub mod api;
pub mod billing;
pub mod booking;
pub mod hotel;
pub mod notification;
pub mod user;
pub mod venue;
