//! HTTP controllers for the API surface.
//!
//! Controllers are thin axum handlers: they enforce the endpoint's privilege
//! tier through the auth guard, convert DTOs at the boundary and delegate all
//! business logic to the service layer.

pub mod admin;
pub mod auth;
pub mod billing;
pub mod booking;
pub mod hotel;
pub mod notification;
pub mod redirect;
pub mod user;
pub mod venue;
