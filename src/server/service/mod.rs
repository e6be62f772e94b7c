//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod auth;
pub mod billing;
pub mod booking;
pub mod hotel;
pub mod maintenance;
pub mod notification;
pub mod user;
pub mod venue;

#[cfg(test)]
mod test;
