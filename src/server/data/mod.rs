//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in
//! the application. Repositories use SeaORM entity models internally and
//! return domain models to keep the data layer separated from business
//! logic. All queries, inserts, and updates go through these repositories.

pub mod booking;
pub mod hotel;
pub mod notification;
pub mod user;
pub mod venue;

#[cfg(test)]
mod test;
