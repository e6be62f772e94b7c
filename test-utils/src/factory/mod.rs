//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` struct for customization plus a `create_*`
//! shorthand for quick default creation. Factories insert rows directly and
//! handle timestamps, so tests only spell out what they care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let hotel = factory::hotel::create_hotel(&db).await?;
//!
//!     // Create with the full dependency chain
//!     let (hotel, owner, venue, customer) =
//!         factory::helpers::create_booking_context(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod booking;
pub mod helpers;
pub mod hotel;
pub mod notification;
pub mod user;
pub mod venue;
