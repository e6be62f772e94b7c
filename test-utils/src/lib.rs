//! Venuebook Test Utils
//!
//! Shared testing utilities for the venuebook workspace. Provides a builder
//! for spinning up in-memory SQLite databases with a chosen subset of the
//! schema, a test context that can also hand out a session instance, and
//! factories for inserting entities with sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let hotel = factory::hotel::create_hotel(db).await?;
//!     let venue = factory::venue::create_venue(db, hotel.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
