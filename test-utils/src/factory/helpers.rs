//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets unique identifying fields
/// (emails, names) to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a hotel together with its owner, one venue, and a customer.
///
/// Covers the common setup for booking and billing tests:
/// 1. Hotel (verified, not deactivated)
/// 2. Owner user assigned to the hotel
/// 3. Active venue belonging to the hotel
/// 4. Customer user with no hotel
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((hotel, owner, venue, customer))` - Created entities
/// - `Err(DbErr)` - Database error during any insert
pub async fn create_booking_context(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::hotel::Model,
        entity::user::Model,
        entity::venue::Model,
        entity::user::Model,
    ),
    DbErr,
> {
    let hotel = factory::hotel::create_hotel(db).await?;
    let owner = factory::user::UserFactory::new(db)
        .role(entity::user::Role::Owner)
        .hotel_id(Some(hotel.id))
        .build()
        .await?;
    let venue = factory::venue::create_venue(db, hotel.id).await?;
    let customer = factory::user::create_user(db).await?;

    Ok((hotel, owner, venue, customer))
}
