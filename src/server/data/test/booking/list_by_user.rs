use super::*;

/// Tests that a user's bookings come back newest first.
///
/// Expected: Ok with descending creation order
#[tokio::test]
async fn returns_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, _owner, venue, customer) = factory::helpers::create_booking_context(db).await?;

    let base = Utc::now();
    let mut ids = Vec::new();
    for i in 0..3 {
        let booking = factory::booking::BookingFactory::new(db, hotel.id, venue.id, customer.id)
            .created_at(base + Duration::minutes(i))
            .build()
            .await?;
        ids.push(booking.id);
    }

    let repo = BookingRepository::new(db);
    let bookings = repo.list_by_user(customer.id).await?;

    assert_eq!(bookings.len(), 3);
    assert_eq!(bookings[0].id, ids[2]);
    assert_eq!(bookings[2].id, ids[0]);

    Ok(())
}

/// Tests that other customers' bookings are excluded.
///
/// Expected: Ok with only the caller's booking
#[tokio::test]
async fn excludes_other_users_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, _owner, venue, customer) = factory::helpers::create_booking_context(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::booking::create_booking(db, hotel.id, venue.id, customer.id).await?;
    factory::booking::create_booking(db, hotel.id, venue.id, other.id).await?;

    let repo = BookingRepository::new(db);
    let bookings = repo.list_by_user(customer.id).await?;

    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].user_id, customer.id);

    Ok(())
}
