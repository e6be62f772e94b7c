use super::*;

/// Tests confirming a booking of the owner's hotel.
///
/// Expected: Ok with the new status persisted
#[tokio::test]
async fn updates_status_for_own_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, _owner, venue, customer) = factory::helpers::create_booking_context(db).await?;
    let booking = factory::booking::create_booking(db, hotel.id, venue.id, customer.id).await?;

    let service = BookingService::new(db);
    let updated = service
        .update_status(
            booking.id,
            hotel.id,
            entity::booking::BookingStatus::Confirmed,
        )
        .await
        .unwrap();

    assert_eq!(updated.status, entity::booking::BookingStatus::Confirmed);

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, entity::booking::BookingStatus::Confirmed);

    Ok(())
}

/// Tests that a booking of another hotel cannot be touched.
///
/// Expected: Err(NotFound) and the status unchanged
#[tokio::test]
async fn rejects_other_hotels_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .with_table(entity::prelude::Notification)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, _owner, venue, customer) = factory::helpers::create_booking_context(db).await?;
    let (other_hotel, _, _, _) = factory::helpers::create_booking_context(db).await?;
    let booking = factory::booking::create_booking(db, hotel.id, venue.id, customer.id).await?;

    let service = BookingService::new(db);
    let result = service
        .update_status(
            booking.id,
            other_hotel.id,
            entity::booking::BookingStatus::Cancelled,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let stored = entity::prelude::Booking::find_by_id(booking.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.status, entity::booking::BookingStatus::Pending);

    Ok(())
}
