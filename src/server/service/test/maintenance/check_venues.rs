use super::*;

/// Tests the read-only report over a mixed data set.
///
/// Seeds one unverified hotel, one deactivated hotel, one healthy hotel
/// and one inactive venue.
///
/// Expected: Ok with counts 1/1/1 and nothing modified
#[tokio::test]
async fn counts_hotels_and_venues_needing_fixes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let healthy = factory::hotel::create_hotel(db).await?;
    let unverified = factory::hotel::HotelFactory::new(db)
        .is_verified(false)
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .is_deactivated(true)
        .build()
        .await?;

    factory::venue::create_venue(db, healthy.id).await?;
    factory::venue::VenueFactory::new(db, healthy.id)
        .is_active(false)
        .build()
        .await?;

    let service = MaintenanceService::new(db);
    let report = service.check_venues().await.unwrap();

    assert_eq!(report.unverified_hotels, 1);
    assert_eq!(report.deactivated_hotels, 1);
    assert_eq!(report.inactive_venues, 1);
    assert!(!report.is_clean());

    // Read-only: the unverified hotel is untouched
    let hotel = entity::prelude::Hotel::find_by_id(unverified.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!hotel.is_verified);

    Ok(())
}

/// Tests the report over an already-clean data set.
///
/// Expected: Ok with all counts zero
#[tokio::test]
async fn reports_clean_for_healthy_data() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    factory::venue::create_venue(db, hotel.id).await?;

    let service = MaintenanceService::new(db);
    let report = service.check_venues().await.unwrap();

    assert!(report.is_clean());

    Ok(())
}
