use super::*;

/// Tests the bulk fixer over a mixed data set.
///
/// After the fixer runs, every hotel must be verified and not deactivated
/// and every venue active, regardless of prior state.
///
/// Expected: Ok with no unverified hotels or inactive venues remaining
#[tokio::test]
async fn makes_every_hotel_and_venue_visible() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let broken = factory::hotel::HotelFactory::new(db)
        .is_verified(false)
        .is_deactivated(true)
        .build()
        .await?;
    let healthy = factory::hotel::create_hotel(db).await?;

    factory::venue::VenueFactory::new(db, broken.id)
        .is_active(false)
        .build()
        .await?;
    factory::venue::create_venue(db, healthy.id).await?;

    let service = MaintenanceService::new(db);
    let report = service.fix_venues().await.unwrap();

    assert_eq!(report.hotels_updated, 2);
    assert_eq!(report.venues_updated, 2);

    let hidden_hotels = entity::prelude::Hotel::find()
        .filter(
            Condition::any()
                .add(entity::hotel::Column::IsVerified.eq(false))
                .add(entity::hotel::Column::IsDeactivated.eq(true)),
        )
        .all(db)
        .await?;
    assert!(hidden_hotels.is_empty());

    let inactive_venues = entity::prelude::Venue::find()
        .filter(entity::venue::Column::IsActive.eq(false))
        .all(db)
        .await?;
    assert!(inactive_venues.is_empty());

    Ok(())
}

/// Tests that running the fixer twice yields the same end state.
///
/// Expected: Ok with the report clean after both runs
#[tokio::test]
async fn is_idempotent_in_effect() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .is_verified(false)
        .build()
        .await?;
    factory::venue::VenueFactory::new(db, hotel.id)
        .is_active(false)
        .build()
        .await?;

    let service = MaintenanceService::new(db);
    service.fix_venues().await.unwrap();
    service.fix_venues().await.unwrap();

    let report = service.check_venues().await.unwrap();
    assert!(report.is_clean());

    Ok(())
}
