use super::*;

/// Tests the effective visibility rule on the public venue listing.
///
/// A venue is visible only when it is active AND its hotel is verified AND
/// the hotel is not deactivated. Each leg of the conjunction is exercised.
///
/// Expected: Ok with only the fully visible venue
#[tokio::test]
async fn applies_all_three_visibility_flags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let visible = factory::venue::create_venue(db, hotel.id).await?;
    factory::venue::VenueFactory::new(db, hotel.id)
        .is_active(false)
        .build()
        .await?;

    let venues = VenueRepository::new(db).list_visible_by_hotel(hotel.id).await?;
    assert_eq!(venues.len(), 1);
    assert_eq!(venues[0].id, visible.id);

    // Unverified hotel hides its active venues
    let unverified = factory::hotel::HotelFactory::new(db)
        .is_verified(false)
        .build()
        .await?;
    factory::venue::create_venue(db, unverified.id).await?;

    let venues = VenueRepository::new(db)
        .list_visible_by_hotel(unverified.id)
        .await?;
    assert!(venues.is_empty());

    // Deactivated hotel hides its active venues
    let deactivated = factory::hotel::HotelFactory::new(db)
        .is_deactivated(true)
        .build()
        .await?;
    factory::venue::create_venue(db, deactivated.id).await?;

    let venues = VenueRepository::new(db)
        .list_visible_by_hotel(deactivated.id)
        .await?;
    assert!(venues.is_empty());

    Ok(())
}
