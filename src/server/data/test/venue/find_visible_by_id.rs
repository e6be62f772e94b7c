use super::*;

/// Tests fetching an effectively visible venue.
///
/// Expected: Ok(Some) for an active venue under a visible hotel
#[tokio::test]
async fn returns_visible_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let venue = factory::venue::create_venue(db, hotel.id).await?;

    let repo = VenueRepository::new(db);
    let found = repo.find_visible_by_id(venue.id).await?;

    assert_eq!(found.unwrap().id, venue.id);

    Ok(())
}

/// Tests that an active venue under a hidden hotel is not visible.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_hotel_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .is_deactivated(true)
        .build()
        .await?;
    let venue = factory::venue::create_venue(db, hotel.id).await?;

    let repo = VenueRepository::new(db);
    let found = repo.find_visible_by_id(venue.id).await?;

    assert!(found.is_none());

    Ok(())
}
