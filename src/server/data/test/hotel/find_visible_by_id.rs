use super::*;

/// Tests fetching a visible hotel by ID.
///
/// Expected: Ok(Some) for a verified, non-deactivated hotel
#[tokio::test]
async fn returns_visible_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;

    let repo = HotelRepository::new(db);
    let found = repo.find_visible_by_id(hotel.id).await?;

    assert_eq!(found.unwrap().id, hotel.id);

    Ok(())
}

/// Tests that a hidden hotel is indistinguishable from a missing one.
///
/// Expected: Ok(None) for an unverified hotel
#[tokio::test]
async fn returns_none_for_hidden_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::HotelFactory::new(db)
        .is_verified(false)
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let found = repo.find_visible_by_id(hotel.id).await?;

    assert!(found.is_none());

    Ok(())
}
