use super::*;

/// Tests the public hotel listing visibility rule.
///
/// Unverified and deactivated hotels must be hidden.
///
/// Expected: Ok with only the verified, non-deactivated hotel
#[tokio::test]
async fn hides_unverified_and_deactivated_hotels() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let visible = factory::hotel::create_hotel(db).await?;
    factory::hotel::HotelFactory::new(db)
        .is_verified(false)
        .build()
        .await?;
    factory::hotel::HotelFactory::new(db)
        .is_deactivated(true)
        .build()
        .await?;

    let repo = HotelRepository::new(db);
    let hotels = repo.list_visible().await?;

    assert_eq!(hotels.len(), 1);
    assert_eq!(hotels[0].id, visible.id);

    Ok(())
}

/// Tests that the listing is ordered by name.
///
/// Expected: Ok with names in ascending order
#[tokio::test]
async fn orders_hotels_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::hotel::HotelFactory::new(db).name("Yak Palace").build().await?;
    factory::hotel::HotelFactory::new(db).name("Annapurna View").build().await?;

    let repo = HotelRepository::new(db);
    let hotels = repo.list_visible().await?;

    assert_eq!(hotels[0].name, "Annapurna View");
    assert_eq!(hotels[1].name, "Yak Palace");

    Ok(())
}
