use super::*;

/// Tests the partial update semantics.
///
/// Expected: Ok with capacity changed and name preserved
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let venue = factory::venue::VenueFactory::new(db, hotel.id)
        .name("Garden Hall")
        .capacity(120)
        .build()
        .await?;

    let repo = VenueRepository::new(db);
    let updated = repo
        .update(
            venue.id,
            UpdateVenueParam {
                name: None,
                capacity: Some(200),
                is_active: Some(false),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Garden Hall");
    assert_eq!(updated.capacity, 200);
    assert!(!updated.is_active);

    Ok(())
}

/// Tests updating a venue that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_venue() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::Venue)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = VenueRepository::new(db);
    let updated = repo
        .update(
            999,
            UpdateVenueParam {
                name: None,
                capacity: None,
                is_active: Some(true),
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
