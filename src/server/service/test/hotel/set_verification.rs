use super::*;

/// Tests flipping a hotel's verification and deactivation flags.
///
/// Expected: Ok with the new flags on the returned hotel and the stored row
#[tokio::test]
async fn flips_verification_flags() -> Result<(), DbErr> {
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

    let service = HotelService::new(db);
    let updated = service
        .set_verification(SetVerificationParam {
            hotel_id: hotel.id,
            is_verified: true,
            is_deactivated: true,
        })
        .await
        .unwrap();

    assert!(updated.is_verified);
    assert!(updated.is_deactivated);

    let stored = entity::prelude::Hotel::find_by_id(hotel.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_verified);
    assert!(stored.is_deactivated);

    Ok(())
}

/// Tests setting flags on a hotel that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_missing_hotel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = HotelService::new(db);
    let result = service
        .set_verification(SetVerificationParam {
            hotel_id: 999,
            is_verified: true,
            is_deactivated: false,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
