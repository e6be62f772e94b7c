use super::*;

/// Tests the five-way aggregation over a hotel's bookings.
///
/// Seeds one completed booking (100/10/5) and one confirmed booking
/// (50/5/2). The all-time figures cover both, completed revenue only the
/// first, pending revenue only the second.
///
/// Expected: Ok with 150/15/7 all-time and 100/50 by status
#[tokio::test]
async fn sums_amounts_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, _owner, venue, customer) = factory::helpers::create_booking_context(db).await?;

    factory::booking::BookingFactory::new(db, hotel.id, venue.id, customer.id)
        .total_amount(Decimal::from(100))
        .vat(Decimal::from(10))
        .service_charge(Decimal::from(5))
        .status(entity::booking::BookingStatus::Completed)
        .build()
        .await?;

    factory::booking::BookingFactory::new(db, hotel.id, venue.id, customer.id)
        .total_amount(Decimal::from(50))
        .vat(Decimal::from(5))
        .service_charge(Decimal::from(2))
        .status(entity::booking::BookingStatus::Confirmed)
        .build()
        .await?;

    let service = BillingService::new(db);
    let summary = service.get_summary(hotel.id).await.unwrap();

    assert_eq!(summary.all_time_revenue, 150.0);
    assert_eq!(summary.all_time_vat, 15.0);
    assert_eq!(summary.all_time_service_charge, 7.0);
    assert_eq!(summary.completed_revenue, 100.0);
    assert_eq!(summary.pending_revenue, 50.0);

    Ok(())
}

/// Tests the summary for a hotel without bookings.
///
/// Expected: Ok with every aggregate equal to zero
#[tokio::test]
async fn returns_zeros_for_no_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;

    let service = BillingService::new(db);
    let summary = service.get_summary(hotel.id).await.unwrap();

    assert_eq!(summary.all_time_revenue, 0.0);
    assert_eq!(summary.all_time_vat, 0.0);
    assert_eq!(summary.all_time_service_charge, 0.0);
    assert_eq!(summary.completed_revenue, 0.0);
    assert_eq!(summary.pending_revenue, 0.0);

    Ok(())
}

/// Tests that the summary is scoped to one hotel.
///
/// Another hotel's booking must not leak into the caller's aggregates.
///
/// Expected: Ok with only the caller's booking counted
#[tokio::test]
async fn ignores_other_hotels_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (hotel, _owner, venue, customer) = factory::helpers::create_booking_context(db).await?;
    let (other_hotel, _, other_venue, other_customer) =
        factory::helpers::create_booking_context(db).await?;

    factory::booking::BookingFactory::new(db, hotel.id, venue.id, customer.id)
        .total_amount(Decimal::from(80))
        .status(entity::booking::BookingStatus::Completed)
        .build()
        .await?;

    factory::booking::BookingFactory::new(db, other_hotel.id, other_venue.id, other_customer.id)
        .total_amount(Decimal::from(999))
        .status(entity::booking::BookingStatus::Completed)
        .build()
        .await?;

    let service = BillingService::new(db);
    let summary = service.get_summary(hotel.id).await.unwrap();

    assert_eq!(summary.all_time_revenue, 80.0);
    assert_eq!(summary.completed_revenue, 80.0);

    Ok(())
}
