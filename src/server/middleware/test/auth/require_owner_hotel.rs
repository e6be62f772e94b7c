use super::*;

/// Tests resolving an owner together with their hotel.
///
/// Expected: Ok((User, hotel_id))
#[tokio::test]
async fn returns_owner_and_hotel() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let hotel = factory::hotel::create_hotel(db).await?;
    let owner = factory::user::create_owner(db, hotel.id).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(owner.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let (user, hotel_id) = auth_guard.require_owner_hotel().await?;

    assert_eq!(user.id, owner.id);
    assert_eq!(hotel_id, hotel.id);

    Ok(())
}

/// Tests an owner account with no hotel assigned.
///
/// The failure happens inside the guard, before any tenant-scoped query
/// could run.
///
/// Expected: Err(AuthError::NoHotelAssigned)
#[tokio::test]
async fn denies_owner_without_hotel() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let owner = factory::user::UserFactory::new(db)
        .role(Role::Owner)
        .hotel_id(None)
        .build()
        .await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(owner.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require_owner_hotel().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NoHotelAssigned(_)))
    ));

    Ok(())
}

/// Tests that a customer never reaches the hotel resolution.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_customer() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Hotel)
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::create_user(db).await?;

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(user.id).await?;

    let auth_guard = AuthGuard::new(db, session);
    let result = auth_guard.require_owner_hotel().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
