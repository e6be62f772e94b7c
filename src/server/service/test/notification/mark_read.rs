use super::*;

/// Tests marking one of the caller's notifications read.
///
/// Expected: Ok and the row flipped to read
#[tokio::test]
async fn marks_own_notification_read() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, user.id).await?;

    let service = NotificationService::new(db);
    service.mark_read(notification.id, user.id).await.unwrap();

    let stored = entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.is_read);

    Ok(())
}

/// Tests that another user's notification cannot be marked read.
///
/// The caller gets a not-found error and the row stays unread, so the
/// endpoint does not reveal whether the notification exists.
///
/// Expected: Err(NotFound) and the row unchanged
#[tokio::test]
async fn rejects_other_users_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let intruder = factory::user::create_user(db).await?;
    let notification = factory::notification::create_notification(db, owner.id).await?;

    let service = NotificationService::new(db);
    let result = service.mark_read(notification.id, intruder.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    let stored = entity::prelude::Notification::find_by_id(notification.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.is_read);

    Ok(())
}

/// Tests marking a notification that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn rejects_missing_notification() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = NotificationService::new(db);
    let result = service.mark_read(999, user.id).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
