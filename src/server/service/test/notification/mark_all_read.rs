use super::*;

/// Tests the bulk read flip for one user.
///
/// Seeds two unread and one already-read notification for the caller plus
/// one unread notification for another user.
///
/// Expected: Ok(2), the caller's inbox fully read, the other user untouched
#[tokio::test]
async fn marks_only_callers_unread_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    factory::notification::create_notification(db, user.id).await?;
    factory::notification::create_notification(db, user.id).await?;
    factory::notification::NotificationFactory::new(db, user.id)
        .is_read(true)
        .build()
        .await?;
    factory::notification::create_notification(db, other.id).await?;

    let service = NotificationService::new(db);
    let updated = service.mark_all_read(user.id).await.unwrap();

    assert_eq!(updated, 2);

    let unread_for_user = entity::prelude::Notification::find()
        .filter(entity::notification::Column::UserId.eq(user.id))
        .filter(entity::notification::Column::IsRead.eq(false))
        .all(db)
        .await?;
    assert!(unread_for_user.is_empty());

    let unread_for_other = entity::prelude::Notification::find()
        .filter(entity::notification::Column::UserId.eq(other.id))
        .filter(entity::notification::Column::IsRead.eq(false))
        .all(db)
        .await?;
    assert_eq!(unread_for_other.len(), 1);

    Ok(())
}

/// Tests the bulk flip on an empty inbox.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_for_empty_inbox() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_notification_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let service = NotificationService::new(db);
    let updated = service.mark_all_read(user.id).await.unwrap();

    assert_eq!(updated, 0);

    Ok(())
}
