use super::*;

/// Tests that a zero per_page is clamped to one instead of dividing the
/// page count by zero.
///
/// Expected: Ok with per_page one and one page per user
#[tokio::test]
async fn clamps_zero_per_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..3 {
        factory::user::create_user(db).await?;
    }

    let service = UserService::new(db);
    let page = service
        .get_all_users(GetAllUsersParam { page: 0, per_page: 0 })
        .await
        .unwrap();

    assert_eq!(page.per_page, 1);
    assert_eq!(page.users.len(), 1);
    assert_eq!(page.total, 3);
    assert_eq!(page.total_pages, 3);

    Ok(())
}

/// Tests page math for a per_page that does not divide the total evenly.
///
/// Expected: Ok with the remainder rounding up to an extra page
#[tokio::test]
async fn rounds_total_pages_up() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for _ in 0..5 {
        factory::user::create_user(db).await?;
    }

    let service = UserService::new(db);
    let page = service
        .get_all_users(GetAllUsersParam { page: 0, per_page: 2 })
        .await
        .unwrap();

    assert_eq!(page.total_pages, 3);

    Ok(())
}
