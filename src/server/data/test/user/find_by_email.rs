use super::*;

/// Tests the credential lookup by email.
///
/// Returns the raw entity model since the auth service needs the stored
/// password hash.
///
/// Expected: Ok(Some) with the hash present
#[tokio::test]
async fn returns_entity_with_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .email("asha@example.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("asha@example.com").await?;

    let found = found.unwrap();
    assert_eq!(found.id, created.id);
    assert!(!found.password_hash.is_empty());

    Ok(())
}

/// Tests the lookup for an email that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let found = repo.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
