use super::*;

fn sign_up_param(email: &str) -> SignUpParam {
    SignUpParam {
        email: email.to_string(),
        name: "Asha Gurung".to_string(),
        password: "correct horse battery".to_string(),
        role: Role::Customer,
        hotel_id: None,
    }
}

/// Tests account creation with valid input.
///
/// Expected: Ok with the stored role and no plaintext password kept
#[tokio::test]
async fn creates_customer_account() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let user = service
        .sign_up(sign_up_param("asha@example.com"))
        .await
        .unwrap();

    assert_eq!(user.email, "asha@example.com");
    assert_eq!(user.role, Role::Customer);
    assert_eq!(user.hotel_id, None);

    Ok(())
}

/// Tests that a duplicate email is rejected.
///
/// Expected: Err(BadRequest) on the second sign-up
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .sign_up(sign_up_param("asha@example.com"))
        .await
        .unwrap();

    let result = service.sign_up(sign_up_param("asha@example.com")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests input validation for malformed email and short password.
///
/// Expected: Err(BadRequest) for both
#[tokio::test]
async fn rejects_invalid_input() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);

    let mut param = sign_up_param("not-an-email");
    let result = service.sign_up(param.clone()).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    param.email = "asha@example.com".to_string();
    param.password = "short".to_string();
    let result = service.sign_up(param).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
