use super::*;

/// Tests signing in with the password used at sign-up.
///
/// Expected: Ok with the same user
#[tokio::test]
async fn accepts_valid_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let created = service
        .sign_up(SignUpParam {
            email: "asha@example.com".to_string(),
            name: "Asha Gurung".to_string(),
            password: "correct horse battery".to_string(),
            role: Role::Customer,
            hotel_id: None,
        })
        .await
        .unwrap();

    let user = service
        .sign_in(SignInParam {
            email: "asha@example.com".to_string(),
            password: "correct horse battery".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(user.id, created.id);

    Ok(())
}

/// Tests signing in with a wrong password.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    service
        .sign_up(SignUpParam {
            email: "asha@example.com".to_string(),
            name: "Asha Gurung".to_string(),
            password: "correct horse battery".to_string(),
            role: Role::Customer,
            hotel_id: None,
        })
        .await
        .unwrap();

    let result = service
        .sign_in(SignInParam {
            email: "asha@example.com".to_string(),
            password: "wrong password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests signing in with an email that was never registered.
///
/// The error is the same as for a wrong password so the response does not
/// reveal which field failed.
///
/// Expected: Err(InvalidCredentials)
#[tokio::test]
async fn rejects_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AuthService::new(db);
    let result = service
        .sign_in(SignInParam {
            email: "nobody@example.com".to_string(),
            password: "whatever password".to_string(),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
