use entity::user::Role;
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::{SignInParam, SignUpParam},
    service::auth::AuthService,
};

mod sign_in;
mod sign_up;
