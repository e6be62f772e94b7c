use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{model::user::GetAllUsersParam, service::user::UserService};

mod get_all_users;
