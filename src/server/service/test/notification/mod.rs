use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{error::AppError, service::notification::NotificationService};

mod mark_all_read;
mod mark_read;
