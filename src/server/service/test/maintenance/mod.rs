use sea_orm::{ColumnTrait, Condition, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

use crate::server::service::maintenance::MaintenanceService;

mod check_venues;
mod fix_venues;
