use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::hotel::HotelRepository, model::hotel::UpdateHotelParam};

mod find_visible_by_id;
mod list_visible;
