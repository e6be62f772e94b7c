use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::venue::VenueRepository, model::venue::UpdateVenueParam};

mod find_visible_by_id;
mod list_visible_by_hotel;
mod update;
