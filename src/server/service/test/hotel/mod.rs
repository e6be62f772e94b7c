use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::hotel::SetVerificationParam,
    service::hotel::HotelService,
};

mod set_verification;
