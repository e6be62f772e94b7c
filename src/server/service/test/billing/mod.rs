use rust_decimal::Decimal;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::service::billing::BillingService;

mod get_summary;
