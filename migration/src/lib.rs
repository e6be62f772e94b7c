pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_hotel_table;
mod m20260110_000002_create_user_table;
mod m20260110_000003_create_venue_table;
mod m20260110_000004_create_booking_table;
mod m20260110_000005_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_hotel_table::Migration),
            Box::new(m20260110_000002_create_user_table::Migration),
            Box::new(m20260110_000003_create_venue_table::Migration),
            Box::new(m20260110_000004_create_booking_table::Migration),
            Box::new(m20260110_000005_create_notification_table::Migration),
        ]
    }
}
