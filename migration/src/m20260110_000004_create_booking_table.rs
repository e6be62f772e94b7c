use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_hotel_table::Hotel, m20260110_000002_create_user_table::User,
    m20260110_000003_create_venue_table::Venue,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::HotelId))
                    .col(integer(Booking::VenueId))
                    .col(integer(Booking::UserId))
                    .col(decimal(Booking::TotalAmount))
                    .col(decimal(Booking::Vat))
                    .col(decimal(Booking::ServiceCharge))
                    .col(string_len(Booking::Status, 16))
                    .col(timestamp_with_time_zone(Booking::StartsAt))
                    .col(timestamp_with_time_zone(Booking::EndsAt))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_hotel_id")
                            .from(Booking::Table, Booking::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_venue_id")
                            .from(Booking::Table, Booking::VenueId)
                            .to(Venue::Table, Venue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_user_id")
                            .from(Booking::Table, Booking::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    HotelId,
    VenueId,
    UserId,
    TotalAmount,
    Vat,
    ServiceCharge,
    Status,
    StartsAt,
    EndsAt,
    CreatedAt,
}
