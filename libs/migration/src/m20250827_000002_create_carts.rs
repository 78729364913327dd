use crate::Storefront;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table((Storefront::Schema, Carts::Table))
                    .if_not_exists()
                    .col(string_len(Carts::UserId, 50).primary_key())
                    .col(
                        timestamp_with_time_zone(Carts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Carts::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Items live and die with their cart.
        manager
            .create_table(
                Table::create()
                    .table((Storefront::Schema, CartItems::Table))
                    .if_not_exists()
                    .col(string_len(CartItems::UserId, 50))
                    .col(integer(CartItems::ProductId))
                    .col(string_len(CartItems::ProductName, 100))
                    .col(decimal_len(CartItems::UnitPrice, 18, 2))
                    .col(integer(CartItems::Quantity))
                    .col(
                        timestamp_with_time_zone(CartItems::AddedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_cart_items")
                            .col(CartItems::UserId)
                            .col(CartItems::ProductId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_items_carts_user_id")
                            .from((Storefront::Schema, CartItems::Table), CartItems::UserId)
                            .to((Storefront::Schema, Carts::Table), Carts::UserId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cart_items_product_id")
                    .table((Storefront::Schema, CartItems::Table))
                    .col(CartItems::ProductId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table((Storefront::Schema, CartItems::Table))
                    .if_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(
                Table::drop()
                    .table((Storefront::Schema, Carts::Table))
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum Carts {
    Table,
    UserId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CartItems {
    Table,
    UserId,
    ProductId,
    ProductName,
    UnitPrice,
    Quantity,
    AddedAt,
}
