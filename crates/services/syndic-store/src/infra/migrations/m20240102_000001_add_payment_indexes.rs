//! Migration: Index payments by month and status.
//!
//! The unpaid notifier filters on both columns every day.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const INDEX_NAME: &str = "idx_payments_month_status";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name(INDEX_NAME)
                    .table(Payments::Table)
                    .col(Payments::Month)
                    .col(Payments::Status)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(INDEX_NAME)
                    .table(Payments::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Payments {
    Table,
    Month,
    Status,
}
