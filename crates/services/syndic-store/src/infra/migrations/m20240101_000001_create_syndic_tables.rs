//! Migration: Create the syndic tables.
//!
//! Tables are derived from the SeaORM entities so the schema always
//! matches the models. Parents are created before their children.

use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{EntityTrait, Schema};

use crate::repository::entities::{
    audit_log, backup, document, expense, house, maintenance, notification, payment, receipt,
    user,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

async fn create_table_of<E: EntityTrait>(
    manager: &SchemaManager<'_>,
    entity: E,
) -> Result<(), DbErr> {
    let schema = Schema::new(manager.get_database_backend());
    manager
        .create_table(schema.create_table_from_entity(entity))
        .await
}

async fn drop_table_of<E: EntityTrait>(
    manager: &SchemaManager<'_>,
    entity: E,
) -> Result<(), DbErr> {
    manager
        .drop_table(Table::drop().table(entity).if_exists().to_owned())
        .await
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_table_of(manager, house::Entity).await?;
        create_table_of(manager, user::Entity).await?;
        create_table_of(manager, payment::Entity).await?;
        create_table_of(manager, receipt::Entity).await?;
        create_table_of(manager, document::Entity).await?;
        create_table_of(manager, expense::Entity).await?;
        create_table_of(manager, maintenance::Entity).await?;
        create_table_of(manager, audit_log::Entity).await?;
        create_table_of(manager, backup::Entity).await?;
        create_table_of(manager, notification::Entity).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        drop_table_of(manager, notification::Entity).await?;
        drop_table_of(manager, backup::Entity).await?;
        drop_table_of(manager, audit_log::Entity).await?;
        drop_table_of(manager, maintenance::Entity).await?;
        drop_table_of(manager, expense::Entity).await?;
        drop_table_of(manager, document::Entity).await?;
        drop_table_of(manager, receipt::Entity).await?;
        drop_table_of(manager, payment::Entity).await?;
        drop_table_of(manager, user::Entity).await?;
        drop_table_of(manager, house::Entity).await
    }
}
