//! Syndic Store Library
//!
//! Persistence for the syndic back end: SeaORM entities, migrations, the
//! generic repository contract and the unit of work that flushes it.

pub mod config;
pub mod infra;
pub mod repository;

use sea_orm::DbErr;
use tracing::info;

use crate::config::StoreConfig;
use crate::infra::Database;

pub use crate::repository::{DbContext, Repository, SeaRepository};

/// Open the store.
///
/// Pending migrations are applied when `auto_migrate` is set.
pub async fn connect(config: &StoreConfig) -> Result<Database, DbErr> {
    if config.auto_migrate {
        Database::connect(&config.database).await
    } else {
        Database::connect_without_migrations(&config.database).await
    }
}

/// Apply a migration action, then report every migration with its status.
pub async fn run_migrations(
    config: &StoreConfig,
    action: MigrateAction,
) -> Result<Vec<(String, bool)>, DbErr> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => db.run_migrations().await?,
        MigrateAction::Down => db.rollback_migration().await?,
        MigrateAction::Fresh => db.fresh_migrations().await?,
        MigrateAction::Status => {}
    }
    info!(?action, "Migration command finished");

    db.migration_status().await
}

/// Check that the store answers.
pub async fn check_connection(config: &StoreConfig) -> Result<(), DbErr> {
    let db = Database::connect_without_migrations(&config.database).await?;
    db.ping().await?;
    info!("Store is reachable");
    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    /// Apply pending migrations
    Up,
    /// Roll back the last migration
    Down,
    /// Report only
    Status,
    /// Drop everything and reapply
    Fresh,
}
