//! Backup queries.

use async_trait::async_trait;
use sea_orm::{EntityTrait, QueryOrder};

use common::AppResult;
use domain::Backup;

use super::base::{Repository, SeaRepository};
use super::entities::backup::{Column, Entity};

#[async_trait]
pub trait BackupRepository: Repository<Backup> {
    /// Most recent backup, whatever its status
    async fn get_latest(&self) -> AppResult<Option<Backup>>;
}

#[async_trait]
impl<'ctx> BackupRepository for SeaRepository<'ctx, Entity> {
    async fn get_latest(&self) -> AppResult<Option<Backup>> {
        self.fetch_one(Entity::find().order_by_desc(Column::CreatedAt))
            .await
    }
}
