//! House queries.

use async_trait::async_trait;
use sea_orm::ColumnTrait;

use common::AppResult;
use domain::House;

use super::base::{Repository, SeaRepository};
use super::entities::house::{Column, Entity};

/// House repository: lookups by code and activity
#[async_trait]
pub trait HouseRepository: Repository<House> {
    /// Find a house by its unique code
    async fn get_by_code(&self, code: &str) -> AppResult<Option<House>>;

    /// Houses still managed by the syndic
    async fn get_active(&self) -> AppResult<Vec<House>>;
}

#[async_trait]
impl<'ctx> HouseRepository for SeaRepository<'ctx, Entity> {
    async fn get_by_code(&self, code: &str) -> AppResult<Option<House>> {
        self.filter_one(Column::Code.eq(code)).await
    }

    async fn get_active(&self) -> AppResult<Vec<House>> {
        self.filter_all(Column::IsActive.eq(true)).await
    }
}
