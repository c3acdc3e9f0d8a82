//! Document queries.

use async_trait::async_trait;
use sea_orm::ColumnTrait;

use common::AppResult;
use domain::Document;

use super::base::{Repository, SeaRepository};
use super::entities::document::{Column, Entity};

#[async_trait]
pub trait DocumentRepository: Repository<Document> {
    async fn get_by_category(&self, category: &str) -> AppResult<Vec<Document>>;
}

#[async_trait]
impl<'ctx> DocumentRepository for SeaRepository<'ctx, Entity> {
    async fn get_by_category(&self, category: &str) -> AppResult<Vec<Document>> {
        self.filter_all(Column::Category.eq(category)).await
    }
}
