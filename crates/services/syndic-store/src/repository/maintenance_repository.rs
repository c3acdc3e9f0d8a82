//! Maintenance queries.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use common::AppResult;
use domain::{Maintenance, MaintenanceStatus};

use super::base::{Repository, SeaRepository};
use super::entities::maintenance::{Column, Entity};

/// Maintenance repository: lookups by status, schedule and house
#[async_trait]
pub trait MaintenanceRepository: Repository<Maintenance> {
    async fn get_by_status(&self, status: MaintenanceStatus) -> AppResult<Vec<Maintenance>>;

    /// Tasks scheduled within `[from, to]`, earliest first
    async fn get_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<Maintenance>>;

    async fn get_by_house(&self, house_id: Uuid) -> AppResult<Vec<Maintenance>>;
}

#[async_trait]
impl<'ctx> MaintenanceRepository for SeaRepository<'ctx, Entity> {
    async fn get_by_status(&self, status: MaintenanceStatus) -> AppResult<Vec<Maintenance>> {
        self.filter_all(Column::Status.eq(status.as_str())).await
    }

    async fn get_by_date_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<Maintenance>> {
        self.fetch_all(
            Entity::find()
                .filter(Column::ScheduledDate.between(from, to))
                .order_by_asc(Column::ScheduledDate),
        )
        .await
    }

    async fn get_by_house(&self, house_id: Uuid) -> AppResult<Vec<Maintenance>> {
        self.filter_all(Column::HouseId.eq(house_id)).await
    }
}
