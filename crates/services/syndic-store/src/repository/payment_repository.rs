//! Payment queries.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition};
use uuid::Uuid;

use common::AppResult;
use domain::{BillingMonth, Payment, PaymentStatus};

use super::base::{Repository, SeaRepository};
use super::entities::payment::{Column, Entity};

/// Payment repository: lookups by month, house and status
#[async_trait]
pub trait PaymentRepository: Repository<Payment> {
    async fn get_by_month(&self, month: &BillingMonth) -> AppResult<Vec<Payment>>;

    async fn get_by_house(&self, house_id: Uuid) -> AppResult<Vec<Payment>>;

    async fn get_by_status(&self, status: PaymentStatus) -> AppResult<Vec<Payment>>;

    /// The payment of one house for one month, if any
    async fn get_by_house_and_month(
        &self,
        house_id: Uuid,
        month: &BillingMonth,
    ) -> AppResult<Option<Payment>>;
}

#[async_trait]
impl<'ctx> PaymentRepository for SeaRepository<'ctx, Entity> {
    async fn get_by_month(&self, month: &BillingMonth) -> AppResult<Vec<Payment>> {
        self.filter_all(Column::Month.eq(month.as_str())).await
    }

    async fn get_by_house(&self, house_id: Uuid) -> AppResult<Vec<Payment>> {
        self.filter_all(Column::HouseId.eq(house_id)).await
    }

    async fn get_by_status(&self, status: PaymentStatus) -> AppResult<Vec<Payment>> {
        self.filter_all(Column::Status.eq(status.as_str())).await
    }

    async fn get_by_house_and_month(
        &self,
        house_id: Uuid,
        month: &BillingMonth,
    ) -> AppResult<Option<Payment>> {
        self.filter_one(
            Condition::all()
                .add(Column::HouseId.eq(house_id))
                .add(Column::Month.eq(month.as_str())),
        )
        .await
    }
}
