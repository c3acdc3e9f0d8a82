//! Receipt queries.

use async_trait::async_trait;
use sea_orm::ColumnTrait;
use uuid::Uuid;

use common::AppResult;
use domain::Receipt;

use super::base::{Repository, SeaRepository};
use super::entities::receipt::{Column, Entity};

#[async_trait]
pub trait ReceiptRepository: Repository<Receipt> {
    async fn get_by_number(&self, receipt_number: &str) -> AppResult<Option<Receipt>>;

    async fn get_by_payment(&self, payment_id: Uuid) -> AppResult<Vec<Receipt>>;
}

#[async_trait]
impl<'ctx> ReceiptRepository for SeaRepository<'ctx, Entity> {
    async fn get_by_number(&self, receipt_number: &str) -> AppResult<Option<Receipt>> {
        self.filter_one(Column::ReceiptNumber.eq(receipt_number)).await
    }

    async fn get_by_payment(&self, payment_id: Uuid) -> AppResult<Vec<Receipt>> {
        self.filter_all(Column::PaymentId.eq(payment_id)).await
    }
}
