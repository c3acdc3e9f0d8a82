//! Expense queries.

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

use common::AppResult;
use domain::{BillingMonth, Expense};

use super::base::{Repository, SeaRepository};
use super::entities::expense::{Column, Entity};

/// Expense repository: lookups by date and category
#[async_trait]
pub trait ExpenseRepository: Repository<Expense> {
    /// Expenses dated within `[from, to]`, oldest first
    async fn get_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Expense>>;

    /// Expenses dated within a billing month
    async fn get_by_month(&self, month: &BillingMonth) -> AppResult<Vec<Expense>>;

    async fn get_by_category(&self, category: &str) -> AppResult<Vec<Expense>>;
}

#[async_trait]
impl<'ctx> ExpenseRepository for SeaRepository<'ctx, Entity> {
    async fn get_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> AppResult<Vec<Expense>> {
        self.fetch_all(
            Entity::find()
                .filter(Column::ExpenseDate.between(from, to))
                .order_by_asc(Column::ExpenseDate),
        )
        .await
    }

    async fn get_by_month(&self, month: &BillingMonth) -> AppResult<Vec<Expense>> {
        self.get_by_date_range(month.first_day(), month.last_day())
            .await
    }

    async fn get_by_category(&self, category: &str) -> AppResult<Vec<Expense>> {
        self.filter_all(Column::Category.eq(category)).await
    }
}
