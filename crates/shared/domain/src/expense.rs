//! Expense domain entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_EXPENSE;
use crate::entity::impl_base_entity;

/// Money spent on behalf of the condominium
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Expense {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Amount in cents
    #[validate(range(min = 0, message = "Amount cannot be negative"))]
    pub amount_cents: i64,
    pub category: String,
    pub expense_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(Expense, ENTITY_EXPENSE);

impl Expense {
    pub fn new(
        description: impl Into<String>,
        amount_cents: i64,
        category: impl Into<String>,
        expense_date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            description: description.into(),
            amount_cents,
            category: category.into(),
            expense_date,
            created_at: now,
            updated_at: now,
        }
    }
}
