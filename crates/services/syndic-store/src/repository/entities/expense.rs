//! Expense database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainResult, Expense};

use crate::repository::EntityMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub category: String,
    pub expense_date: Date,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMapping for Entity {
    type Domain = Expense;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn to_domain(model: Model) -> DomainResult<Expense> {
        Ok(Expense {
            id: model.id,
            description: model.description,
            amount_cents: model.amount_cents,
            category: model.category,
            expense_date: model.expense_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_active_model(expense: &Expense) -> ActiveModel {
        ActiveModel {
            id: Set(expense.id),
            description: Set(expense.description.clone()),
            amount_cents: Set(expense.amount_cents),
            category: Set(expense.category.clone()),
            expense_date: Set(expense.expense_date),
            created_at: Set(expense.created_at),
            updated_at: Set(expense.updated_at),
        }
    }
}
