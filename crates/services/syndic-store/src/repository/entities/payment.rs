//! Payment database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{BillingMonth, DomainResult, Payment};

use crate::repository::EntityMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub house_id: Uuid,
    pub amount_cents: i64,
    /// Billing month, `YYYY-MM`
    pub month: String,
    pub status: String,
    pub paid_at: Option<DateTimeUtc>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::house::Entity",
        from = "Column::HouseId",
        to = "super::house::Column::Id",
        on_delete = "Cascade"
    )]
    House,
}

impl Related<super::house::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::House.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMapping for Entity {
    type Domain = Payment;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn to_domain(model: Model) -> DomainResult<Payment> {
        Ok(Payment {
            id: model.id,
            house_id: model.house_id,
            amount_cents: model.amount_cents,
            month: BillingMonth::parse(&model.month)?,
            status: model.status.parse()?,
            paid_at: model.paid_at,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_active_model(payment: &Payment) -> ActiveModel {
        ActiveModel {
            id: Set(payment.id),
            house_id: Set(payment.house_id),
            amount_cents: Set(payment.amount_cents),
            month: Set(payment.month.to_string()),
            status: Set(payment.status.to_string()),
            paid_at: Set(payment.paid_at),
            notes: Set(payment.notes.clone()),
            created_at: Set(payment.created_at),
            updated_at: Set(payment.updated_at),
        }
    }
}
