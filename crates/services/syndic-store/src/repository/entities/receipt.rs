//! Receipt database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainResult, Receipt};

use crate::repository::EntityMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "receipts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub payment_id: Uuid,
    #[sea_orm(unique)]
    pub receipt_number: String,
    pub issued_at: DateTimeUtc,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::payment::Entity",
        from = "Column::PaymentId",
        to = "super::payment::Column::Id",
        on_delete = "Cascade"
    )]
    Payment,
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMapping for Entity {
    type Domain = Receipt;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn to_domain(model: Model) -> DomainResult<Receipt> {
        Ok(Receipt {
            id: model.id,
            payment_id: model.payment_id,
            receipt_number: model.receipt_number,
            issued_at: model.issued_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_active_model(receipt: &Receipt) -> ActiveModel {
        ActiveModel {
            id: Set(receipt.id),
            payment_id: Set(receipt.payment_id),
            receipt_number: Set(receipt.receipt_number.clone()),
            issued_at: Set(receipt.issued_at),
            created_at: Set(receipt.created_at),
            updated_at: Set(receipt.updated_at),
        }
    }
}
