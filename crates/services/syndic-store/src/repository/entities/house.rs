//! House database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainResult, House};

use crate::repository::EntityMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "houses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub code: String,
    pub owner_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub monthly_fee_cents: i64,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMapping for Entity {
    type Domain = House;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn to_domain(model: Model) -> DomainResult<House> {
        Ok(House {
            id: model.id,
            code: model.code,
            owner_name: model.owner_name,
            phone: model.phone,
            email: model.email,
            monthly_fee_cents: model.monthly_fee_cents,
            is_active: model.is_active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_active_model(house: &House) -> ActiveModel {
        ActiveModel {
            id: Set(house.id),
            code: Set(house.code.clone()),
            owner_name: Set(house.owner_name.clone()),
            phone: Set(house.phone.clone()),
            email: Set(house.email.clone()),
            monthly_fee_cents: Set(house.monthly_fee_cents),
            is_active: Set(house.is_active),
            created_at: Set(house.created_at),
            updated_at: Set(house.updated_at),
        }
    }
}
