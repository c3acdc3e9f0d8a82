//! Maintenance database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainResult, Maintenance};

use crate::repository::EntityMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "maintenance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub house_id: Option<Uuid>,
    pub status: String,
    pub scheduled_date: Date,
    pub cost_cents: Option<i64>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::house::Entity",
        from = "Column::HouseId",
        to = "super::house::Column::Id",
        on_delete = "SetNull"
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
    type Domain = Maintenance;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn to_domain(model: Model) -> DomainResult<Maintenance> {
        Ok(Maintenance {
            id: model.id,
            title: model.title,
            description: model.description,
            house_id: model.house_id,
            status: model.status.parse()?,
            scheduled_date: model.scheduled_date,
            cost_cents: model.cost_cents,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_active_model(task: &Maintenance) -> ActiveModel {
        ActiveModel {
            id: Set(task.id),
            title: Set(task.title.clone()),
            description: Set(task.description.clone()),
            house_id: Set(task.house_id),
            status: Set(task.status.to_string()),
            scheduled_date: Set(task.scheduled_date),
            cost_cents: Set(task.cost_cents),
            created_at: Set(task.created_at),
            updated_at: Set(task.updated_at),
        }
    }
}
