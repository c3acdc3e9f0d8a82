//! Audit log database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{AuditLog, DomainResult};

use crate::repository::EntityMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "audit_logs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Option<Uuid>,
    #[sea_orm(column_type = "Text", nullable)]
    pub details: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMapping for Entity {
    type Domain = AuditLog;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn to_domain(model: Model) -> DomainResult<AuditLog> {
        Ok(AuditLog {
            id: model.id,
            user_id: model.user_id,
            action: model.action,
            entity_type: model.entity_type,
            entity_id: model.entity_id,
            details: model.details,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_active_model(log: &AuditLog) -> ActiveModel {
        ActiveModel {
            id: Set(log.id),
            user_id: Set(log.user_id),
            action: Set(log.action.clone()),
            entity_type: Set(log.entity_type.clone()),
            entity_id: Set(log.entity_id),
            details: Set(log.details.clone()),
            created_at: Set(log.created_at),
            updated_at: Set(log.updated_at),
        }
    }
}
