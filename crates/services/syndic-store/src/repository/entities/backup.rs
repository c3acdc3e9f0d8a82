//! Backup database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{Backup, DomainResult};

use crate::repository::EntityMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "backups")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub file_path: String,
    pub size_bytes: i64,
    pub status: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMapping for Entity {
    type Domain = Backup;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn to_domain(model: Model) -> DomainResult<Backup> {
        Ok(Backup {
            id: model.id,
            file_path: model.file_path,
            size_bytes: model.size_bytes,
            status: model.status.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_active_model(backup: &Backup) -> ActiveModel {
        ActiveModel {
            id: Set(backup.id),
            file_path: Set(backup.file_path.clone()),
            size_bytes: Set(backup.size_bytes),
            status: Set(backup.status.to_string()),
            created_at: Set(backup.created_at),
            updated_at: Set(backup.updated_at),
        }
    }
}
