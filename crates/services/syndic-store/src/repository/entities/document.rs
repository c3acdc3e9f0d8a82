//! Document database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{Document, DomainResult};

use crate::repository::EntityMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub file_path: String,
    pub category: String,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMapping for Entity {
    type Domain = Document;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn to_domain(model: Model) -> DomainResult<Document> {
        Ok(Document {
            id: model.id,
            title: model.title,
            file_path: model.file_path,
            category: model.category,
            uploaded_by: model.uploaded_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_active_model(document: &Document) -> ActiveModel {
        ActiveModel {
            id: Set(document.id),
            title: Set(document.title.clone()),
            file_path: Set(document.file_path.clone()),
            category: Set(document.category.clone()),
            uploaded_by: Set(document.uploaded_by),
            created_at: Set(document.created_at),
            updated_at: Set(document.updated_at),
        }
    }
}
