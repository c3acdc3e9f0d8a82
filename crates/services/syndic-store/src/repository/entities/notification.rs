//! Notification database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::{DomainResult, Notification};

use crate::repository::EntityMapping;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "notifications")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    #[sea_orm(column_name = "type")]
    pub notification_type: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub related_entity_type: Option<String>,
    pub related_entity_id: Option<Uuid>,
    pub priority: String,
    pub is_read: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl EntityMapping for Entity {
    type Domain = Notification;
    type Active = ActiveModel;

    fn id_column() -> Column {
        Column::Id
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn to_domain(model: Model) -> DomainResult<Notification> {
        Ok(Notification {
            id: model.id,
            user_id: model.user_id,
            notification_type: model.notification_type,
            title: model.title,
            message: model.message,
            related_entity_type: model.related_entity_type,
            related_entity_id: model.related_entity_id,
            priority: model.priority.parse()?,
            is_read: model.is_read,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }

    fn to_active_model(notification: &Notification) -> ActiveModel {
        ActiveModel {
            id: Set(notification.id),
            user_id: Set(notification.user_id),
            notification_type: Set(notification.notification_type.clone()),
            title: Set(notification.title.clone()),
            message: Set(notification.message.clone()),
            related_entity_type: Set(notification.related_entity_type.clone()),
            related_entity_id: Set(notification.related_entity_id),
            priority: Set(notification.priority.to_string()),
            is_read: Set(notification.is_read),
            created_at: Set(notification.created_at),
            updated_at: Set(notification.updated_at),
        }
    }
}
