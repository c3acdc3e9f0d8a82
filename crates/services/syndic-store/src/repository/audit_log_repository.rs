//! Audit log queries.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use common::AppResult;
use domain::AuditLog;

use super::base::{Repository, SeaRepository};
use super::entities::audit_log::{Column, Entity};

/// Audit log repository: lookups by time, user and entity
#[async_trait]
pub trait AuditLogRepository: Repository<AuditLog> {
    /// Entries recorded within `[from, to]`, oldest first
    async fn get_by_date_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<AuditLog>>;

    async fn get_by_user(&self, user_id: Uuid) -> AppResult<Vec<AuditLog>>;

    /// History of one entity
    async fn get_by_entity(&self, entity_type: &str, entity_id: Uuid) -> AppResult<Vec<AuditLog>>;
}

#[async_trait]
impl<'ctx> AuditLogRepository for SeaRepository<'ctx, Entity> {
    async fn get_by_date_range(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<AuditLog>> {
        self.fetch_all(
            Entity::find()
                .filter(Column::CreatedAt.between(from, to))
                .order_by_asc(Column::CreatedAt),
        )
        .await
    }

    async fn get_by_user(&self, user_id: Uuid) -> AppResult<Vec<AuditLog>> {
        self.filter_all(Column::UserId.eq(user_id)).await
    }

    async fn get_by_entity(&self, entity_type: &str, entity_id: Uuid) -> AppResult<Vec<AuditLog>> {
        self.filter_all(
            Condition::all()
                .add(Column::EntityType.eq(entity_type))
                .add(Column::EntityId.eq(entity_id)),
        )
        .await
    }
}
