//! Notification queries.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use common::AppResult;
use domain::{Notification, NotificationPriority};

use super::base::{Repository, SeaRepository};
use super::entities::notification::{Column, Entity};

/// Notification repository: unread, per user and per priority views
#[async_trait]
pub trait NotificationRepository: Repository<Notification> {
    /// Unread notifications, newest first
    async fn get_unread(&self) -> AppResult<Vec<Notification>>;

    async fn get_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>>;

    async fn get_by_priority(&self, priority: NotificationPriority)
        -> AppResult<Vec<Notification>>;
}

#[async_trait]
impl<'ctx> NotificationRepository for SeaRepository<'ctx, Entity> {
    async fn get_unread(&self) -> AppResult<Vec<Notification>> {
        self.fetch_all(
            Entity::find()
                .filter(Column::IsRead.eq(false))
                .order_by_desc(Column::CreatedAt),
        )
        .await
    }

    async fn get_by_user(&self, user_id: Uuid) -> AppResult<Vec<Notification>> {
        self.filter_all(Column::UserId.eq(user_id)).await
    }

    async fn get_by_priority(
        &self,
        priority: NotificationPriority,
    ) -> AppResult<Vec<Notification>> {
        self.filter_all(Column::Priority.eq(priority.as_str())).await
    }
}
