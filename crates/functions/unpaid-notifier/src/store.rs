//! Store access needed by the unpaid check.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use common::AppResult;
use domain::{BillingMonth, Notification, PaymentStatus};
use syndic_store::infra::Database;
use syndic_store::repository::entities::{house, payment};
use syndic_store::repository::Repository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// An unpaid payment with the code of its house
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpaidPayment {
    pub payment_id: Uuid,
    pub house_code: String,
    pub month: BillingMonth,
}

/// Reads unpaid payments and writes notifications.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Payments of `month` still marked `Unpaid`, joined to their house
    async fn unpaid_payments(&self, month: &BillingMonth) -> AppResult<Vec<UnpaidPayment>>;

    /// Insert all notifications in one transaction; an empty batch is a no-op
    async fn insert_notifications(&self, notifications: Vec<Notification>) -> AppResult<u64>;

    /// Check that the store answers
    async fn ping(&self) -> AppResult<()>;
}

/// SeaORM implementation of NotificationStore
#[derive(Clone)]
pub struct SeaNotificationStore {
    db: Database,
}

impl SeaNotificationStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NotificationStore for SeaNotificationStore {
    async fn unpaid_payments(&self, month: &BillingMonth) -> AppResult<Vec<UnpaidPayment>> {
        let rows = payment::Entity::find()
            .filter(payment::Column::Month.eq(month.as_str()))
            .filter(payment::Column::Status.eq(PaymentStatus::Unpaid.as_str()))
            .order_by_asc(payment::Column::CreatedAt)
            .find_also_related(house::Entity)
            .all(self.db.connection())
            .await?;

        let unpaid = rows
            .into_iter()
            .filter_map(|(payment, house)| match house {
                Some(house) => Some(UnpaidPayment {
                    payment_id: payment.id,
                    house_code: house.code,
                    month: month.clone(),
                }),
                None => {
                    tracing::warn!(payment_id = %payment.id, "Unpaid payment has no house, skipped");
                    None
                }
            })
            .collect();

        Ok(unpaid)
    }

    async fn insert_notifications(&self, notifications: Vec<Notification>) -> AppResult<u64> {
        if notifications.is_empty() {
            return Ok(0);
        }

        let mut ctx = self.db.context();
        for notification in notifications {
            ctx.notifications().create(notification).await?;
        }
        ctx.save_changes().await
    }

    async fn ping(&self) -> AppResult<()> {
        self.db.ping().await?;
        Ok(())
    }
}
