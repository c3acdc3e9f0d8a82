//! Notification domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::{
    unpaid_notification_message, ENTITY_NOTIFICATION, NOTIFICATION_TYPE_UNPAID_HOUSE,
    RELATED_ENTITY_PAYMENT, UNPAID_NOTIFICATION_TITLE,
};
use crate::entity::impl_base_entity;
use crate::month::BillingMonth;
use crate::status::NotificationPriority;

/// In-app notification, optionally addressed to one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Notification {
    pub id: Uuid,
    /// `None` broadcasts to every manager
    pub user_id: Option<Uuid>,
    #[serde(rename = "type")]
    pub notification_type: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    pub related_entity_type: Option<String>,
    pub related_entity_id: Option<Uuid>,
    pub priority: NotificationPriority,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(Notification, ENTITY_NOTIFICATION);

impl Notification {
    /// Broadcast notification for a house that has not paid a month
    pub fn unpaid_house(payment_id: Uuid, house_code: &str, month: &BillingMonth) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            user_id: None,
            notification_type: NOTIFICATION_TYPE_UNPAID_HOUSE.to_string(),
            title: UNPAID_NOTIFICATION_TITLE.to_string(),
            message: unpaid_notification_message(house_code, month.as_str()),
            related_entity_type: Some(RELATED_ENTITY_PAYMENT.to_string()),
            related_entity_id: Some(payment_id),
            priority: NotificationPriority::High,
            is_read: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}
