//! Maintenance domain entity.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_MAINTENANCE;
use crate::entity::impl_base_entity;
use crate::status::MaintenanceStatus;

/// Scheduled upkeep, either on common areas or on one house
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Maintenance {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    /// `None` for common areas
    pub house_id: Option<Uuid>,
    pub status: MaintenanceStatus,
    pub scheduled_date: NaiveDate,
    #[validate(range(min = 0, message = "Cost cannot be negative"))]
    pub cost_cents: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(Maintenance, ENTITY_MAINTENANCE);

impl Maintenance {
    /// Create a pending task
    pub fn scheduled(title: impl Into<String>, house_id: Option<Uuid>, scheduled_date: NaiveDate) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            title: title.into(),
            description: None,
            house_id,
            status: MaintenanceStatus::Pending,
            scheduled_date,
            cost_cents: None,
            created_at: now,
            updated_at: now,
        }
    }
}
