//! Audit log domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_AUDIT_LOG;
use crate::entity::impl_base_entity;

/// Trace of a user action on an entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct AuditLog {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    #[validate(length(min = 1, message = "Action is required"))]
    pub action: String,
    #[validate(length(min = 1, message = "Entity type is required"))]
    pub entity_type: String,
    pub entity_id: Option<Uuid>,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(AuditLog, ENTITY_AUDIT_LOG);

impl AuditLog {
    pub fn record(
        user_id: Option<Uuid>,
        action: impl Into<String>,
        entity_type: impl Into<String>,
        entity_id: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            user_id,
            action: action.into(),
            entity_type: entity_type.into(),
            entity_id,
            details: None,
            created_at: now,
            updated_at: now,
        }
    }
}
