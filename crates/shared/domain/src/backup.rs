//! Backup domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_BACKUP;
use crate::entity::impl_base_entity;
use crate::status::BackupStatus;

/// A database backup file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Backup {
    pub id: Uuid,
    #[validate(length(min = 1, message = "File path is required"))]
    pub file_path: String,
    #[validate(range(min = 0, message = "Size cannot be negative"))]
    pub size_bytes: i64,
    pub status: BackupStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(Backup, ENTITY_BACKUP);

impl Backup {
    pub fn completed(file_path: impl Into<String>, size_bytes: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            file_path: file_path.into(),
            size_bytes,
            status: BackupStatus::Completed,
            created_at: now,
            updated_at: now,
        }
    }
}
