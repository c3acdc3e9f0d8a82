//! Document domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_DOCUMENT;
use crate::entity::impl_base_entity;

/// A stored file (contract, minutes, invoice scan)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Document {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "File path is required"))]
    pub file_path: String,
    pub category: String,
    pub uploaded_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(Document, ENTITY_DOCUMENT);

impl Document {
    pub fn new(
        title: impl Into<String>,
        file_path: impl Into<String>,
        category: impl Into<String>,
        uploaded_by: Option<Uuid>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            title: title.into(),
            file_path: file_path.into(),
            category: category.into(),
            uploaded_by,
            created_at: now,
            updated_at: now,
        }
    }
}
