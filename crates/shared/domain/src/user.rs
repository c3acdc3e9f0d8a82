//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_USER;
use crate::entity::impl_base_entity;
use crate::status::UserRole;

/// Desktop application account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    pub id: Uuid,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(User, ENTITY_USER);

impl User {
    /// Create a new active user
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        full_name: impl Into<String>,
        role: UserRole,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            username: username.into(),
            password_hash: password_hash.into(),
            full_name: full_name.into(),
            role,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }
}
