//! House domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_HOUSE;
use crate::entity::impl_base_entity;

/// A house (lot) managed by the syndic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct House {
    pub id: Uuid,
    /// Short unique code, e.g. `A1`
    #[validate(length(min = 1, max = 16, message = "Code must be 1 to 16 characters"))]
    pub code: String,
    #[validate(length(min = 1, message = "Owner name is required"))]
    pub owner_name: String,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    /// Monthly fee in cents
    #[validate(range(min = 0, message = "Monthly fee cannot be negative"))]
    pub monthly_fee_cents: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(House, ENTITY_HOUSE);

impl House {
    /// Create a new active house; the store assigns its identity
    pub fn new(code: impl Into<String>, owner_name: impl Into<String>, monthly_fee_cents: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            code: code.into(),
            owner_name: owner_name.into(),
            phone: None,
            email: None,
            monthly_fee_cents,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_contact(mut self, phone: Option<String>, email: Option<String>) -> Self {
        self.phone = phone;
        self.email = email;
        self
    }

    /// Mark the house as no longer managed
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}
