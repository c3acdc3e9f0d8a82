//! Receipt domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_RECEIPT;
use crate::entity::{impl_base_entity, store_precision};

/// Proof of payment handed to the owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Receipt {
    pub id: Uuid,
    pub payment_id: Uuid,
    #[validate(length(min = 1, message = "Receipt number is required"))]
    pub receipt_number: String,
    pub issued_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(Receipt, ENTITY_RECEIPT);

impl Receipt {
    pub fn issue(payment_id: Uuid, receipt_number: impl Into<String>) -> Self {
        let now = store_precision(Utc::now());
        Self {
            id: Uuid::nil(),
            payment_id,
            receipt_number: receipt_number.into(),
            issued_at: now,
            created_at: now,
            updated_at: now,
        }
    }
}
