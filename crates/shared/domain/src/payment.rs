//! Payment domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::constants::ENTITY_PAYMENT;
use crate::entity::{impl_base_entity, store_precision};
use crate::month::BillingMonth;
use crate::status::PaymentStatus;

/// A house's dues for one billing month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Payment {
    pub id: Uuid,
    pub house_id: Uuid,
    /// Amount in cents
    #[validate(range(min = 0, message = "Amount cannot be negative"))]
    pub amount_cents: i64,
    pub month: BillingMonth,
    pub status: PaymentStatus,
    pub paid_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl_base_entity!(Payment, ENTITY_PAYMENT);

impl Payment {
    /// Create an unpaid payment for a house and month
    pub fn unpaid(house_id: Uuid, month: BillingMonth, amount_cents: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::nil(),
            house_id,
            amount_cents,
            month,
            status: PaymentStatus::Unpaid,
            paid_at: None,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record the payment as settled at the given instant (microsecond precision)
    pub fn mark_paid(&mut self, at: DateTime<Utc>) {
        self.status = PaymentStatus::Paid;
        self.paid_at = Some(store_precision(at));
    }
}
