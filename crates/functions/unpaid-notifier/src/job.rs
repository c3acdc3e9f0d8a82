//! The unpaid-dues check.

use common::AppResult;
use domain::{BillingMonth, Notification};

use crate::store::NotificationStore;

/// Raise one `UnpaidHouse` notification per unpaid payment of `month`.
///
/// Returns the number of notifications inserted. Nothing is inserted when
/// the payment query fails.
pub async fn run_unpaid_check(store: &dyn NotificationStore, month: &BillingMonth) -> AppResult<u64> {
    let unpaid = store.unpaid_payments(month).await?;
    if unpaid.is_empty() {
        tracing::info!(%month, "No unpaid payments");
        return Ok(0);
    }

    let notifications: Vec<Notification> = unpaid
        .iter()
        .map(|p| Notification::unpaid_house(p.payment_id, &p.house_code, month))
        .collect();

    let created = store.insert_notifications(notifications).await?;
    tracing::info!(%month, created, "Unpaid notifications raised");
    Ok(created)
}
