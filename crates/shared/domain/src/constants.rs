//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Entity names (used in error messages)
// =============================================================================

pub const ENTITY_HOUSE: &str = "House";
pub const ENTITY_PAYMENT: &str = "Payment";
pub const ENTITY_USER: &str = "User";
pub const ENTITY_DOCUMENT: &str = "Document";
pub const ENTITY_EXPENSE: &str = "Expense";
pub const ENTITY_MAINTENANCE: &str = "Maintenance";
pub const ENTITY_RECEIPT: &str = "Receipt";
pub const ENTITY_AUDIT_LOG: &str = "AuditLog";
pub const ENTITY_BACKUP: &str = "Backup";
pub const ENTITY_NOTIFICATION: &str = "Notification";

// =============================================================================
// Billing
// =============================================================================

/// Format of a billing month, e.g. `2024-05`
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Pattern a billing month must match
pub const MONTH_PATTERN: &str = r"^\d{4}-(0[1-9]|1[0-2])$";

// =============================================================================
// Notifications
// =============================================================================

/// Notification type raised for a house with an unpaid month
pub const NOTIFICATION_TYPE_UNPAID_HOUSE: &str = "UnpaidHouse";

/// Related entity type for payment notifications
pub const RELATED_ENTITY_PAYMENT: &str = ENTITY_PAYMENT;

/// Title of unpaid-house notifications
pub const UNPAID_NOTIFICATION_TITLE: &str = "Paiement en attente";

/// Message of an unpaid-house notification
pub fn unpaid_notification_message(house_code: &str, month: &str) -> String {
    format!("La maison {} n'a pas encore payé pour {}", house_code, month)
}
