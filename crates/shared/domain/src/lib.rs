//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Entities here are shared by the store and the notifier.

pub mod audit_log;
pub mod backup;
pub mod constants;
pub mod document;
pub mod entity;
pub mod error;
pub mod expense;
pub mod house;
pub mod maintenance;
pub mod month;
pub mod notification;
pub mod payment;
pub mod receipt;
pub mod status;
pub mod user;

pub use audit_log::AuditLog;
pub use backup::Backup;
pub use constants::*;
pub use document::Document;
pub use entity::{store_precision, validation_error, BaseEntity, TIMESTAMP_PRECISION};
pub use error::{DomainError, DomainResult, FieldErrors};
pub use expense::Expense;
pub use house::House;
pub use maintenance::Maintenance;
pub use month::BillingMonth;
pub use notification::Notification;
pub use payment::Payment;
pub use receipt::Receipt;
pub use status::{BackupStatus, MaintenanceStatus, NotificationPriority, PaymentStatus, UserRole};
pub use user::User;
