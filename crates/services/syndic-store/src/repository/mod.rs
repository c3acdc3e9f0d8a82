//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod audit_log_repository;
mod backup_repository;
mod base;
mod context;
mod document_repository;
pub mod entities;
mod expense_repository;
mod house_repository;
mod maintenance_repository;
mod notification_repository;
mod payment_repository;
mod receipt_repository;
mod user_repository;

pub use audit_log_repository::AuditLogRepository;
pub use backup_repository::BackupRepository;
pub use base::{EntityMapping, Repository, SeaRepository};
pub use context::DbContext;
pub use document_repository::DocumentRepository;
pub use expense_repository::ExpenseRepository;
pub use house_repository::HouseRepository;
pub use maintenance_repository::MaintenanceRepository;
pub use notification_repository::NotificationRepository;
pub use payment_repository::PaymentRepository;
pub use receipt_repository::ReceiptRepository;
pub use user_repository::UserRepository;
