//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Each one maps to and from its domain entity through [`EntityMapping`].
//!
//! [`EntityMapping`]: crate::repository::EntityMapping

pub mod audit_log;
pub mod backup;
pub mod document;
pub mod expense;
pub mod house;
pub mod maintenance;
pub mod notification;
pub mod payment;
pub mod receipt;
pub mod user;
