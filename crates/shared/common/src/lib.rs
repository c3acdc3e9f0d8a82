//! Common utilities shared across the store and the notifier.
//!
//! This crate provides:
//! - Unified application error with HTTP mapping
//! - Configuration structures
//! - Cooperative cancellation of store operations

pub mod cancel;
pub mod config;
pub mod error;

pub use cancel::{cancel_pair, cancellable};
pub use config::*;
pub use error::{AppError, AppResult};
