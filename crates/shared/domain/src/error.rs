//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database).

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Field name mapped to the ordered list of violations for that field.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Validation failed for one or more fields
    #[error("{message}")]
    Validation { message: String, errors: FieldErrors },

    /// Entity not found
    #[error("{message}")]
    NotFound {
        entity_name: Option<String>,
        id: Option<String>,
        message: String,
    },

    /// Caller is not allowed to perform the action
    #[error("{0}")]
    Unauthorized(String),

    /// A business rule rejected the operation
    #[error("{0}")]
    BusinessRule(String),

    /// Local and cloud copies of an entity diverged.
    ///
    /// Both snapshots are kept as-is; choosing a winner is up to the caller.
    #[error("{message}")]
    SyncConflict {
        message: String,
        local: Value,
        cloud: Value,
    },
}

impl DomainError {
    /// Create a validation error with no field errors
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation {
            message: msg.into(),
            errors: FieldErrors::new(),
        }
    }

    /// Create a validation error carrying per-field violations
    pub fn validation_with(msg: impl Into<String>, errors: FieldErrors) -> Self {
        DomainError::Validation {
            message: msg.into(),
            errors,
        }
    }

    /// Create a validation error for a single field
    pub fn invalid_field(field: impl Into<String>, violation: impl Into<String>) -> Self {
        let field = field.into();
        let violation = violation.into();
        let message = format!("{}: {}", field, violation);
        let mut errors = FieldErrors::new();
        errors.insert(field, vec![violation]);
        DomainError::Validation { message, errors }
    }

    /// Create a not found error for an entity and its id
    pub fn not_found(entity_name: impl Into<String>, id: impl ToString) -> Self {
        let entity_name = entity_name.into();
        let id = id.to_string();
        let message = format!("{} with id '{}' was not found.", entity_name, id);
        DomainError::NotFound {
            entity_name: Some(entity_name),
            id: Some(id),
            message,
        }
    }

    /// Create a not found error with a literal message
    pub fn not_found_message(msg: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity_name: None,
            id: None,
            message: msg.into(),
        }
    }

    /// Create an unauthorized error
    pub fn unauthorized(msg: impl Into<String>) -> Self {
        DomainError::Unauthorized(msg.into())
    }

    /// Create a business rule error
    pub fn business_rule(msg: impl Into<String>) -> Self {
        DomainError::BusinessRule(msg.into())
    }

    /// Create a sync conflict error from the two diverging snapshots
    pub fn sync_conflict(
        msg: impl Into<String>,
        local: impl Into<Value>,
        cloud: impl Into<Value>,
    ) -> Self {
        DomainError::SyncConflict {
            message: msg.into(),
            local: local.into(),
            cloud: cloud.into(),
        }
    }

    /// Human-readable message carried by every variant
    pub fn message(&self) -> &str {
        match self {
            DomainError::Validation { message, .. }
            | DomainError::NotFound { message, .. }
            | DomainError::SyncConflict { message, .. } => message,
            DomainError::Unauthorized(message) | DomainError::BusinessRule(message) => message,
        }
    }

    /// Field errors of a validation error, `None` for every other kind
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            DomainError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
