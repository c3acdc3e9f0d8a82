//! Base entity contract shared by every aggregate.

use chrono::{DateTime, SubsecRound, Utc};
use serde::Serialize;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::error::{DomainError, DomainResult, FieldErrors};

/// Sub-second digits kept for stored timestamps (microseconds)
pub const TIMESTAMP_PRECISION: u16 = 6;

/// Truncate an instant to what the store keeps, so it reads back unchanged.
pub fn store_precision(at: DateTime<Utc>) -> DateTime<Utc> {
    at.trunc_subsecs(TIMESTAMP_PRECISION)
}

/// Identity and timestamps common to all persisted entities.
///
/// The store owns `id` (when left nil), `created_at` and `updated_at`.
pub trait BaseEntity: Validate + Serialize + Clone + Send + Sync + 'static {
    /// Name used in error messages, e.g. `House`
    const ENTITY_NAME: &'static str;

    fn id(&self) -> Uuid;

    fn created_at(&self) -> DateTime<Utc>;

    fn updated_at(&self) -> DateTime<Utc>;

    /// Fill the fields assigned on insert.
    fn assign_store_fields(&mut self, now: DateTime<Utc>);

    /// Refresh the modification timestamp.
    fn touch(&mut self, now: DateTime<Utc>);

    /// Run the entity's field validation, mapped into a domain error.
    fn check(&self) -> DomainResult<()> {
        self.validate()
            .map_err(|errors| validation_error(Self::ENTITY_NAME, &errors))
    }
}

/// Convert `validator` errors into a field-keyed `Validation` error.
///
/// Each violation contributes its message, or its code when it has none.
pub fn validation_error(entity_name: &str, errors: &ValidationErrors) -> DomainError {
    let mut fields = FieldErrors::new();
    for (field, violations) in errors.field_errors() {
        let messages = violations
            .iter()
            .map(|v| {
                v.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| v.code.to_string())
            })
            .collect();
        fields.insert(field.to_string(), messages);
    }

    DomainError::validation_with(format!("{} is invalid", entity_name), fields)
}

/// Implement [`BaseEntity`] for a struct with `id`, `created_at` and `updated_at` fields.
macro_rules! impl_base_entity {
    ($ty:ty, $name:expr) => {
        impl $crate::entity::BaseEntity for $ty {
            const ENTITY_NAME: &'static str = $name;

            fn id(&self) -> uuid::Uuid {
                self.id
            }

            fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.created_at
            }

            fn updated_at(&self) -> chrono::DateTime<chrono::Utc> {
                self.updated_at
            }

            fn assign_store_fields(&mut self, now: chrono::DateTime<chrono::Utc>) {
                if self.id.is_nil() {
                    self.id = uuid::Uuid::new_v4();
                }
                self.created_at = now;
                self.updated_at = now;
            }

            fn touch(&mut self, now: chrono::DateTime<chrono::Utc>) {
                self.updated_at = now;
            }
        }
    };
}

pub(crate) use impl_base_entity;

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn store_precision_drops_nanoseconds() {
        let at = DateTime::parse_from_rfc3339("2024-05-17T10:30:00.123456789Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            store_precision(at).to_rfc3339(),
            "2024-05-17T10:30:00.123456+00:00"
        );
    }

    #[test]
    fn validation_error_keys_by_field() {
        let mut errors = ValidationErrors::new();
        errors.add("code", ValidationError::new("length"));
        let mut with_message = ValidationError::new("email");
        with_message.message = Some("Invalid email".into());
        errors.add("email", with_message);

        let err = validation_error("House", &errors);

        assert_eq!(err.to_string(), "House is invalid");
        let fields = err.field_errors().unwrap();
        assert_eq!(fields["code"], vec!["length"]);
        assert_eq!(fields["email"], vec!["Invalid email"]);
    }
}
