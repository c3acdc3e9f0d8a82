//! Enumerated entity states.
//!
//! Stored as their variant names (e.g. `Unpaid`), which is also how the
//! notifier and the desktop client spell them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant)),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(stringify!($variant) => Ok($name::$variant),)+
                    other => Err(DomainError::invalid_field(
                        $field,
                        format!("unknown value '{}'", other),
                    )),
                }
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

string_enum!(
    /// Settlement state of a monthly payment
    PaymentStatus, "status" { Paid, Unpaid, Partial }
);

string_enum!(
    /// Application roles
    UserRole, "role" { Admin, Syndic, Resident }
);

string_enum!(
    /// Progress of a maintenance task
    MaintenanceStatus, "status" { Pending, InProgress, Completed, Cancelled }
);

string_enum!(
    /// Outcome of a backup run
    BackupStatus, "status" { Completed, Failed }
);

string_enum!(
    /// Urgency of a notification
    NotificationPriority, "priority" { Low, Medium, High }
);

impl UserRole {
    /// Check if this role manages the syndic (admin or syndic)
    pub fn is_manager(&self) -> bool {
        matches!(self, UserRole::Admin | UserRole::Syndic)
    }
}

impl PaymentStatus {
    /// Check if the month is fully settled
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }
}
