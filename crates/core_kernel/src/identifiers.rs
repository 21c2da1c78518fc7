//! Strongly-typed identifiers for domain entities
//!
//! Two identifier families exist side by side:
//!
//! - Uuid-backed entity ids (`LoanId`, `PaymentId`, `ClientId`) identify a
//!   stored record.
//! - Human-readable reference numbers (`LoanNumber`, `PaymentNumber`,
//!   `ClientNumber`) are what users see and what records use to refer to
//!   each other. References are loosely typed by design: a loan's client
//!   number is a matching string, not an enforced foreign key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors for reference-number construction
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Reference number must not be empty")]
    Empty,
}

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Creates a new random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Creates a new time-ordered identifier (v7)
            pub fn new_v7() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Strip prefix if present
                let uuid_str = s.strip_prefix(concat!($prefix, "-")).unwrap_or(s);
                Ok(Self(Uuid::parse_str(uuid_str)?))
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Uuid {
                id.0
            }
        }
    };
}

macro_rules! define_reference {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a reference from a non-empty string
            pub fn new(value: impl Into<String>) -> Result<Self, IdentifierError> {
                let value = value.into();
                if value.trim().is_empty() {
                    return Err(IdentifierError::Empty);
                }
                Ok(Self(value))
            }

            /// Returns the reference as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdentifierError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }
    };
}

// Entity ids
define_id!(LoanId, "LOAN");
define_id!(PaymentId, "PAY");
define_id!(ClientId, "CLI");

// Human-readable reference numbers
define_reference!(LoanNumber);
define_reference!(PaymentNumber);
define_reference!(ClientNumber);

impl PaymentNumber {
    /// Generates a payment number in the conventional "PMT-" + six random
    /// digits form
    pub fn generate() -> Self {
        let digits = Uuid::new_v4().as_u128() % 1_000_000;
        Self(format!("PMT-{:06}", digits))
    }
}
