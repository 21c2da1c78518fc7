//! Client Domain - identity records for the lending business
//!
//! Clients are identity-only entities: a name plus contact and identity
//! document fields. Loans and payments reference a client through its
//! human-readable client number; the link is an application-level lookup,
//! not an enforced foreign key.

pub mod client;
pub mod error;
pub mod validation;

pub use client::Client;
pub use error::ClientError;
pub use validation::{validate_client, ValidationResult};
