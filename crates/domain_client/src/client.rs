//! Client entity
//!
//! A client is an identity-only record: name plus contact and identity
//! document fields. Loans and payments refer to a client by its reference
//! number; nothing at this level enforces that link.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use core_kernel::{ClientId, ClientNumber};

use crate::error::ClientError;

/// A client of the lending business
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Client {
    /// Unique identifier
    pub id: ClientId,
    /// Human-readable client reference
    pub client_number: ClientNumber,
    /// Full name
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    /// Postal or street address
    pub address: Option<String>,
    /// Email address
    #[validate(email(message = "invalid email address"))]
    pub email: Option<String>,
    /// Contact phone number
    pub contact_number: Option<String>,
    /// National identity number
    pub national_id: Option<String>,
    /// Passport number
    pub passport: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Client {
    /// Creates a new client with the given reference and name
    pub fn new(client_number: ClientNumber, name: impl Into<String>) -> Result<Self, ClientError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ClientError::InvalidData("name must not be empty".into()));
        }

        let now = Utc::now();
        Ok(Self {
            id: ClientId::new_v7(),
            client_number,
            name,
            address: None,
            email: None,
            contact_number: None,
            national_id: None,
            passport: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Sets the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the contact number
    pub fn with_contact_number(mut self, number: impl Into<String>) -> Self {
        self.contact_number = Some(number.into());
        self
    }

    /// Sets the national identity number
    pub fn with_national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = Some(national_id.into());
        self
    }

    /// Sets the passport number
    pub fn with_passport(mut self, passport: impl Into<String>) -> Self {
        self.passport = Some(passport.into());
        self
    }

    /// Returns true if the client has at least one identity document
    pub fn has_identity_document(&self) -> bool {
        self.national_id.is_some() || self.passport.is_some()
    }

    /// Returns true if the client can be contacted
    pub fn has_contact_details(&self) -> bool {
        self.email.is_some() || self.contact_number.is_some()
    }
}
