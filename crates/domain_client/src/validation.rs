//! Client validation rules
//!
//! Field-level checks come from the `validator` derive on [`Client`];
//! this module layers the business rules on top and collects everything
//! into a single result with errors and non-fatal warnings.
//!
//! # Validation Rules
//!
//! - Name is required
//! - Email, when present, must be well-formed
//! - Warning when the client has no contact details at all
//! - Warning when the client has no identity document on file

use validator::Validate;

use crate::client::Client;

/// Result of client validation
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether the client is valid
    pub is_valid: bool,
    /// List of validation errors
    pub errors: Vec<String>,
    /// List of validation warnings (non-fatal issues)
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Creates a successful validation result
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result
    pub fn add_error(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
        self.is_valid = false;
    }

    /// Adds a warning to the result
    pub fn add_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Validates a client record
pub fn validate_client(client: &Client) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if let Err(field_errors) = client.validate() {
        for (field, errors) in field_errors.field_errors() {
            for error in errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value for {}", field));
                result.add_error(message);
            }
        }
    }

    if !client.has_contact_details() {
        result.add_warning("client has no email or contact number");
    }

    if !client.has_identity_document() {
        result.add_warning("client has no identity document on file");
    }

    result
}
