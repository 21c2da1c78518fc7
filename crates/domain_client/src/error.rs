//! Client domain errors

use thiserror::Error;

/// Errors that can occur in the client domain
#[derive(Debug, Error)]
pub enum ClientError {
    /// Client with the given reference was not found
    #[error("Client not found: {0}")]
    ClientNotFound(String),

    /// Attempted to create a client that already exists
    #[error("Duplicate client: {0}")]
    DuplicateClient(String),

    /// Invalid client data provided
    #[error("Invalid client data: {0}")]
    InvalidData(String),
}
