//! Loan domain errors

use rust_decimal::Decimal;
use thiserror::Error;

use core_kernel::{MoneyError, PortError};

/// Errors that can occur in the loan domain
///
/// Every variant is a request-local validation or lookup failure: the
/// operation is rejected, state is left unchanged, and nothing is retried.
#[derive(Debug, Error)]
pub enum LoanError {
    /// Loan parameters failed validation
    #[error("Invalid loan parameters: {0}")]
    InvalidLoanParameters(String),

    /// Term count is outside the valid range
    #[error("Invalid term count: {0}")]
    InvalidTermCount(u32),

    /// Start date is missing, malformed, or out of range
    #[error("Invalid start date: {0}")]
    InvalidStartDate(String),

    /// Payment would drive the outstanding balance negative
    #[error("Payment of {amount} exceeds outstanding balance {balance}")]
    PaymentExceedsBalance { amount: Decimal, balance: Decimal },

    /// Loan with the given reference was not found
    #[error("Loan not found: {0}")]
    LoanNotFound(String),

    /// Payment with the given reference was not found
    #[error("Payment not found: {0}")]
    PaymentNotFound(String),

    /// Money operation failed (currency mismatch, division by zero)
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),

    /// Storage adapter failure
    #[error("Storage error: {0}")]
    Storage(#[from] PortError),
}
