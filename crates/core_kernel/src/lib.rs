//! Core Kernel - Foundational types and utilities for the loan servicing system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic and display formatting
//! - Date-only temporal helpers for schedule arithmetic
//! - Common identifiers and reference numbers
//! - Storage port infrastructure

pub mod error;
pub mod identifiers;
pub mod money;
pub mod ports;
pub mod temporal;

pub use error::CoreError;
pub use identifiers::{
    ClientId, ClientNumber, IdentifierError, LoanId, LoanNumber, PaymentId, PaymentNumber,
};
pub use money::{format_grouped, format_in_currency, Currency, Money, MoneyError, Rate};
pub use ports::PortError;
pub use temporal::{add_days, add_months, parse_iso_date, whole_months_between, TemporalError};
