//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! loan servicing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod assertions;
pub mod builders;
pub mod fixtures;
pub mod generators;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
pub use generators::*;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_loan_builder_matches_worked_example() {
        let loan = LoanBuilder::new().build();

        assert_eq!(loan.principal.amount(), dec!(12000.00));
        assert_eq!(loan.term_count, 12);
        assert_eq!(loan.admin_fee_amount().amount(), dec!(240.00));
        assert_eq!(loan.end_date, chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
    }

    #[test]
    fn test_standard_schedule_is_coherent() {
        assert_schedule_coherent(&STANDARD_SCHEDULE, dec!(12000.00));
        assert_eq!(STANDARD_SCHEDULE[0].interest, dec!(120.00));
        assert_eq!(STANDARD_SCHEDULE[0].admin_fee, dec!(240.00));
    }

    #[test]
    fn test_payment_builder_defaults_are_consistent() {
        let payment = PaymentBuilder::new().build();

        // Default snapshot equals principal + fee - default amount
        assert_eq!(payment.outstanding_balance.amount(), dec!(11173.81));
        assert_eq!(payment.amount.amount(), dec!(1066.19));
    }

    #[test]
    fn test_client_builder_fakes_a_name() {
        let client = ClientBuilder::new().build();
        assert!(!client.name.is_empty());
    }
}
