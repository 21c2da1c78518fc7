//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the loan
//! servicing system. These fixtures are designed to be consistent and
//! predictable for unit tests.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use core_kernel::{ClientNumber, Currency, LoanNumber, Money, PaymentNumber, Rate};
use domain_loan::{compute_schedule, AmortizationPolicy, TermEntry};
use rust_decimal_macros::dec;

use crate::builders::LoanBuilder;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// Creates a standard USD amount for testing
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }

    /// The worked-example principal
    pub fn usd_principal() -> Money {
        Money::new(dec!(12000.00), Currency::USD)
    }

    /// A typical installment against the worked-example loan
    pub fn usd_installment() -> Money {
        Money::new(dec!(1066.19), Currency::USD)
    }

    /// Creates a zero amount
    pub fn usd_zero() -> Money {
        Money::zero(Currency::USD)
    }

    /// Creates a EUR amount for currency mismatch tests
    pub fn eur_100() -> Money {
        Money::new(dec!(100.00), Currency::EUR)
    }
}

/// Fixture for rate test data
pub struct RateFixtures;

impl RateFixtures {
    /// Twelve percent annual interest (one percent monthly)
    pub fn annual_12_percent() -> Rate {
        Rate::new(dec!(0.12))
    }

    /// Two percent one-time admin fee
    pub fn admin_fee_2_percent() -> Rate {
        Rate::new(dec!(0.02))
    }

    /// Zero rate
    pub fn zero() -> Rate {
        Rate::new(dec!(0))
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard loan start date (Jan 1, 2024)
    pub fn loan_start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// First term due date for the standard start (30 days later)
    pub fn first_due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()
    }

    /// A mid-loan assessment date (five whole months in)
    pub fn assessment_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 20).unwrap()
    }
}

/// Fixture for reference numbers
pub struct ReferenceFixtures;

impl ReferenceFixtures {
    /// Standard loan reference
    pub fn loan_number() -> LoanNumber {
        LoanNumber::new("LN-1001").unwrap()
    }

    /// Standard client reference
    pub fn client_number() -> ClientNumber {
        ClientNumber::new("CLI-1001").unwrap()
    }

    /// Standard payment reference
    pub fn payment_number() -> PaymentNumber {
        PaymentNumber::new("PMT-100001").unwrap()
    }
}

/// The worked-example schedule: 12,000 at 12% over 12 months with a 2%
/// admin fee, equal-installment policy. Shared read-only across tests.
pub static STANDARD_SCHEDULE: Lazy<Vec<TermEntry>> = Lazy::new(|| {
    compute_schedule(
        &LoanBuilder::new().build(),
        AmortizationPolicy::EqualInstallment,
    )
    .unwrap()
});
