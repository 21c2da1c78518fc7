//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{Currency, Money, Rate};
use domain_loan::{AmortizationPolicy, Loan};

use crate::builders::LoanBuilder;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::USD),
        Just(Currency::EUR),
        Just(Currency::GBP),
        Just(Currency::ZAR),
        Just(Currency::CHF),
        Just(Currency::AUD),
        Just(Currency::CAD),
        Just(Currency::INR),
        Just(Currency::SGD),
    ]
}

/// Strategy for generating positive principal amounts (100.00 to 5,000,000.00)
pub fn principal_strategy() -> impl Strategy<Value = Decimal> {
    (10_000i64..500_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for generating annual interest rates between 0% and 30%
pub fn annual_rate_strategy() -> impl Strategy<Value = Rate> {
    (0u32..3000u32).prop_map(|bps| Rate::new(Decimal::new(bps as i64, 4)))
}

/// Strategy for generating admin fee rates between 0% and 5%
pub fn admin_fee_rate_strategy() -> impl Strategy<Value = Rate> {
    (0u32..500u32).prop_map(|bps| Rate::new(Decimal::new(bps as i64, 4)))
}

/// Strategy for generating term counts between 1 and 60 months
pub fn term_count_strategy() -> impl Strategy<Value = u32> {
    1u32..=60u32
}

/// Strategy for generating amortization policies
pub fn policy_strategy() -> impl Strategy<Value = AmortizationPolicy> {
    prop_oneof![
        Just(AmortizationPolicy::EqualPrincipal),
        Just(AmortizationPolicy::EqualInstallment),
    ]
}

/// Strategy for generating valid loans over the full parameter space
pub fn loan_strategy() -> impl Strategy<Value = Loan> {
    (
        principal_strategy(),
        annual_rate_strategy(),
        term_count_strategy(),
        admin_fee_rate_strategy(),
    )
        .prop_map(|(principal, rate, term_count, fee_rate)| {
            LoanBuilder::new()
                .with_principal(Money::new(principal, Currency::USD))
                .with_annual_rate(rate)
                .with_term_count(term_count)
                .with_admin_fee_rate(fee_rate)
                .build()
        })
}

/// Strategy for generating payment amounts small enough to never overdraw
/// the loans produced by [`loan_strategy`]
pub fn small_payment_strategy() -> impl Strategy<Value = Money> {
    (1i64..10_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2), Currency::USD))
}

/// Strategy for generating rates that are occasionally exactly zero
pub fn rate_or_zero_strategy() -> impl Strategy<Value = Rate> {
    prop_oneof![
        2 => annual_rate_strategy(),
        1 => Just(Rate::new(dec!(0))),
    ]
}
