//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use rust_decimal::Decimal;

use core_kernel::Money;
use domain_loan::TermEntry;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than
/// the tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts the structural invariants every amortization schedule must hold:
/// the balance chain is contiguous, principal sums to the financed amount
/// exactly, the final balance is zero, and the admin fee only appears on
/// term 1.
///
/// # Panics
///
/// Panics with a description of the violated invariant
pub fn assert_schedule_coherent(schedule: &[TermEntry], principal: Decimal) {
    assert!(!schedule.is_empty(), "schedule must not be empty");

    assert_eq!(
        schedule[0].beginning_balance, principal,
        "first beginning balance must equal the principal"
    );
    for window in schedule.windows(2) {
        assert_eq!(
            window[1].beginning_balance, window[0].ending_balance,
            "balance chain broken between terms {} and {}",
            window[0].term_number, window[1].term_number
        );
        assert_eq!(
            window[1].admin_fee,
            Decimal::ZERO,
            "admin fee must only appear on term 1"
        );
    }
    assert_eq!(
        schedule.last().unwrap().ending_balance,
        Decimal::ZERO,
        "final ending balance must be exactly zero"
    );

    let principal_sum: Decimal = schedule.iter().map(|t| t.principal).sum();
    assert_eq!(
        principal_sum, principal,
        "schedule principal must sum to the financed amount exactly"
    );
}
