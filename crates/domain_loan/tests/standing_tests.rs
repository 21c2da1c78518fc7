//! Tests for the delinquency/progress calculator

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use core_kernel::{ClientNumber, Currency, LoanNumber, Money, PaymentNumber, Rate};
use domain_loan::{
    assess_standing, compute_schedule, delinquency_notice, AmortizationPolicy, Loan, Payment,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 1,200 interest-free over 12 months: every term is exactly 100, which
/// keeps the expected arithmetic legible.
fn flat_loan() -> Loan {
    Loan::new(
        LoanNumber::new("LN-2001").unwrap(),
        ClientNumber::new("CLI-2001").unwrap(),
        Money::new(dec!(1200), Currency::USD),
        Rate::new(dec!(0)),
        12,
        Rate::new(dec!(0)),
        date(2024, 1, 1),
    )
    .unwrap()
}

fn payment_of(loan: &Loan, amount: Decimal, on: NaiveDate) -> Payment {
    Payment::new(
        PaymentNumber::generate(),
        loan.loan_number.clone(),
        loan.client_number.clone(),
        on,
        Money::new(amount, Currency::USD),
        Money::zero(Currency::USD),
    )
}

#[test]
fn test_fresh_loan_is_not_delinquent() {
    let loan = flat_loan();
    let schedule = compute_schedule(&loan, AmortizationPolicy::EqualInstallment).unwrap();

    let report = assess_standing(&loan, &schedule, &[], date(2024, 1, 20));

    assert_eq!(report.terms_elapsed, 0);
    assert_eq!(report.unpaid_term_count, 0);
    assert!(!report.is_delinquent);
    assert_eq!(report.amount_past_due, Decimal::ZERO);
}

#[test]
fn test_unpaid_elapsed_terms_are_delinquent() {
    let loan = flat_loan();
    let schedule = compute_schedule(&loan, AmortizationPolicy::EqualInstallment).unwrap();

    // Five whole months in, nothing paid
    let report = assess_standing(&loan, &schedule, &[], date(2024, 6, 20));

    assert_eq!(report.terms_elapsed, 5);
    assert_eq!(report.unpaid_term_count, 5);
    assert_eq!(report.terms_paid_for, 0);
    assert_eq!(report.amount_past_due, dec!(500.00));
    assert!(report.is_delinquent);
}

#[test]
fn test_partial_payment_reduces_unpaid_terms() {
    let loan = flat_loan();
    let schedule = compute_schedule(&loan, AmortizationPolicy::EqualInstallment).unwrap();
    let payments = vec![payment_of(&loan, dec!(300), date(2024, 3, 1))];

    let report = assess_standing(&loan, &schedule, &payments, date(2024, 6, 20));

    assert_eq!(report.terms_elapsed, 5);
    assert_eq!(report.total_paid, dec!(300.00));
    assert_eq!(report.unpaid_term_count, 2);
    assert_eq!(report.terms_paid_for, 3);
    assert_eq!(report.amount_past_due, dec!(200.00));
}

#[test]
fn test_fully_paid_up_loan_is_current() {
    let loan = flat_loan();
    let schedule = compute_schedule(&loan, AmortizationPolicy::EqualInstallment).unwrap();
    let payments = vec![payment_of(&loan, dec!(500), date(2024, 6, 1))];

    let report = assess_standing(&loan, &schedule, &payments, date(2024, 6, 20));

    assert_eq!(report.terms_elapsed, 5);
    assert_eq!(report.unpaid_term_count, 0);
    assert_eq!(report.terms_paid_for, 5);
    assert!(!report.is_delinquent);
}

#[test]
fn test_partial_term_shortfall_rounds_up_to_a_whole_term() {
    let loan = flat_loan();
    let schedule = compute_schedule(&loan, AmortizationPolicy::EqualInstallment).unwrap();
    // 450 paid of 500 due: half a term short still counts as one unpaid term
    let payments = vec![payment_of(&loan, dec!(450), date(2024, 3, 1))];

    let report = assess_standing(&loan, &schedule, &payments, date(2024, 6, 20));

    assert_eq!(report.unpaid_term_count, 1);
    assert_eq!(report.amount_past_due, dec!(100.00));
}

#[test]
fn test_latest_payment_date_extends_the_assessment_window() {
    let loan = flat_loan();
    let schedule = compute_schedule(&loan, AmortizationPolicy::EqualInstallment).unwrap();
    // Payment recorded in August although we assess as of early February
    let payments = vec![payment_of(&loan, dec!(100), date(2024, 8, 1))];

    let report = assess_standing(&loan, &schedule, &payments, date(2024, 2, 2));

    assert_eq!(report.terms_elapsed, 7);
    assert_eq!(report.unpaid_term_count, 6);
}

#[test]
fn test_terms_elapsed_caps_at_term_count() {
    let loan = flat_loan();
    let schedule = compute_schedule(&loan, AmortizationPolicy::EqualInstallment).unwrap();

    let report = assess_standing(&loan, &schedule, &[], date(2030, 1, 1));

    assert_eq!(report.terms_elapsed, 12);
    assert_eq!(report.unpaid_term_count, 12);
    assert_eq!(report.amount_past_due, dec!(1200.00));
}

#[test]
fn test_first_term_admin_fee_counts_toward_expected_due() {
    let loan = Loan::new(
        LoanNumber::new("LN-2002").unwrap(),
        ClientNumber::new("CLI-2001").unwrap(),
        Money::new(dec!(1200), Currency::USD),
        Rate::new(dec!(0)),
        12,
        Rate::new(dec!(0.10)),
        date(2024, 1, 1),
    )
    .unwrap();
    let schedule = compute_schedule(&loan, AmortizationPolicy::EqualInstallment).unwrap();
    // Term 1 due is 100 + 120 fee; paying only the 100 leaves the fee owing
    let payments = vec![payment_of(&loan, dec!(100), date(2024, 2, 5))];

    let report = assess_standing(&loan, &schedule, &payments, date(2024, 3, 5));

    assert_eq!(report.terms_elapsed, 2);
    assert_eq!(report.unpaid_term_count, 3);
    assert!(report.is_delinquent);
}

#[test]
fn test_delinquency_notice_rendering() {
    let loan = flat_loan();
    let schedule = compute_schedule(&loan, AmortizationPolicy::EqualInstallment).unwrap();

    let current = assess_standing(&loan, &schedule, &[], date(2024, 1, 20));
    assert_eq!(delinquency_notice(&current, Currency::USD), None);

    let behind = assess_standing(&loan, &schedule, &[], date(2024, 6, 20));
    let notice = delinquency_notice(&behind, Currency::USD).unwrap();
    assert_eq!(
        notice,
        "Delinquency notice: 5 term(s) unpaid, $ 500.00 past due as of 2024-06-20."
    );
}
