//! Delinquency and repayment progress
//!
//! Classifies how a loan is tracking against its schedule: how many terms
//! have elapsed, how many the recorded payments cover, and whether the loan
//! is behind. The assessment is advisory - it never mutates the loan or its
//! payments; it only informs messaging such as the delinquency notice
//! appended to payment descriptions.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{whole_months_between, Currency, Money};

use crate::loan::Loan;
use crate::payment::Payment;
use crate::schedule::{average_monthly_payment, TermEntry};

/// A loan's standing against its schedule as of a given date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingReport {
    /// Date the assessment was made against
    pub as_of: NaiveDate,
    /// Whole months elapsed since the loan start, capped at the term count
    pub terms_elapsed: u32,
    /// Terms the cumulative payments cover
    pub terms_paid_for: u32,
    /// Elapsed terms not covered by payments
    pub unpaid_term_count: u32,
    /// Cumulative amount behind schedule
    pub amount_past_due: Decimal,
    /// Sum of all recorded payment amounts
    pub total_paid: Decimal,
    /// True when at least one elapsed term is unpaid
    pub is_delinquent: bool,
}

/// Assesses a loan's standing against its schedule and payment history
///
/// Terms elapse by whole calendar months from the loan start to `as_of`,
/// or to the latest recorded payment date when that is later. The expected
/// cumulative due is read off the schedule entries themselves; the unpaid
/// term count is the shortfall expressed in average monthly payments,
/// rounded up and clamped at zero.
pub fn assess_standing(
    loan: &Loan,
    schedule: &[TermEntry],
    payments: &[Payment],
    as_of: NaiveDate,
) -> StandingReport {
    let effective_date = payments
        .iter()
        .map(|p| p.payment_date)
        .max()
        .map_or(as_of, |latest| latest.max(as_of));

    let terms_elapsed =
        whole_months_between(loan.start_date, effective_date).min(schedule.len() as u32);

    let total_paid: Decimal = payments
        .iter()
        .map(|p| p.amount.amount())
        .sum::<Decimal>()
        .round_dp(2);

    let expected_cumulative_due: Decimal = schedule
        .iter()
        .take(terms_elapsed as usize)
        .map(|t| t.total_due)
        .sum();

    let average_payment = average_monthly_payment(schedule);
    let unpaid_term_count = if average_payment <= Decimal::ZERO {
        0
    } else {
        let shortfall = (expected_cumulative_due - total_paid) / average_payment;
        shortfall.ceil().max(Decimal::ZERO).to_u32().unwrap_or(0)
    };

    let is_delinquent = unpaid_term_count > 0;
    let amount_past_due = if is_delinquent {
        (Decimal::from(unpaid_term_count) * average_payment).round_dp(2)
    } else {
        Decimal::ZERO
    };

    StandingReport {
        as_of,
        terms_elapsed,
        terms_paid_for: terms_elapsed.saturating_sub(unpaid_term_count),
        unpaid_term_count,
        amount_past_due,
        total_paid,
        is_delinquent,
    }
}

/// Renders the notice appended to a payment description when the loan is
/// behind schedule. Returns `None` for a loan in good standing.
pub fn delinquency_notice(report: &StandingReport, currency: Currency) -> Option<String> {
    if !report.is_delinquent {
        return None;
    }
    Some(format!(
        "Delinquency notice: {} term(s) unpaid, {} past due as of {}.",
        report.unpaid_term_count,
        Money::new(report.amount_past_due, currency),
        report.as_of,
    ))
}
