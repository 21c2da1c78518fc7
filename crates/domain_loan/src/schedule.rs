//! Amortization engine
//!
//! Projects a loan's full payment schedule: one entry per term with the
//! principal/interest/fee/balance breakdown. The projection is a pure
//! function of the loan parameters: no I/O, no clock, so the same input
//! always yields the same schedule. It is also currency-agnostic - all
//! monetary fields are raw decimals, with the loan's currency attached at
//! the display boundary.
//!
//! # Rounding
//!
//! Every monetary subcomponent is rounded to 2 decimal places at each step.
//! The rounding residual is absorbed into the final term's principal, so
//! the schedule's principal column sums to the financed amount exactly and
//! the final ending balance is exactly zero.
//!
//! # Dates
//!
//! The first term falls due 30 days after the start date - a deliberate
//! offset so the first due date never collides with the start date itself.
//! Each later term falls due one calendar month after the previous one,
//! with the day-of-month clamped to the shorter month's last day.

use chrono::NaiveDate;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{add_days, add_months};

use crate::error::LoanError;
use crate::loan::Loan;

/// Days between the loan start date and the first term's due date
pub const FIRST_TERM_OFFSET_DAYS: u64 = 30;

/// How principal and interest are split across terms
///
/// Exactly one policy applies to a schedule; policies are never mixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationPolicy {
    /// Constant principal per term (`principal / term_count`); interest is
    /// charged on the remaining balance, so the total payment shrinks as
    /// the balance does.
    EqualPrincipal,
    /// Constant total payment per term from the standard annuity formula
    /// `P * r / (1 - (1+r)^-n)`; the principal portion grows over time.
    /// This is the conventional loan-servicing policy and the default.
    #[default]
    EqualInstallment,
}

/// One term of an amortization schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermEntry {
    /// 1-based term number
    pub term_number: u32,
    /// Date this term falls due
    pub scheduled_date: NaiveDate,
    /// Principal portion
    pub principal: Decimal,
    /// Interest portion (remaining balance * monthly rate)
    pub interest: Decimal,
    /// Admin fee portion; non-zero only on term 1
    pub admin_fee: Decimal,
    /// Principal + interest + admin fee
    pub total_due: Decimal,
    /// Balance before this term's principal is repaid
    pub beginning_balance: Decimal,
    /// Balance after this term's principal is repaid
    pub ending_balance: Decimal,
}

/// Totals across a schedule, as shown on the projected-payments report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub total_due: Decimal,
    pub principal: Decimal,
    pub interest: Decimal,
    pub admin_fee: Decimal,
}

/// Computes the full amortization schedule for a loan
///
/// # Errors
///
/// - `InvalidTermCount` for a zero term count
/// - `InvalidLoanParameters` for a non-positive principal or negative rates
/// - `InvalidStartDate` when a due date falls out of the representable range
pub fn compute_schedule(
    loan: &Loan,
    policy: AmortizationPolicy,
) -> Result<Vec<TermEntry>, LoanError> {
    let principal = loan.principal.amount().round_dp(2);
    let annual_rate = loan.annual_interest_rate.as_decimal();
    let fee_rate = loan.admin_fee_rate.as_decimal();
    let term_count = loan.term_count;

    if term_count == 0 {
        return Err(LoanError::InvalidTermCount(term_count));
    }
    if principal <= Decimal::ZERO {
        return Err(LoanError::InvalidLoanParameters(format!(
            "principal must be positive, got {}",
            principal
        )));
    }
    if annual_rate < Decimal::ZERO || fee_rate < Decimal::ZERO {
        return Err(LoanError::InvalidLoanParameters(
            "rates must not be negative".to_string(),
        ));
    }

    let monthly_rate = annual_rate / dec!(12);
    let admin_fee = (principal * fee_rate).round_dp(2);
    let level_principal = (principal / Decimal::from(term_count)).round_dp(2);
    let installment = match policy {
        AmortizationPolicy::EqualInstallment => {
            annuity_installment(principal, monthly_rate, term_count)
        }
        AmortizationPolicy::EqualPrincipal => Decimal::ZERO,
    };

    let mut due_date = add_days(loan.start_date, FIRST_TERM_OFFSET_DAYS)
        .map_err(|_| LoanError::InvalidStartDate(loan.start_date.to_string()))?;
    let mut balance = principal;
    let mut entries = Vec::with_capacity(term_count as usize);

    for term_number in 1..=term_count {
        let interest = (balance * monthly_rate).round_dp(2);
        let principal_part = if term_number == term_count {
            // Final term clears the remaining balance exactly, absorbing
            // the rounding residual of the earlier terms.
            balance
        } else {
            match policy {
                AmortizationPolicy::EqualPrincipal => level_principal,
                AmortizationPolicy::EqualInstallment => (installment - interest).round_dp(2),
            }
        };
        let fee = if term_number == 1 { admin_fee } else { Decimal::ZERO };
        let total_due = (principal_part + interest + fee).round_dp(2);
        let ending_balance = (balance - principal_part).round_dp(2);

        entries.push(TermEntry {
            term_number,
            scheduled_date: due_date,
            principal: principal_part,
            interest,
            admin_fee: fee,
            total_due,
            beginning_balance: balance,
            ending_balance,
        });

        balance = ending_balance;
        if term_number < term_count {
            due_date = add_months(due_date, 1)
                .map_err(|_| LoanError::InvalidStartDate(due_date.to_string()))?;
        }
    }

    Ok(entries)
}

/// Fixed total payment per term under the annuity formula
///
/// Degenerates to a straight principal split when the rate is zero.
fn annuity_installment(principal: Decimal, monthly_rate: Decimal, term_count: u32) -> Decimal {
    if monthly_rate.is_zero() {
        return (principal / Decimal::from(term_count)).round_dp(2);
    }
    let growth = (Decimal::ONE + monthly_rate).powi(term_count as i64);
    (principal * monthly_rate * growth / (growth - Decimal::ONE)).round_dp(2)
}

/// Sums a schedule into its totals row
pub fn schedule_totals(schedule: &[TermEntry]) -> ScheduleTotals {
    ScheduleTotals {
        total_due: schedule.iter().map(|t| t.total_due).sum(),
        principal: schedule.iter().map(|t| t.principal).sum(),
        interest: schedule.iter().map(|t| t.interest).sum(),
        admin_fee: schedule.iter().map(|t| t.admin_fee).sum(),
    }
}

/// Average monthly payment across a schedule, excluding the one-time admin
/// fee (principal plus interest over the term count)
pub fn average_monthly_payment(schedule: &[TermEntry]) -> Decimal {
    if schedule.is_empty() {
        return Decimal::ZERO;
    }
    let repayable: Decimal = schedule.iter().map(|t| t.principal + t.interest).sum();
    (repayable / Decimal::from(schedule.len() as u64)).round_dp(2)
}
