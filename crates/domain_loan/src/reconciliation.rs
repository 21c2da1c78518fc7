//! Balance reconciliation
//!
//! The three operations that may touch a loan's outstanding balance:
//! applying a new payment, adjusting an edited one, and reversing a deleted
//! one. Each is all-or-nothing on the aggregate - a rejected operation
//! leaves the loan exactly as it was, including the admin fee flag.
//!
//! The one-time admin fee is charged here, lazily, on the first applied
//! payment (the balance is seeded without it at creation). Reversal makes
//! no attempt to un-charge the fee: once other payments may exist, deciding
//! whether the fee still belongs to the reversed one is ambiguous, so the
//! asymmetry is deliberate.

use core_kernel::Money;

use crate::error::LoanError;
use crate::loan::Loan;

/// Applies a payment to the loan, charging the one-time admin fee first if
/// it is still unpaid, and returns the new outstanding balance.
///
/// The overdraft check runs against the fee-inclusive balance. On
/// rejection nothing changes: the fee charge only persists together with
/// an accepted payment.
///
/// # Errors
///
/// - `InvalidLoanParameters` for a non-positive amount
/// - `PaymentExceedsBalance` when the amount overdraws the balance
/// - `Money` on a currency mismatch
pub fn apply_payment(loan: &mut Loan, amount: Money) -> Result<Money, LoanError> {
    let amount = amount.round_to_currency();
    if !amount.is_positive() {
        return Err(LoanError::InvalidLoanParameters(format!(
            "payment amount must be positive, got {}",
            amount.amount()
        )));
    }

    let fee_due = if loan.admin_fee_charged {
        Money::zero(loan.currency())
    } else {
        loan.admin_fee_amount()
    };
    let available = loan.outstanding_balance.checked_add(&fee_due)?;
    let next = available.checked_sub(&amount)?;
    if next.is_negative() {
        return Err(LoanError::PaymentExceedsBalance {
            amount: amount.amount(),
            balance: available.amount(),
        });
    }

    loan.admin_fee_charged = true;
    loan.outstanding_balance = next.round_to_currency();
    loan.touch();
    Ok(loan.outstanding_balance)
}

/// Reverses a deleted payment, restoring its amount to the balance, and
/// returns the new outstanding balance. The admin fee is never reversed.
pub fn reverse_payment(loan: &mut Loan, amount: Money) -> Result<Money, LoanError> {
    let amount = amount.round_to_currency();
    if amount.is_negative() {
        return Err(LoanError::InvalidLoanParameters(format!(
            "reversed amount must not be negative, got {}",
            amount.amount()
        )));
    }

    loan.outstanding_balance = loan
        .outstanding_balance
        .checked_add(&amount)?
        .round_to_currency();
    loan.touch();
    Ok(loan.outstanding_balance)
}

/// Adjusts an edited payment by applying the delta between the old and new
/// amounts, and returns the new outstanding balance.
///
/// # Errors
///
/// - `InvalidLoanParameters` for a non-positive new amount
/// - `PaymentExceedsBalance` when the increase overdraws the balance
/// - `Money` on a currency mismatch
pub fn adjust_payment(
    loan: &mut Loan,
    old_amount: Money,
    new_amount: Money,
) -> Result<Money, LoanError> {
    let old_amount = old_amount.round_to_currency();
    let new_amount = new_amount.round_to_currency();
    if !new_amount.is_positive() {
        return Err(LoanError::InvalidLoanParameters(format!(
            "adjusted payment amount must be positive, got {}",
            new_amount.amount()
        )));
    }

    let delta = new_amount.checked_sub(&old_amount)?;
    let next = loan.outstanding_balance.checked_sub(&delta)?;
    if next.is_negative() {
        return Err(LoanError::PaymentExceedsBalance {
            amount: new_amount.amount(),
            balance: loan.outstanding_balance.amount(),
        });
    }

    loan.outstanding_balance = next.round_to_currency();
    loan.touch();
    Ok(loan.outstanding_balance)
}
