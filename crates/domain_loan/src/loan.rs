//! Loan Aggregate Root
//!
//! The Loan aggregate is the consistency boundary for a single loan: its
//! financed amount, rates, term, running outstanding balance, and derived
//! dates.
//!
//! # Invariants
//!
//! - `outstanding_balance >= 0` at all times; reconciliation rejects any
//!   payment that would drive it negative
//! - `term_count >= 1`
//! - `end_date` is fully determined by `start_date` plus `term_count`
//!   calendar months (day clamped to the shorter month) and is recomputed
//!   whenever either changes
//! - The one-time admin fee is charged at most once, gated by
//!   `admin_fee_charged`

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{
    add_months, parse_iso_date, ClientNumber, Currency, LoanId, LoanNumber, Money, Rate,
};

use crate::error::LoanError;
use crate::schedule::{compute_schedule, AmortizationPolicy, TermEntry};

/// Loan lifecycle status, derived from the outstanding balance
///
/// A settled loan never becomes active again: any further payment is
/// rejected because it would exceed the zero balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Outstanding balance remains to be repaid
    Active,
    /// Outstanding balance has reached zero
    Settled,
}

/// A loan record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    /// Unique identifier
    pub id: LoanId,
    /// Human-readable loan reference, immutable after creation
    pub loan_number: LoanNumber,
    /// Reference to the borrowing client (application-level lookup only)
    pub client_number: ClientNumber,
    /// Amount financed
    pub principal: Money,
    /// Annual interest rate, applied monthly as rate/12
    pub annual_interest_rate: Rate,
    /// Number of monthly installments
    pub term_count: u32,
    /// One-time admin fee as a fraction of principal
    pub admin_fee_rate: Rate,
    /// Whether the one-time admin fee has been charged
    pub admin_fee_charged: bool,
    /// Running balance, mutated only by reconciliation
    pub outstanding_balance: Money,
    /// Date the loan was taken out
    pub start_date: NaiveDate,
    /// Derived: start date plus term_count calendar months
    pub end_date: NaiveDate,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Loan {
    /// Creates a new loan
    ///
    /// The outstanding balance is seeded with the principal only; the admin
    /// fee is charged exactly once, by reconciliation, when the first
    /// payment is recorded.
    ///
    /// # Errors
    ///
    /// - `InvalidLoanParameters` for a non-positive principal or a negative
    ///   rate
    /// - `InvalidTermCount` for a zero term count
    /// - `InvalidStartDate` when the end date is not representable
    pub fn new(
        loan_number: LoanNumber,
        client_number: ClientNumber,
        principal: Money,
        annual_interest_rate: Rate,
        term_count: u32,
        admin_fee_rate: Rate,
        start_date: NaiveDate,
    ) -> Result<Self, LoanError> {
        if !principal.is_positive() {
            return Err(LoanError::InvalidLoanParameters(format!(
                "principal must be positive, got {}",
                principal.amount()
            )));
        }
        if annual_interest_rate.is_negative() {
            return Err(LoanError::InvalidLoanParameters(format!(
                "annual interest rate must not be negative, got {}",
                annual_interest_rate.as_decimal()
            )));
        }
        if admin_fee_rate.is_negative() {
            return Err(LoanError::InvalidLoanParameters(format!(
                "admin fee rate must not be negative, got {}",
                admin_fee_rate.as_decimal()
            )));
        }
        if term_count == 0 {
            return Err(LoanError::InvalidTermCount(term_count));
        }
        let end_date = derive_end_date(start_date, term_count)?;

        let now = Utc::now();
        Ok(Self {
            id: LoanId::new_v7(),
            loan_number,
            client_number,
            principal: principal.round_to_currency(),
            annual_interest_rate,
            term_count,
            admin_fee_rate,
            admin_fee_charged: false,
            outstanding_balance: principal.round_to_currency(),
            start_date,
            end_date,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the loan's currency
    pub fn currency(&self) -> Currency {
        self.principal.currency()
    }

    /// Returns the one-time admin fee amount (principal * admin fee rate)
    pub fn admin_fee_amount(&self) -> Money {
        self.admin_fee_rate.apply(&self.principal).round_to_currency()
    }

    /// Returns the derived lifecycle status
    pub fn status(&self) -> LoanStatus {
        if self.outstanding_balance.is_zero() {
            LoanStatus::Settled
        } else {
            LoanStatus::Active
        }
    }

    /// Moves the start date, recomputing the end date
    pub fn set_start_date(&mut self, start_date: NaiveDate) -> Result<(), LoanError> {
        self.end_date = derive_end_date(start_date, self.term_count)?;
        self.start_date = start_date;
        self.touch();
        Ok(())
    }

    /// Changes the term count, recomputing the end date
    pub fn set_term_count(&mut self, term_count: u32) -> Result<(), LoanError> {
        if term_count == 0 {
            return Err(LoanError::InvalidTermCount(term_count));
        }
        self.end_date = derive_end_date(self.start_date, term_count)?;
        self.term_count = term_count;
        self.touch();
        Ok(())
    }

    /// Projects the full amortization schedule for this loan
    pub fn schedule(&self, policy: AmortizationPolicy) -> Result<Vec<TermEntry>, LoanError> {
        compute_schedule(self, policy)
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn derive_end_date(start_date: NaiveDate, term_count: u32) -> Result<NaiveDate, LoanError> {
    add_months(start_date, term_count).map_err(|_| LoanError::InvalidStartDate(start_date.to_string()))
}

/// Parses a date-only ISO-8601 start date as it crosses the boundary
/// ("2024-01-01"); anything else is an invalid start date.
pub fn parse_start_date(value: &str) -> Result<NaiveDate, LoanError> {
    parse_iso_date(value).map_err(|_| LoanError::InvalidStartDate(value.to_string()))
}
