//! Loan Domain - amortization, standing, and balance reconciliation
//!
//! This crate implements the calculation and servicing core of the loan
//! back office. Three calculation components sit at its heart:
//!
//! - **Amortization engine** ([`schedule`]): projects the full payment
//!   schedule for a loan under a selectable policy. Pure and
//!   deterministic - the same loan always yields the same schedule.
//! - **Standing calculator** ([`standing`]): classifies a loan against its
//!   schedule and payment history. Advisory only.
//! - **Balance reconciliation** ([`reconciliation`]): the only code that
//!   mutates a loan's outstanding balance, on payment create/edit/delete.
//!
//! Around them, the [`services`] layer pairs each balance mutation with the
//! matching ledger write through the storage [`ports`], compensating when
//! the pair cannot complete, and emits [`events`] as explicit recomputation
//! triggers for derived views.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_loan::{AmortizationPolicy, Loan};
//!
//! let loan = Loan::new(loan_number, client_number, principal,
//!     annual_rate, 12, admin_fee_rate, start_date)?;
//!
//! let schedule = loan.schedule(AmortizationPolicy::EqualInstallment)?;
//! assert_eq!(schedule.last().unwrap().ending_balance, Decimal::ZERO);
//! ```

pub mod adapters;
pub mod error;
pub mod events;
pub mod loan;
pub mod payment;
pub mod ports;
pub mod reconciliation;
pub mod schedule;
pub mod services;
pub mod standing;

pub use adapters::InMemoryStore;
pub use error::LoanError;
pub use events::LoanEvent;
pub use loan::{parse_start_date, Loan, LoanStatus};
pub use payment::Payment;
pub use ports::{LoanMutation, LoanStore, PaymentStore};
pub use reconciliation::{adjust_payment, apply_payment, reverse_payment};
pub use schedule::{
    average_monthly_payment, compute_schedule, schedule_totals, AmortizationPolicy, ScheduleTotals,
    TermEntry, FIRST_TERM_OFFSET_DAYS,
};
pub use services::{LoanServicing, RecordPaymentRequest};
pub use standing::{assess_standing, delinquency_notice, StandingReport};
