//! Domain events for the loan aggregate
//!
//! Events represent significant changes to a loan's ledger. Consumers that
//! keep derived views (dashboards, reports) recompute on receipt of an
//! event - an explicit trigger, rather than ambient re-fetching.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{LoanNumber, Money, PaymentNumber};

/// Domain events emitted by the loan servicing operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LoanEvent {
    /// A payment was recorded and applied to the loan balance
    PaymentRecorded {
        loan_number: LoanNumber,
        payment_number: PaymentNumber,
        amount: Money,
        balance_after: Money,
        payment_date: NaiveDate,
        timestamp: DateTime<Utc>,
    },

    /// A payment was edited and the delta applied to the loan balance
    PaymentAdjusted {
        loan_number: LoanNumber,
        payment_number: PaymentNumber,
        previous_amount: Money,
        new_amount: Money,
        balance_after: Money,
        timestamp: DateTime<Utc>,
    },

    /// A payment was deleted and its amount restored to the loan balance
    PaymentReversed {
        loan_number: LoanNumber,
        payment_number: PaymentNumber,
        amount: Money,
        balance_after: Money,
        timestamp: DateTime<Utc>,
    },

    /// The outstanding balance reached zero
    LoanSettled {
        loan_number: LoanNumber,
        timestamp: DateTime<Utc>,
    },

    /// The loan and all of its payments were removed
    LoanRemoved {
        loan_number: LoanNumber,
        payments_removed: usize,
        timestamp: DateTime<Utc>,
    },
}

impl LoanEvent {
    /// Returns the loan this event concerns
    pub fn loan_number(&self) -> &LoanNumber {
        match self {
            LoanEvent::PaymentRecorded { loan_number, .. }
            | LoanEvent::PaymentAdjusted { loan_number, .. }
            | LoanEvent::PaymentReversed { loan_number, .. }
            | LoanEvent::LoanSettled { loan_number, .. }
            | LoanEvent::LoanRemoved { loan_number, .. } => loan_number,
        }
    }
}
