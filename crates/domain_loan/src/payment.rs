//! Payment ledger entries
//!
//! A payment records money received against a loan, together with a
//! point-in-time snapshot of the loan's balance immediately after the
//! payment was applied. The snapshot is a denormalization: it is never
//! recomputed when later payments change the loan.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClientNumber, LoanNumber, Money, PaymentId, PaymentNumber};

/// A payment recorded against a loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    /// Unique identifier
    pub id: PaymentId,
    /// Human-readable payment reference
    pub payment_number: PaymentNumber,
    /// Loan this payment belongs to (denormalized)
    pub loan_number: LoanNumber,
    /// Borrowing client (denormalized)
    pub client_number: ClientNumber,
    /// Due date of the term this payment was made against
    pub scheduled_date: Option<NaiveDate>,
    /// Date the payment was actually recorded
    pub payment_date: NaiveDate,
    /// Amount paid
    pub amount: Money,
    /// Loan balance immediately after this payment was applied
    pub outstanding_balance: Money,
    /// Interest component attributed to this payment
    pub interest_earned: Money,
    /// Admin fee component; non-zero only for the payment that charged it
    pub admin_fee: Money,
    /// Free text; may carry an auto-appended delinquency notice
    pub description: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Payment {
    /// Creates a new payment record
    pub fn new(
        payment_number: PaymentNumber,
        loan_number: LoanNumber,
        client_number: ClientNumber,
        payment_date: NaiveDate,
        amount: Money,
        outstanding_balance: Money,
    ) -> Self {
        let currency = amount.currency();
        let now = Utc::now();
        Self {
            id: PaymentId::new_v7(),
            payment_number,
            loan_number,
            client_number,
            scheduled_date: None,
            payment_date,
            amount: amount.round_to_currency(),
            outstanding_balance: outstanding_balance.round_to_currency(),
            interest_earned: Money::zero(currency),
            admin_fee: Money::zero(currency),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the term due date this payment was made against
    pub fn with_scheduled_date(mut self, scheduled_date: NaiveDate) -> Self {
        self.scheduled_date = Some(scheduled_date);
        self
    }

    /// Sets the interest component
    pub fn with_interest_earned(mut self, interest_earned: Money) -> Self {
        self.interest_earned = interest_earned.round_to_currency();
        self
    }

    /// Sets the admin fee component
    pub fn with_admin_fee(mut self, admin_fee: Money) -> Self {
        self.admin_fee = admin_fee.round_to_currency();
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Applies an edited amount and refreshes the balance snapshot
    pub fn reprice(&mut self, amount: Money, outstanding_balance: Money) {
        self.amount = amount.round_to_currency();
        self.outstanding_balance = outstanding_balance.round_to_currency();
        self.updated_at = Utc::now();
    }

    /// Appends a note to the description
    pub fn append_note(&mut self, note: &str) {
        self.description = Some(match self.description.take() {
            Some(existing) => format!("{}\n{}", existing, note),
            None => note.to_string(),
        });
        self.updated_at = Utc::now();
    }
}
