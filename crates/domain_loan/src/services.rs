//! Loan servicing operations
//!
//! `LoanServicing` orchestrates the flows that pair a reconciliation
//! mutation with the matching ledger write: recording, amending, and
//! voiding payments, plus cascade removal of a loan. Each flow applies the
//! balance change through the loan store's atomic update and, if the paired
//! payment write then fails, compensates the loan so the two stores do not
//! desynchronize.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use core_kernel::{LoanNumber, Money, PaymentNumber};

use crate::error::LoanError;
use crate::events::LoanEvent;
use crate::loan::{Loan, LoanStatus};
use crate::payment::Payment;
use crate::ports::{LoanStore, PaymentStore};
use crate::reconciliation;
use crate::schedule::{compute_schedule, AmortizationPolicy, TermEntry};
use crate::standing::{assess_standing, delinquency_notice, StandingReport};

/// Request to record a payment against a loan
#[derive(Debug, Clone)]
pub struct RecordPaymentRequest {
    /// Loan being paid
    pub loan_number: LoanNumber,
    /// 1-based term the payment is made against
    pub term_number: u32,
    /// Amount paid
    pub amount: Money,
    /// Date the payment was received
    pub payment_date: NaiveDate,
    /// Optional free-text note
    pub description: Option<String>,
}

/// Domain service for loan and payment lifecycle operations
pub struct LoanServicing {
    loans: Arc<dyn LoanStore>,
    payments: Arc<dyn PaymentStore>,
    policy: AmortizationPolicy,
}

impl LoanServicing {
    /// Creates a servicing facade over the given stores with the default
    /// amortization policy
    pub fn new(loans: Arc<dyn LoanStore>, payments: Arc<dyn PaymentStore>) -> Self {
        Self {
            loans,
            payments,
            policy: AmortizationPolicy::default(),
        }
    }

    /// Overrides the amortization policy
    pub fn with_policy(mut self, policy: AmortizationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the amortization policy in effect
    pub fn policy(&self) -> AmortizationPolicy {
        self.policy
    }

    /// Registers a new loan
    pub async fn open_loan(&self, loan: Loan) -> Result<(), LoanError> {
        info!(loan = %loan.loan_number, principal = %loan.principal, "loan opened");
        self.loans.insert_loan(loan).await
    }

    /// Projects the amortization schedule for a stored loan
    pub async fn projected_schedule(
        &self,
        loan_number: &LoanNumber,
    ) -> Result<Vec<TermEntry>, LoanError> {
        let loan = self.loans.fetch_loan(loan_number).await?;
        compute_schedule(&loan, self.policy)
    }

    /// Assesses a stored loan's standing as of the given date
    pub async fn standing(
        &self,
        loan_number: &LoanNumber,
        as_of: NaiveDate,
    ) -> Result<StandingReport, LoanError> {
        let loan = self.loans.fetch_loan(loan_number).await?;
        let schedule = compute_schedule(&loan, self.policy)?;
        let ledger = self.payments.payments_for_loan(loan_number).await?;
        Ok(assess_standing(&loan, &schedule, &ledger, as_of))
    }

    /// Records a payment: applies it to the loan balance atomically, then
    /// writes the ledger entry with the post-payment balance snapshot, the
    /// schedule-derived interest and fee components, and a delinquency
    /// notice when the loan is behind.
    ///
    /// If the ledger write fails after the balance was updated, the balance
    /// update is compensated and the error returned; the payment is not
    /// recorded.
    pub async fn record_payment(
        &self,
        request: RecordPaymentRequest,
    ) -> Result<(Payment, Vec<LoanEvent>), LoanError> {
        let loan = self.loans.fetch_loan(&request.loan_number).await?;
        let schedule = compute_schedule(&loan, self.policy)?;
        if request.term_number == 0 || request.term_number > loan.term_count {
            return Err(LoanError::InvalidTermCount(request.term_number));
        }
        let term = &schedule[(request.term_number - 1) as usize];
        let history = self.payments.payments_for_loan(&request.loan_number).await?;

        let amount = request.amount;
        // Whether this application charged the one-time fee is decided
        // inside the atomic update, against the stored loan, not against
        // the copy fetched above.
        let fee_charged_here = Arc::new(AtomicBool::new(false));
        let fee_flag = fee_charged_here.clone();
        let updated = self
            .loans
            .update_loan(
                &request.loan_number,
                Box::new(move |l| {
                    let was_uncharged = !l.admin_fee_charged;
                    reconciliation::apply_payment(l, amount)?;
                    if was_uncharged {
                        fee_flag.store(true, Ordering::SeqCst);
                    }
                    Ok(())
                }),
            )
            .await?;
        let fee_charged = fee_charged_here.load(Ordering::SeqCst);

        let mut payment = Payment::new(
            PaymentNumber::generate(),
            loan.loan_number.clone(),
            loan.client_number.clone(),
            request.payment_date,
            request.amount,
            updated.outstanding_balance,
        )
        .with_scheduled_date(term.scheduled_date)
        .with_interest_earned(Money::new(term.interest, loan.currency()));
        if fee_charged {
            payment = payment.with_admin_fee(loan.admin_fee_amount());
        }
        if let Some(description) = request.description.clone() {
            payment = payment.with_description(description);
        }

        let mut ledger = history;
        ledger.push(payment.clone());
        let report = assess_standing(&loan, &schedule, &ledger, request.payment_date);
        if let Some(notice) = delinquency_notice(&report, loan.currency()) {
            payment.append_note(&notice);
        }

        if let Err(insert_error) = self.payments.insert_payment(payment.clone()).await {
            warn!(
                loan = %request.loan_number,
                "payment write failed, compensating balance update"
            );
            let fee_amount = loan.admin_fee_amount();
            let compensation = self
                .loans
                .update_loan(
                    &request.loan_number,
                    Box::new(move |l| {
                        reconciliation::reverse_payment(l, amount)?;
                        if fee_charged {
                            l.outstanding_balance = l
                                .outstanding_balance
                                .checked_sub(&fee_amount)?
                                .round_to_currency();
                            l.admin_fee_charged = false;
                        }
                        Ok(())
                    }),
                )
                .await;
            if let Err(compensation_error) = compensation {
                warn!(
                    loan = %request.loan_number,
                    error = %compensation_error,
                    "compensation failed; loan balance and ledger are desynchronized"
                );
            }
            return Err(insert_error);
        }

        info!(
            loan = %request.loan_number,
            payment = %payment.payment_number,
            amount = %request.amount,
            balance = %updated.outstanding_balance,
            "payment recorded"
        );

        let mut events = vec![LoanEvent::PaymentRecorded {
            loan_number: loan.loan_number.clone(),
            payment_number: payment.payment_number.clone(),
            amount: payment.amount,
            balance_after: updated.outstanding_balance,
            payment_date: request.payment_date,
            timestamp: Utc::now(),
        }];
        if updated.status() == LoanStatus::Settled {
            events.push(LoanEvent::LoanSettled {
                loan_number: loan.loan_number.clone(),
                timestamp: Utc::now(),
            });
        }

        Ok((payment, events))
    }

    /// Amends a recorded payment's amount, applying the delta to the loan
    /// balance atomically and refreshing the payment's balance snapshot.
    pub async fn amend_payment(
        &self,
        payment_number: &PaymentNumber,
        new_amount: Money,
    ) -> Result<(Payment, Vec<LoanEvent>), LoanError> {
        let mut payment = self.payments.fetch_payment(payment_number).await?;
        let previous_amount = payment.amount;

        let updated_loan = self
            .loans
            .update_loan(
                &payment.loan_number,
                Box::new(move |l| {
                    reconciliation::adjust_payment(l, previous_amount, new_amount).map(|_| ())
                }),
            )
            .await?;

        payment.reprice(new_amount, updated_loan.outstanding_balance);

        if let Err(replace_error) = self.payments.replace_payment(payment.clone()).await {
            warn!(
                payment = %payment_number,
                "payment rewrite failed, compensating balance update"
            );
            let compensation = self
                .loans
                .update_loan(
                    &payment.loan_number,
                    Box::new(move |l| {
                        reconciliation::adjust_payment(l, new_amount, previous_amount).map(|_| ())
                    }),
                )
                .await;
            if let Err(compensation_error) = compensation {
                warn!(
                    payment = %payment_number,
                    error = %compensation_error,
                    "compensation failed; loan balance and ledger are desynchronized"
                );
            }
            return Err(replace_error);
        }

        info!(
            payment = %payment_number,
            previous = %previous_amount,
            new = %payment.amount,
            balance = %updated_loan.outstanding_balance,
            "payment amended"
        );

        let mut events = vec![LoanEvent::PaymentAdjusted {
            loan_number: payment.loan_number.clone(),
            payment_number: payment.payment_number.clone(),
            previous_amount,
            new_amount: payment.amount,
            balance_after: updated_loan.outstanding_balance,
            timestamp: Utc::now(),
        }];
        if updated_loan.status() == LoanStatus::Settled {
            events.push(LoanEvent::LoanSettled {
                loan_number: payment.loan_number.clone(),
                timestamp: Utc::now(),
            });
        }

        Ok((payment, events))
    }

    /// Voids a payment: removes the ledger entry and restores its amount to
    /// the loan balance. A payment whose loan no longer exists is removed
    /// without a balance change.
    pub async fn void_payment(
        &self,
        payment_number: &PaymentNumber,
    ) -> Result<(Payment, Vec<LoanEvent>), LoanError> {
        let payment = self.payments.remove_payment(payment_number).await?;
        let amount = payment.amount;

        match self
            .loans
            .update_loan(
                &payment.loan_number,
                Box::new(move |l| reconciliation::reverse_payment(l, amount).map(|_| ())),
            )
            .await
        {
            Ok(updated) => {
                info!(
                    payment = %payment_number,
                    loan = %payment.loan_number,
                    amount = %amount,
                    balance = %updated.outstanding_balance,
                    "payment voided"
                );
                let events = vec![LoanEvent::PaymentReversed {
                    loan_number: payment.loan_number.clone(),
                    payment_number: payment.payment_number.clone(),
                    amount,
                    balance_after: updated.outstanding_balance,
                    timestamp: Utc::now(),
                }];
                Ok((payment, events))
            }
            Err(LoanError::LoanNotFound(_)) => {
                // Orphaned ledger entry; nothing to restore.
                warn!(
                    payment = %payment_number,
                    loan = %payment.loan_number,
                    "voided payment for a missing loan, no balance to restore"
                );
                Ok((payment, Vec::new()))
            }
            Err(update_error) => {
                let compensation = self.payments.insert_payment(payment.clone()).await;
                if let Err(compensation_error) = compensation {
                    warn!(
                        payment = %payment_number,
                        error = %compensation_error,
                        "compensation failed; loan balance and ledger are desynchronized"
                    );
                }
                Err(update_error)
            }
        }
    }

    /// Removes a loan, cascading over its payments first
    pub async fn remove_loan(&self, loan_number: &LoanNumber) -> Result<Vec<LoanEvent>, LoanError> {
        let ledger = self.payments.payments_for_loan(loan_number).await?;
        for payment in &ledger {
            self.payments.remove_payment(&payment.payment_number).await?;
        }
        self.loans.remove_loan(loan_number).await?;

        info!(
            loan = %loan_number,
            payments = ledger.len(),
            "loan removed with cascade"
        );

        Ok(vec![LoanEvent::LoanRemoved {
            loan_number: loan_number.clone(),
            payments_removed: ledger.len(),
            timestamp: Utc::now(),
        }])
    }
}
