//! In-memory storage adapter
//!
//! Backs the loan and payment ports with hash maps behind async RwLocks.
//! Used by the test suite and by embedders that do not need durable
//! storage.
//!
//! Loan mutations run against a staged clone under the write lock and are
//! committed only on success, so a rejected mutation (an overdrawing
//! payment, say) leaves the stored loan untouched and concurrent payments
//! against the same loan cannot lose updates.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use core_kernel::{LoanNumber, PaymentNumber, PortError};

use crate::error::LoanError;
use crate::loan::Loan;
use crate::payment::Payment;
use crate::ports::{LoanMutation, LoanStore, PaymentStore};

/// In-memory implementation of [`LoanStore`] and [`PaymentStore`]
#[derive(Debug, Default)]
pub struct InMemoryStore {
    loans: RwLock<HashMap<LoanNumber, Loan>>,
    payments: RwLock<HashMap<PaymentNumber, Payment>>,
}

impl InMemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LoanStore for InMemoryStore {
    async fn fetch_loan(&self, number: &LoanNumber) -> Result<Loan, LoanError> {
        let loans = self.loans.read().await;
        loans
            .get(number)
            .cloned()
            .ok_or_else(|| LoanError::LoanNotFound(number.to_string()))
    }

    async fn insert_loan(&self, loan: Loan) -> Result<(), LoanError> {
        let mut loans = self.loans.write().await;
        if loans.contains_key(&loan.loan_number) {
            return Err(LoanError::Storage(PortError::conflict(format!(
                "loan {} already exists",
                loan.loan_number
            ))));
        }
        loans.insert(loan.loan_number.clone(), loan);
        Ok(())
    }

    async fn update_loan(
        &self,
        number: &LoanNumber,
        mutation: LoanMutation<'_>,
    ) -> Result<Loan, LoanError> {
        let mut loans = self.loans.write().await;
        let slot = loans
            .get_mut(number)
            .ok_or_else(|| LoanError::LoanNotFound(number.to_string()))?;

        let mut staged = slot.clone();
        mutation(&mut staged)?;
        *slot = staged.clone();
        Ok(staged)
    }

    async fn remove_loan(&self, number: &LoanNumber) -> Result<Loan, LoanError> {
        let mut loans = self.loans.write().await;
        loans
            .remove(number)
            .ok_or_else(|| LoanError::LoanNotFound(number.to_string()))
    }

    async fn list_loans(&self) -> Result<Vec<Loan>, LoanError> {
        let loans = self.loans.read().await;
        let mut all: Vec<Loan> = loans.values().cloned().collect();
        all.sort_by(|a, b| a.loan_number.cmp(&b.loan_number));
        Ok(all)
    }
}

#[async_trait]
impl PaymentStore for InMemoryStore {
    async fn fetch_payment(&self, number: &PaymentNumber) -> Result<Payment, LoanError> {
        let payments = self.payments.read().await;
        payments
            .get(number)
            .cloned()
            .ok_or_else(|| LoanError::PaymentNotFound(number.to_string()))
    }

    async fn insert_payment(&self, payment: Payment) -> Result<(), LoanError> {
        let mut payments = self.payments.write().await;
        if payments.contains_key(&payment.payment_number) {
            return Err(LoanError::Storage(PortError::conflict(format!(
                "payment {} already exists",
                payment.payment_number
            ))));
        }
        payments.insert(payment.payment_number.clone(), payment);
        Ok(())
    }

    async fn replace_payment(&self, payment: Payment) -> Result<(), LoanError> {
        let mut payments = self.payments.write().await;
        if !payments.contains_key(&payment.payment_number) {
            return Err(LoanError::PaymentNotFound(payment.payment_number.to_string()));
        }
        payments.insert(payment.payment_number.clone(), payment);
        Ok(())
    }

    async fn remove_payment(&self, number: &PaymentNumber) -> Result<Payment, LoanError> {
        let mut payments = self.payments.write().await;
        payments
            .remove(number)
            .ok_or_else(|| LoanError::PaymentNotFound(number.to_string()))
    }

    async fn payments_for_loan(&self, loan_number: &LoanNumber) -> Result<Vec<Payment>, LoanError> {
        let payments = self.payments.read().await;
        let mut matching: Vec<Payment> = payments
            .values()
            .filter(|p| &p.loan_number == loan_number)
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.payment_date
                .cmp(&b.payment_date)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(matching)
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, LoanError> {
        let payments = self.payments.read().await;
        let mut all: Vec<Payment> = payments.values().cloned().collect();
        all.sort_by(|a, b| {
            a.payment_date
                .cmp(&b.payment_date)
                .then(a.created_at.cmp(&b.created_at))
        });
        Ok(all)
    }
}
