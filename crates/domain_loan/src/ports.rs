//! Loan Domain Ports
//!
//! Storage interfaces for loans and payments. The servicing layer depends
//! only on these traits; adapters provide the implementation (the in-memory
//! adapter in this crate, or a database layer in a larger deployment).
//!
//! # Atomicity
//!
//! A loan's outstanding balance is a shared mutable resource. All balance
//! changes go through [`LoanStore::update_loan`], which runs a mutation
//! closure against the stored loan as one atomic read-modify-write: the
//! adapter must guarantee that no other writer interleaves, and that a
//! mutation returning an error leaves the stored loan untouched.
//!
//! Unlike the read methods, the mutation closure can fail for domain
//! reasons (a payment overdrawing the balance), so the port surfaces
//! [`LoanError`] directly; adapter-level storage failures travel inside it
//! as `LoanError::Storage`.

use async_trait::async_trait;

use core_kernel::{LoanNumber, PaymentNumber};

use crate::error::LoanError;
use crate::loan::Loan;
use crate::payment::Payment;

/// An atomic mutation applied to a stored loan
pub type LoanMutation<'a> = Box<dyn FnOnce(&mut Loan) -> Result<(), LoanError> + Send + 'a>;

/// Storage port for loans
#[async_trait]
pub trait LoanStore: Send + Sync {
    /// Fetches a loan by reference
    async fn fetch_loan(&self, number: &LoanNumber) -> Result<Loan, LoanError>;

    /// Inserts a new loan; fails on a duplicate reference
    async fn insert_loan(&self, loan: Loan) -> Result<(), LoanError>;

    /// Applies a mutation to a stored loan atomically and returns the
    /// updated record. A failed mutation leaves the stored loan unchanged.
    async fn update_loan(
        &self,
        number: &LoanNumber,
        mutation: LoanMutation<'_>,
    ) -> Result<Loan, LoanError>;

    /// Removes a loan and returns the removed record
    async fn remove_loan(&self, number: &LoanNumber) -> Result<Loan, LoanError>;

    /// Lists all loans
    async fn list_loans(&self) -> Result<Vec<Loan>, LoanError>;
}

/// Storage port for payment ledger entries
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Fetches a payment by reference
    async fn fetch_payment(&self, number: &PaymentNumber) -> Result<Payment, LoanError>;

    /// Inserts a new payment; fails on a duplicate reference
    async fn insert_payment(&self, payment: Payment) -> Result<(), LoanError>;

    /// Replaces an existing payment
    async fn replace_payment(&self, payment: Payment) -> Result<(), LoanError>;

    /// Removes a payment and returns the removed record
    async fn remove_payment(&self, number: &PaymentNumber) -> Result<Payment, LoanError>;

    /// Lists the payments recorded against a loan, oldest first
    async fn payments_for_loan(&self, loan_number: &LoanNumber) -> Result<Vec<Payment>, LoanError>;

    /// Lists all payments
    async fn list_payments(&self) -> Result<Vec<Payment>, LoanError>;
}
