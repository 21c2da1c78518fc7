//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible
//! defaults. These builders allow tests to specify only the relevant
//! fields while using defaults for everything else. The default loan is
//! the worked example: 12,000 at 12% over 12 months with a 2% admin fee,
//! started 2024-01-01.

use chrono::NaiveDate;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal_macros::dec;

use core_kernel::{ClientNumber, Currency, LoanNumber, Money, PaymentNumber, Rate};
use domain_client::Client;
use domain_loan::{Loan, Payment};

use crate::fixtures::{ReferenceFixtures, TemporalFixtures};

/// Builder for constructing test loans
pub struct LoanBuilder {
    loan_number: LoanNumber,
    client_number: ClientNumber,
    principal: Money,
    annual_interest_rate: Rate,
    term_count: u32,
    admin_fee_rate: Rate,
    start_date: NaiveDate,
}

impl Default for LoanBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoanBuilder {
    /// Creates a new builder with the worked-example defaults
    pub fn new() -> Self {
        Self {
            loan_number: ReferenceFixtures::loan_number(),
            client_number: ReferenceFixtures::client_number(),
            principal: Money::new(dec!(12000.00), Currency::USD),
            annual_interest_rate: Rate::new(dec!(0.12)),
            term_count: 12,
            admin_fee_rate: Rate::new(dec!(0.02)),
            start_date: TemporalFixtures::loan_start(),
        }
    }

    /// Sets the loan reference
    pub fn with_loan_number(mut self, number: impl Into<String>) -> Self {
        self.loan_number = LoanNumber::new(number).expect("valid loan number");
        self
    }

    /// Sets the client reference
    pub fn with_client_number(mut self, number: impl Into<String>) -> Self {
        self.client_number = ClientNumber::new(number).expect("valid client number");
        self
    }

    /// Sets the principal
    pub fn with_principal(mut self, principal: Money) -> Self {
        self.principal = principal;
        self
    }

    /// Sets the annual interest rate
    pub fn with_annual_rate(mut self, rate: Rate) -> Self {
        self.annual_interest_rate = rate;
        self
    }

    /// Sets the term count
    pub fn with_term_count(mut self, term_count: u32) -> Self {
        self.term_count = term_count;
        self
    }

    /// Sets the admin fee rate
    pub fn with_admin_fee_rate(mut self, rate: Rate) -> Self {
        self.admin_fee_rate = rate;
        self
    }

    /// Sets the start date
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    /// Makes the loan interest-free and fee-free so every term is a flat
    /// principal split
    pub fn flat(mut self) -> Self {
        self.annual_interest_rate = Rate::new(dec!(0));
        self.admin_fee_rate = Rate::new(dec!(0));
        self
    }

    /// Builds the loan
    ///
    /// # Panics
    ///
    /// Panics if the configured parameters are invalid; tests that exercise
    /// validation should call `Loan::new` directly.
    pub fn build(self) -> Loan {
        Loan::new(
            self.loan_number,
            self.client_number,
            self.principal,
            self.annual_interest_rate,
            self.term_count,
            self.admin_fee_rate,
            self.start_date,
        )
        .expect("builder parameters are valid")
    }
}

/// Builder for constructing test payments
pub struct PaymentBuilder {
    payment_number: PaymentNumber,
    loan_number: LoanNumber,
    client_number: ClientNumber,
    payment_date: NaiveDate,
    amount: Money,
    outstanding_balance: Money,
    description: Option<String>,
}

impl Default for PaymentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentBuilder {
    /// Creates a new builder with defaults matching the worked-example loan
    pub fn new() -> Self {
        Self {
            payment_number: PaymentNumber::generate(),
            loan_number: ReferenceFixtures::loan_number(),
            client_number: ReferenceFixtures::client_number(),
            payment_date: TemporalFixtures::first_due_date(),
            amount: Money::new(dec!(1066.19), Currency::USD),
            outstanding_balance: Money::new(dec!(11173.81), Currency::USD),
            description: None,
        }
    }

    /// Sets the payment reference
    pub fn with_payment_number(mut self, number: impl Into<String>) -> Self {
        self.payment_number = PaymentNumber::new(number).expect("valid payment number");
        self
    }

    /// Sets the loan reference
    pub fn with_loan_number(mut self, number: impl Into<String>) -> Self {
        self.loan_number = LoanNumber::new(number).expect("valid loan number");
        self
    }

    /// Sets the payment date
    pub fn with_payment_date(mut self, payment_date: NaiveDate) -> Self {
        self.payment_date = payment_date;
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the balance snapshot
    pub fn with_outstanding_balance(mut self, balance: Money) -> Self {
        self.outstanding_balance = balance;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builds the payment
    pub fn build(self) -> Payment {
        let payment = Payment::new(
            self.payment_number,
            self.loan_number,
            self.client_number,
            self.payment_date,
            self.amount,
            self.outstanding_balance,
        );
        match self.description {
            Some(description) => payment.with_description(description),
            None => payment,
        }
    }
}

/// Builder for constructing test clients
pub struct ClientBuilder {
    client_number: ClientNumber,
    name: Option<String>,
    email: Option<String>,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a new builder; the name is faked unless set
    pub fn new() -> Self {
        Self {
            client_number: ReferenceFixtures::client_number(),
            name: None,
            email: None,
        }
    }

    /// Sets the client reference
    pub fn with_client_number(mut self, number: impl Into<String>) -> Self {
        self.client_number = ClientNumber::new(number).expect("valid client number");
        self
    }

    /// Sets the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Builds the client
    pub fn build(self) -> Client {
        let name = self.name.unwrap_or_else(|| Name().fake());
        let client = Client::new(self.client_number, name).expect("builder parameters are valid");
        match self.email {
            Some(email) => client.with_email(email),
            None => client,
        }
    }
}
