// src/contracts/mod.rs
//! Contract state machine
//!
//! One `Contract` exists per phone line. The driver advances it month by
//! month with `new_month`, routes each call through `bill_call`, and
//! closes the line with `cancel_contract`, which yields the final
//! settlement.
//!
//! Preconditions are caller-enforced: `bill_call` and `cancel_contract`
//! require that `new_month` has already bound a bill for the period the
//! call or cancellation falls in. The driver guarantees this ordering;
//! violating it panics rather than being defensively re-validated.

pub mod mtm;
pub mod prepaid;
pub mod term;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::BillingConfig;
use crate::models::{Bill, Call};

pub use mtm::MtmContract;
pub use prepaid::PrepaidContract;
pub use term::TermContract;

/// Lifecycle state of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ContractStatus {
    /// Contract is live and billing
    #[default]
    Active,
    /// Terminal state: the line was closed and settled
    Cancelled,
}

/// A billing period identified by calendar month and year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingPeriod {
    pub month: u32,
    pub year: i32,
}

impl fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A phone-line contract under one of the three plans
///
/// Tagged sum type dispatching the polymorphic billing interface
/// (`new_month`, `bill_call`, `cancel_contract`) to the plan variants.
#[derive(Debug, Clone)]
pub enum Contract {
    MonthToMonth(MtmContract),
    Term(TermContract),
    Prepaid(PrepaidContract),
}

impl Contract {
    /// Open a month-to-month contract
    pub fn month_to_month(start: NaiveDate, config: BillingConfig) -> Self {
        Contract::MonthToMonth(MtmContract::new(start, config))
    }

    /// Open a term contract committed until `end`
    pub fn term(start: NaiveDate, end: NaiveDate, config: BillingConfig) -> Self {
        Contract::Term(TermContract::new(start, end, config))
    }

    /// Open a prepaid contract with an initial credit top-up
    pub fn prepaid(start: NaiveDate, initial_credit: Decimal, config: BillingConfig) -> Self {
        Contract::Prepaid(PrepaidContract::new(start, initial_credit, config))
    }

    /// Advance to a new billing period, binding a fresh bill
    pub fn new_month(&mut self, month: u32, year: i32, bill: Bill) {
        match self {
            Contract::MonthToMonth(c) => c.new_month(month, year, bill),
            Contract::Term(c) => c.new_month(month, year, bill),
            Contract::Prepaid(c) => c.new_month(month, year, bill),
        }
    }

    /// Add a call to the current period's bill
    ///
    /// # Panics
    ///
    /// Panics if no bill is bound, i.e. `new_month` has not run yet.
    pub fn bill_call(&mut self, call: &Call) {
        match self {
            Contract::MonthToMonth(c) => c.bill_call(call),
            Contract::Term(c) => c.bill_call(call),
            Contract::Prepaid(c) => c.bill_call(call),
        }
    }

    /// Close the line and return the final settlement owed
    ///
    /// # Panics
    ///
    /// Panics if no bill is bound, i.e. `new_month` has not run yet.
    pub fn cancel_contract(&mut self) -> Decimal {
        match self {
            Contract::MonthToMonth(c) => c.cancel_contract(),
            Contract::Term(c) => c.cancel_contract(),
            Contract::Prepaid(c) => c.cancel_contract(),
        }
    }

    /// Bill for the current period, if one is bound
    pub fn bill(&self) -> Option<&Bill> {
        match self {
            Contract::MonthToMonth(c) => c.bill(),
            Contract::Term(c) => c.bill(),
            Contract::Prepaid(c) => c.bill(),
        }
    }

    /// Lifecycle state
    pub fn status(&self) -> ContractStatus {
        match self {
            Contract::MonthToMonth(c) => c.status(),
            Contract::Term(c) => c.status(),
            Contract::Prepaid(c) => c.status(),
        }
    }

    /// Contract start date
    pub fn start(&self) -> NaiveDate {
        match self {
            Contract::MonthToMonth(c) => c.start(),
            Contract::Term(c) => c.start(),
            Contract::Prepaid(c) => c.start(),
        }
    }
}

pub(crate) const NO_BILL: &str = "no bill bound for the current period; call new_month first";

/// Base minute accounting shared by every plan: round the call up to
/// whole minutes and record them on the bound bill.
pub(crate) fn record_call_minutes(bill: &mut Bill, call: &Call) {
    bill.add_billed_minutes(call.billed_minutes());
}
