// src/contracts/prepaid.rs
//! Prepaid contract
//!
//! Pay-ahead plan backed by a signed running ledger. `balance` is stored
//! debt-style: negative means credit the customer still holds, positive
//! means the customer owes money. Each `new_month` carries the balance
//! into the fresh bill as a fixed charge and then resynchronizes the
//! ledger to the bill total; between period boundaries the ledger is not
//! updated call-by-call.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::BillingConfig;
use crate::models::{Bill, Call, PlanType};

use super::{record_call_minutes, BillingPeriod, ContractStatus, NO_BILL};

/// Prepaid contract state
#[derive(Debug, Clone)]
pub struct PrepaidContract {
    start: NaiveDate,
    status: ContractStatus,
    period: Option<BillingPeriod>,
    bill: Option<Bill>,
    balance: Decimal,
    config: BillingConfig,
}

impl PrepaidContract {
    /// Create a contract starting at `start` with `initial_credit` of
    /// prepaid funds (stored negated in the ledger)
    pub fn new(start: NaiveDate, initial_credit: Decimal, config: BillingConfig) -> Self {
        PrepaidContract {
            start,
            status: ContractStatus::Active,
            period: None,
            bill: None,
            balance: -initial_credit,
            config,
        }
    }

    /// Signed ledger balance: negative is credit remaining, non-negative
    /// is money owed
    #[inline]
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Advance to a new billing period
    ///
    /// Tops the ledger up when credit has run low, charges the carried
    /// balance into the fresh bill, then resynchronizes the ledger to
    /// the bill total.
    pub fn new_month(&mut self, month: u32, year: i32, mut bill: Bill) {
        let period = BillingPeriod { month, year };
        bill.set_rates(PlanType::Prepaid, self.config.prepaid_min_rate);

        if self.balance > self.config.prepaid_topup_threshold {
            self.balance -= self.config.prepaid_topup_amount;
            debug!(balance = %self.balance, "credit low, automatic top-up applied");
        }
        bill.add_fixed_cost(self.balance);
        self.balance = bill.cost();

        debug!(%period, plan = %PlanType::Prepaid, balance = %self.balance, "new billing period");
        self.period = Some(period);
        self.bill = Some(bill);
    }

    /// Bill a call at the prepaid rate
    ///
    /// # Panics
    ///
    /// Panics if no bill is bound (see module docs).
    pub fn bill_call(&mut self, call: &Call) {
        record_call_minutes(self.bill.as_mut().expect(NO_BILL), call);
    }

    /// Close the line; a non-negative ledger is owed in full, remaining
    /// credit is forfeited
    pub fn cancel_contract(&mut self) -> Decimal {
        self.status = ContractStatus::Cancelled;
        let settlement = if self.balance >= Decimal::ZERO {
            self.balance
        } else {
            Decimal::ZERO
        };
        debug!(%settlement, balance = %self.balance, "prepaid contract cancelled");
        settlement
    }

    /// Bill for the current period, if one is bound
    pub fn bill(&self) -> Option<&Bill> {
        self.bill.as_ref()
    }

    /// Lifecycle state
    pub fn status(&self) -> ContractStatus {
        self.status
    }

    /// Contract start date
    pub fn start(&self) -> NaiveDate {
        self.start
    }
}
