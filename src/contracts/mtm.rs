// src/contracts/mtm.rs
//! Month-to-month contract
//!
//! Flat per-minute rate plus a fixed monthly fee. No free-minute pool,
//! no commitment window, no deposit.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::BillingConfig;
use crate::models::{Bill, Call, PlanType};

use super::{record_call_minutes, BillingPeriod, ContractStatus, NO_BILL};

/// Month-to-month contract state
#[derive(Debug, Clone)]
pub struct MtmContract {
    start: NaiveDate,
    status: ContractStatus,
    period: Option<BillingPeriod>,
    bill: Option<Bill>,
    config: BillingConfig,
}

impl MtmContract {
    /// Create a contract starting at `start`; no bill is bound until the
    /// first `new_month`.
    pub fn new(start: NaiveDate, config: BillingConfig) -> Self {
        MtmContract {
            start,
            status: ContractStatus::Active,
            period: None,
            bill: None,
            config,
        }
    }

    /// Advance to a new billing period
    ///
    /// Binds `bill`, sets the flat rate, and charges the monthly fee.
    pub fn new_month(&mut self, month: u32, year: i32, mut bill: Bill) {
        let period = BillingPeriod { month, year };
        bill.set_rates(PlanType::MonthToMonth, self.config.mtm_min_rate);
        bill.add_fixed_cost(self.config.mtm_monthly_fee);

        debug!(%period, plan = %PlanType::MonthToMonth, "new billing period");
        self.period = Some(period);
        self.bill = Some(bill);
    }

    /// Bill a call at the flat rate
    ///
    /// # Panics
    ///
    /// Panics if no bill is bound (see module docs).
    pub fn bill_call(&mut self, call: &Call) {
        record_call_minutes(self.bill.as_mut().expect(NO_BILL), call);
    }

    /// Close the line; the settlement is the current bill total
    ///
    /// # Panics
    ///
    /// Panics if no bill is bound (see module docs).
    pub fn cancel_contract(&mut self) -> Decimal {
        let settlement = self.bill.as_ref().expect(NO_BILL).cost();
        self.status = ContractStatus::Cancelled;
        debug!(%settlement, "month-to-month contract cancelled");
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
