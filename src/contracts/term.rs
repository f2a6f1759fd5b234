// src/contracts/term.rs
//! Term contract
//!
//! Deposit-backed commitment with a monthly free-minute allowance.
//! Minutes inside the allowance are retroactively free: while the period
//! total stays within it, the standing rate is forced to zero and every
//! minute lands in the free tally. Once the allowance is exceeded, a
//! blended rate is rederived on every call so the bill total reconciles
//! with the flat fee-plus-rate formula, and the free tally is topped up
//! to exactly the allowance.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::BillingConfig;
use crate::models::{Bill, Call, PlanType};

use super::{record_call_minutes, BillingPeriod, ContractStatus, NO_BILL};

/// Term contract state
#[derive(Debug, Clone)]
pub struct TermContract {
    start: NaiveDate,
    end: NaiveDate,
    status: ContractStatus,
    period: Option<BillingPeriod>,
    bill: Option<Bill>,
    config: BillingConfig,
}

impl TermContract {
    /// Create a contract committed from `start` until `end`
    pub fn new(start: NaiveDate, end: NaiveDate, config: BillingConfig) -> Self {
        TermContract {
            start,
            end,
            status: ContractStatus::Active,
            period: None,
            bill: None,
            config,
        }
    }

    /// Advance to a new billing period
    ///
    /// Binds `bill`, sets the term rate, and charges the monthly fee.
    /// The refundable deposit is charged once, in the exact month and
    /// year the contract starts.
    pub fn new_month(&mut self, month: u32, year: i32, mut bill: Bill) {
        let period = BillingPeriod { month, year };
        bill.set_rates(PlanType::Term, self.config.term_min_rate);
        if year == self.start.year() && month == self.start.month() {
            bill.add_fixed_cost(self.config.term_deposit + self.config.term_monthly_fee);
        } else {
            bill.add_fixed_cost(self.config.term_monthly_fee);
        }
        bill.add_free_minutes(0);

        debug!(%period, plan = %PlanType::Term, "new billing period");
        self.period = Some(period);
        self.bill = Some(bill);
    }

    /// Bill a call under the free-minutes-then-overage policy
    ///
    /// # Panics
    ///
    /// Panics if no bill is bound (see module docs).
    pub fn bill_call(&mut self, call: &Call) {
        let bill = self.bill.as_mut().expect(NO_BILL);
        record_call_minutes(bill, call);

        if bill.billed_min() <= self.config.term_free_mins {
            // Still inside the allowance: these minutes are free.
            bill.set_rates(PlanType::Term, Decimal::ZERO);
            bill.add_free_minutes(call.billed_minutes());
        } else {
            // Past the allowance: rederive the blended rate that makes the
            // bill total match the flat fee-plus-rate formula. The two-step
            // derivation is deliberate; it governs rounding.
            let remaining = bill.billed_min() - bill.free_min();
            let actual = self.config.term_min_rate * Decimal::from(remaining)
                + self.config.term_monthly_fee;
            let rate = (actual - self.config.term_monthly_fee) / Decimal::from(remaining);
            bill.set_rates(PlanType::Term, rate);
            bill.add_free_minutes(self.config.term_free_mins - bill.free_min());
            debug!(%rate, remaining, "allowance exceeded, blended rate recomputed");
        }
    }

    /// Close the line; past the commitment window the deposit is
    /// forfeited, otherwise the settlement is the bill total (which
    /// already embeds the deposit as paid)
    ///
    /// The boundary compares calendar month and year only, never
    /// day-of-month: a period on or before the end date returns the
    /// deposit.
    ///
    /// # Panics
    ///
    /// Panics if no bill is bound (see module docs).
    pub fn cancel_contract(&mut self) -> Decimal {
        let period = self.period.expect(NO_BILL);
        let base = self.bill.as_ref().expect(NO_BILL).cost();
        self.status = ContractStatus::Cancelled;

        let past_commitment = period.year > self.end.year()
            || (period.month > self.end.month() && period.year >= self.end.year());
        let settlement = if past_commitment {
            base - self.config.term_deposit
        } else {
            base
        };
        debug!(%settlement, past_commitment, "term contract cancelled");
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

    /// Commitment end date
    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn contract() -> TermContract {
        let start = NaiveDate::from_ymd_opt(2022, 1, 25).unwrap();
        let end = NaiveDate::from_ymd_opt(2023, 6, 25).unwrap();
        TermContract::new(start, end, BillingConfig::default())
    }

    fn call_of(duration: i32) -> Call {
        Call::new(
            "416-555-0001",
            "416-555-0002",
            Utc::now(),
            duration,
            (-79.42, 43.64),
            (-79.52, 43.75),
        )
    }

    #[test]
    fn test_deposit_charged_only_in_start_month() {
        let mut contract = contract();
        contract.new_month(1, 2022, Bill::new());
        assert_eq!(contract.bill().unwrap().cost(), dec!(320.00));

        contract.new_month(2, 2022, Bill::new());
        assert_eq!(contract.bill().unwrap().cost(), dec!(20.00));

        // Same month number, later year: no deposit.
        contract.new_month(1, 2023, Bill::new());
        assert_eq!(contract.bill().unwrap().cost(), dec!(20.00));
    }

    #[test]
    fn test_calls_inside_allowance_are_retroactively_free() {
        let mut contract = contract();
        contract.new_month(1, 2022, Bill::new());
        contract.bill_call(&call_of(50)); // 1 minute

        let bill = contract.bill().unwrap();
        assert_eq!(bill.billed_min(), 1);
        assert_eq!(bill.free_min(), 1);
        assert_eq!(bill.min_rate(), dec!(0));
        assert_eq!(bill.cost(), dec!(320.00));
    }

    #[test]
    fn test_large_call_still_inside_allowance() {
        let mut contract = contract();
        contract.new_month(1, 2022, Bill::new());
        contract.bill_call(&call_of(50)); // 1 minute
        contract.bill_call(&call_of(3700)); // 62 minutes, total 63

        let bill = contract.bill().unwrap();
        assert_eq!(bill.billed_min(), 63);
        assert_eq!(bill.free_min(), 63);
        assert_eq!(bill.cost(), dec!(320.00));
    }

    #[test]
    fn test_blended_rate_once_allowance_exceeded() {
        let mut contract = contract();
        contract.new_month(1, 2022, Bill::new());
        contract.bill_call(&call_of(50)); // 1 minute, free
        contract.bill_call(&call_of(6000)); // 100 minutes, total 101

        let bill = contract.bill().unwrap();
        assert_eq!(bill.billed_min(), 101);
        // Free tally topped up to exactly the allowance.
        assert_eq!(bill.free_min(), 100);
        // remaining = 101 - 1 = 100; actual = 0.10 * 100 + 20;
        // rate = (actual - 20) / 100
        assert_eq!(bill.min_rate(), dec!(0.10));
        assert_eq!(bill.cost(), dec!(320.10));
    }

    #[test]
    fn test_free_tally_never_exceeds_allowance() {
        let mut contract = contract();
        contract.new_month(2, 2022, Bill::new());
        for _ in 0..12 {
            contract.bill_call(&call_of(600)); // 10 minutes each
        }
        let bill = contract.bill().unwrap();
        assert_eq!(bill.billed_min(), 120);
        assert_eq!(bill.free_min(), 100);
        assert_eq!(bill.cost(), dec!(20.00) + dec!(0.10) * dec!(20));
    }

    #[test]
    fn test_cancel_within_commitment_keeps_deposit_in_total() {
        let mut contract = contract();
        contract.new_month(1, 2022, Bill::new());
        // Deposit was paid into the bill, so it comes back embedded in
        // the settlement figure.
        assert_eq!(contract.cancel_contract(), dec!(320.00));
        assert_eq!(contract.status(), ContractStatus::Cancelled);
    }

    #[test]
    fn test_cancel_after_end_date_forfeits_deposit() {
        let mut contract = contract();
        contract.new_month(1, 2022, Bill::new());
        contract.new_month(7, 2023, Bill::new()); // past June 2023
        assert_eq!(contract.cancel_contract(), dec!(20.00) - dec!(300.00));
    }

    #[test]
    fn test_cancel_in_end_month_returns_deposit() {
        let mut contract = contract();
        contract.new_month(1, 2022, Bill::new());
        contract.new_month(6, 2023, Bill::new()); // exactly the end month
        assert_eq!(contract.cancel_contract(), dec!(20.00));
    }
}
