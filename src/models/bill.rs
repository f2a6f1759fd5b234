// src/models/bill.rs
//! Monthly bill accumulator
//!
//! One `Bill` exists per contract per billing period. Contracts push
//! fixed charges and minute tallies into it; the total is derived, never
//! stored.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PlanType;

/// Accumulator for one phone line over one billing period
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bill {
    plan: PlanType,
    min_rate: Decimal,
    fixed_cost: Decimal,
    billed_min: i64,
    free_min: i64,
}

impl Bill {
    /// Create an empty bill for a fresh billing period
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plan label and the standing per-minute rate
    pub fn set_rates(&mut self, plan: PlanType, min_rate: Decimal) {
        self.plan = plan;
        self.min_rate = min_rate;
    }

    /// Add a fixed charge (monthly fee, deposit, carried-over balance)
    pub fn add_fixed_cost(&mut self, amount: Decimal) {
        self.fixed_cost += amount;
    }

    /// Add billed minutes to the period tally
    pub fn add_billed_minutes(&mut self, minutes: i64) {
        self.billed_min += minutes;
    }

    /// Add free minutes to the period tally
    pub fn add_free_minutes(&mut self, minutes: i64) {
        self.free_min += minutes;
    }

    /// Billed minutes so far this period
    #[inline]
    pub fn billed_min(&self) -> i64 {
        self.billed_min
    }

    /// Free minutes so far this period
    #[inline]
    pub fn free_min(&self) -> i64 {
        self.free_min
    }

    /// Standing per-minute rate
    #[inline]
    pub fn min_rate(&self) -> Decimal {
        self.min_rate
    }

    /// Total cost of the period so far
    ///
    /// Fixed charges plus chargeable minutes (billed minus free, floored
    /// at zero) at the standing rate.
    pub fn cost(&self) -> Decimal {
        let chargeable = (self.billed_min - self.free_min).max(0);
        self.fixed_cost + Decimal::from(chargeable) * self.min_rate
    }

    /// Snapshot of the bill for reporting
    pub fn summary(&self) -> BillSummary {
        BillSummary {
            plan: self.plan,
            min_rate: self.min_rate,
            fixed_cost: self.fixed_cost,
            billed_min: self.billed_min,
            free_min: self.free_min,
            total: self.cost(),
        }
    }
}

/// Serializable snapshot of a bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillSummary {
    pub plan: PlanType,
    pub min_rate: Decimal,
    pub fixed_cost: Decimal,
    pub billed_min: i64,
    pub free_min: i64,
    pub total: Decimal,
}
