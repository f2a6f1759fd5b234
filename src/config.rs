// src/config.rs
//! Billing configuration
//!
//! Plan fees, per-minute rates, and prepaid top-up parameters. Defaults
//! carry the canonical tariff; every value can be overridden from the
//! environment so deployments with different money values need no rebuild.

use rust_decimal::Decimal;
use std::env;

use crate::error::ConfigError;

/// Tariff parameters for all three contract plans
#[derive(Debug, Clone, PartialEq)]
pub struct BillingConfig {
    /// Fixed monthly fee for month-to-month contracts
    pub mtm_monthly_fee: Decimal,
    /// Per-minute rate for month-to-month contracts
    pub mtm_min_rate: Decimal,

    /// Fixed monthly fee for term contracts
    pub term_monthly_fee: Decimal,
    /// Refundable deposit charged in a term contract's first month
    pub term_deposit: Decimal,
    /// Included free minutes per month on a term contract
    pub term_free_mins: i64,
    /// Per-minute rate for term contracts past the free allowance
    pub term_min_rate: Decimal,

    /// Per-minute rate for prepaid contracts
    pub prepaid_min_rate: Decimal,
    /// Balance above which (credit below $10) an automatic top-up applies
    pub prepaid_topup_threshold: Decimal,
    /// Amount of credit added by an automatic top-up
    pub prepaid_topup_amount: Decimal,
}

impl Default for BillingConfig {
    fn default() -> Self {
        BillingConfig {
            mtm_monthly_fee: Decimal::new(50, 0),
            mtm_min_rate: Decimal::new(5, 2),
            term_monthly_fee: Decimal::new(20, 0),
            term_deposit: Decimal::new(300, 0),
            term_free_mins: 100,
            term_min_rate: Decimal::new(10, 2),
            prepaid_min_rate: Decimal::new(25, 3),
            prepaid_topup_threshold: Decimal::new(-10, 0),
            prepaid_topup_amount: Decimal::new(25, 0),
        }
    }
}

impl BillingConfig {
    /// Load the tariff from the environment, falling back to the default
    /// for every unset key.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let defaults = BillingConfig::default();

        Ok(BillingConfig {
            mtm_monthly_fee: decimal_var("MTM_MONTHLY_FEE", defaults.mtm_monthly_fee)?,
            mtm_min_rate: decimal_var("MTM_MIN_RATE", defaults.mtm_min_rate)?,
            term_monthly_fee: decimal_var("TERM_MONTHLY_FEE", defaults.term_monthly_fee)?,
            term_deposit: decimal_var("TERM_DEPOSIT", defaults.term_deposit)?,
            term_free_mins: int_var("TERM_FREE_MINS", defaults.term_free_mins)?,
            term_min_rate: decimal_var("TERM_MIN_RATE", defaults.term_min_rate)?,
            prepaid_min_rate: decimal_var("PREPAID_MIN_RATE", defaults.prepaid_min_rate)?,
            prepaid_topup_threshold: decimal_var(
                "PREPAID_TOPUP_THRESHOLD",
                defaults.prepaid_topup_threshold,
            )?,
            prepaid_topup_amount: decimal_var(
                "PREPAID_TOPUP_AMOUNT",
                defaults.prepaid_topup_amount,
            )?,
        })
    }
}

fn decimal_var(key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<Decimal>()
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        Err(_) => Ok(default),
    }
}

fn int_var(key: &str, default: i64) -> Result<i64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value: raw,
            }),
        Err(_) => Ok(default),
    }
}
