//! Phone-line billing core
//!
//! This crate models monthly billing for phone lines under three contract
//! plans, plus a pipeline of composable filters over call records:
//!
//! - Domain models (Bill, Call, Customer)
//! - Contract state machine (month-to-month, term, prepaid)
//! - Fail-open call filters selectable by string key
//! - Billing configuration with environment overrides

pub mod config;
pub mod contracts;
pub mod error;
pub mod filters;
pub mod models;

pub use config::BillingConfig;
pub use error::{ConfigError, FilterParseError};
