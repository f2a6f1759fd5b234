// src/models/mod.rs
//! Domain models for the billing core.

pub mod bill;
pub mod call;
pub mod customer;
pub mod plan;

pub use bill::{Bill, BillSummary};
pub use call::Call;
pub use customer::Customer;
pub use plan::PlanType;
