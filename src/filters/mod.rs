// src/filters/mod.rs
//! Call-record filters
//!
//! Stateless, composable predicates over a working set of calls. Each
//! filter parses one free-form argument string and is fail-open: any
//! parse or validation failure returns the working set unchanged, never
//! an error. Filters narrow the working set; `reset` reinitializes it
//! from the customers' canonical (outgoing) histories.
//!
//! Filters never mutate their inputs and retain no state, so a caller
//! may reuse one instance freely across datasets.

mod customer;
mod duration;
mod location;
mod reset;

pub use customer::CustomerFilter;
pub use duration::DurationFilter;
pub use location::LocationFilter;
pub use reset::ResetFilter;

use crate::models::{Call, Customer};

/// A selectable filter over a working set of calls
pub trait CallFilter {
    /// Return the calls from `calls` matching the criterion in
    /// `filter_string`; on invalid input, return `calls` unchanged.
    fn apply(&self, customers: &[Customer], calls: &[Call], filter_string: &str) -> Vec<Call>;

    /// One-line description of the filter's syntax for menu display
    fn description(&self) -> &'static str;
}

/// The set of available filters, addressable by stable string key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Reset,
    Customer,
    Duration,
    Location,
}

impl FilterKind {
    /// Every filter, in menu order
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Reset,
        FilterKind::Customer,
        FilterKind::Duration,
        FilterKind::Location,
    ];

    /// Stable selection key
    pub fn key(&self) -> &'static str {
        match self {
            FilterKind::Reset => "reset",
            FilterKind::Customer => "customer",
            FilterKind::Duration => "duration",
            FilterKind::Location => "location",
        }
    }

    /// Look a filter up by key (case-insensitive)
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "reset" => Some(FilterKind::Reset),
            "customer" => Some(FilterKind::Customer),
            "duration" => Some(FilterKind::Duration),
            "location" => Some(FilterKind::Location),
            _ => None,
        }
    }

    /// The filter implementation behind this key
    pub fn filter(&self) -> &'static dyn CallFilter {
        match self {
            FilterKind::Reset => &ResetFilter,
            FilterKind::Customer => &CustomerFilter,
            FilterKind::Duration => &DurationFilter,
            FilterKind::Location => &LocationFilter,
        }
    }
}
