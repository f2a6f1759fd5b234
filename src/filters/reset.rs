// src/filters/reset.rs
//! Reset filter: reinitialize the working set from the full dataset.

use crate::models::{Call, Customer};

use super::CallFilter;

/// Replaces the working set with every customer's outgoing calls
///
/// Only the outgoing side of each history is taken: a call also appears
/// in the receiving party's history, and taking both would double-count.
pub struct ResetFilter;

impl CallFilter for ResetFilter {
    fn apply(&self, customers: &[Customer], _calls: &[Call], _filter_string: &str) -> Vec<Call> {
        let mut all_calls = Vec::new();
        for customer in customers {
            let (outgoing, _) = customer.history();
            all_calls.extend_from_slice(outgoing);
        }
        all_calls
    }

    fn description(&self) -> &'static str {
        "Reset all of the filters applied so far, if any"
    }
}
