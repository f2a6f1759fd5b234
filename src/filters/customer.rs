// src/filters/customer.rs
//! Customer filter: narrow the working set to one customer's calls.

use std::collections::HashSet;

use tracing::debug;

use crate::error::FilterParseError;
use crate::models::{Call, Customer};

use super::CallFilter;

/// Keeps only the calls made or received by one customer
///
/// The customer's history is intersected with the working set, so the
/// filter narrows, never widens. An unknown id is a no-op rather than an
/// empty result.
pub struct CustomerFilter;

fn parse(filter_string: &str) -> Result<i32, FilterParseError> {
    filter_string
        .trim()
        .parse::<i32>()
        .map_err(|_| FilterParseError::InvalidCustomerId(filter_string.to_string()))
}

impl CallFilter for CustomerFilter {
    fn apply(&self, customers: &[Customer], calls: &[Call], filter_string: &str) -> Vec<Call> {
        let id = match parse(filter_string) {
            Ok(id) => id,
            Err(e) => {
                debug!(error = %e, "customer filter input rejected, passing data through");
                return calls.to_vec();
            }
        };

        let Some(customer) = customers.iter().find(|c| c.id() == id) else {
            debug!(id, "customer not in dataset, passing data through");
            return calls.to_vec();
        };

        let working: HashSet<_> = calls.iter().map(|c| c.id).collect();
        let (outgoing, incoming) = customer.history();

        let mut seen = HashSet::new();
        outgoing
            .iter()
            .chain(incoming)
            .filter(|call| working.contains(&call.id) && seen.insert(call.id))
            .cloned()
            .collect()
    }

    fn description(&self) -> &'static str {
        "Filter events based on customer ID"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn call() -> Call {
        Call::new("a", "b", Utc::now(), 30, (0.0, 0.0), (0.0, 0.0))
    }

    fn dataset() -> (Vec<Customer>, Vec<Call>) {
        let mut alice = Customer::new(10);
        let mut bob = Customer::new(20);

        let a_to_b = call();
        let b_to_a = call();
        alice.record_made(a_to_b.clone());
        alice.record_received(b_to_a.clone());
        bob.record_made(b_to_a.clone());
        bob.record_received(a_to_b.clone());

        let calls = vec![a_to_b, b_to_a];
        (vec![alice, bob], calls)
    }

    #[test]
    fn test_keeps_both_sides_of_customer_history() {
        let (customers, calls) = dataset();
        let result = CustomerFilter.apply(&customers, &calls, "10");
        // Both calls involve customer 10; each appears once.
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_intersects_with_working_set() {
        let (customers, calls) = dataset();
        // Working set narrowed to the first call only.
        let narrowed = vec![calls[0].clone()];
        let result = CustomerFilter.apply(&customers, &narrowed, "20");
        assert_eq!(result, narrowed);
    }

    #[test]
    fn test_non_integer_is_a_noop() {
        let (customers, calls) = dataset();
        assert_eq!(CustomerFilter.apply(&customers, &calls, "ten"), calls);
    }

    #[test]
    fn test_unknown_id_is_a_noop() {
        let (customers, calls) = dataset();
        assert_eq!(CustomerFilter.apply(&customers, &calls, "999"), calls);
    }
}
