// src/filters/duration.rs
//! Duration filter: keep calls strictly under or over a threshold.

use tracing::debug;

use crate::error::FilterParseError;
use crate::models::{Call, Customer};

use super::CallFilter;

/// Keeps calls strictly shorter or longer than a second threshold
///
/// The argument is exactly four characters: `L` (less-than) or `G`
/// (greater-than) followed by three digits.
pub struct DurationFilter;

#[derive(Debug, PartialEq, Eq)]
enum DurationBound {
    Under(i32),
    Over(i32),
}

fn parse(filter_string: &str) -> Result<DurationBound, FilterParseError> {
    let malformed = || FilterParseError::MalformedDuration(filter_string.to_string());

    if filter_string.len() != 4 || !filter_string.is_ascii() {
        return Err(malformed());
    }
    let digits = &filter_string[1..];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let threshold: i32 = digits.parse().map_err(|_| malformed())?;

    match filter_string.as_bytes()[0] {
        b'L' => Ok(DurationBound::Under(threshold)),
        b'G' => Ok(DurationBound::Over(threshold)),
        _ => Err(malformed()),
    }
}

impl CallFilter for DurationFilter {
    fn apply(&self, _customers: &[Customer], calls: &[Call], filter_string: &str) -> Vec<Call> {
        let bound = match parse(filter_string) {
            Ok(bound) => bound,
            Err(e) => {
                debug!(error = %e, "duration filter input rejected, passing data through");
                return calls.to_vec();
            }
        };

        calls
            .iter()
            .filter(|call| match bound {
                DurationBound::Under(threshold) => call.duration < threshold,
                DurationBound::Over(threshold) => call.duration > threshold,
            })
            .cloned()
            .collect()
    }

    fn description(&self) -> &'static str {
        "Filter calls based on duration; L### returns calls less than specified length, G### for greater"
    }
}
