// src/models/plan.rs
//! Contract plan enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Plan type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PlanType {
    /// Month-to-month plan - flat rate, no commitment window
    #[default]
    #[serde(rename = "mtm")]
    MonthToMonth,
    /// Term plan - free-minute allowance, deposit-backed commitment
    #[serde(rename = "term")]
    Term,
    /// Prepaid plan - pay-ahead credit ledger
    #[serde(rename = "prepaid")]
    Prepaid,
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanType::MonthToMonth => write!(f, "MTM"),
            PlanType::Term => write!(f, "TERM"),
            PlanType::Prepaid => write!(f, "PREPAID"),
        }
    }
}

impl PlanType {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mtm" | "month-to-month" => Some(PlanType::MonthToMonth),
            "term" => Some(PlanType::Term),
            "prepaid" => Some(PlanType::Prepaid),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(PlanType::MonthToMonth.to_string(), "MTM");
        assert_eq!(PlanType::Term.to_string(), "TERM");
        assert_eq!(PlanType::Prepaid.to_string(), "PREPAID");
    }

    #[test]
    fn test_from_str_roundtrip() {
        for plan in [PlanType::MonthToMonth, PlanType::Term, PlanType::Prepaid] {
            assert_eq!(PlanType::from_str(&plan.to_string()), Some(plan));
        }
        assert_eq!(PlanType::from_str("postpaid"), None);
    }
}
