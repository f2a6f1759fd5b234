// src/models/call.rs
//! Call record model
//!
//! Immutable record of a completed call. Equality is record identity:
//! the same call can appear in both parties' histories and must compare
//! equal there, while two distinct calls with identical timing do not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single completed call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Call {
    /// Unique record identifier
    pub id: Uuid,

    /// Caller number
    pub src_number: String,

    /// Callee number
    pub dst_number: String,

    /// When the call was placed
    pub time: DateTime<Utc>,

    /// Call duration in seconds
    pub duration: i32,

    /// Caller position as (longitude, latitude)
    pub src_loc: (f64, f64),

    /// Callee position as (longitude, latitude)
    pub dst_loc: (f64, f64),
}

impl Call {
    /// Create a call record with a fresh identifier
    pub fn new(
        src_number: impl Into<String>,
        dst_number: impl Into<String>,
        time: DateTime<Utc>,
        duration: i32,
        src_loc: (f64, f64),
        dst_loc: (f64, f64),
    ) -> Self {
        Call {
            id: Uuid::new_v4(),
            src_number: src_number.into(),
            dst_number: dst_number.into(),
            time,
            duration,
            src_loc,
            dst_loc,
        }
    }

    /// Duration rounded up to whole billable minutes
    #[inline]
    pub fn billed_minutes(&self) -> i64 {
        if self.duration <= 0 {
            return 0;
        }
        ((self.duration + 59) / 60) as i64
    }
}

impl PartialEq for Call {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Call {}
