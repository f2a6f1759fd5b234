// src/models/customer.rs
//! Customer model
//!
//! A customer owns a call history split into calls made (outgoing) and
//! calls received (incoming). The outgoing side is the canonical record
//! of a call; the incoming side mirrors the other party's copy.

use serde::{Deserialize, Serialize};

use super::Call;

/// A customer and their call history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    id: i32,
    calls_made: Vec<Call>,
    calls_received: Vec<Call>,
}

impl Customer {
    /// Create a customer with an empty history
    pub fn new(id: i32) -> Self {
        Customer {
            id,
            calls_made: Vec::new(),
            calls_received: Vec::new(),
        }
    }

    /// Unique customer identifier
    #[inline]
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Call history as (outgoing, incoming), each in recording order
    pub fn history(&self) -> (&[Call], &[Call]) {
        (&self.calls_made, &self.calls_received)
    }

    /// Record a call this customer placed
    pub fn record_made(&mut self, call: Call) {
        self.calls_made.push(call);
    }

    /// Record a call this customer received
    pub fn record_received(&mut self, call: Call) {
        self.calls_received.push(call);
    }
}
