//! Cooperative cancellation via wall-clock deadline.
//!
//! The core has no suspension points; a deadline is just an `Instant` plus
//! `Duration` captured at `minimize()` entry and polled at fixed checkpoints
//! (before each PI-generation round, and at every branch-and-bound node).

use std::time::{Duration, Instant};

/// A deadline captured once and checked cheaply thereafter.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    limit: Option<Duration>,
}

impl Deadline {
    pub fn from_millis(deadline_ms: Option<u64>) -> Self {
        Deadline {
            start: Instant::now(),
            limit: deadline_ms.map(Duration::from_millis),
        }
    }

    pub fn is_exceeded(&self) -> bool {
        match self.limit {
            Some(d) => self.start.elapsed() >= d,
            None => false,
        }
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.limit.map(|d| d.saturating_sub(self.start.elapsed()))
    }
}
