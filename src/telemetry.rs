//! Stage timings and counts surfaced alongside a [`crate::MinimizationResult`].

use std::time::Instant;

/// Wall-clock timings for each pipeline stage, in milliseconds.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Timings {
    pub pi_generation_ms: f64,
    pub chart_construction_ms: f64,
    pub cover_solve_ms: f64,
    pub render_ms: f64,
    pub total_ms: f64,
}

/// Sizes observed while solving, useful for regression-testing search behavior.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct Counts {
    pub prime_implicant_count: usize,
    pub essential_count: usize,
    pub selected_count: usize,
    pub branch_and_bound_nodes: usize,
}

/// A stopwatch with named checkpoints, used to fill in [`Timings`] without
/// threading `Instant` values through every function signature.
pub struct Stopwatch {
    entry: Instant,
    last: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        let now = Instant::now();
        Stopwatch {
            entry: now,
            last: now,
        }
    }

    /// Milliseconds elapsed since the previous checkpoint (or `start()`).
    pub fn lap_ms(&mut self) -> f64 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last).as_secs_f64() * 1000.0;
        self.last = now;
        elapsed
    }

    pub fn total_ms(&self) -> f64 {
        self.entry.elapsed().as_secs_f64() * 1000.0
    }
}
