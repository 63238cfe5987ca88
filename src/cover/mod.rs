//! Exact minimum-cost set cover over a prime-implicant chart.

pub mod branch_and_bound;
pub mod dominance;
pub mod essentials;

use std::time::Duration;

use crate::chart::Chart;
use crate::cube::Cube;

/// Result of solving a chart to a minimum cover.
pub struct CoverResult {
    pub selected: Vec<usize>,
    pub essential: Vec<usize>,
    pub branch_and_bound_nodes: usize,
    pub cancelled: bool,
}

/// Run essential extraction and dominance reduction to a fixed point, then (if a
/// cyclic core remains) branch-and-bound over it.
pub fn solve_chart(
    mut chart: Chart,
    prime_implicants: &[Cube],
    n: usize,
    deadline: Option<Duration>,
) -> CoverResult {
    let literal_counts: Vec<u32> = prime_implicants
        .iter()
        .map(|c| c.literal_count(n))
        .collect();

    let essential = dominance::reduce_to_fixed_point(&mut chart, &literal_counts);

    if chart.is_empty() {
        return CoverResult {
            selected: essential.clone(),
            essential,
            branch_and_bound_nodes: 0,
            cancelled: false,
        };
    }

    let outcome = branch_and_bound::solve(chart, prime_implicants, n, essential.clone(), deadline);
    CoverResult {
        selected: outcome.selected,
        essential,
        branch_and_bound_nodes: outcome.nodes_expanded,
        cancelled: outcome.cancelled,
    }
}
