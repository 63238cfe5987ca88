//! Exact minimum-cost cover search over the cyclic core left after reduction:
//! a greedy initial upper bound, then branch-and-bound with an admissible
//! independent-set lower bound and most-constrained-column branching.

use std::time::{Duration, Instant};

use crate::chart::Chart;
use crate::cube::Cube;

/// A candidate solution: the set of PI indices selected, kept sorted for
/// deterministic tie-break comparisons.
#[derive(Debug, Clone)]
struct Solution {
    pis: Vec<usize>,
}

impl Solution {
    fn cost(&self, prime_implicants: &[Cube], n: usize) -> (usize, u32) {
        let literals: u32 = self
            .pis
            .iter()
            .map(|&i| prime_implicants[i].literal_count(n))
            .sum();
        (self.pis.len(), literals)
    }

    fn sort_key(&self, prime_implicants: &[Cube]) -> Vec<(u16, u16)> {
        let mut keys: Vec<(u16, u16)> = self
            .pis
            .iter()
            .map(|&i| (prime_implicants[i].mask, prime_implicants[i].value))
            .collect();
        keys.sort_unstable();
        keys
    }
}

struct Best {
    solution: Option<Solution>,
}

impl Best {
    fn consider(&mut self, candidate: Solution, prime_implicants: &[Cube], n: usize) {
        let candidate_cost = candidate.cost(prime_implicants, n);
        match &self.solution {
            None => self.solution = Some(candidate),
            Some(current) => {
                let current_cost = current.cost(prime_implicants, n);
                let better = candidate_cost < current_cost
                    || (candidate_cost == current_cost
                        && candidate.sort_key(prime_implicants) < current.sort_key(prime_implicants));
                if better {
                    self.solution = Some(candidate);
                }
            }
        }
    }

    fn count(&self) -> usize {
        self.solution.as_ref().map(|s| s.pis.len()).unwrap_or(usize::MAX)
    }
}

/// An admissible lower bound on the number of PIs still required: repeatedly take
/// the uncovered column with the fewest covering PIs, count one, and remove every
/// column any of its coverers could also cover.
fn lower_bound(chart: &Chart) -> usize {
    let mut remaining: std::collections::BTreeSet<u16> = chart.columns().collect();
    let mut bound = 0usize;

    while let Some(&col) = remaining
        .iter()
        .min_by_key(|&&c| chart.coverers(c).len())
    {
        bound += 1;
        let coverers = chart.coverers(col).clone();
        let mut to_remove = Vec::new();
        for &pi in &coverers {
            for &c in chart.columns_of(pi) {
                if remaining.contains(&c) {
                    to_remove.push(c);
                }
            }
        }
        for c in to_remove {
            remaining.remove(&c);
        }
    }
    bound
}

fn score(chart: &Chart, pi: usize, literal_counts: &[u32]) -> f64 {
    let covered = chart.columns_of(pi).len() as f64;
    let lits = literal_counts[pi].max(1) as f64;
    covered / lits
}

/// Greedy set cover used as the initial upper bound for branch-and-bound: repeatedly
/// select the PI with the best `|newly covered| / literal_count` score until every
/// column is covered.
fn greedy_cover(mut chart: Chart, literal_counts: &[u32]) -> Vec<usize> {
    let mut chosen = Vec::new();
    while !chart.is_empty() {
        let best = chart
            .pis()
            .max_by(|&a, &b| {
                score(&chart, a, literal_counts)
                    .partial_cmp(&score(&chart, b, literal_counts))
                    .unwrap()
                    .then(b.cmp(&a))
            });
        let Some(best) = best else { break };
        chosen.push(best);
        chart.commit(best);
        chart.prune_empty_pis();
    }
    chosen
}

/// Outcome of a full branch-and-bound run.
pub struct SolveOutcome {
    pub selected: Vec<usize>,
    pub nodes_expanded: usize,
    pub cancelled: bool,
}

struct Search<'a> {
    prime_implicants: &'a [Cube],
    literal_counts: &'a [u32],
    n: usize,
    start: Instant,
    deadline: Option<Duration>,
    nodes: usize,
    cancelled: bool,
}

impl<'a> Search<'a> {
    fn deadline_exceeded(&self) -> bool {
        match self.deadline {
            Some(d) => self.start.elapsed() >= d,
            None => false,
        }
    }

    fn recurse(&mut self, mut chart: Chart, mut chosen: Vec<usize>, best: &mut Best) {
        self.nodes += 1;
        if self.cancelled {
            return;
        }
        if self.deadline_exceeded() {
            self.cancelled = true;
            return;
        }

        chosen.extend(super::dominance::reduce_to_fixed_point(
            &mut chart,
            self.literal_counts,
        ));

        if chart.is_empty() {
            best.consider(Solution { pis: chosen }, self.prime_implicants, self.n);
            return;
        }

        let lb = lower_bound(&chart);
        if best.count() != usize::MAX && chosen.len() + lb > best.count() {
            return;
        }

        let col = chart
            .columns()
            .min_by_key(|&c| chart.coverers(c).len())
            .expect("chart is non-empty");

        let mut candidates: Vec<usize> = chart.coverers(col).iter().copied().collect();
        candidates.sort_by(|&a, &b| {
            score(&chart, b, self.literal_counts)
                .partial_cmp(&score(&chart, a, self.literal_counts))
                .unwrap()
                .then(a.cmp(&b))
        });

        for pi in candidates {
            if self.cancelled {
                return;
            }
            let mut child_chart = chart.clone();
            child_chart.commit(pi);
            let mut child_chosen = chosen.clone();
            child_chosen.push(pi);
            self.recurse(child_chart, child_chosen, best);
        }
    }
}

/// Solve the cyclic core remaining in `chart` (after essential extraction and
/// dominance reduction have already run on the top-level problem, if desired).
/// `pre_selected` carries any PIs already forced before this call.
pub fn solve(
    chart: Chart,
    prime_implicants: &[Cube],
    n: usize,
    pre_selected: Vec<usize>,
    deadline: Option<Duration>,
) -> SolveOutcome {
    let literal_counts: Vec<u32> = prime_implicants
        .iter()
        .map(|c| c.literal_count(n))
        .collect();

    let mut search = Search {
        prime_implicants,
        literal_counts: &literal_counts,
        n,
        start: Instant::now(),
        deadline,
        nodes: 0,
        cancelled: false,
    };

    let mut best = Best { solution: None };
    // Seed the upper bound with a greedy cover so early pruning is effective.
    let greedy = greedy_cover(chart.clone(), &literal_counts);
    let mut greedy_full = pre_selected.clone();
    greedy_full.extend(greedy);
    best.consider(
        Solution { pis: greedy_full },
        prime_implicants,
        n,
    );

    search.recurse(chart, pre_selected, &mut best);

    let selected = best.solution.map(|s| s.pis).unwrap_or_default();
    SolveOutcome {
        selected,
        nodes_expanded: search.nodes,
        cancelled: search.cancelled,
    }
}
