//! Exhaustive oracle: for small functions, brute-force every subset of prime
//! implicants that covers the on-set and confirm the solver's chosen cover matches
//! the minimum lexicographic `(|selected|, total_literals)` pair, not merely a
//! minimum literal total at some other PI count.

use std::collections::BTreeSet;

use qm_minimizer::cube::Cube;
use qm_minimizer::pi_generator::generate_prime_implicants;
use qm_minimizer::{minimize, Options};

fn total_literal_count(cubes: &[&Cube], n_vars: usize) -> u32 {
    cubes.iter().map(|c| c.literal_count(n_vars)).sum()
}

/// Brute-force minimum `(pi_count, total_literals)` cover over the prime implicant
/// set, by trying every subset (feasible only because these on-sets are kept small).
fn brute_force_minimum_cost(primes: &[Cube], on_set: &[u16], n_vars: usize) -> (usize, u32) {
    let required: BTreeSet<u16> = on_set.iter().copied().collect();
    let count = primes.len();
    assert!(count <= 20, "oracle only feasible for small prime implicant sets");

    let mut best = (usize::MAX, u32::MAX);
    for mask in 0u32..(1u32 << count) {
        let chosen: Vec<&Cube> = (0..count)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| &primes[i])
            .collect();

        let covered: BTreeSet<u16> = required
            .iter()
            .copied()
            .filter(|&m| chosen.iter().any(|c| c.contains(m)))
            .collect();
        if covered != required {
            continue;
        }

        let cost = (chosen.len(), total_literal_count(&chosen, n_vars));
        if cost < best {
            best = cost;
        }
    }
    best
}

fn check_optimal(n_vars: usize, ones: &[u32]) {
    let names: Vec<String> = ('A'..).take(n_vars).map(|c| c.to_string()).collect();
    let result = minimize(n_vars, ones, &[], &names, "F", Options::default()).unwrap();

    let ones_u16: Vec<u16> = ones.iter().map(|&m| m as u16).collect();
    let primes = generate_prime_implicants(&ones_u16, &[]);
    if primes.is_empty() {
        assert_eq!(result.minimal_sop, "0");
        return;
    }

    let expected = brute_force_minimum_cost(&primes, &ones_u16, n_vars);
    let actual_count = result.selected.len();
    let actual_literals: u32 = result.selected.iter().map(|c| c.literal_count).sum();
    assert_eq!(
        (actual_count, actual_literals),
        expected,
        "solver cover for n={n_vars} ones={ones:?} was not optimal under (|selected|, total_literals)"
    );
}

#[test]
fn oracle_matches_classic_three_variable_case() {
    check_optimal(3, &[0, 2, 5, 7]);
}

#[test]
fn oracle_matches_four_variable_case_with_redundant_primes() {
    check_optimal(4, &[0, 1, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15]);
}

#[test]
fn oracle_matches_cyclic_core_case() {
    check_optimal(5, &[1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn oracle_matches_single_minterm() {
    check_optimal(4, &[6]);
}

#[test]
fn oracle_matches_sparse_six_variable_case() {
    check_optimal(6, &[1, 2, 4, 8, 16, 32, 63]);
}

#[test]
fn oracle_matches_dense_five_variable_case() {
    check_optimal(5, &(0u32..28).collect::<Vec<_>>());
}

#[test]
fn oracle_matches_every_minterm_set() {
    check_optimal(3, &(0u32..8).collect::<Vec<_>>());
}

#[test]
fn oracle_matches_empty_on_set() {
    check_optimal(4, &[]);
}
