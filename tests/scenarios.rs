//! Named end-to-end scenarios, covering the constant forms, the classic
//! adjacency minimization, don't-cares, and a cyclic prime-implicant core
//! where no single essential prime implicant exists.

use std::collections::BTreeSet;

use qm_minimizer::{minimize, Options};

fn names(n: usize) -> Vec<String> {
    ('A'..).take(n).map(|c| c.to_string()).collect()
}

fn terms(sop: &str) -> BTreeSet<String> {
    sop.split(" + ").map(|s| s.to_string()).collect()
}

#[test]
fn s1_three_var_adjacency() {
    let result = minimize(3, &[0, 2, 5, 7], &[], &names(3), "F", Options::default()).unwrap();
    assert_eq!(terms(&result.minimal_sop), terms("A'C' + AC"));
    assert!(result.is_minimal);
}

#[test]
fn s2_four_var_with_redundant_prime_implicants() {
    let ones = [0, 1, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15];
    let result = minimize(4, &ones, &[], &names(4), "F", Options::default()).unwrap();
    assert_eq!(terms(&result.minimal_sop), terms("B' + D"));
}

#[test]
fn s3_four_var_with_dont_cares() {
    let result = minimize(
        4,
        &[1, 3, 7, 11, 15],
        &[0, 2, 5],
        &names(4),
        "F",
        Options::default(),
    )
    .unwrap();
    assert_eq!(terms(&result.minimal_sop), terms("CD + A'B'"));
}

#[test]
fn s4_tautology_is_constant_one() {
    let result = minimize(2, &[0, 1, 2, 3], &[], &names(2), "F", Options::default()).unwrap();
    assert_eq!(result.minimal_sop, "1");
    assert_eq!(result.minimal_pos, "1");
    assert_eq!(result.canonical_sop, "\u{03a3}m(0,1,2,3)");
}

#[test]
fn s5_contradiction_is_constant_zero() {
    let result = minimize(2, &[], &[], &names(2), "F", Options::default()).unwrap();
    assert_eq!(result.minimal_sop, "0");
    assert_eq!(result.minimal_pos, "1");
}

#[test]
fn s6_cyclic_core_has_no_essential_prime_implicant() {
    let result = minimize(5, &[1, 2, 3, 4, 5, 6, 7], &[], &names(5), "F", Options::default())
        .unwrap();
    assert!(result.prime_implicants.iter().all(|pi| !pi.essential));
    assert_eq!(result.counts.selected_count, 3);
    assert!(result.is_minimal);
}

#[test]
fn selected_cover_always_covers_every_required_minterm() {
    let ones = [0, 1, 2, 3, 5, 7, 8, 9, 10, 11, 13, 15];
    let result = minimize(4, &ones, &[], &names(4), "F", Options::default()).unwrap();
    for &m in &ones {
        let covered = result
            .selected
            .iter()
            .any(|c| (m as u16 & !c.mask) == c.value);
        assert!(covered, "minterm {m} not covered by selected cover");
    }
}
