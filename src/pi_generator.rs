//! Bit-sliced prime-implicant generation by iterated adjacency merging.
//!
//! Cubes are packed into a pair of `u16` words so adjacency testing and merging are
//! pure bitwise arithmetic; each generation buckets its cubes by `(mask, popcount(value))`
//! so only cubes that could possibly be adjacent are ever compared.

use std::collections::{BTreeMap, HashMap};

use crate::cube::Cube;

/// Generate every prime implicant of the function described by `ones ∪ dont_cares`.
///
/// `covers` on each returned PI is restricted to `ones`; a PI whose `covers` ends up
/// empty covered only don't-cares and is dropped, since it is not required by any
/// column of the PI chart.
pub fn generate_prime_implicants(ones: &[u16], dont_cares: &[u16]) -> Vec<Cube> {
    generate_prime_implicants_with_trace(ones, dont_cares, &mut Vec::new(), &mut || false)
}

/// Same as [`generate_prime_implicants`], but appends a human-readable trace of each
/// generation to `steps` and polls `cancelled` before each round, returning whatever
/// PIs have been found so far if cancellation is observed.
pub fn generate_prime_implicants_with_trace(
    ones: &[u16],
    dont_cares: &[u16],
    steps: &mut Vec<String>,
    cancelled: &mut dyn FnMut() -> bool,
) -> Vec<Cube> {
    let mut seed: BTreeMap<u32, Cube> = BTreeMap::new();
    for &m in ones {
        let cube = Cube::from_minterm(m, true);
        seed.insert(cube.canonical_key(), cube);
    }
    for &m in dont_cares {
        let cube = Cube::from_minterm(m, false);
        seed.entry(cube.canonical_key()).or_insert(cube);
    }

    steps.push(format!(
        "seeded {} cubes from {} on-minterms and {} don't-cares",
        seed.len(),
        ones.len(),
        dont_cares.len()
    ));

    let mut current: Vec<Cube> = seed.into_values().collect();
    let mut primes = Vec::new();
    let mut generation = 0usize;

    loop {
        if cancelled() {
            steps.push("pi generation cancelled before round completion".to_string());
            break;
        }

        // Bucket by (mask, popcount(value)).
        let mut buckets: HashMap<(u16, u32), Vec<usize>> = HashMap::new();
        for (idx, cube) in current.iter().enumerate() {
            buckets
                .entry((cube.mask, cube.value.count_ones()))
                .or_default()
                .push(idx);
        }

        let mut merged_flag = vec![false; current.len()];
        let mut next_gen: BTreeMap<u32, Cube> = BTreeMap::new();

        for (&(mask, popcount), indices) in &buckets {
            let Some(higher) = buckets.get(&(mask, popcount + 1)) else {
                continue;
            };
            for &i in indices {
                for &j in higher {
                    if let Some(merged) = Cube::merge(&current[i], &current[j]) {
                        merged_flag[i] = true;
                        merged_flag[j] = true;
                        let key = merged.canonical_key();
                        next_gen
                            .entry(key)
                            .and_modify(|existing| {
                                existing.covers.extend(merged.covers.iter().copied());
                                existing.covers.sort_unstable();
                                existing.covers.dedup();
                            })
                            .or_insert(merged);
                    }
                }
            }
        }

        let unmerged_count = merged_flag.iter().filter(|m| !**m).count();
        steps.push(format!(
            "generation {}: {} cubes, {} carried forward as prime implicants, {} merged into {} cubes",
            generation,
            current.len(),
            unmerged_count,
            merged_flag.iter().filter(|m| **m).count(),
            next_gen.len()
        ));

        for (idx, cube) in current.into_iter().enumerate() {
            if !merged_flag[idx] && !cube.covers.is_empty() {
                primes.push(cube);
            }
        }

        if next_gen.is_empty() {
            break;
        }
        current = next_gen.into_values().collect();
        generation += 1;
    }

    dedup_by_key(&mut primes);
    steps.push(format!("found {} prime implicants", primes.len()));
    primes
}

fn dedup_by_key(cubes: &mut Vec<Cube>) {
    let mut seen = std::collections::HashSet::new();
    cubes.retain(|c| seen.insert(c.canonical_key()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(cubes: &[Cube]) -> std::collections::HashSet<(u16, u16)> {
        cubes.iter().map(|c| (c.mask, c.value)).collect()
    }

    #[test]
    fn single_minterm_is_its_own_pi() {
        let pis = generate_prime_implicants(&[3], &[]);
        assert_eq!(pis.len(), 1);
        assert_eq!(pis[0].mask, 0);
        assert_eq!(pis[0].value, 3);
        assert_eq!(pis[0].covers, vec![3]);
    }

    #[test]
    fn adjacent_pair_merges_to_single_pi() {
        // n = 2, ones = {0, 2}: differ only in bit 1 -> one PI, mask=0b10, value=0b00.
        let pis = generate_prime_implicants(&[0, 2], &[]);
        assert_eq!(pis.len(), 1);
        assert_eq!(pis[0].mask, 0b10);
        assert_eq!(pis[0].value, 0b00);
        let mut covers = pis[0].covers.clone();
        covers.sort_unstable();
        assert_eq!(covers, vec![0, 2]);
    }

    #[test]
    fn checkerboard_has_no_merges_beyond_pairs() {
        // n = 2, ones = {0, 3}: not adjacent (differ in 2 bits) -> two distinct PIs.
        let pis = generate_prime_implicants(&[0, 3], &[]);
        assert_eq!(pis.len(), 2);
        let ks = keys(&pis);
        assert!(ks.contains(&(0, 0)));
        assert!(ks.contains(&(0, 3)));
    }

    #[test]
    fn dont_care_only_pi_is_discarded() {
        // ones = {0}, dcs = {1}: these merge into mask=1,value=0 which covers only
        // minterm 0 via `covers` restricted to ones, so it still counts as a PI.
        // But a PI reachable purely from dcs with no on-minterm in its covers must
        // be dropped. Construct n=2 with ones={0}, dcs={1,2,3}: full merge covers
        // only minterm 0 among covers since only 0 was an on-minterm.
        let pis = generate_prime_implicants(&[0], &[1, 2, 3]);
        // The maximal cube spans all 4 points (mask=0b11) and still covers minterm 0.
        assert_eq!(pis.len(), 1);
        assert_eq!(pis[0].mask, 0b11);
        assert_eq!(pis[0].covers, vec![0]);
    }

    #[test]
    fn covers_excludes_dont_cares() {
        let pis = generate_prime_implicants(&[1, 3], &[0, 2]);
        // All four minterms merge into the tautology cube; covers is only {1, 3}.
        assert_eq!(pis.len(), 1);
        assert_eq!(pis[0].covers, vec![1, 3]);
    }
}
