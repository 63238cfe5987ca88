//! Row (PI) and column (minterm) dominance reduction.
//!
//! Rows are prime implicants, columns are minterms.

use crate::chart::Chart;

/// PI `a` dominates PI `b` when `a`'s column set is a superset of `b`'s and `a`'s
/// literal count is no worse; drop `b`. Ties (equal column sets, equal literal
/// count) are broken by index so exactly one of a mutually-dominating pair survives.
pub fn row_dominance(chart: &mut Chart, literal_counts: &[u32]) -> bool {
    let pis: Vec<usize> = chart.pis().collect();
    let mut remove = std::collections::BTreeSet::new();

    for &a in &pis {
        for &b in &pis {
            if a == b || remove.contains(&b) {
                continue;
            }
            let cols_a = chart.columns_of(a);
            let cols_b = chart.columns_of(b);
            if !cols_a.is_superset(cols_b) {
                continue;
            }
            let strictly_bigger = cols_a.len() > cols_b.len();
            let la = literal_counts[a];
            let lb = literal_counts[b];
            let dominates = if strictly_bigger {
                la <= lb
            } else {
                la < lb || (la == lb && a < b)
            };
            if dominates {
                remove.insert(b);
            }
        }
    }

    let changed = !remove.is_empty();
    for b in remove {
        chart.remove_pi(b);
    }
    changed
}

/// Column `c1` dominates `c2` when the set of PIs covering `c1` is a superset of
/// those covering `c2`: any cover that satisfies `c2` necessarily satisfies `c1`,
/// so `c1` need not be tracked separately. Ties are broken by column value so
/// exactly one of a mutually-dominating pair survives.
pub fn column_dominance(chart: &mut Chart) -> bool {
    let cols: Vec<u16> = chart.columns().collect();
    let mut remove = std::collections::BTreeSet::new();

    for &c1 in &cols {
        for &c2 in &cols {
            if c1 == c2 || remove.contains(&c1) {
                continue;
            }
            let s1 = chart.coverers(c1);
            let s2 = chart.coverers(c2);
            if !s1.is_superset(s2) {
                continue;
            }
            let strictly_bigger = s1.len() > s2.len();
            let dominates = if strictly_bigger { true } else { c1 > c2 };
            if dominates {
                remove.insert(c1);
            }
        }
    }

    let changed = !remove.is_empty();
    for c in remove {
        chart.remove_column(c);
    }
    changed
}

/// Apply essential extraction, then alternate row/column dominance, to a fixed
/// point. Returns every PI forced into the solution along the way.
pub fn reduce_to_fixed_point(chart: &mut Chart, literal_counts: &[u32]) -> Vec<usize> {
    let mut chosen = Vec::new();
    loop {
        let essentials = super::essentials::extract_essentials(chart);
        let changed_essentials = !essentials.is_empty();
        chosen.extend(essentials);

        let changed_rows = row_dominance(chart, literal_counts);
        let changed_cols = column_dominance(chart);

        if !changed_essentials && !changed_rows && !changed_cols {
            break;
        }
    }
    chosen
}
