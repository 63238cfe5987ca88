//! Essential-PI extraction: a column with exactly one covering PI forces that PI
//! into every minimum cover.

use crate::chart::Chart;

/// Repeatedly pick any column with exactly one covering PI, commit that PI, and
/// recheck until no essential columns remain. Returns the PIs forced into the
/// solution, in the order they were discovered.
pub fn extract_essentials(chart: &mut Chart) -> Vec<usize> {
    let mut essential = Vec::new();
    loop {
        let found = chart
            .columns()
            .find(|&col| chart.coverers(col).len() == 1)
            .map(|col| *chart.coverers(col).iter().next().unwrap());

        match found {
            Some(pi) => {
                essential.push(pi);
                chart.commit(pi);
                chart.prune_empty_pis();
            }
            None => break,
        }
    }
    essential
}
