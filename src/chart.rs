//! The prime-implicant chart: a bipartite incidence between required on-minterms
//! (columns) and prime implicants (rows).

use std::collections::{BTreeMap, BTreeSet};

use crate::cube::Cube;
use crate::error::MinimizeError;

/// A PI chart, mutable in place as essential extraction, dominance reduction, and
/// branch-and-bound commit PIs and shrink the remaining problem.
#[derive(Debug, Clone)]
pub struct Chart {
    /// PI index -> set of still-uncovered columns it covers.
    pi_columns: BTreeMap<usize, BTreeSet<u16>>,
    /// Column -> set of PIs (by index) that still cover it.
    column_pis: BTreeMap<u16, BTreeSet<usize>>,
}

impl Chart {
    /// Build the chart for `prime_implicants` against the required `columns` (the
    /// `ones`). Returns `UncoverableMinterm` if any column has no covering PI.
    pub fn build(prime_implicants: &[Cube], columns: &[u16]) -> Result<Self, MinimizeError> {
        let mut pi_columns: BTreeMap<usize, BTreeSet<u16>> = BTreeMap::new();
        let mut column_pis: BTreeMap<u16, BTreeSet<usize>> = BTreeMap::new();

        for &col in columns {
            column_pis.entry(col).or_default();
        }

        for (idx, pi) in prime_implicants.iter().enumerate() {
            for &m in &pi.covers {
                if let Some(pis) = column_pis.get_mut(&m) {
                    pis.insert(idx);
                    pi_columns.entry(idx).or_default().insert(m);
                }
            }
        }

        for (&col, pis) in &column_pis {
            if pis.is_empty() {
                return Err(MinimizeError::UncoverableMinterm { minterm: col as u32 });
            }
        }

        Ok(Chart {
            pi_columns,
            column_pis,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.column_pis.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = u16> + '_ {
        self.column_pis.keys().copied()
    }

    pub fn pis(&self) -> impl Iterator<Item = usize> + '_ {
        self.pi_columns.keys().copied()
    }

    pub fn coverers(&self, col: u16) -> &BTreeSet<usize> {
        static EMPTY: BTreeSet<usize> = BTreeSet::new();
        self.column_pis.get(&col).unwrap_or(&EMPTY)
    }

    pub fn columns_of(&self, pi: usize) -> &BTreeSet<u16> {
        static EMPTY: BTreeSet<u16> = BTreeSet::new();
        self.pi_columns.get(&pi).unwrap_or(&EMPTY)
    }

    /// Drop a PI as a candidate (dominance reduction). Columns are untouched; they
    /// still need covering by some other PI.
    pub fn remove_pi(&mut self, pi: usize) {
        if let Some(cols) = self.pi_columns.remove(&pi) {
            for c in cols {
                if let Some(s) = self.column_pis.get_mut(&c) {
                    s.remove(&pi);
                }
            }
        }
    }

    /// Drop a column from the chart entirely (it has been covered, or dominance
    /// proved it need not be tracked separately).
    pub fn remove_column(&mut self, col: u16) {
        if let Some(pis) = self.column_pis.remove(&col) {
            for p in pis {
                if let Some(s) = self.pi_columns.get_mut(&p) {
                    s.remove(&col);
                }
            }
        }
    }

    /// Select `pi` for the solution: remove it and every column it covers.
    pub fn commit(&mut self, pi: usize) {
        if let Some(cols) = self.pi_columns.get(&pi).cloned() {
            for c in cols {
                self.remove_column(c);
            }
        }
        self.pi_columns.remove(&pi);
    }

    /// Drop PIs that no longer cover any column (garbage left behind by `remove_column`).
    pub fn prune_empty_pis(&mut self) {
        let empty: Vec<usize> = self
            .pi_columns
            .iter()
            .filter(|(_, cols)| cols.is_empty())
            .map(|(&pi, _)| pi)
            .collect();
        for pi in empty {
            self.pi_columns.remove(&pi);
        }
    }
}
