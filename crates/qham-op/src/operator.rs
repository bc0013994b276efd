//! The symbolic-operator accumulator.

use crate::pauli::PauliTerm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fmt::Write as _;

/// A single weighted Pauli term: `coeff · term`.
///
/// Flat (coefficient, term) pair used for export; the accumulated form
/// lives in [`SymbolicOperator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedTerm {
    /// Real coefficient.
    pub coeff: f64,
    /// The Pauli string.
    pub term: PauliTerm,
}

impl WeightedTerm {
    /// Create a new weighted term.
    pub fn new(coeff: f64, term: PauliTerm) -> Self {
        Self { coeff, term }
    }
}

/// A sum-of-Pauli-strings operator with accumulation semantics.
///
/// Backed by a `BTreeMap` keyed by [`PauliTerm`], so each distinct term
/// appears exactly once and iteration order is a fixed total order
/// (ascending by lowest qubit index, then by the index/label sequence;
/// the identity term sorts first). Inserting a term that is already
/// present *adds* to its coefficient — chemistry Hamiltonians may list the
/// same Pauli string on several lines.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolicOperator {
    terms: BTreeMap<PauliTerm, f64>,
}

impl SymbolicOperator {
    /// Create an empty operator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert-or-accumulate a term.
    ///
    /// Exact floating-point addition; no tolerance threshold is applied,
    /// so a term that sums to zero stays in the map with coefficient 0.
    pub fn add_term(&mut self, term: PauliTerm, coeff: f64) {
        *self.terms.entry(term).or_insert(0.0) += coeff;
    }

    /// The accumulated coefficient of a term, if present.
    pub fn coefficient(&self, term: &PauliTerm) -> Option<f64> {
        self.terms.get(term).copied()
    }

    /// Number of distinct terms.
    pub fn num_terms(&self) -> usize {
        self.terms.len()
    }

    /// True if no terms have been accumulated.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate terms with their coefficients in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&PauliTerm, f64)> + '_ {
        self.terms.iter().map(|(t, &c)| (t, c))
    }

    /// The minimum number of qubits required to represent this operator.
    ///
    /// Returns 0 if the operator is empty or purely identity.
    pub fn min_qubits(&self) -> u32 {
        self.terms
            .keys()
            .filter_map(PauliTerm::max_qubit)
            .max()
            .map_or(0, |q| q + 1)
    }

    /// Spectral norm upper bound: Σ |c_k|.
    pub fn one_norm(&self) -> f64 {
        self.terms.values().map(|c| c.abs()).sum()
    }

    /// The terms as flat (coefficient, term) pairs in canonical order.
    pub fn weighted_terms(&self) -> Vec<WeightedTerm> {
        self.iter()
            .map(|(t, c)| WeightedTerm::new(c, t.clone()))
            .collect()
    }

    /// Canonical textual rendering: one `(<coeff>+0j) [<ops>]` line per
    /// term, in map order, each line terminated by `\n`.
    ///
    /// Deterministic: two operators holding the same term/coefficient
    /// mapping render byte-identically, regardless of insertion order.
    /// Coefficients use scientific notation with 17 significant digits,
    /// so the output re-parses to the exact same `f64` values.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (term, coeff) in self.iter() {
            let _ = writeln!(out, "({coeff:.16e}+0j) {term}");
        }
        out
    }
}

impl fmt::Display for SymbolicOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<(PauliTerm, f64)> for SymbolicOperator {
    fn from_iter<T: IntoIterator<Item = (PauliTerm, f64)>>(iter: T) -> Self {
        let mut op = Self::new();
        op.extend(iter);
        op
    }
}

impl Extend<(PauliTerm, f64)> for SymbolicOperator {
    fn extend<T: IntoIterator<Item = (PauliTerm, f64)>>(&mut self, iter: T) {
        for (term, coeff) in iter {
            self.add_term(term, coeff);
        }
    }
}
