//! Pauli labels and Pauli strings.

use crate::error::{OpError, OpResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Single-qubit Pauli operator label.
///
/// Identity is not a label: a qubit with no label is implicitly I, and the
/// identity string is the empty [`PauliTerm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Pauli-X.
    X,
    /// Pauli-Y.
    Y,
    /// Pauli-Z.
    Z,
}

impl Pauli {
    /// The label character, as written in the serialized format.
    pub fn as_char(self) -> char {
        match self {
            Pauli::X => 'X',
            Pauli::Y => 'Y',
            Pauli::Z => 'Z',
        }
    }
}

impl TryFrom<char> for Pauli {
    type Error = OpError;

    fn try_from(c: char) -> OpResult<Self> {
        match c {
            'X' => Ok(Pauli::X),
            'Y' => Ok(Pauli::Y),
            'Z' => Ok(Pauli::Z),
            other => Err(OpError::InvalidPauli(other)),
        }
    }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A Pauli string: a tensor product of Pauli operators on indexed qubits.
///
/// Stored as an ordered map from qubit index to label, so membership checks
/// are O(log n) and iteration is already in canonical ascending-index order.
/// Qubits not present are implicitly identity; the empty term is the
/// identity operator.
///
/// Invariant: at most one label per qubit index. If a source repeats an
/// index, the first occurrence wins and later ones are dropped.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PauliTerm {
    ops: BTreeMap<u32, Pauli>,
}

impl PauliTerm {
    /// Create an empty (identity) term.
    pub fn new() -> Self {
        Self::default()
    }

    /// The identity operator.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Build a term from (qubit, label) pairs.
    ///
    /// Pairs may arrive in any order; duplicated qubit indices keep the
    /// first label seen.
    pub fn from_ops(ops: impl IntoIterator<Item = (u32, Pauli)>) -> Self {
        let mut term = Self::new();
        for (qubit, label) in ops {
            term.insert(qubit, label);
        }
        term
    }

    /// Attach a label to a qubit. If the qubit already carries a label,
    /// the existing one is kept.
    pub fn insert(&mut self, qubit: u32, label: Pauli) {
        self.ops.entry(qubit).or_insert(label);
    }

    /// The label on a qubit, if any.
    pub fn label(&self, qubit: u32) -> Option<Pauli> {
        self.ops.get(&qubit).copied()
    }

    /// The (qubit, label) pairs in ascending qubit order.
    pub fn ops(&self) -> impl DoubleEndedIterator<Item = (u32, Pauli)> + '_ {
        self.ops.iter().map(|(&q, &p)| (q, p))
    }

    /// Number of non-identity labels.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True if the term carries no labels.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// True if this is the identity operator (no labels).
    pub fn is_identity(&self) -> bool {
        self.ops.is_empty()
    }

    /// The highest qubit index referenced, or `None` for the identity.
    pub fn max_qubit(&self) -> Option<u32> {
        self.ops.keys().next_back().copied()
    }
}

impl fmt::Display for PauliTerm {
    /// Renders as `[X0 Y1]`; the identity renders as `[]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, (qubit, label)) in self.ops().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{label}{qubit}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<(u32, Pauli)> for PauliTerm {
    fn from_iter<T: IntoIterator<Item = (u32, Pauli)>>(iter: T) -> Self {
        Self::from_ops(iter)
    }
}
