//! Symbolic Pauli-operator representation for qubit Hamiltonians.
//!
//! A qubit Hamiltonian is a weighted sum of Pauli strings:
//!
//!   H = Σ_k  c_k · P_k
//!
//! where each P_k is a tensor product of single-qubit Pauli operators
//! (X, Y, Z) and c_k ∈ ℝ. This crate provides the in-memory form of that
//! sum: [`PauliTerm`] for an individual Pauli string and
//! [`SymbolicOperator`] for the accumulated sum, with insert-or-accumulate
//! semantics and a canonical textual rendering.
//!
//! # Example
//!
//! ```rust
//! use qham_op::{Pauli, PauliTerm, SymbolicOperator};
//!
//! // H = 3.0·X₀Y₁  (accumulated from two entries)
//! let term = PauliTerm::from_ops([(0, Pauli::X), (1, Pauli::Y)]);
//! let mut h = SymbolicOperator::new();
//! h.add_term(term.clone(), 1.0);
//! h.add_term(term.clone(), 2.0);
//!
//! assert_eq!(h.num_terms(), 1);
//! assert_eq!(h.coefficient(&term), Some(3.0));
//! ```

pub mod error;
pub mod operator;
pub mod pauli;

pub use error::{OpError, OpResult};
pub use operator::{SymbolicOperator, WeightedTerm};
pub use pauli::{Pauli, PauliTerm};
