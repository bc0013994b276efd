//! Property-based tests for Hamiltonian parsing and accumulation.
//!
//! Tests that accumulation is permutation-invariant and that the canonical
//! rendering round-trips through the line parser.

use proptest::prelude::*;
use qham_op::{Pauli, PauliTerm, SymbolicOperator};
use qham_parse::{ParsedLine, load_from_reader, parse_line};
use std::io::Cursor;

fn arb_pauli() -> impl Strategy<Value = Pauli> {
    prop_oneof![Just(Pauli::X), Just(Pauli::Y), Just(Pauli::Z)]
}

/// Random Pauli string on up to 6 of the first 32 qubits (possibly identity).
fn arb_term() -> impl Strategy<Value = PauliTerm> {
    prop::collection::btree_map(0_u32..32, arb_pauli(), 0..6)
        .prop_map(|ops| PauliTerm::from_ops(ops))
}

/// Dyadic coefficients: sums of these are exact in f64 regardless of
/// addition order, so permutation invariance holds bit-for-bit even when
/// generated terms collide.
fn arb_exact_coeff() -> impl Strategy<Value = f64> {
    (-(1_i32 << 12)..(1_i32 << 12)).prop_map(|n| f64::from(n) / 16.0)
}

fn format_line(coeff: f64, term: &PauliTerm) -> String {
    format!("({coeff:.16e}+0j) {term}")
}

fn accumulate(lines: &[String]) -> SymbolicOperator {
    load_from_reader(Cursor::new(lines.join("\n")))
        .expect("in-memory read cannot fail")
        .operator
}

proptest! {
    /// Feeding the same lines in any permutation yields the same mapping
    /// and byte-identical rendering.
    #[test]
    fn test_accumulation_is_permutation_invariant(
        (original, shuffled) in prop::collection::vec((arb_term(), arb_exact_coeff()), 1..8)
            .prop_flat_map(|entries| {
                let lines: Vec<String> = entries
                    .iter()
                    .map(|(t, c)| format_line(*c, t))
                    .collect();
                (Just(lines.clone()), Just(lines).prop_shuffle())
            })
    ) {
        let a = accumulate(&original);
        let b = accumulate(&shuffled);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.render(), b.render());
    }

    /// render() output re-parses to the exact same operator.
    #[test]
    fn test_render_roundtrips_exactly(
        entries in prop::collection::vec((arb_term(), -1e6_f64..1e6), 0..10)
    ) {
        let mut op = SymbolicOperator::new();
        for (term, coeff) in entries {
            op.add_term(term, coeff);
        }
        let reloaded = load_from_reader(Cursor::new(op.render()))
            .expect("in-memory read cannot fail")
            .operator;
        prop_assert_eq!(op, reloaded);
    }

    /// Rendered terms list each qubit index at most once, ascending.
    #[test]
    fn test_rendered_indices_sorted_and_unique(
        term in arb_term(),
        coeff in arb_exact_coeff(),
    ) {
        let line = format_line(coeff, &term);
        match parse_line(&line).expect("rendered line must parse") {
            ParsedLine::Term { term: reparsed, .. } => {
                let indices: Vec<u32> = reparsed.ops().map(|(q, _)| q).collect();
                let mut sorted = indices.clone();
                sorted.sort_unstable();
                sorted.dedup();
                prop_assert_eq!(indices, sorted);
                prop_assert_eq!(reparsed, term);
            }
            ParsedLine::Skip => prop_assert!(false, "rendered line was skipped"),
        }
    }

    /// Token order inside the bracket does not matter.
    #[test]
    fn test_bracket_token_order_irrelevant(term in arb_term(), coeff in arb_exact_coeff()) {
        let reversed: Vec<String> = term
            .ops()
            .map(|(q, p)| format!("{p}{q}"))
            .rev()
            .collect();
        let line = format!("({coeff:.16e}+0j) [{}]", reversed.join(" "));
        match parse_line(&line).expect("line must parse") {
            ParsedLine::Term { term: reparsed, .. } => prop_assert_eq!(reparsed, term),
            ParsedLine::Skip => prop_assert!(false, "line was skipped"),
        }
    }
}
