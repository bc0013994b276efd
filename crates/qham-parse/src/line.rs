//! Line parser: one raw text line → (coefficient, term) or a failure.

use crate::error::{ParseError, ParseResult};
use crate::lexer::{Token, scan_line};
use qham_op::{Pauli, PauliTerm};

/// Outcome of parsing one line.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine {
    /// Blank line or comment; contributes nothing.
    Skip,
    /// A data line: one weighted Pauli term.
    Term {
        /// The parsed coefficient.
        coeff: f64,
        /// The parsed Pauli string.
        term: PauliTerm,
    },
}

/// Parse one line of serialized-Hamiltonian text.
///
/// Pure function of the line: no state, no I/O, and never a partial
/// result — on failure the whole line is rejected with the phase that
/// failed (coefficient vs. operator spec) and the line text.
///
/// A line is skippable if it is empty/whitespace or its first non-space
/// character is `#`. A data line must contain a `(<re>+0j)` coefficient
/// and a `[...]` operator spec; both may be surrounded by arbitrary text.
/// The first occurrence of each wins.
pub fn parse_line(line: &str) -> ParseResult<ParsedLine> {
    let trimmed = line.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ParsedLine::Skip);
    }

    let mut coeff = None;
    let mut spec = None;
    for token in scan_line(line) {
        match token {
            Token::Coefficient(c) if coeff.is_none() => coeff = Some(c),
            Token::OperatorSpec(s) if spec.is_none() => spec = Some(s),
            _ => {}
        }
    }

    let coeff = coeff.ok_or_else(|| ParseError::MalformedCoefficient {
        line: line.to_string(),
    })?;
    let spec = spec.ok_or_else(|| ParseError::MalformedOperatorSpec {
        line: line.to_string(),
    })?;

    Ok(ParsedLine::Term {
        coeff,
        term: scan_ops(&spec),
    })
}

/// Scan bracket contents left-to-right for `<Letter><digits>` runs.
///
/// Tolerant: anything that is not a well-formed run (unknown letters,
/// letters without digits, digit runs that overflow `u32`) is stepped
/// over without failing the line.
fn scan_ops(spec: &str) -> PauliTerm {
    let mut term = PauliTerm::new();
    let bytes = spec.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let Ok(label) = Pauli::try_from(bytes[i] as char) else {
            i += 1;
            continue;
        };
        let start = i + 1;
        let mut end = start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end == start {
            // label with no index
            i += 1;
            continue;
        }
        if let Ok(qubit) = spec[start..end].parse::<u32>() {
            term.insert(qubit, label);
        }
        i = end;
    }
    term
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term_of(line: &str) -> (f64, PauliTerm) {
        match parse_line(line).unwrap() {
            ParsedLine::Term { coeff, term } => (coeff, term),
            ParsedLine::Skip => panic!("expected a data line: {line}"),
        }
    }

    #[test]
    fn test_blank_and_comment_lines_skip() {
        assert_eq!(parse_line("").unwrap(), ParsedLine::Skip);
        assert_eq!(parse_line("   \t").unwrap(), ParsedLine::Skip);
        assert_eq!(parse_line("# generated by openfermion").unwrap(), ParsedLine::Skip);
        assert_eq!(parse_line("   # indented comment").unwrap(), ParsedLine::Skip);
    }

    #[test]
    fn test_simple_data_line() {
        let (coeff, term) = term_of("(0.5+0j) [X0 Y1]");
        assert_eq!(coeff, 0.5);
        assert_eq!(term, PauliTerm::from_ops([(0, Pauli::X), (1, Pauli::Y)]));
    }

    #[test]
    fn test_scientific_notation_and_sign() {
        let (coeff, _) = term_of("(1.5e-01+0j) []");
        assert_eq!(coeff, 0.15);
        let (coeff, _) = term_of("(-2.25E+2+0j) [Z3]");
        assert_eq!(coeff, -225.0);
    }

    #[test]
    fn test_identity_bracket() {
        let (coeff, term) = term_of("(1.5e-01+0j) []");
        assert_eq!(coeff, 0.15);
        assert!(term.is_identity());
    }

    #[test]
    fn test_surrounding_text_ignored() {
        let (coeff, term) = term_of("  term 7: (0.25+0j) ... [Z2] +");
        assert_eq!(coeff, 0.25);
        assert_eq!(term, PauliTerm::from_ops([(2, Pauli::Z)]));
    }

    #[test]
    fn test_multidigit_qubit_index() {
        let (_, term) = term_of("(1.0+0j) [X12 Z345]");
        assert_eq!(term, PauliTerm::from_ops([(12, Pauli::X), (345, Pauli::Z)]));
    }

    #[test]
    fn test_tokens_without_separator() {
        // \s? in the bracket grammar makes whitespace optional.
        let (_, term) = term_of("(1.0+0j) [X0Y1]");
        assert_eq!(term, PauliTerm::from_ops([(0, Pauli::X), (1, Pauli::Y)]));
    }

    #[test]
    fn test_missing_coefficient_fails() {
        let err = parse_line("0.5 [X0]").unwrap_err();
        assert!(matches!(err, ParseError::MalformedCoefficient { ref line } if line == "0.5 [X0]"));
    }

    #[test]
    fn test_missing_bracket_fails_even_with_coefficient() {
        let err = parse_line("(0.5+0j) X0 Y1").unwrap_err();
        assert!(matches!(err, ParseError::MalformedOperatorSpec { .. }));
    }

    #[test]
    fn test_invalid_bracket_contents_fail() {
        let err = parse_line("(0.5+0j) [Q0]").unwrap_err();
        assert!(matches!(err, ParseError::MalformedOperatorSpec { .. }));
    }

    #[test]
    fn test_first_coefficient_and_bracket_win() {
        let (coeff, term) = term_of("(1.0+0j) [X0] (2.0+0j) [Y1]");
        assert_eq!(coeff, 1.0);
        assert_eq!(term, PauliTerm::from_ops([(0, Pauli::X)]));
    }

    #[test]
    fn test_duplicate_qubit_keeps_first_label() {
        let (_, term) = term_of("(1.0+0j) [X0 Y0]");
        assert_eq!(term.len(), 1);
        assert_eq!(term.label(0), Some(Pauli::X));
    }

    #[test]
    fn test_scan_ops_tolerates_junk() {
        let term = scan_ops("X0 q? Y1 Z");
        assert_eq!(term, PauliTerm::from_ops([(0, Pauli::X), (1, Pauli::Y)]));
    }

    #[test]
    fn test_scan_ops_skips_overflowing_index() {
        let term = scan_ops("X99999999999999999999 Y1");
        assert_eq!(term, PauliTerm::from_ops([(1, Pauli::Y)]));
    }
}
