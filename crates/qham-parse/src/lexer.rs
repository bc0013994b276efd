//! Lexer for serialized Hamiltonian lines.
//!
//! The format embeds its payload in arbitrary surrounding text (trailing
//! `+` continuation markers, free-form annotations), so the lexer is a
//! tolerant scan: only the two payload tokens are recognized and
//! everything in between is dropped.

use logos::Logos;

/// Tokens recognized inside one Hamiltonian line.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// A real coefficient wrapped as a complex literal, e.g. `(1.5e-01+0j)`.
    ///
    /// Carries the numeric value with sign and exponent honored.
    #[regex(r"\(-?[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?\+0j\)", |lex| {
        let s = lex.slice();
        s[1..s.len() - 4].parse::<f64>().ok()
    })]
    Coefficient(f64),

    /// A bracketed Pauli spec, e.g. `[X0 Y1]` or the identity `[]`.
    ///
    /// Carries the bracket contents with outer whitespace trimmed.
    #[regex(r"\[([XYZ][0-9]+[ \t]*)*\]", |lex| {
        let s = lex.slice();
        s[1..s.len() - 1].trim().to_string()
    })]
    OperatorSpec(String),
}

/// Scan one line, returning the recognized tokens in order.
///
/// Unrecognized text is skipped, mirroring a search-anywhere match: the
/// caller picks the tokens it needs and decides whether their absence is
/// an error.
pub fn scan_line(line: &str) -> Vec<Token> {
    Token::lexer(line).flatten().collect()
}
