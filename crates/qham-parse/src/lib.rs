//! Parser and loader for serialized qubit Hamiltonians.
//!
//! Consumes the `str()` form of an OpenFermion `QubitOperator` — one term
//! per line, a real coefficient wrapped as a complex literal followed by a
//! bracketed Pauli string:
//!
//! ```text
//! # H2 molecule, Jordan-Wigner encoding
//! (-0.0988639693354576+0j) [] +
//! (0.1711977489805748+0j) [Z0] +
//! (-0.0452830659864669+0j) [X0 X1 Y2 Y3]
//! ```
//!
//! Lines are parsed independently ([`parse_line`]); the loader
//! ([`load`]) accumulates them into a [`qham_op::SymbolicOperator`],
//! skipping comments, blank lines, and (with a diagnostic) malformed
//! lines. Only an unreadable file is escalated to the caller.
//!
//! # Quick start
//!
//! ```rust
//! use qham_parse::load_from_reader;
//! use std::io::Cursor;
//!
//! let text = "(1.0+0j) [X0 Y1]\n(2.0+0j) [Y1 X0]\n";
//! let loaded = load_from_reader(Cursor::new(text)).unwrap();
//!
//! // Same term spelled in two token orders: merged, coefficients summed.
//! assert_eq!(loaded.operator.num_terms(), 1);
//! ```

pub mod error;
pub mod lexer;
pub mod line;
pub mod loader;

pub use error::{LoadError, LoadResult, ParseError, ParseResult};
pub use line::{ParsedLine, parse_line};
pub use loader::{Loaded, SkippedLine, load, load_from_reader};
