//! File loader: orchestrates line parsing into an accumulated operator.

use crate::error::{LoadError, LoadResult, ParseError};
use crate::line::{ParsedLine, parse_line};
use qham_op::SymbolicOperator;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A line the loader rejected, with the reason.
#[derive(Debug)]
pub struct SkippedLine {
    /// 1-based line number in the source.
    pub line_no: usize,
    /// The line text, verbatim.
    pub text: String,
    /// Which phase of parsing failed.
    pub reason: ParseError,
}

/// Result of a load: the accumulated operator plus the lines that were
/// rejected along the way.
///
/// Comment and blank lines are not counted as skipped; only lines that
/// failed to parse appear in `skipped`.
#[derive(Debug, Default)]
pub struct Loaded {
    /// The accumulated operator.
    pub operator: SymbolicOperator,
    /// Malformed lines, in source order.
    pub skipped: Vec<SkippedLine>,
}

/// Load a serialized Hamiltonian from a file.
///
/// The file handle is scoped to this call and released on every exit
/// path. A path that cannot be opened (or a stream that fails mid-read)
/// yields [`LoadError::UnreadableFile`]; the caller may treat that as an
/// empty operator. Malformed lines are reported and skipped — a single
/// bad line never aborts the load.
pub fn load(path: impl AsRef<Path>) -> LoadResult<Loaded> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::UnreadableFile {
        path: path.to_path_buf(),
        source,
    })?;
    let loaded =
        load_from_reader(BufReader::new(file)).map_err(|source| LoadError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(
        "Loaded {}: {} terms, {} lines skipped",
        path.display(),
        loaded.operator.num_terms(),
        loaded.skipped.len()
    );
    Ok(loaded)
}

/// Accumulate a serialized Hamiltonian from any line source.
pub fn load_from_reader<R: BufRead>(reader: R) -> io::Result<Loaded> {
    let mut loaded = Loaded::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(&line) {
            Ok(ParsedLine::Skip) => {}
            Ok(ParsedLine::Term { coeff, term }) => loaded.operator.add_term(term, coeff),
            Err(reason) => {
                tracing::warn!("Skipping line {}: {}", idx + 1, reason);
                loaded.skipped.push(SkippedLine {
                    line_no: idx + 1,
                    text: line,
                    reason,
                });
            }
        }
    }
    Ok(loaded)
}
