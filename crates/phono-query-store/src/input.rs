//! Line-oriented query input.
//!
//! The driver commands read their query from stdin, one element per line:
//! the comparison operator, then (depending on the command) an integer
//! target, a JSON array of signed feature tags, or a bare phoneme.

use std::io::BufRead;

use phono_query::{parse_feature_tags, ComparisonOp, FeatureQuery};

use crate::error::{StoreError, StoreResult};

/// Reads the next non-empty content line, trimmed.
fn read_line(reader: &mut impl BufRead, expected: &str) -> StoreResult<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .map_err(|source| StoreError::Io {
            path: "<stdin>".to_string(),
            source,
        })?;
    if read == 0 {
        return Err(StoreError::Input(format!(
            "unexpected end of input, expected {expected}"
        )));
    }
    Ok(line.trim().to_string())
}

/// Reads a comparison operator line (`=`, `<`, `<=`, `>`, `>=`).
pub fn read_operator(reader: &mut impl BufRead) -> StoreResult<ComparisonOp> {
    let line = read_line(reader, "a comparison operator")?;
    Ok(ComparisonOp::parse(&line)?)
}

/// Reads an integer target line.
pub fn read_target(reader: &mut impl BufRead) -> StoreResult<i64> {
    let line = read_line(reader, "an integer target")?;
    line.parse()
        .map_err(|_| StoreError::Input(format!("target is not an integer: {line}")))
}

/// Reads one JSON array of signed feature tags and parses it into a
/// [`FeatureQuery`].
pub fn read_feature_tags(reader: &mut impl BufRead) -> StoreResult<FeatureQuery> {
    let line = read_line(reader, "a JSON array of feature tags")?;
    let tags: Vec<String> = serde_json::from_str(&line)
        .map_err(|err| StoreError::Input(format!("expected a JSON array of feature tags: {err}")))?;
    Ok(parse_feature_tags(&tags))
}

/// Reads a bare phoneme line.
pub fn read_phoneme(reader: &mut impl BufRead) -> StoreResult<String> {
    let line = read_line(reader, "a phoneme")?;
    if line.is_empty() {
        return Err(StoreError::Input("empty phoneme".to_string()));
    }
    Ok(line)
}
