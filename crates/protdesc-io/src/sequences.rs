//! Plain-text sequence lists: one sequence per line.

use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Read one sequence per line.
///
/// Line endings (`\n` or `\r\n`) are stripped. Empty lines are kept so they
/// show up as failed rows at their original line number. A trailing newline
/// at the end of the file does not add a row.
pub fn read_sequences(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let bytes =
        fs::read(path).with_context(|| format!("failed to read sequences from {}", path.display()))?;
    let sequences = parse_sequences(&bytes);
    debug!(path = %path.display(), sequences = sequences.len(), "read sequence list");
    Ok(sequences)
}

/// Lines are decoded one at a time. Invalid UTF-8 is replaced with
/// `U+FFFD`, which the featurizers then reject for that row alone.
pub fn parse_sequences(bytes: impl AsRef<[u8]>) -> Vec<String> {
    let bytes = bytes.as_ref();
    let mut sequences = Vec::new();
    let mut start = 0;
    for end in memchr::memchr_iter(b'\n', bytes) {
        sequences.push(decode_line(strip_cr(&bytes[start..end]), sequences.len() + 1));
        start = end + 1;
    }
    if start < bytes.len() {
        sequences.push(decode_line(strip_cr(&bytes[start..]), sequences.len() + 1));
    }
    sequences
}

fn decode_line(line: &[u8], number: usize) -> String {
    match String::from_utf8_lossy(line) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            warn!(line = number, "sequence is not valid UTF-8");
            text
        }
    }
}

fn strip_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
