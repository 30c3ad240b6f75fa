//! protdesc-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Sequence lists are included in the crate distribution as plain text, one
//! sequence per line, the same layout the batch commands read.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use protdesc_test_data::TestFile;
/// let (seq_file, _temp) = TestFile::peptides_01().create_temp().unwrap();
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Four well-formed sequences: a 67-residue test protein, two
    /// antimicrobial peptides and the homopolymer `AAAA`.
    pub fn peptides_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/sequences/peptides_01.txt"),
            suffix: "txt",
        }
    }

    /// One sequence followed by an empty line.
    pub fn peptides_blank_line() -> Self {
        Self {
            filebinary: include_bytes!("../data/sequences/peptides_blank_line.txt"),
            suffix: "txt",
        }
    }

    /// Rows that exercise the per-row failure paths: a single residue,
    /// lowercase letters and an `X`.
    pub fn peptides_irregular() -> Self {
        Self {
            filebinary: include_bytes!("../data/sequences/peptides_irregular.txt"),
            suffix: "txt",
        }
    }

    /// Raw contents, for tests that don't need a file on disk.
    pub fn contents(&self) -> &'static str {
        std::str::from_utf8(self.filebinary).unwrap_or_default()
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }
}
