//! Writing descriptor tables and single descriptor vectors.
//!
//! Every writer renders into a temporary file next to the destination and
//! then renames it over the target, so a reader never sees a half-written
//! table.

use anyhow::{Context, Result};
use polars::prelude::*;
use protdesc_core::{DescriptorTable, DescriptorVector};
use std::io::{BufWriter, Write};
use std::path::Path;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tempfile::NamedTempFile;
use tracing::info;

/// Marker written in place of a value the row could not produce.
pub const DEFAULT_MISSING: &str = "NA";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TableFormat {
    /// `seq,` header and a trailing comma on every line, as the historical
    /// batch scripts wrote it.
    #[default]
    Legacy,
    /// Plain CSV written through polars.
    Csv,
}

/// Column header for a descriptor key: every `_` removed.
pub fn column_name(key: &str) -> String {
    key.replace('_', "")
}

pub fn render_legacy<W: Write>(table: &DescriptorTable, missing: &str, out: &mut W) -> std::io::Result<()> {
    let header = table.keys.iter().map(|key| column_name(key)).collect::<Vec<_>>();
    writeln!(out, "seq,{},", header.join(", "))?;
    for row in &table.rows {
        write!(out, "{},", row.sequence)?;
        match row.values() {
            Some(values) => {
                for value in values {
                    write!(out, "{value:?},")?;
                }
            }
            None => {
                for _ in &table.keys {
                    write!(out, "{missing},")?;
                }
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One `seq` string column and one nullable `f64` column per key. Failed
/// rows are null across every descriptor column.
pub fn table_frame(table: &DescriptorTable) -> PolarsResult<DataFrame> {
    let sequences: Vec<&str> = table.rows.iter().map(|row| row.sequence.as_str()).collect();
    let mut columns = Vec::with_capacity(table.keys.len() + 1);
    columns.push(Column::new("seq".into(), sequences));
    for (column, key) in table.keys.iter().enumerate() {
        let values: Vec<Option<f64>> = table
            .rows
            .iter()
            .map(|row| row.values().and_then(|values| values.get(column).copied()))
            .collect();
        columns.push(Column::new(column_name(key).into(), values));
    }
    DataFrame::new(columns)
}

fn temp_beside(path: &Path) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create a temporary file in {}", dir.display()))
}

fn persist(temp: NamedTempFile, path: &Path) -> Result<()> {
    temp.persist(path)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

pub fn write_table(
    path: impl AsRef<Path>,
    table: &DescriptorTable,
    format: TableFormat,
    missing: &str,
) -> Result<()> {
    let path = path.as_ref();
    let mut temp = temp_beside(path)?;
    match format {
        TableFormat::Legacy => {
            let mut out = BufWriter::new(temp.as_file_mut());
            render_legacy(table, missing, &mut out)
                .and_then(|_| out.flush())
                .with_context(|| format!("failed to render table for {}", path.display()))?;
        }
        TableFormat::Csv => {
            let mut frame = table_frame(table).context("failed to assemble descriptor frame")?;
            CsvWriter::new(temp.as_file_mut())
                .include_header(true)
                .with_null_value(missing.to_string())
                .finish(&mut frame)
                .with_context(|| format!("failed to render table for {}", path.display()))?;
        }
    }
    persist(temp, path)?;
    info!(
        path = %path.display(),
        %format,
        rows = table.len(),
        columns = table.keys.len(),
        "wrote descriptor table"
    );
    Ok(())
}

/// A single sequence's descriptors as a JSON object, keys in order.
pub fn write_descriptor_json(path: impl AsRef<Path>, vector: &DescriptorVector) -> Result<()> {
    let path = path.as_ref();
    let mut temp = temp_beside(path)?;
    serde_json::to_writer_pretty(temp.as_file_mut(), vector)
        .with_context(|| format!("failed to serialize descriptors for {}", path.display()))?;
    persist(temp, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use protdesc_core::{featurize_batch, BatchOptions, CtdFeaturizer, KmerFeaturizer, KmerSet};
    use std::fs;
    use tempfile::tempdir;

    fn blank_line_table() -> DescriptorTable {
        let sequences = ["AAAA", ""];
        featurize_batch(&CtdFeaturizer::default(), &sequences, BatchOptions::default()).unwrap()
    }

    #[test]
    fn test_legacy_layout() {
        let table = blank_line_table();
        let mut out = Vec::new();
        render_legacy(&table, DEFAULT_MISSING, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("seq,PolarizabilityC1, PolarizabilityC2, "));
        assert!(lines[0].ends_with(", HydrophobicityD3100,"));
        assert!(!lines[0].contains('_'));

        assert!(lines[1].starts_with("AAAA,"));
        assert!(lines[1].ends_with(','));
        // sequence + 147 values, each followed by a comma
        assert_eq!(lines[1].matches(',').count(), 148);
        assert!(lines[1].contains(",25.0,25.0,50.0,75.0,100.0,"));

        assert_eq!(lines[2], format!(",{}", "NA,".repeat(147)));
    }

    #[test]
    fn test_write_table_legacy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ctd.csv");
        fs::write(&path, "stale contents\n").unwrap();
        write_table(&path, &blank_line_table(), TableFormat::Legacy, "None").unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("seq,"));
        assert!(!text.contains("stale"));
        assert!(text.ends_with("None,\n"));
        // only the target remains in the directory
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_table_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("aac.csv");
        let table = featurize_batch(
            &KmerFeaturizer::new(KmerSet::Aac),
            &["AADD", "KR", ""],
            BatchOptions::default(),
        )
        .unwrap();
        write_table(&path, &table, TableFormat::Csv, DEFAULT_MISSING).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "seq,A,R,N,D,C,E,Q,G,H,I,L,K,M,F,P,S,T,W,Y,V");
        let first: Vec<&str> = lines[1].split(',').collect();
        assert_eq!(first.len(), 21);
        assert_eq!(first[0], "AADD");
        assert_eq!(first[1].parse::<f64>().unwrap(), 50.0);
        assert_eq!(first[4].parse::<f64>().unwrap(), 50.0);
        assert_eq!(first[2].parse::<f64>().unwrap(), 0.0);
        assert!(lines[3].ends_with(&",NA".repeat(20)));
    }

    #[test]
    fn test_table_frame_nulls() {
        let frame = table_frame(&blank_line_table()).unwrap();
        assert_eq!(frame.shape(), (2, 148));
        let column = frame.column("HydrophobicityC2").unwrap();
        assert_eq!(column.null_count(), 1);
    }

    #[test]
    fn test_write_descriptor_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("aaaa.json");
        let vector = CtdFeaturizer::default().featurize_scale("AAAA", "_Hydrophobicity").unwrap();
        write_descriptor_json(&path, &vector).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        let first = text.find("_HydrophobicityC1").unwrap();
        let last = text.find("_HydrophobicityD3100").unwrap();
        assert!(first < last);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["_HydrophobicityD2050"], 50.0);
    }

    #[test]
    fn test_unwritable_destination() {
        let err = write_table(
            "/nonexistent/dir/out.csv",
            &blank_line_table(),
            TableFormat::Legacy,
            DEFAULT_MISSING,
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dir"));
    }
}
