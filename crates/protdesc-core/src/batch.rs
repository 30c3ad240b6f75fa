//! Featurize many sequences into one in-memory table.
//!
//! Rows are computed in parallel and come back in input order. A row that
//! fails keeps its place in the table with the error attached, so one bad
//! sequence never aborts the batch. Rows hold bare values; the column keys
//! live once on the table.

use crate::descriptors::SequenceFeaturizer;
use crate::error::DescriptorError;
use bon::Builder;
use rayon::prelude::*;
use rayon::ThreadPoolBuildError;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct BatchOptions {
    /// Worker count for a dedicated pool. `None` runs on rayon's global pool.
    threads: Option<usize>,
}

impl BatchOptions {
    pub fn threads(&self) -> Option<usize> {
        self.threads
    }
}

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("could not start a pool of {threads} worker threads")]
    ThreadPool {
        threads: usize,
        #[source]
        source: ThreadPoolBuildError,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub sequence: String,
    /// Values aligned with [`DescriptorTable::keys`].
    pub outcome: Result<Vec<f64>, DescriptorError>,
}

impl TableRow {
    pub fn values(&self) -> Option<&[f64]> {
        self.outcome.as_deref().ok()
    }
}

/// Column keys plus one row per input sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorTable {
    pub keys: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl DescriptorTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(line, row)` for every failed row, with 1-based line numbers.
    pub fn failures(&self) -> impl Iterator<Item = (usize, &TableRow)> {
        self.rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.outcome.is_err())
            .map(|(i, row)| (i + 1, row))
    }
}

fn featurize_rows<F, S>(featurizer: &F, sequences: &[S]) -> Vec<TableRow>
where
    F: SequenceFeaturizer,
    S: AsRef<str> + Sync,
{
    sequences
        .par_iter()
        .map(|sequence| {
            let sequence = sequence.as_ref();
            TableRow {
                sequence: sequence.to_string(),
                outcome: featurizer.featurize_values(sequence),
            }
        })
        .collect()
}

pub fn featurize_batch<F, S>(
    featurizer: &F,
    sequences: &[S],
    options: BatchOptions,
) -> Result<DescriptorTable, BatchError>
where
    F: SequenceFeaturizer,
    S: AsRef<str> + Sync,
{
    let keys = featurizer.feature_keys();
    debug!(
        featurizer = featurizer.name(),
        sequences = sequences.len(),
        keys = keys.len(),
        "featurizing batch"
    );

    let rows = match options.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|source| BatchError::ThreadPool { threads, source })?
            .install(|| featurize_rows(featurizer, sequences)),
        None => featurize_rows(featurizer, sequences),
    };

    let table = DescriptorTable { keys, rows };
    for (line, row) in table.failures() {
        if let Err(err) = &row.outcome {
            warn!(line, sequence = %row.sequence, "{err}");
        }
    }
    info!(
        featurizer = featurizer.name(),
        rows = table.len(),
        failed = table.failures().count(),
        "batch complete"
    );
    Ok(table)
}
