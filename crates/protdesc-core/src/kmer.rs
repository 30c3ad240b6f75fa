//! Amino acid composition, dipeptide composition and the tri-peptide
//! spectrum.
//!
//! Occurrences are counted the way substring counting does it: per k-mer,
//! left to right, without overlap. `"AAAA"` holds the dipeptide `AA` twice
//! and `"AAAAA"` holds `AAA` once. Windows containing a non-canonical
//! character are skipped but the character still counts toward the length.

use crate::ctd::round_to;
use crate::descriptors::SequenceFeaturizer;
use crate::error::{DescriptorError, Result};
use crate::info::constants::{aa_index, AA_COUNT, AA_LETTERS};
use itertools::Itertools;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Which k-mer blocks a [`KmerFeaturizer`] emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum KmerSet {
    /// 20 amino acid percentages.
    #[default]
    Aac,
    /// 400 dipeptide percentages.
    Dpc,
    /// AAC, DPC and the 8000 raw tri-peptide counts.
    Combined,
}

/// Counts of every k-mer over the canonical alphabet, indexed base 20 in
/// [`AA_LETTERS`] order.
fn count_kmers(sequence: &[u8], k: usize) -> Vec<u32> {
    let size = AA_COUNT.pow(k as u32);
    let mut counts = vec![0u32; size];
    // first start position at which each k-mer may be counted again
    let mut next_start = vec![0usize; size];
    for (pos, window) in sequence.windows(k).enumerate() {
        let Some(code) = encode(window) else {
            continue;
        };
        if pos >= next_start[code] {
            counts[code] += 1;
            next_start[code] = pos + k;
        }
    }
    counts
}

fn encode(window: &[u8]) -> Option<usize> {
    window
        .iter()
        .try_fold(0usize, |code, &aa| Some(code * AA_COUNT + aa_index(aa)?))
}

fn kmer_keys(k: usize) -> Vec<String> {
    (0..k)
        .map(|_| AA_LETTERS.iter())
        .multi_cartesian_product()
        .map(|letters| letters.into_iter().collect())
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KmerFeaturizer {
    set: KmerSet,
}

impl KmerFeaturizer {
    pub fn new(set: KmerSet) -> Self {
        Self { set }
    }

    pub fn set(&self) -> KmerSet {
        self.set
    }

    fn wants_dipeptides(&self) -> bool {
        matches!(self.set, KmerSet::Dpc | KmerSet::Combined)
    }
}

impl SequenceFeaturizer for KmerFeaturizer {
    fn name(&self) -> &'static str {
        match self.set {
            KmerSet::Aac => "aac",
            KmerSet::Dpc => "dpc",
            KmerSet::Combined => "kmer",
        }
    }

    fn feature_keys(&self) -> Vec<String> {
        match self.set {
            KmerSet::Aac => kmer_keys(1),
            KmerSet::Dpc => kmer_keys(2),
            KmerSet::Combined => [1, 2, 3].into_iter().flat_map(kmer_keys).collect(),
        }
    }

    fn featurize_values(&self, sequence: &str) -> Result<Vec<f64>> {
        let n = sequence.chars().count();
        if n == 0 {
            return Err(DescriptorError::EmptyInput);
        }
        if n == 1 && self.wants_dipeptides() {
            return Err(DescriptorError::ShortInput {
                length: n,
                statistic: "dipeptide composition",
            });
        }
        let bytes = sequence.as_bytes();

        let aac = || {
            count_kmers(bytes, 1)
                .into_iter()
                .map(move |c| round_to(c as f64 / n as f64 * 100.0, 3))
        };
        let dpc = || {
            count_kmers(bytes, 2)
                .into_iter()
                .map(move |c| round_to(c as f64 / (n - 1) as f64 * 100.0, 2))
        };
        let spectrum = || count_kmers(bytes, 3).into_iter().map(f64::from);

        Ok(match self.set {
            KmerSet::Aac => aac().collect(),
            KmerSet::Dpc => dpc().collect(),
            KmerSet::Combined => aac().chain(dpc()).chain(spectrum()).collect(),
        })
    }
}
