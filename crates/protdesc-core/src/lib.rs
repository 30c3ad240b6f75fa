//! # protdesc-core
//!
//! Sequence-derived protein descriptors.
//!
//! __protdesc-core__ provides functionality for:
//! * Reducing a protein sequence to three property classes under a [`PropertyScale`]
//! * Composition, Transition and Distribution (CTD) statistics over the reduced sequence
//! * Amino acid, dipeptide and tri-peptide composition
//! * Featurizing batches of sequences in parallel into a [`DescriptorTable`]
//!
//! The main entry points are [`CtdFeaturizer`] and [`KmerFeaturizer`], both of which
//! implement [`SequenceFeaturizer`].
//!
mod batch;
mod catalog;
mod ctd;
mod descriptors;
mod error;
mod info;
mod kmer;
mod reduce;

pub use self::batch::{featurize_batch, BatchError, BatchOptions, DescriptorTable, TableRow};
pub use self::catalog::{Catalog, CatalogFlavor, CatalogIssue, Preset, PropertyScale, SYMBOLS};
pub use self::ctd::{
    round_to, Composition, CtdStatistic, Distribution, StatisticKind, Transition,
};
pub use self::descriptors::{descriptor_key, CtdFeaturizer, DescriptorVector, SequenceFeaturizer};
pub use self::error::{DescriptorError, Result};
pub use self::info::constants::{is_canonical, AA_LETTERS};
pub use self::kmer::{KmerFeaturizer, KmerSet};
pub use self::reduce::{reduce, ReducedStream, UnmappedPolicy};
