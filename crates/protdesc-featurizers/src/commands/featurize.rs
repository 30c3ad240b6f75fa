use crate::cli::TableArgs;
use anyhow::Result;
use protdesc_core::{featurize_batch, BatchOptions, KmerFeaturizer, KmerSet, SequenceFeaturizer};
use protdesc_io::{read_sequences, write_table};
use tracing::info;

/// Read the sequence list, featurize every line and write the table.
/// Failed rows end up in the table, not in the exit status.
pub fn execute<F: SequenceFeaturizer>(featurizer: &F, args: &TableArgs) -> Result<()> {
    let sequences = read_sequences(&args.input)?;
    info!(
        featurizer = featurizer.name(),
        input = %args.input.display(),
        sequences = sequences.len(),
        "featurizing sequence list"
    );
    let options = BatchOptions::builder().maybe_threads(args.threads).build();
    let table = featurize_batch(featurizer, &sequences, options)?;
    write_table(&args.output, &table, args.format, &args.missing)
}

pub fn kmer(set: KmerSet, args: &TableArgs) -> Result<()> {
    execute(&KmerFeaturizer::new(set), args)
}
