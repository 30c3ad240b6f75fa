use super::commands;
use clap::{Args, Parser, Subcommand};
use protdesc_core::{CatalogFlavor, CtdFeaturizer, KmerSet, Preset, UnmappedPolicy};
use protdesc_io::{TableFormat, DEFAULT_MISSING};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` overrides it.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Composition / Transition / Distribution descriptors for a sequence list
    Ctd {
        #[command(flatten)]
        table: TableArgs,
        #[command(flatten)]
        scales: ScaleArgs,
    },
    /// Amino acid composition (20 columns)
    Aac {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Dipeptide composition (400 columns)
    Dpc {
        #[command(flatten)]
        table: TableArgs,
    },
    /// Amino acid + dipeptide composition and tri-peptide counts (8420 columns)
    Kmer {
        #[command(flatten)]
        table: TableArgs,
    },
    /// CTD descriptors of one sequence as a JSON object
    Describe {
        #[arg(short, long)]
        sequence: String,
        /// Only this scale, e.g. `_Charge`
        #[arg(long)]
        scale: Option<String>,
        #[command(flatten)]
        scales: ScaleArgs,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the property scales of a catalog and what is wrong with them
    Scales {
        #[arg(long, default_value = "compat")]
        catalog: CatalogFlavor,
    },
}

/// Input and output of the batch commands.
#[derive(Args)]
pub struct TableArgs {
    /// One sequence per line
    #[arg(short, long)]
    pub input: PathBuf,
    #[arg(short, long)]
    pub output: PathBuf,
    /// `legacy` or `csv`
    #[arg(long, default_value = "legacy")]
    pub format: TableFormat,
    /// Written in place of values a row could not produce
    #[arg(long, default_value = DEFAULT_MISSING)]
    pub missing: String,
    /// Worker threads; defaults to one per core
    #[arg(long)]
    pub threads: Option<usize>,
}

#[derive(Args)]
pub struct ScaleArgs {
    /// `legacy` (7 scales) or `full` (every catalog slot)
    #[arg(long, default_value = "legacy")]
    pub preset: Preset,
    /// `compat` reproduces the historical table, `dubchak` fixes its partitions
    #[arg(long, default_value = "compat")]
    pub catalog: CatalogFlavor,
    /// Fail a sequence on characters a scale does not map
    #[arg(long)]
    pub strict: bool,
}

impl ScaleArgs {
    pub fn featurizer(&self) -> CtdFeaturizer {
        let unmapped = if self.strict {
            UnmappedPolicy::Reject
        } else {
            UnmappedPolicy::PassThrough
        };
        CtdFeaturizer::builder()
            .preset(self.preset)
            .flavor(self.catalog)
            .unmapped(unmapped)
            .build()
    }
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Ctd { table, scales } => {
                commands::featurize::execute(&scales.featurizer(), &table)
            }
            Commands::Aac { table } => commands::featurize::kmer(KmerSet::Aac, &table),
            Commands::Dpc { table } => commands::featurize::kmer(KmerSet::Dpc, &table),
            Commands::Kmer { table } => commands::featurize::kmer(KmerSet::Combined, &table),
            Commands::Describe {
                sequence,
                scale,
                scales,
                output,
            } => commands::describe::execute(&sequence, scale.as_deref(), &scales, output),
            Commands::Scales { catalog } => commands::scales::execute(catalog),
        }
    }
}
