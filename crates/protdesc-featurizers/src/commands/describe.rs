use crate::cli::ScaleArgs;
use anyhow::{Context, Result};
use protdesc_core::SequenceFeaturizer;
use protdesc_io::write_descriptor_json;
use std::path::PathBuf;

pub fn execute(
    sequence: &str,
    scale: Option<&str>,
    scales: &ScaleArgs,
    output: Option<PathBuf>,
) -> Result<()> {
    let featurizer = scales.featurizer();
    let vector = match scale {
        Some(scale) => featurizer.featurize_scale(sequence, scale),
        None => featurizer.featurize(sequence),
    }
    .with_context(|| format!("cannot describe sequence {sequence:?}"))?;

    match output {
        Some(path) => write_descriptor_json(&path, &vector),
        None => {
            println!("{}", serde_json::to_string_pretty(&vector)?);
            Ok(())
        }
    }
}
