//! Error type for descriptor computation.

use thiserror::Error;

/// Per-sequence failures. None of these abort a batch: the batch runner
/// records them against the offending row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    #[error("empty sequence")]
    EmptyInput,

    /// The statistic divides by `length - 1`.
    #[error("sequence of length {length} is too short for {statistic}")]
    ShortInput {
        length: usize,
        statistic: &'static str,
    },

    #[error("character {character:?} at position {position} is not mapped by scale {scale}")]
    UnmappedCharacter {
        character: char,
        position: usize,
        scale: &'static str,
    },

    #[error("unknown property scale '{0}'")]
    UnknownScale(String),
}

pub type Result<T> = std::result::Result<T, DescriptorError>;
