//! Alphabet reduction: a protein sequence rewritten as class labels under one
//! [`PropertyScale`].
//!
//! Reduction is a single pass over the input through the scale's lookup
//! table, so a label written for one residue is never matched again.

use crate::catalog::PropertyScale;
use crate::error::{DescriptorError, Result};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// What to do with characters the scale does not map (lowercase letters,
/// `X`, `B`, gaps, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum UnmappedPolicy {
    /// Keep the character as is. It still counts toward the sequence length,
    /// which is how the historical descriptors were computed.
    #[default]
    PassThrough,
    /// Fail the sequence on its first unmapped character.
    Reject,
}

/// A sequence rewritten into `'1'`/`'2'`/`'3'`, one entry per input character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedStream {
    symbols: Vec<char>,
}

impl ReducedStream {
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn count(&self, symbol: char) -> usize {
        self.symbols.iter().filter(|&&s| s == symbol).count()
    }

    /// 1-based positions of `symbol`, ascending.
    pub fn positions(&self, symbol: char) -> Vec<usize> {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == symbol)
            .map(|(i, _)| i + 1)
            .collect()
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl From<&str> for ReducedStream {
    fn from(symbols: &str) -> Self {
        Self {
            symbols: symbols.chars().collect(),
        }
    }
}

pub fn reduce(sequence: &str, scale: &PropertyScale, policy: UnmappedPolicy) -> Result<ReducedStream> {
    let symbols = sequence
        .chars()
        .enumerate()
        .map(|(i, aa)| match (scale.symbol_for(aa), policy) {
            (Some(symbol), _) => Ok(symbol),
            (None, UnmappedPolicy::PassThrough) => Ok(aa),
            (None, UnmappedPolicy::Reject) => Err(DescriptorError::UnmappedCharacter {
                character: aa,
                position: i + 1,
                scale: scale.name(),
            }),
        })
        .collect::<Result<Vec<char>>>()?;
    Ok(ReducedStream { symbols })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogFlavor};
    use crate::info::constants::AA_LETTERS;

    const PROTEIN: &str = "ADGCGVGEGTGQGPMCNCMCMKWVYADEDAADLESDSFADEDASLESDSFPWSNQRVFCSFADEDAS";

    fn scale(name: &str) -> &'static PropertyScale {
        Catalog::get(CatalogFlavor::Compat).resolve(name).unwrap()
    }

    #[test]
    fn test_reduce_hydrophobicity() {
        let stream = reduce(PROTEIN, scale("_Hydrophobicity"), UnmappedPolicy::PassThrough).unwrap();
        assert_eq!(
            stream.as_string(),
            "2123232122212233133331332211122131212321112231212323211133323211122"
        );
        assert_eq!(stream.len(), PROTEIN.len());

        let stream = reduce("AAAA", scale("_Hydrophobicity"), UnmappedPolicy::PassThrough).unwrap();
        assert_eq!(stream.as_string(), "2222");
    }

    #[test]
    fn test_reduce_passes_unmapped_through() {
        let stream = reduce("HELLO", scale("_Charge"), UnmappedPolicy::PassThrough).unwrap();
        assert_eq!(stream.as_string(), "2322O");

        // the historical polarity table leaves G, A, S, T and D unmapped
        let stream = reduce(PROTEIN, scale("_Polarity"), UnmappedPolicy::PassThrough).unwrap();
        assert_eq!(
            stream.as_string(),
            "ADG1G1G2GTG2G211211113111AD2DAAD12SDS1AD2DAS12SDS121S223111S1AD2DAS"
        );
    }

    #[test]
    fn test_reduce_reject() {
        let err = reduce("GLFDxIK", scale("_Charge"), UnmappedPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            DescriptorError::UnmappedCharacter {
                character: 'x',
                position: 5,
                scale: "_Charge",
            }
        );
        assert!(reduce("GLFDIK", scale("_Charge"), UnmappedPolicy::Reject).is_ok());
    }

    #[test]
    fn test_digits_are_not_rewritten() {
        // a digit already in the input is not a residue and must stay put
        let stream = reduce("K1D", scale("_Charge"), UnmappedPolicy::PassThrough).unwrap();
        assert_eq!(stream.as_string(), "113");
    }

    #[test]
    fn test_canonical_input_reduces_to_labels() {
        let canonical: String = AA_LETTERS.iter().cycle().take(57).collect();
        for scale in Catalog::get(CatalogFlavor::Dubchak).slots() {
            let stream = reduce(&canonical, scale, UnmappedPolicy::Reject).unwrap();
            assert_eq!(stream.len(), canonical.len());
            assert!(stream.symbols().iter().all(|&s| matches!(s, '1' | '2' | '3')));
        }
    }

    #[test]
    fn test_positions() {
        let stream = ReducedStream::from("1213");
        assert_eq!(stream.positions('1'), vec![1, 3]);
        assert_eq!(stream.positions('3'), vec![4]);
        assert!(stream.positions('9').is_empty());
        assert_eq!(stream.count('1'), 2);
    }
}
