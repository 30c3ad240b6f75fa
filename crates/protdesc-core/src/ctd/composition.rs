use super::{round_to, CtdStatistic, StatisticKind};
use crate::catalog::SYMBOLS;
use crate::error::{DescriptorError, Result};
use crate::reduce::ReducedStream;

/// Share of each class label in the stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composition(pub [f64; 3]);

impl CtdStatistic for Composition {
    const KIND: StatisticKind = StatisticKind::Composition;

    fn compute(stream: &ReducedStream) -> Result<Self> {
        let n = stream.len();
        if n == 0 {
            return Err(DescriptorError::EmptyInput);
        }
        Ok(Self(SYMBOLS.map(|symbol| round_to(stream.count(symbol) as f64 / n as f64, 3))))
    }

    fn suffixes() -> Vec<String> {
        SYMBOLS.iter().map(char::to_string).collect()
    }

    fn values(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composition() {
        let c = Composition::compute(&ReducedStream::from("2222")).unwrap();
        assert_eq!(c.0, [0.0, 1.0, 0.0]);

        let c = Composition::compute(&ReducedStream::from(
            "2322222322222222222221222233322323232223332223232222222122222233322",
        ))
        .unwrap();
        assert_eq!(c.0, [0.03, 0.731, 0.239]);
        assert!((c.0.iter().sum::<f64>() - 1.0).abs() <= 0.001);
    }

    #[test]
    fn test_composition_unmapped_characters_dilute() {
        // two of five characters carry no label
        let c = Composition::compute(&ReducedStream::from("1AB23")).unwrap();
        assert_eq!(c.0, [0.2, 0.2, 0.2]);
    }

    #[test]
    fn test_composition_empty() {
        assert_eq!(
            Composition::compute(&ReducedStream::from("")),
            Err(DescriptorError::EmptyInput)
        );
    }

    #[test]
    fn test_entries() {
        let c = Composition([0.5, 0.25, 0.25]);
        assert_eq!(
            c.entries(),
            vec![
                ("1".to_string(), 0.5),
                ("2".to_string(), 0.25),
                ("3".to_string(), 0.25)
            ]
        );
    }
}
