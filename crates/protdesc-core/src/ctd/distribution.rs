use super::{round_to, CtdStatistic, StatisticKind};
use crate::catalog::SYMBOLS;
use crate::error::{DescriptorError, Result};
use crate::reduce::ReducedStream;

#[derive(Debug, Clone, Copy)]
enum Rank {
    First,
    Fraction(f64),
    Last,
}

static RANKS: [(&str, Rank); 5] = [
    ("001", Rank::First),
    ("025", Rank::Fraction(0.25)),
    ("050", Rank::Fraction(0.50)),
    ("075", Rank::Fraction(0.75)),
    ("100", Rank::Last),
];

impl Rank {
    /// Picks one of `positions`, which must not be empty.
    fn pick(&self, positions: &[usize]) -> usize {
        let k = positions.len();
        let rank = match self {
            Rank::First => 1,
            Rank::Last => k,
            // floor(k * p) is 1-based and drops to 0 for small k
            Rank::Fraction(p) => ((k as f64 * p).floor() as usize).clamp(1, k),
        };
        positions[rank - 1]
    }
}

/// Where, as a percentage of the sequence length, the first, 25%, 50%, 75%
/// and last occurrence of each class label fall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution(pub [[f64; 5]; 3]);

impl CtdStatistic for Distribution {
    const KIND: StatisticKind = StatisticKind::Distribution;

    fn compute(stream: &ReducedStream) -> Result<Self> {
        let n = stream.len();
        if n == 0 {
            return Err(DescriptorError::EmptyInput);
        }
        Ok(Self(SYMBOLS.map(|symbol| {
            let positions = stream.positions(symbol);
            if positions.is_empty() {
                return [0.0; 5];
            }
            RANKS.map(|(_, rank)| round_to(rank.pick(&positions) as f64 / n as f64 * 100.0, 3))
        })))
    }

    fn suffixes() -> Vec<String> {
        SYMBOLS
            .iter()
            .flat_map(|symbol| RANKS.iter().map(move |(label, _)| format!("{symbol}{label}")))
            .collect()
    }

    fn values(&self) -> Vec<f64> {
        self.0.iter().flatten().copied().collect()
    }
}
