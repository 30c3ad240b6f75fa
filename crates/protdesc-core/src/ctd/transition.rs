use super::{round_to, CtdStatistic, StatisticKind};
use crate::error::{DescriptorError, Result};
use crate::reduce::ReducedStream;

const PAIRS: [(char, char); 3] = [('1', '2'), ('1', '3'), ('2', '3')];

/// Frequency of label changes between neighbours, per unordered pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition(pub [f64; 3]);

impl CtdStatistic for Transition {
    const KIND: StatisticKind = StatisticKind::Transition;

    fn compute(stream: &ReducedStream) -> Result<Self> {
        let n = stream.len();
        match n {
            0 => return Err(DescriptorError::EmptyInput),
            1 => {
                return Err(DescriptorError::ShortInput {
                    length: n,
                    statistic: "transition",
                })
            }
            _ => {}
        }
        let mut counts = [0usize; 3];
        for window in stream.symbols().windows(2) {
            let (a, b) = (window[0], window[1]);
            if let Some(i) = PAIRS
                .iter()
                .position(|&(x, y)| (a, b) == (x, y) || (a, b) == (y, x))
            {
                counts[i] += 1;
            }
        }
        Ok(Self(counts.map(|c| round_to(c as f64 / (n - 1) as f64, 3))))
    }

    fn suffixes() -> Vec<String> {
        PAIRS.iter().map(|(a, b)| format!("{a}{b}")).collect()
    }

    fn values(&self) -> Vec<f64> {
        self.0.to_vec()
    }
}
