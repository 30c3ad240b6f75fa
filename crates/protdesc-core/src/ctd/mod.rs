//! Composition / Transition / Distribution statistics over a [`ReducedStream`].
//!
//! Each statistic yields a fixed list of `(suffix, value)` entries. The
//! aggregator prefixes them with the scale name and the [`StatisticKind`]
//! letter, e.g. `_Charge` + `T` + `12`.
//!
//! References:
//! - Dubchak et al. (1995) Prediction of protein folding class using global
//!   description of amino acid sequence. PNAS 92, 8700-8704.
mod composition;
mod distribution;
mod transition;

pub use composition::Composition;
pub use distribution::Distribution;
pub use transition::Transition;

use crate::error::Result;
use crate::reduce::ReducedStream;
use strum::{AsRefStr, Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
pub enum StatisticKind {
    #[strum(serialize = "C")]
    Composition,
    #[strum(serialize = "T")]
    Transition,
    #[strum(serialize = "D")]
    Distribution,
}

pub trait CtdStatistic: Sized {
    const KIND: StatisticKind;

    fn compute(stream: &ReducedStream) -> Result<Self>;

    /// Key suffixes, in emission order.
    fn suffixes() -> Vec<String>;

    /// Values, aligned with [`CtdStatistic::suffixes`].
    fn values(&self) -> Vec<f64>;

    fn entries(&self) -> Vec<(String, f64)> {
        Self::suffixes().into_iter().zip(self.values()).collect()
    }
}

/// Rounds to `places` decimals the way the historical descriptors were
/// rounded: the exact binary value goes to the nearest decimal, ties to even.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}
