//! Descriptor vectors and the featurizers that produce them.
//!
//! A [`SequenceFeaturizer`] turns one sequence into values laid out in the
//! order of [`SequenceFeaturizer::feature_keys`]. Batch tables keep only the
//! values and hold the keys once; [`SequenceFeaturizer::featurize`] pairs
//! them up into a [`DescriptorVector`] for a single sequence.

use crate::catalog::{Catalog, CatalogFlavor, Preset, PropertyScale};
use crate::ctd::{Composition, CtdStatistic, Distribution, StatisticKind, Transition};
use crate::error::{DescriptorError, Result};
use crate::reduce::{reduce, ReducedStream, UnmappedPolicy};
use bon::Builder;
use itertools::Itertools;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Ordered `key -> value` mapping for one sequence.
///
/// Inserting a key that is already present overwrites its value and keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DescriptorVector {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl DescriptorVector {
    fn insert(&mut self, key: String, value: f64) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.index.get(key).map(|&i| self.entries[i].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), *value))
    }
}

impl FromIterator<(String, f64)> for DescriptorVector {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut vector = DescriptorVector::default();
        for (key, value) in iter {
            vector.insert(key, value);
        }
        vector
    }
}

impl Serialize for DescriptorVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Something that maps a sequence to a fixed set of named descriptors.
pub trait SequenceFeaturizer: Sync {
    fn name(&self) -> &'static str;

    /// Every key, in output order.
    fn feature_keys(&self) -> Vec<String>;

    /// Values aligned with [`SequenceFeaturizer::feature_keys`].
    fn featurize_values(&self, sequence: &str) -> Result<Vec<f64>>;

    fn featurize(&self, sequence: &str) -> Result<DescriptorVector> {
        let values = self.featurize_values(sequence)?;
        Ok(self.feature_keys().into_iter().zip(values).collect())
    }
}

/// `<scale><C|T|D><suffix>`, e.g. `_ChargeT12`.
pub fn descriptor_key(scale: &str, kind: StatisticKind, suffix: &str) -> String {
    format!("{scale}{kind}{suffix}")
}

/// Composition, transition and distribution descriptors over every scale of
/// a preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Builder)]
pub struct CtdFeaturizer {
    #[builder(default)]
    preset: Preset,
    #[builder(default)]
    flavor: CatalogFlavor,
    #[builder(default)]
    unmapped: UnmappedPolicy,
}

impl CtdFeaturizer {
    pub fn preset(&self) -> Preset {
        self.preset
    }

    pub fn catalog(&self) -> &'static Catalog {
        Catalog::get(self.flavor)
    }

    /// Preset scales with aliased slots collapsed: the key block sits where
    /// the name first appears and the last slot carrying it supplies values.
    fn scales(&self) -> Vec<&'static PropertyScale> {
        let slots = self.catalog().preset(self.preset);
        slots
            .iter()
            .map(|scale| scale.name())
            .unique()
            .filter_map(|name| slots.iter().rev().find(|scale| scale.name() == name).copied())
            .collect()
    }

    fn values_for(&self, scales: &[&PropertyScale], sequence: &str) -> Result<Vec<f64>> {
        check_length(sequence)?;
        let streams = scales
            .iter()
            .map(|scale| reduce(sequence, scale, self.unmapped))
            .collect::<Result<Vec<_>>>()?;

        let mut values = Vec::with_capacity(streams.len() * 21);
        push_block::<Composition>(&mut values, &streams)?;
        push_block::<Transition>(&mut values, &streams)?;
        push_block::<Distribution>(&mut values, &streams)?;
        Ok(values)
    }

    /// Descriptors of a single scale, looked up by name in this featurizer's
    /// catalog whether or not the preset includes it.
    pub fn featurize_scale(&self, sequence: &str, scale: &str) -> Result<DescriptorVector> {
        let scales = [self.catalog().resolve(scale)?];
        let values = self.values_for(&scales, sequence)?;
        Ok(keys_for(&scales).into_iter().zip(values).collect())
    }
}

fn check_length(sequence: &str) -> Result<()> {
    match sequence.chars().count() {
        0 => Err(DescriptorError::EmptyInput),
        1 => Err(DescriptorError::ShortInput {
            length: 1,
            statistic: "transition",
        }),
        _ => Ok(()),
    }
}

fn push_block<S: CtdStatistic>(values: &mut Vec<f64>, streams: &[ReducedStream]) -> Result<()> {
    for stream in streams {
        values.extend(S::compute(stream)?.values());
    }
    Ok(())
}

fn block_keys<S: CtdStatistic>(scales: &[&PropertyScale]) -> Vec<String> {
    let suffixes = S::suffixes();
    scales
        .iter()
        .flat_map(|scale| {
            suffixes
                .iter()
                .map(move |suffix| descriptor_key(scale.name(), S::KIND, suffix))
        })
        .collect()
}

fn keys_for(scales: &[&PropertyScale]) -> Vec<String> {
    let mut keys = block_keys::<Composition>(scales);
    keys.extend(block_keys::<Transition>(scales));
    keys.extend(block_keys::<Distribution>(scales));
    keys
}

impl SequenceFeaturizer for CtdFeaturizer {
    fn name(&self) -> &'static str {
        "ctd"
    }

    fn feature_keys(&self) -> Vec<String> {
        keys_for(&self.scales())
    }

    fn featurize_values(&self, sequence: &str) -> Result<Vec<f64>> {
        self.values_for(&self.scales(), sequence)
    }
}
