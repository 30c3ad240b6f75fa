//! # Property catalog
//!
//! Each [`PropertyScale`] splits the amino acid alphabet into three classes,
//! labelled `'1'`, `'2'` and `'3'`. Catalogs are built once per process and
//! never mutated; [`Catalog::get`] hands out a `&'static` reference.
//!
//! Two flavors exist:
//!
//! - [`CatalogFlavor::Compat`] reproduces the historical table exactly,
//!   defects included, so descriptors match previously trained models.
//! - [`CatalogFlavor::Dubchak`] swaps in the published partitions for the
//!   malformed scales and drops the duplicated slot.
//!
//! Defects are reported by [`Catalog::validate`] and logged when a catalog is
//! first loaded.
mod scales;

use crate::error::{DescriptorError, Result};
use crate::info::constants::AA_LETTERS;
use itertools::Itertools;
use scales::{ScaleDef, COMPAT, DUBCHAK_OVERRIDES, EXTENDED_ORDER, LEGACY_ORDER};
use std::fmt;
use std::sync::OnceLock;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{debug, warn};

/// Class labels, in group order.
pub const SYMBOLS: [char; 3] = ['1', '2', '3'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum CatalogFlavor {
    #[default]
    Compat,
    Dubchak,
}

/// Named subsets of the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Preset {
    /// The seven original CTD scales: 147 descriptors.
    #[default]
    Legacy,
    /// Every catalog slot.
    Full,
}

impl Preset {
    fn scale_names(&self) -> impl Iterator<Item = &'static str> {
        let extended: &'static [&'static str] = match self {
            Preset::Legacy => &[],
            Preset::Full => &EXTENDED_ORDER,
        };
        LEGACY_ORDER.iter().chain(extended.iter()).copied()
    }
}

pub struct PropertyScale {
    name: &'static str,
    description: &'static str,
    groups: [&'static str; 3],
    // ASCII code -> class label, 0 when unmapped
    lookup: [u8; 128],
}

impl PropertyScale {
    /// A letter listed in more than one group takes the lowest group.
    pub fn new(name: &'static str, description: &'static str, groups: [&'static str; 3]) -> Self {
        let mut lookup = [0u8; 128];
        for (group, symbol) in groups.iter().zip(SYMBOLS) {
            for aa in group.bytes().filter(u8::is_ascii) {
                let slot = &mut lookup[aa as usize];
                if *slot == 0 {
                    *slot = symbol as u8;
                }
            }
        }
        Self {
            name,
            description,
            groups,
            lookup,
        }
    }

    fn from_def(def: &ScaleDef) -> Self {
        Self::new(def.name, def.description, def.groups)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn groups(&self) -> [&'static str; 3] {
        self.groups
    }

    /// Class label of `aa`, or `None` when no group lists it.
    pub fn symbol_for(&self, aa: char) -> Option<char> {
        if !aa.is_ascii() {
            return None;
        }
        match self.lookup[aa as usize] {
            0 => None,
            symbol => Some(symbol as char),
        }
    }

    /// Letters listed in more than one group, and canonical letters missing
    /// from every group.
    pub fn issues(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        for aa in AA_LETTERS {
            let listed_in: Vec<char> = self
                .groups
                .iter()
                .zip(SYMBOLS)
                .filter(|(group, _)| group.contains(aa))
                .map(|(_, symbol)| symbol)
                .collect();
            match listed_in.len() {
                0 => issues.push(CatalogIssue::Uncovered {
                    scale: self.name,
                    letter: aa,
                }),
                1 => {}
                _ => issues.push(CatalogIssue::Overlap {
                    scale: self.name,
                    letter: aa,
                    groups: listed_in,
                }),
            }
        }
        issues
    }

    pub fn is_partition(&self) -> bool {
        self.issues().is_empty()
    }
}

impl fmt::Debug for PropertyScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyScale")
            .field("name", &self.name)
            .field("groups", &self.groups)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// `letter` is listed in several groups; the first one wins.
    Overlap {
        scale: &'static str,
        letter: char,
        groups: Vec<char>,
    },
    /// `letter` is in no group and passes through reduction untouched.
    Uncovered { scale: &'static str, letter: char },
    /// The same scale occupies several slots; its keys collapse into one set.
    DuplicateAlias {
        scale: &'static str,
        slots: Vec<usize>,
    },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::Overlap {
                scale,
                letter,
                groups,
            } => write!(
                f,
                "{scale}: '{letter}' is listed in groups {}, group {} is used",
                groups.iter().join("/"),
                groups[0]
            ),
            CatalogIssue::Uncovered { scale, letter } => {
                write!(f, "{scale}: '{letter}' is in no group and is left unreduced")
            }
            CatalogIssue::DuplicateAlias { scale, slots } => write!(
                f,
                "{scale}: occupies catalog slots {}, its descriptors are emitted once",
                slots.iter().join(", ")
            ),
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    flavor: CatalogFlavor,
    slots: Vec<PropertyScale>,
}

static COMPAT_CATALOG: OnceLock<Catalog> = OnceLock::new();
static DUBCHAK_CATALOG: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// The process-wide catalog of the given flavor.
    pub fn get(flavor: CatalogFlavor) -> &'static Catalog {
        let cell = match flavor {
            CatalogFlavor::Compat => &COMPAT_CATALOG,
            CatalogFlavor::Dubchak => &DUBCHAK_CATALOG,
        };
        cell.get_or_init(|| {
            let catalog = Catalog::build(flavor);
            for issue in catalog.validate() {
                warn!(catalog = %flavor, "{issue}");
            }
            debug!(catalog = %flavor, slots = catalog.slots.len(), "property catalog loaded");
            catalog
        })
    }

    fn build(flavor: CatalogFlavor) -> Self {
        let slots = match flavor {
            CatalogFlavor::Compat => COMPAT.iter().map(PropertyScale::from_def).collect(),
            CatalogFlavor::Dubchak => COMPAT
                .iter()
                .map(|def| {
                    DUBCHAK_OVERRIDES
                        .iter()
                        .find(|fix| fix.name == def.name)
                        .unwrap_or(def)
                })
                .unique_by(|def| def.name)
                .map(PropertyScale::from_def)
                .collect(),
        };
        Self { flavor, slots }
    }

    pub fn flavor(&self) -> CatalogFlavor {
        self.flavor
    }

    /// Every slot, in catalog order.
    pub fn slots(&self) -> &[PropertyScale] {
        &self.slots
    }

    /// The canonical (first) slot carrying `name`.
    pub fn resolve(&self, name: &str) -> Result<&PropertyScale> {
        self.slots
            .iter()
            .find(|scale| scale.name == name)
            .ok_or_else(|| DescriptorError::UnknownScale(name.to_string()))
    }

    /// Scales of a preset in emission order. Aliased slots appear back to
    /// back under their shared name.
    pub fn preset(&self, preset: Preset) -> Vec<&PropertyScale> {
        preset
            .scale_names()
            .flat_map(|name| self.slots.iter().filter(move |scale| scale.name == name))
            .collect()
    }

    /// Names that occupy more than one slot, with their slot indices.
    pub fn aliases(&self) -> Vec<(&'static str, Vec<usize>)> {
        self.slots
            .iter()
            .enumerate()
            .into_group_map_by(|(_, scale)| scale.name)
            .into_iter()
            .filter(|(_, slots)| slots.len() > 1)
            .map(|(name, slots)| (name, slots.into_iter().map(|(i, _)| i).collect::<Vec<_>>()))
            .sorted_by_key(|(_, slots)| slots[0])
            .collect()
    }

    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues: Vec<CatalogIssue> = self
            .slots
            .iter()
            .unique_by(|scale| scale.name)
            .flat_map(PropertyScale::issues)
            .collect();
        issues.extend(
            self.aliases()
                .into_iter()
                .map(|(scale, slots)| CatalogIssue::DuplicateAlias { scale, slots }),
        );
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_compat_slots() {
        let catalog = Catalog::get(CatalogFlavor::Compat);
        assert_eq!(catalog.slots().len(), 25);
        assert_eq!(catalog.preset(Preset::Legacy).len(), 7);
        assert_eq!(catalog.preset(Preset::Full).len(), 25);

        let names: Vec<&str> = catalog.preset(Preset::Legacy).iter().map(|s| s.name()).collect();
        assert_eq!(names[0], "_Polarizability");
        assert_eq!(names[6], "_Hydrophobicity");
    }

    #[test]
    fn test_compat_issues() {
        let catalog = Catalog::get(CatalogFlavor::Compat);
        let issues = catalog.validate();

        let broken: Vec<&str> = issues
            .iter()
            .filter_map(|issue| match issue {
                CatalogIssue::Overlap { scale, .. } | CatalogIssue::Uncovered { scale, .. } => {
                    Some(*scale)
                }
                CatalogIssue::DuplicateAlias { .. } => None,
            })
            .unique()
            .collect();
        assert_eq!(broken, vec!["_NormalizedVDWV", "_Polarity"]);

        assert!(issues.contains(&CatalogIssue::Uncovered {
            scale: "_NormalizedVDWV",
            letter: 'C'
        }));
        assert!(issues.contains(&CatalogIssue::Overlap {
            scale: "_Polarity",
            letter: 'C',
            groups: vec!['1', '2'],
        }));
        assert!(issues.contains(&CatalogIssue::DuplicateAlias {
            scale: "_PRNAIPropPhipps",
            slots: vec![14, 15],
        }));
    }

    #[test]
    fn test_first_group_wins() {
        let polarity = Catalog::get(CatalogFlavor::Compat)
            .resolve("_Polarity")
            .unwrap();
        // 'C' is in groups 1 and 2, 'M' in 1 and 3
        assert_eq!(polarity.symbol_for('C'), Some('1'));
        assert_eq!(polarity.symbol_for('M'), Some('1'));
        assert_eq!(polarity.symbol_for('K'), Some('3'));
        assert_eq!(polarity.symbol_for('G'), None);
    }

    #[test]
    fn test_dubchak_is_clean() {
        let catalog = Catalog::get(CatalogFlavor::Dubchak);
        assert!(catalog.validate().is_empty());
        assert_eq!(catalog.slots().len(), 24);
        assert!(catalog.aliases().is_empty());

        // every canonical letter lands in exactly one class
        for scale in catalog.slots() {
            assert!(scale.is_partition(), "{}", scale.name());
            for aa in AA_LETTERS {
                let hits = scale.groups().iter().filter(|g| g.contains(aa)).count();
                assert_eq!(hits, 1, "{} {}", scale.name(), aa);
                assert!(scale.symbol_for(aa).is_some());
            }
        }
    }

    #[test]
    fn test_aliases() {
        let aliases = Catalog::get(CatalogFlavor::Compat).aliases();
        assert_eq!(aliases, vec![("_PRNAIPropPhipps", vec![14, 15])]);
    }

    #[test]
    fn test_resolve() {
        let catalog = Catalog::get(CatalogFlavor::Compat);
        let phipps = catalog.resolve("_PRNAIPropPhipps").unwrap();
        assert!(std::ptr::eq(phipps, &catalog.slots()[14]));
        assert_eq!(
            catalog.resolve("_Nope").unwrap_err(),
            DescriptorError::UnknownScale("_Nope".to_string())
        );
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!(Preset::from_str("full").unwrap(), Preset::Full);
        assert_eq!(CatalogFlavor::from_str("dubchak").unwrap(), CatalogFlavor::Dubchak);
        assert_eq!(Preset::Legacy.to_string(), "legacy");
        assert!(Preset::from_str("everything").is_err());
    }
}
