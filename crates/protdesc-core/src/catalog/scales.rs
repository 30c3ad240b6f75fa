//! Three-class amino acid partitions.
//!
//! Groups are listed as `[class 1, class 2, class 3]`. The `COMPAT` table is
//! the historical CTD table, kept letter for letter, including its defects:
//! `_Polarity` repeats letters across classes and misses G, A, S, T and D;
//! `_NormalizedVDWV` misses C; `_PRNAIPropPhipps` occupies two slots.
//!
//! References:
//! - Dubchak, Muchnik, Holbrook & Kim (1995) PNAS 92, 8700-8704.
//! - Dubchak, Muchnik, Mayor, Dralyuk & Kim (1999) Proteins 35, 401-407.

pub(super) struct ScaleDef {
    pub name: &'static str,
    pub description: &'static str,
    pub groups: [&'static str; 3],
}

#[rustfmt::skip]
pub(super) static COMPAT: [ScaleDef; 25] = [
    ScaleDef { name: "_Hydrophobicity",            description: "Hydrophobicity: polar / neutral / hydrophobic",                   groups: ["RKEDQN",    "GASTPHY",          "CLVIMFW"] },
    ScaleDef { name: "_NormalizedVDWV",            description: "Normalized van der Waals volume: 0-2.78 / 2.95-4.0 / 4.03-8.08", groups: ["GASTPD",    "NVEQIL",           "MHKFRYW"] },
    ScaleDef { name: "_Polarity",                  description: "Polarity: 4.9-6.2 / 8.0-9.2 / 10.4-13.0",                          groups: ["LIFWCMVY",  "CPNVEQIL",         "KMHFRYW"] },
    ScaleDef { name: "_Charge",                    description: "Charge: positive / neutral / negative",                            groups: ["KR",        "ANCQGHILMFPSTWYV", "DE"] },
    ScaleDef { name: "_SecondaryStr",              description: "Secondary structure: helix / strand / coil",                       groups: ["EALMQKRH",  "VIYCWFT",          "GNPSD"] },
    ScaleDef { name: "_SolventAccessibility",      description: "Solvent accessibility: buried / exposed / intermediate",           groups: ["ALFCGIVW",  "RKQEND",           "MPSTHY"] },
    ScaleDef { name: "_Polarizability",            description: "Polarizability: 0-0.108 / 0.128-0.186 / 0.219-0.409",             groups: ["GASDT",     "CPNVEQIL",         "KMHFRYW"] },
    ScaleDef { name: "_SurfaceTension",            description: "Surface tension",                                                  groups: ["GQDNAHR",   "KTSEC",            "ILMFPWYV"] },
    ScaleDef { name: "_PPIHotspotPropBogan",       description: "Protein-protein interface hotspot propensity (Bogan)",            groups: ["DHIKNPRWY", "EQSTGAMF",         "CLV"] },
    ScaleDef { name: "_PPIPropMa",                 description: "Protein-protein interface propensity (Ma)",                       groups: ["CDFMPQRWY", "AGHVLNST",         "EIK"] },
    ScaleDef { name: "_PDNAIPropSchneider",        description: "Protein-DNA interface propensity (Schneider)",                    groups: ["GKNQRSTY",  "ADEFHILVW",        "CMP"] },
    ScaleDef { name: "_PDNAIPropAhmad",            description: "Protein-DNA interface propensity (Ahmad)",                        groups: ["GHKNQRSTY", "ADEFIPVW",         "CLM"] },
    ScaleDef { name: "_PRNAIPropKim",              description: "Protein-RNA interface propensity (Kim)",                          groups: ["HKMRY",     "FGILNPQSVW",       "CDEAT"] },
    ScaleDef { name: "_PRNAIPropEllis",            description: "Protein-RNA interface propensity (Ellis)",                        groups: ["HGKMRSYW",  "AFINPQT",          "CDELV"] },
    ScaleDef { name: "_PRNAIPropPhipps",           description: "Protein-RNA interface propensity (Phipps)",                       groups: ["HKMQRS",    "ADEFGLNPVY",       "CITW"] },
    ScaleDef { name: "_PRNAIPropPhipps",           description: "Protein-RNA interface propensity (Phipps)",                       groups: ["HKMQRS",    "ADEFGLNPVY",       "CITW"] },
    ScaleDef { name: "_PLBSPropKhazanov",          description: "Protein-ligand binding site propensity (Khazanov)",               groups: ["CFHWY",     "GILNMSTR",         "AEDKPQV"] },
    ScaleDef { name: "_PLVBSKhazanov",             description: "Protein-ligand valid binding site propensity (Khazanov)",         groups: ["CFHWYM",    "DGILNSTV",         "AEKPQR"] },
    ScaleDef { name: "_PropPLPANBIntImai",         description: "Protein-ligand polar and aromatic non-bonded interactions (Imai)", groups: ["DEHRY",     "CFKMNQSTW",        "AGILPV"] },
    ScaleDef { name: "_MolecularWeight",           description: "Molecular weight: low / medium / high",                           groups: ["AGS",       "CDEHIKLMNQPTV",    "FRWY"] },
    ScaleDef { name: "_cLogP",                     description: "cLogP",                                                            groups: ["RKDNEQH",   "PYSTGACV",         "WMFLI"] },
    ScaleDef { name: "_NoHydroBondDonorSideChain", description: "Side-chain hydrogen bond donors: >1 / 1 / 0",                      groups: ["HKNQR",     "DESTWY",           "ACGFILMPV"] },
    ScaleDef { name: "_NoHydroBondAccSideChain",   description: "Side-chain hydrogen bond acceptors: >1 / 1 / 0",                   groups: ["DEHNQR",    "KSTWY",            "ACGFILMPV"] },
    ScaleDef { name: "_SolubilityInWater",         description: "Solubility in water: high / medium / low",                         groups: ["ACGKRT",    "EFHILMNPQSVW",     "DY"] },
    ScaleDef { name: "_AminoAcidFlexInd",          description: "Flexibility index: very / moderately / less flexible",             groups: ["EGKNQS",    "ADHIPRTV",         "CFLMWY"] },
];

/// Published partitions for the two scales the historical table got wrong.
#[rustfmt::skip]
pub(super) static DUBCHAK_OVERRIDES: [ScaleDef; 2] = [
    ScaleDef { name: "_NormalizedVDWV", description: "Normalized van der Waals volume: 0-2.78 / 2.95-4.0 / 4.03-8.08", groups: ["GASTPDC",  "NVEQIL", "MHKFRYW"] },
    ScaleDef { name: "_Polarity",       description: "Polarity: 4.9-6.2 / 8.0-9.2 / 10.4-13.0",                          groups: ["LIFWCMVY", "PGAST",  "HQRKNED"] },
];

/// Emission order of the seven original CTD scales.
pub(super) static LEGACY_ORDER: [&str; 7] = [
    "_Polarizability",
    "_SolventAccessibility",
    "_SecondaryStr",
    "_Charge",
    "_Polarity",
    "_NormalizedVDWV",
    "_Hydrophobicity",
];

/// Emission order of the scales added on top of [`LEGACY_ORDER`].
pub(super) static EXTENDED_ORDER: [&str; 17] = [
    "_SurfaceTension",
    "_PPIHotspotPropBogan",
    "_PPIPropMa",
    "_PDNAIPropSchneider",
    "_PDNAIPropAhmad",
    "_PRNAIPropKim",
    "_PRNAIPropEllis",
    "_PRNAIPropPhipps",
    "_PLBSPropKhazanov",
    "_PLVBSKhazanov",
    "_PropPLPANBIntImai",
    "_MolecularWeight",
    "_cLogP",
    "_NoHydroBondDonorSideChain",
    "_NoHydroBondAccSideChain",
    "_SolubilityInWater",
    "_AminoAcidFlexInd",
];
