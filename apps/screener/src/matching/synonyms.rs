//! Synonym table — immutable canonical→variants groups with case-folded,
//! reflexive variant expansion.
//!
//! The table is process-wide configuration: built once at startup (default
//! groups or a JSON file), validated at load, then injected into the engine.
//! Membership is symmetric — the canonical key counts as a variant of its own
//! group, and expanding any member of a group yields the whole group.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::errors::AppError;

/// Default groups: office tooling, quality/manufacturing vocabulary, soft
/// skills, technical systems, and the Bahasa Indonesia variations seen in the
/// target CV corpus. Compound phrasings that merely contain a skill ("team
/// leadership") belong to the partial comparator, not this table.
const DEFAULT_GROUPS: &[(&str, &[&str])] = &[
    (
        "excel",
        &["microsoft excel", "ms excel", "spreadsheet", "excel spreadsheet"],
    ),
    ("word", &["microsoft word", "ms word", "word processing"]),
    (
        "powerpoint",
        &["microsoft powerpoint", "ms powerpoint", "ppt", "presentation"],
    ),
    ("office", &["microsoft office", "ms office"]),
    (
        "quality control",
        &["qc", "quality assurance", "qa", "quality inspector", "quality checker"],
    ),
    ("lean manufacturing", &["lean", "lean production", "5s", "kaizen"]),
    ("six sigma", &["6 sigma", "six-sigma", "6-sigma"]),
    (
        "leadership",
        &["people management", "team lead", "team leader", "supervisi"],
    ),
    ("communication", &["komunikasi", "interpersonal skills"]),
    (
        "problem solving",
        &["problem-solving", "analytical thinking", "critical thinking"],
    ),
    ("autocad", &["auto cad", "auto-cad", "cad"]),
    ("sap", &["sap erp", "sap system"]),
    ("erp", &["erp system", "enterprise resource planning"]),
    ("kepemimpinan", &["leadership"]),
    ("kualitas", &["quality", "quality control", "qc"]),
];

/// Case-fold applied to every term entering or querying the table.
pub(crate) fn fold(s: &str) -> String {
    s.trim().to_lowercase()
}

#[derive(Debug, Clone)]
pub struct SynonymTable {
    groups: BTreeMap<String, BTreeSet<String>>,
}

impl SynonymTable {
    /// Builds a table from (canonical, variants) pairs, case-folding every
    /// entry. Empty keys, empty variants, and duplicate groups are rejected
    /// at load time.
    pub fn from_groups(
        groups: impl IntoIterator<Item = (String, Vec<String>)>,
    ) -> Result<Self, AppError> {
        let mut folded_groups = BTreeMap::new();
        for (canonical, variants) in groups {
            let key = fold(&canonical);
            if key.is_empty() {
                return Err(AppError::SynonymTable(
                    "empty canonical key".to_string(),
                ));
            }
            let mut set = BTreeSet::new();
            for variant in &variants {
                let folded_variant = fold(variant);
                if folded_variant.is_empty() {
                    return Err(AppError::SynonymTable(format!(
                        "empty variant under '{key}'"
                    )));
                }
                set.insert(folded_variant);
            }
            if set.is_empty() {
                return Err(AppError::SynonymTable(format!(
                    "group '{key}' has no variants"
                )));
            }
            set.insert(key.clone());
            if folded_groups.insert(key.clone(), set).is_some() {
                return Err(AppError::SynonymTable(format!(
                    "duplicate group '{key}'"
                )));
            }
        }
        Ok(Self {
            groups: folded_groups,
        })
    }

    /// Loads a `{"canonical": ["variant", ...]}` JSON object.
    pub fn from_json_str(raw: &str) -> Result<Self, AppError> {
        let groups: BTreeMap<String, Vec<String>> = serde_json::from_str(raw)
            .map_err(|e| AppError::SynonymTable(format!("invalid synonyms JSON: {e}")))?;
        Self::from_groups(groups)
    }

    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Expands a skill into the full set of lexical forms to search for: the
    /// skill itself plus every group it belongs to, as key or as variant.
    /// Case-insensitive; the result always contains the folded skill.
    pub fn expand(&self, skill: &str) -> BTreeSet<String> {
        let folded_skill = fold(skill);
        let mut out = BTreeSet::new();
        for (key, variants) in &self.groups {
            if *key == folded_skill || variants.contains(&folded_skill) {
                out.insert(key.clone());
                out.extend(variants.iter().cloned());
            }
        }
        out.insert(folded_skill);
        out
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        let groups = DEFAULT_GROUPS.iter().map(|(key, variants)| {
            (
                (*key).to_string(),
                variants.iter().map(|v| (*v).to_string()).collect(),
            )
        });
        Self::from_groups(groups).expect("default synonym table is valid")
    }
}
