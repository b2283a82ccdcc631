//! Skill matcher — finds the best evidence for one required skill and
//! classifies the match.
//!
//! Strategies run in fixed priority order, first hit wins:
//! 1. Exact — the required skill itself appears literally in the evidence.
//! 2. Synonym — the synonym table links the required skill to the evidence.
//! 3. Fuzzy — some evidence unit's comparator score reaches the threshold.
//!
//! Ties at the maximum fuzzy score resolve to the first candidate in evidence
//! order (declared-list order, or left-to-right token order for text). A miss
//! still reports the best score observed.

use std::collections::BTreeSet;

use tracing::debug;

use crate::matching::fuzzy;
use crate::matching::inference::SkillInference;
use crate::matching::synonyms::{fold, SynonymTable};
use crate::models::report::{MatchResult, MatchType};

/// Candidate evidence: either skills the candidate declared outright, or raw
/// text extracted from their CV upstream.
#[derive(Debug, Clone)]
pub enum CandidateEvidence {
    Skills(Vec<String>),
    Text(String),
}

/// A declared (or inferred) candidate skill with its folded form cached.
#[derive(Debug, Clone)]
struct DeclaredUnit {
    original: String,
    folded: String,
}

impl DeclaredUnit {
    fn new(original: String) -> Self {
        Self {
            folded: fold(&original),
            original,
        }
    }
}

/// Evidence folded once per request into the comparable forms every strategy
/// reads: declared units, the case-folded text for substring search, and the
/// text's tokens as fuzzy candidate units. For text evidence the declared
/// units are the inferred skills.
#[derive(Debug, Clone)]
pub struct FoldedEvidence {
    declared: Vec<DeclaredUnit>,
    text: Option<String>,
    tokens: Vec<String>,
}

impl FoldedEvidence {
    pub fn fold(
        evidence: &CandidateEvidence,
        inference: &SkillInference,
        required: &[String],
    ) -> Self {
        match evidence {
            CandidateEvidence::Skills(skills) => Self {
                declared: skills.iter().cloned().map(DeclaredUnit::new).collect(),
                text: None,
                tokens: Vec::new(),
            },
            CandidateEvidence::Text(text) => {
                let folded_text = text.to_lowercase();
                let declared = inference
                    .infer(&folded_text, required)
                    .into_iter()
                    .map(DeclaredUnit::new)
                    .collect();
                let tokens = fuzzy::tokenize(&folded_text);
                Self {
                    declared,
                    text: Some(folded_text),
                    tokens,
                }
            }
        }
    }
}

/// Matches one required skill against folded evidence. Borrows the immutable
/// synonym table; pure apart from debug-level tracing.
pub struct SkillMatcher<'a> {
    table: &'a SynonymTable,
    threshold: u32,
}

impl<'a> SkillMatcher<'a> {
    pub fn new(table: &'a SynonymTable, threshold: u32) -> Self {
        Self { table, threshold }
    }

    pub fn match_skill(&self, required: &str, evidence: &FoldedEvidence) -> MatchResult {
        let folded_required = fold(required);
        let variants = self.table.expand(required);

        if let Some(matched) = exact_hit(&folded_required, required, evidence) {
            debug!(required, matched = %matched, "exact match");
            return hit(required, matched, MatchType::Exact);
        }

        if let Some(matched) = synonym_hit(self.table, &folded_required, &variants, evidence) {
            debug!(required, matched = %matched, "synonym match");
            return hit(required, matched, MatchType::Synonym);
        }

        let (best_score, best_candidate) = fuzzy_best(&variants, evidence);
        if best_score >= self.threshold {
            if let Some(matched) = best_candidate {
                debug!(required, matched = %matched, score = best_score, "fuzzy match");
                return MatchResult {
                    required: required.to_string(),
                    matched: Some(matched),
                    score: best_score,
                    is_match: true,
                    match_type: Some(MatchType::Fuzzy),
                };
            }
        }

        MatchResult {
            required: required.to_string(),
            matched: None,
            score: best_score,
            is_match: false,
            match_type: None,
        }
    }
}

fn hit(required: &str, matched: String, match_type: MatchType) -> MatchResult {
    MatchResult {
        required: required.to_string(),
        matched: Some(matched),
        score: 100,
        is_match: true,
        match_type: Some(match_type),
    }
}

/// Exact strategy: the required skill itself, case-folded, equals a declared
/// skill or occurs as a substring of the text.
fn exact_hit(
    folded_required: &str,
    required: &str,
    evidence: &FoldedEvidence,
) -> Option<String> {
    for unit in &evidence.declared {
        if unit.folded == folded_required {
            return Some(unit.original.clone());
        }
    }
    if let Some(text) = &evidence.text {
        if text.contains(folded_required) {
            return Some(required.to_string());
        }
    }
    None
}

/// Synonym strategy: expanding a declared skill intersects the required
/// variants, or a non-identity variant occurs in the text. The matched value
/// is the evidence — the declared skill as given, or the variant found.
fn synonym_hit(
    table: &SynonymTable,
    folded_required: &str,
    variants: &BTreeSet<String>,
    evidence: &FoldedEvidence,
) -> Option<String> {
    for unit in &evidence.declared {
        let candidate_variants = table.expand(&unit.folded);
        if !candidate_variants.is_disjoint(variants) {
            return Some(unit.original.clone());
        }
    }
    if let Some(text) = &evidence.text {
        for variant in variants {
            if variant != folded_required && text.contains(variant.as_str()) {
                return Some(variant.clone());
            }
        }
    }
    None
}

/// Fuzzy strategy: best comparator score over every (required variant ×
/// candidate unit) pair. Strictly-greater updates keep the first candidate on
/// ties.
fn fuzzy_best(variants: &BTreeSet<String>, evidence: &FoldedEvidence) -> (u32, Option<String>) {
    let mut best_score = 0;
    let mut best_candidate = None;

    let units = evidence
        .declared
        .iter()
        .map(|unit| (&unit.original, &unit.folded))
        .chain(evidence.tokens.iter().map(|token| (token, token)));

    for (original, folded_unit) in units {
        for variant in variants {
            let score = fuzzy::similarity(variant, folded_unit);
            if score > best_score {
                best_score = score;
                best_candidate = Some(original.clone());
            }
        }
    }

    (best_score, best_candidate)
}
