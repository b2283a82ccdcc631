//! Output data model — the fixed wire contract consumed by downstream
//! application-tracking integrations. Field names and the
//! RECOMMENDED/NOT_RECOMMENDED vocabulary must not change.

use serde::{Deserialize, Serialize};

/// Why a required skill was deemed matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchType {
    /// The required skill itself appears literally in the evidence.
    Exact,
    /// Equivalence established through the synonym table.
    Synonym,
    /// The comparator score reached the acceptance threshold.
    Fuzzy,
}

/// Outcome of matching one required skill against the candidate's evidence.
///
/// `matched` and `match_type` are present exactly when `is_match` is true;
/// a miss still carries the best score observed (below threshold).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub required: String,
    pub matched: Option<String>,
    pub score: u32,
    pub is_match: bool,
    pub match_type: Option<MatchType>,
}

/// Summary counters over all per-skill results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchStatistics {
    pub total_required: usize,
    pub matched_count: usize,
    /// 100 * matched_count / total_required, one decimal place; 0.0 when
    /// nothing was required.
    pub match_percentage: f64,
}

/// Full matching output: one result per required skill, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    pub matches: Vec<MatchResult>,
    pub statistics: MatchStatistics,
}

/// Binary screening outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationStatus {
    #[serde(rename = "RECOMMENDED")]
    Recommended,
    #[serde(rename = "NOT_RECOMMENDED")]
    NotRecommended,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub status: RecommendationStatus,
    /// Mirrors the report's match percentage.
    pub score: f64,
}
