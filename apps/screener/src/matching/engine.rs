//! Match aggregation — runs the skill matcher over every required skill and
//! renders the recommendation decision.

use tracing::debug;

use crate::matching::inference::SkillInference;
use crate::matching::skill_matcher::{CandidateEvidence, FoldedEvidence, SkillMatcher};
use crate::matching::synonyms::SynonymTable;
use crate::models::report::{
    MatchReport, MatchStatistics, Recommendation, RecommendationStatus,
};

/// Stateless screening engine. The synonym table, inference patterns, and
/// threshold are immutable after construction, so one engine serves
/// concurrent requests without locking.
pub struct ScreeningEngine {
    table: SynonymTable,
    inference: SkillInference,
    threshold: u32,
}

impl ScreeningEngine {
    pub fn new(table: SynonymTable, inference: SkillInference, threshold: u32) -> Self {
        Self {
            table,
            inference,
            threshold,
        }
    }

    /// Matches every required skill against the evidence, preserving input
    /// order. Duplicate required skills are matched and counted
    /// independently.
    pub fn evaluate(
        &self,
        required_skills: &[String],
        evidence: &CandidateEvidence,
    ) -> MatchReport {
        let folded = FoldedEvidence::fold(evidence, &self.inference, required_skills);
        let matcher = SkillMatcher::new(&self.table, self.threshold);

        let matches: Vec<_> = required_skills
            .iter()
            .map(|required| matcher.match_skill(required, &folded))
            .collect();

        let total_required = matches.len();
        let matched_count = matches.iter().filter(|m| m.is_match).count();
        let match_percentage = if total_required == 0 {
            0.0
        } else {
            round_one_decimal(100.0 * matched_count as f64 / total_required as f64)
        };
        debug!(total_required, matched_count, match_percentage, "matching complete");

        MatchReport {
            matches,
            statistics: MatchStatistics {
                total_required,
                matched_count,
                match_percentage,
            },
        }
    }

    /// A single matched skill is enough to recommend the candidate.
    pub fn recommend(report: &MatchReport) -> Recommendation {
        let status = if report.statistics.matched_count > 0 {
            RecommendationStatus::Recommended
        } else {
            RecommendationStatus::NotRecommended
        };
        Recommendation {
            status,
            score: report.statistics.match_percentage,
        }
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MATCH_THRESHOLD;
    use crate::models::report::MatchType;

    fn engine() -> ScreeningEngine {
        ScreeningEngine::new(
            SynonymTable::default(),
            SkillInference::default(),
            DEFAULT_MATCH_THRESHOLD,
        )
    }

    fn required(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| (*s).to_string()).collect()
    }

    fn skills(names: &[&str]) -> CandidateEvidence {
        CandidateEvidence::Skills(names.iter().map(|s| (*s).to_string()).collect())
    }

    #[test]
    fn test_all_required_missing_yields_zero_statistics() {
        let report = engine().evaluate(
            &required(&["SAP", "Oracle", "Java"]),
            &skills(&["Quality Control", "Excel", "Leadership"]),
        );
        assert_eq!(report.statistics.total_required, 3);
        assert_eq!(report.statistics.matched_count, 0);
        assert_eq!(report.statistics.match_percentage, 0.0);
        let recommendation = ScreeningEngine::recommend(&report);
        assert_eq!(recommendation.status, RecommendationStatus::NotRecommended);
        assert_eq!(recommendation.score, 0.0);
    }

    #[test]
    fn test_single_match_is_enough_to_recommend() {
        let report = engine().evaluate(
            &required(&["Quality Control", "SAP", "Leadership"]),
            &skills(&["Quality Control", "Excel"]),
        );
        assert_eq!(report.statistics.matched_count, 1);
        assert_eq!(report.statistics.match_percentage, 33.3);
        assert_eq!(
            ScreeningEngine::recommend(&report).status,
            RecommendationStatus::Recommended
        );
    }

    #[test]
    fn test_matches_preserve_input_order() {
        let skills_required = required(&["Leadership", "Quality Control", "SAP"]);
        let report = engine().evaluate(&skills_required, &skills(&["QC"]));
        let order: Vec<_> = report.matches.iter().map(|m| m.required.as_str()).collect();
        assert_eq!(order, vec!["Leadership", "Quality Control", "SAP"]);
    }

    #[test]
    fn test_duplicate_required_skills_count_independently() {
        let report = engine().evaluate(
            &required(&["SAP", "SAP"]),
            &skills(&["SAP"]),
        );
        assert_eq!(report.statistics.total_required, 2);
        assert_eq!(report.statistics.matched_count, 2);
        assert_eq!(report.statistics.match_percentage, 100.0);
        assert!(report
            .matches
            .iter()
            .all(|m| m.match_type == Some(MatchType::Exact)));
    }

    #[test]
    fn test_empty_required_skills_yield_vacuous_report() {
        let report = engine().evaluate(&[], &skills(&["Quality Control"]));
        assert!(report.matches.is_empty());
        assert_eq!(report.statistics.total_required, 0);
        assert_eq!(report.statistics.match_percentage, 0.0);
        assert_eq!(
            ScreeningEngine::recommend(&report).status,
            RecommendationStatus::NotRecommended
        );
    }

    #[test]
    fn test_percentage_rounds_to_one_decimal() {
        let report = engine().evaluate(
            &required(&["Quality Control", "Excel", "SAP"]),
            &skills(&["Quality Control", "Excel"]),
        );
        assert_eq!(report.statistics.matched_count, 2);
        assert_eq!(report.statistics.match_percentage, 66.7);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let e = engine();
        let skills_required = required(&["Quality Control", "Leadership", "SAP"]);
        let evidence = skills(&["QC", "Team Leadership"]);
        let first = e.evaluate(&skills_required, &evidence);
        let second = e.evaluate(&skills_required, &evidence);
        assert_eq!(first, second);
    }

    #[test]
    fn test_recommendation_score_mirrors_percentage() {
        let report = engine().evaluate(
            &required(&["Quality Control", "SAP"]),
            &skills(&["Quality Control"]),
        );
        let recommendation = ScreeningEngine::recommend(&report);
        assert_eq!(recommendation.score, report.statistics.match_percentage);
        assert_eq!(recommendation.score, 50.0);
    }

    #[test]
    fn test_threshold_is_respected() {
        // At the default threshold "Team Leadership" matches fuzzily; with
        // the bar raised past 100-equivalence nothing fuzzy can pass.
        let strict = ScreeningEngine::new(
            SynonymTable::default(),
            SkillInference::default(),
            100,
        );
        let report = strict.evaluate(
            &required(&["Leadership"]),
            &skills(&["Team Leadership"]),
        );
        // Partial containment still scores 100, so the match survives even a
        // threshold of 100.
        assert_eq!(report.statistics.matched_count, 1);

        let report = strict.evaluate(&required(&["Python"]), &skills(&["pythen"]));
        assert_eq!(report.statistics.matched_count, 0);
        assert_eq!(report.matches[0].score, 83);
    }
}
