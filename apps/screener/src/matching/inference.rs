//! Skill inference — regex patterns mapping CV phrasing to a canonical
//! skill. Applied to freeform text evidence only, and only for skills the job
//! actually requires, so inference never widens the search beyond the job's
//! own vocabulary.

use regex::Regex;

use crate::errors::AppError;

/// Default patterns; the Indonesian forms cover the target CV corpus.
const DEFAULT_PATTERNS: &[(&str, &str)] = &[
    (
        r"(inspeksi|pemeriksaan|quality check)\s+(kualitas|produk)",
        "Quality Control",
    ),
    (r"(memimpin|supervisi|mengawasi)\s+tim", "Leadership"),
    (r"(excel|spreadsheet)", "Microsoft Excel"),
    (r"(lean|5s|kaizen)", "Lean Manufacturing"),
    (r"(maintenance|perawatan)\s+mesin", "Maintenance Management"),
];

struct InferencePattern {
    pattern: Regex,
    skill: String,
}

pub struct SkillInference {
    patterns: Vec<InferencePattern>,
}

impl SkillInference {
    /// Compiles (pattern, skill) pairs, failing at load on an invalid
    /// expression.
    pub fn from_patterns(
        patterns: impl IntoIterator<Item = (String, String)>,
    ) -> Result<Self, AppError> {
        let mut compiled = Vec::new();
        for (pattern, skill) in patterns {
            let regex = Regex::new(&pattern).map_err(|e| {
                AppError::Config(format!("invalid inference pattern '{pattern}': {e}"))
            })?;
            compiled.push(InferencePattern {
                pattern: regex,
                skill,
            });
        }
        Ok(Self { patterns: compiled })
    }

    /// Infers canonical skills from case-folded CV text. A pattern fires only
    /// when its skill appears in the required list.
    pub fn infer(&self, folded_text: &str, required: &[String]) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| required.iter().any(|r| r.trim().eq_ignore_ascii_case(&p.skill)))
            .filter(|p| p.pattern.is_match(folded_text))
            .map(|p| p.skill.clone())
            .collect()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl Default for SkillInference {
    fn default() -> Self {
        let patterns = DEFAULT_PATTERNS
            .iter()
            .map(|(pattern, skill)| ((*pattern).to_string(), (*skill).to_string()));
        Self::from_patterns(patterns).expect("default inference patterns are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(skills: &[&str]) -> Vec<String> {
        skills.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_indonesian_phrasing_infers_leadership() {
        let inference = SkillInference::default();
        let inferred = inference.infer(
            "memimpin tim produksi selama lima tahun",
            &required(&["Leadership", "SAP"]),
        );
        assert_eq!(inferred, vec!["Leadership".to_string()]);
    }

    #[test]
    fn test_pattern_only_fires_for_required_skill() {
        let inference = SkillInference::default();
        let inferred = inference.infer(
            "memimpin tim produksi selama lima tahun",
            &required(&["SAP"]),
        );
        assert!(inferred.is_empty());
    }

    #[test]
    fn test_required_comparison_is_case_insensitive() {
        let inference = SkillInference::default();
        let inferred = inference.infer(
            "menguasai excel untuk pelaporan",
            &required(&["MICROSOFT EXCEL"]),
        );
        assert_eq!(inferred, vec!["Microsoft Excel".to_string()]);
    }

    #[test]
    fn test_quality_inspection_phrase_infers_quality_control() {
        let inference = SkillInference::default();
        let inferred = inference.infer(
            "bertanggung jawab atas inspeksi kualitas harian",
            &required(&["Quality Control"]),
        );
        assert_eq!(inferred, vec!["Quality Control".to_string()]);
    }

    #[test]
    fn test_invalid_pattern_is_rejected_at_load() {
        let result = SkillInference::from_patterns(vec![(
            "(unclosed".to_string(),
            "Broken".to_string(),
        )]);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_pattern_count() {
        assert_eq!(SkillInference::default().pattern_count(), 5);
    }
}
