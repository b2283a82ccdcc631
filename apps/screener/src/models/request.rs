//! Input boundary — the screening request and its validation.

use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::skill_matcher::CandidateEvidence;

/// A screening request as received from the caller. The identifiers are
/// opaque passthrough values echoed in the response envelope; only
/// `required_skills` and the evidence fields feed the matching core.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreeningRequest {
    #[serde(default)]
    pub application_id: Option<String>,
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    /// Skills the candidate declared outright.
    #[serde(default)]
    pub candidate_skills: Option<Vec<String>>,
    /// Raw text extracted from the candidate's CV upstream.
    #[serde(default)]
    pub cv_text: Option<String>,
}

impl ScreeningRequest {
    /// Rejects malformed requests before the matching core is entered.
    /// An empty `required_skills` list is well-formed (the report is vacuous),
    /// but every entry present must be a non-blank string.
    pub fn validate(&self) -> Result<(), AppError> {
        for (idx, skill) in self.required_skills.iter().enumerate() {
            if skill.trim().is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "required_skills[{idx}] is empty"
                )));
            }
        }
        if self.candidate_skills.is_some() && self.cv_text.is_some() {
            return Err(AppError::InvalidInput(
                "provide either candidate_skills or cv_text, not both".to_string(),
            ));
        }
        Ok(())
    }

    /// Folds the two evidence forms into the matcher's input. A request with
    /// neither form screens against empty evidence: every required skill
    /// reports no match.
    pub fn evidence(&self) -> CandidateEvidence {
        match (&self.candidate_skills, &self.cv_text) {
            (Some(skills), _) => CandidateEvidence::Skills(skills.clone()),
            (None, Some(text)) => CandidateEvidence::Text(text.clone()),
            (None, None) => CandidateEvidence::Skills(Vec::new()),
        }
    }
}
