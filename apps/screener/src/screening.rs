//! Screening boundary — parses and validates the request, invokes the
//! engine, and renders the response envelope.
//!
//! Envelope shapes are part of the external contract: recommended candidates
//! get the full report under `data`; rejected candidates get a bare
//! `NOT_RECOMMENDED` envelope with no candidate data; boundary failures get
//! `{"success": false, "error": ...}`.

use serde_json::{json, Value};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::matching::engine::ScreeningEngine;
use crate::models::report::{MatchReport, RecommendationStatus};
use crate::models::request::ScreeningRequest;

/// Runs one screening request end to end. Boundary failures render the error
/// envelope instead of a report.
pub fn run(engine: &ScreeningEngine, raw_request: &str) -> Value {
    match screen(engine, raw_request) {
        Ok(response) => response,
        Err(err) => {
            warn!(error = %err, "screening request rejected");
            json!({ "success": false, "error": err.to_string() })
        }
    }
}

fn screen(engine: &ScreeningEngine, raw_request: &str) -> Result<Value, AppError> {
    let request: ScreeningRequest = serde_json::from_str(raw_request)
        .map_err(|e| AppError::InvalidInput(format!("malformed request: {e}")))?;
    request.validate()?;
    Ok(respond(engine, &request))
}

/// Evaluates a validated request and maps the report into the documented
/// JSON contract.
pub fn respond(engine: &ScreeningEngine, request: &ScreeningRequest) -> Value {
    let evidence = request.evidence();
    let report = engine.evaluate(&request.required_skills, &evidence);
    let recommendation = ScreeningEngine::recommend(&report);

    match recommendation.status {
        RecommendationStatus::Recommended => {
            info!(
                matched = report.statistics.matched_count,
                total = report.statistics.total_required,
                "candidate recommended"
            );
            json!({
                "success": true,
                "data": {
                    "application_id": request.application_id,
                    "job_id": request.job_id,
                    "job_title": request.job_title.as_deref().unwrap_or("Unknown Position"),
                    "candidate": { "skills": candidate_skills(request, &report) },
                    "matching": report,
                    "recommendation": recommendation,
                }
            })
        }
        RecommendationStatus::NotRecommended => {
            info!(
                total = report.statistics.total_required,
                "candidate not recommended"
            );
            json!({
                "success": false,
                "reason": "NOT_RECOMMENDED",
                "message": "No matching skills found",
                "application_id": request.application_id,
                "job_id": request.job_id,
            })
        }
    }
}

/// The candidate block echoes declared skills; for text evidence it lists
/// the required skills found in the CV.
fn candidate_skills(request: &ScreeningRequest, report: &MatchReport) -> Vec<String> {
    match &request.candidate_skills {
        Some(skills) => skills.clone(),
        None => report
            .matches
            .iter()
            .filter(|m| m.is_match)
            .map(|m| m.required.clone())
            .collect(),
    }
}
