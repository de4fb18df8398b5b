//! The analysis pipeline — extraction through response assembly.
//!
//! Stage order is fixed: extract text, gate on blank documents, run the
//! synchronous analyses, await feedback, write the audit row (best effort),
//! assemble the response. A failure before the blank-text gate rejects the
//! request; everything after degrades to partial results instead.

use chrono::Utc;
use std::time::Instant;
use tracing::{info, warn};

use crate::analysis::education::analyze_education;
use crate::analysis::experience::analyze_experience;
use crate::analysis::feedback::{generate_feedback, FeedbackInput};
use crate::db;
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::models::analysis::{AnalysisRecord, AnalysisResponse};
use crate::state::AppState;

/// Maximum characters of extracted text echoed back in the response.
const SNIPPET_CHARS: usize = 2000;

/// Runs the full resume analysis for one upload.
pub async fn analyze_resume(
    state: &AppState,
    data: &[u8],
    file_name: &str,
    target_role: &str,
) -> Result<AnalysisResponse, AppError> {
    let started = Instant::now();

    let text = extract_text(file_name, data)?;
    if text.trim().is_empty() {
        warn!("Could not extract text from file: {file_name}. It may be empty or image-based.");
        return Err(AppError::UnprocessableEntity(
            "Could not extract text from the document. It might be empty or image-based."
                .to_string(),
        ));
    }

    // Synchronous, CPU-bound analyses. These never fail the request.
    let skills = state.skill_extractor.extract(&text);
    info!("Extracted {} skills.", skills.len());
    let experience_summary = analyze_experience(&text, state.date_finder.as_ref());
    let education_summary = analyze_education(&text);
    let role_matches = state.role_scorer.suggest_role_matches(&skills);
    let target_role_analysis = state.role_scorer.analyze_target_role(&skills, target_role);

    let feedback_input = target_role_analysis
        .as_ref()
        .map(|analysis| {
            FeedbackInput::from_target_analysis(analysis, &state.role_catalog, skills.len())
        })
        .unwrap_or_default();
    let match_score = target_role_analysis.as_ref().map(|a| a.score).unwrap_or(0.0);

    let personalized_feedback = generate_feedback(&feedback_input, &state.llm).await;

    let record = AnalysisRecord {
        timestamp: Utc::now(),
        file_name: file_name.to_string(),
        target_role: target_role.to_string(),
        match_score,
        skills_found_count: skills.len() as i32,
        analysis_duration_ms: started.elapsed().as_millis() as i64,
    };
    // Best effort: a failed audit write never affects the response.
    if let Err(e) = db::log_analysis(&state.db, &record).await {
        warn!("Failed to write analysis audit log: {e}");
    }

    Ok(AnalysisResponse {
        file_name: file_name.to_string(),
        extracted_text: truncate_snippet(&text),
        skills_found: skills,
        role_matches,
        target_role_analysis,
        experience_summary,
        education_summary,
        personalized_feedback,
    })
}

/// First `SNIPPET_CHARS` characters of the text, always ellipsis-terminated.
fn truncate_snippet(text: &str) -> String {
    let mut snippet: String = text.chars().take(SNIPPET_CHARS).collect();
    snippet.push_str("...");
    snippet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_truncates_long_text() {
        let text = "x".repeat(5000);
        let snippet = truncate_snippet(&text);
        assert_eq!(snippet.chars().count(), SNIPPET_CHARS + 3);
        assert!(snippet.ends_with("..."));
    }

    #[test]
    fn test_snippet_keeps_short_text_with_marker() {
        assert_eq!(truncate_snippet("John Doe"), "John Doe...");
    }

    #[test]
    fn test_snippet_counts_characters_not_bytes() {
        let text = "é".repeat(3000);
        let snippet = truncate_snippet(&text);
        assert_eq!(snippet.chars().count(), SNIPPET_CHARS + 3);
    }
}
