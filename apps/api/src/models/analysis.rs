//! Wire and record types for the resume analysis pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single skill identified in the resume, in its catalog casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

/// A job role and its calculated match score (0–100, 2 decimals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: String,
    pub score: f64,
}

/// Detailed found/missing breakdown for the user's target role.
/// Absent (`None` in the response) when the role is not in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetRoleAnalysis {
    pub role: String,
    pub score: f64,
    pub required_found: Vec<String>,
    pub required_missing: Vec<String>,
    pub good_to_have_found: Vec<String>,
    pub good_to_have_missing: Vec<String>,
}

/// The complete analysis response returned by `POST /api/v1/analyze`.
/// Field names are camelCase on the wire for the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub file_name: String,
    /// Truncated snippet of the extracted text (max 2000 chars + "...").
    pub extracted_text: String,
    pub skills_found: Vec<Skill>,
    pub role_matches: Vec<RoleMatch>,
    pub target_role_analysis: Option<TargetRoleAnalysis>,
    pub experience_summary: Vec<String>,
    pub education_summary: Vec<String>,
    pub personalized_feedback: String,
}

/// One append-only audit row per completed analysis.
#[derive(Debug, Clone)]
pub struct AnalysisRecord {
    pub timestamp: DateTime<Utc>,
    pub file_name: String,
    pub target_role: String,
    pub match_score: f64,
    pub skills_found_count: i32,
    pub analysis_duration_ms: i64,
}

/// Per-role analysis count, sorted descending by count in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleCount {
    pub role: String,
    pub count: i64,
}

/// Aggregate usage metrics computed from the audit log.
/// All-zero defaults when no analyses have been recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsResponse {
    pub total_analyses: i64,
    pub avg_duration_ms: f64,
    pub avg_score: f64,
    pub role_breakdown: Vec<RoleCount>,
}

impl Default for MetricsResponse {
    fn default() -> Self {
        Self {
            total_analyses: 0,
            avg_duration_ms: 0.0,
            avg_score: 0.0,
            role_breakdown: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_camel_case_keys() {
        let response = AnalysisResponse {
            file_name: "resume.pdf".to_string(),
            extracted_text: "text...".to_string(),
            skills_found: vec![],
            role_matches: vec![],
            target_role_analysis: None,
            experience_summary: vec![],
            education_summary: vec![],
            personalized_feedback: "ok".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("fileName").is_some());
        assert!(json.get("extractedText").is_some());
        assert!(json.get("skillsFound").is_some());
        assert!(json.get("roleMatches").is_some());
        assert!(json.get("targetRoleAnalysis").is_some());
        assert!(json.get("personalizedFeedback").is_some());
    }

    #[test]
    fn test_target_role_analysis_keeps_snake_case_keys() {
        let analysis = TargetRoleAnalysis {
            role: "Software Engineer".to_string(),
            score: 55.0,
            required_found: vec!["python".to_string()],
            required_missing: vec!["teamwork".to_string()],
            good_to_have_found: vec![],
            good_to_have_missing: vec![],
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert!(json.get("required_found").is_some());
        assert!(json.get("good_to_have_missing").is_some());
    }

    #[test]
    fn test_metrics_default_is_all_zero() {
        let metrics = MetricsResponse::default();
        assert_eq!(metrics.total_analyses, 0);
        assert_eq!(metrics.avg_duration_ms, 0.0);
        assert_eq!(metrics.avg_score, 0.0);
        assert!(metrics.role_breakdown.is_empty());
    }
}
