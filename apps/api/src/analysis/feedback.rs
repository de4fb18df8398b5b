//! Personalized feedback generation over the skill-gap breakdown.
//!
//! Failures never surface as HTTP errors: every terminal outcome is a
//! string placed in the response's feedback field.

use tracing::{error, info};

use crate::analysis::catalog::RoleCatalog;
use crate::analysis::prompts::{FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM};
use crate::llm_client::{LlmClient, LlmError};
use crate::models::analysis::TargetRoleAnalysis;

/// Gap data handed to the feedback generator. Explicit named fields;
/// an empty default stands in when the target role is unknown.
#[derive(Debug, Clone, Default)]
pub struct FeedbackInput {
    pub role: Option<String>,
    pub required_found: Vec<String>,
    pub required_missing: Vec<String>,
    pub good_to_have_missing: Vec<String>,
    pub total_skills: usize,
    pub experience_keywords: Vec<String>,
}

impl FeedbackInput {
    /// Builds the generator input from the target-role breakdown plus the
    /// role's experience vocabulary from the catalog.
    pub fn from_target_analysis(
        analysis: &TargetRoleAnalysis,
        catalog: &RoleCatalog,
        total_skills: usize,
    ) -> Self {
        let experience_keywords = catalog
            .get(&analysis.role)
            .map(|p| p.experience_keywords.clone())
            .unwrap_or_default();

        Self {
            role: Some(analysis.role.clone()),
            required_found: analysis.required_found.clone(),
            required_missing: analysis.required_missing.clone(),
            good_to_have_missing: analysis.good_to_have_missing.clone(),
            total_skills,
            experience_keywords,
        }
    }
}

/// Generates the feedback text, degrading to a descriptive error string on
/// any terminal failure. Performs no network call when the client holds no
/// real credential.
pub async fn generate_feedback(input: &FeedbackInput, llm: &LlmClient) -> String {
    if !llm.is_configured() {
        error!("LLM API key not configured; skipping feedback generation.");
        return "Error: AI feedback service is not configured.".to_string();
    }

    let prompt = build_prompt(input);

    match llm.generate(&prompt, FEEDBACK_SYSTEM).await {
        Ok(text) => {
            info!("AI feedback generated successfully.");
            text
        }
        Err(LlmError::StoppedEarly { reason }) => {
            error!("AI feedback failed after multiple retries (stop reason: {reason}).");
            format!("Error: AI feedback generation failed (Reason: {reason}).")
        }
        Err(e) => {
            error!("AI feedback failed after multiple retries: {e}");
            "Error: Unable to generate AI feedback (No response from model).".to_string()
        }
    }
}

fn build_prompt(input: &FeedbackInput) -> String {
    FEEDBACK_PROMPT_TEMPLATE
        .replace("{target_role}", input.role.as_deref().unwrap_or("N/A"))
        .replace("{required_found}", &join_or_none(&input.required_found))
        .replace("{required_missing}", &join_or_none(&input.required_missing))
        .replace(
            "{good_to_have_missing}",
            &join_or_none(&input.good_to_have_missing),
        )
        .replace("{total_skills}", &input.total_skills.to_string())
        .replace(
            "{experience_keyword}",
            input
                .experience_keywords
                .first()
                .map(String::as_str)
                .unwrap_or("..."),
        )
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::default_role_catalog;
    use crate::llm_client::PLACEHOLDER_API_KEY;

    fn sample_input() -> FeedbackInput {
        FeedbackInput {
            role: Some("Software Engineer".to_string()),
            required_found: vec!["python".to_string(), "git".to_string()],
            required_missing: vec!["teamwork".to_string()],
            good_to_have_missing: vec!["agile".to_string(), "ci/cd".to_string()],
            total_skills: 9,
            experience_keywords: vec!["development".to_string(), "testing".to_string()],
        }
    }

    #[test]
    fn test_prompt_embeds_analysis_data() {
        let prompt = build_prompt(&sample_input());
        assert!(prompt.contains("Target Role: Software Engineer"));
        assert!(prompt.contains("Skills Found: python, git"));
        assert!(prompt.contains("Critical Missing Skills: teamwork"));
        assert!(prompt.contains("'Good-to-Have' Missing Skills: agile, ci/cd"));
        assert!(prompt.contains("Total Skills Count: 9"));
        assert!(prompt.contains("'development'"));
    }

    #[test]
    fn test_prompt_uses_none_for_empty_lists() {
        let prompt = build_prompt(&FeedbackInput::default());
        assert!(prompt.contains("Target Role: N/A"));
        assert!(prompt.contains("Skills Found: None"));
        assert!(prompt.contains("Critical Missing Skills: None"));
        assert!(prompt.contains("'Good-to-Have' Missing Skills: None"));
        assert!(prompt.contains("Total Skills Count: 0"));
    }

    #[test]
    fn test_input_from_target_analysis_carries_role_vocabulary() {
        let analysis = TargetRoleAnalysis {
            role: "Software Engineer".to_string(),
            score: 50.0,
            required_found: vec!["python".to_string()],
            required_missing: vec!["teamwork".to_string()],
            good_to_have_found: vec![],
            good_to_have_missing: vec!["agile".to_string()],
        };
        let input = FeedbackInput::from_target_analysis(&analysis, &default_role_catalog(), 5);
        assert_eq!(input.role.as_deref(), Some("Software Engineer"));
        assert_eq!(input.total_skills, 5);
        assert_eq!(input.experience_keywords.first().map(String::as_str), Some("development"));
    }

    #[tokio::test]
    async fn test_unconfigured_client_short_circuits() {
        let llm = LlmClient::new(String::new());
        let feedback = generate_feedback(&sample_input(), &llm).await;
        assert_eq!(feedback, "Error: AI feedback service is not configured.");
    }

    #[tokio::test]
    async fn test_placeholder_key_short_circuits() {
        let llm = LlmClient::new(PLACEHOLDER_API_KEY.to_string());
        let feedback = generate_feedback(&sample_input(), &llm).await;
        assert_eq!(feedback, "Error: AI feedback service is not configured.");
    }
}
