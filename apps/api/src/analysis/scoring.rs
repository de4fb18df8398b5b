//! Role scoring — weighted match scores for every catalog role and the
//! detailed gap breakdown for one target role.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::catalog::{RoleCatalog, RoleProfile};
use crate::models::analysis::{RoleMatch, Skill, TargetRoleAnalysis};

/// Weight of the required-skill coverage in the final score.
const REQUIRED_WEIGHT: f64 = 0.7;
/// Weight of the good-to-have coverage in the final score.
const GOOD_TO_HAVE_WEIGHT: f64 = 0.3;

/// Scores extracted skills against an immutable role catalog.
pub struct RoleScorer {
    catalog: Arc<RoleCatalog>,
}

impl RoleScorer {
    pub fn new(catalog: Arc<RoleCatalog>) -> Self {
        Self { catalog }
    }

    /// Scores every catalog role, sorted descending by score. The sort is
    /// stable, so ties keep catalog declaration order.
    pub fn suggest_role_matches(&self, skills: &[Skill]) -> Vec<RoleMatch> {
        let found = lowercased_names(skills);

        let mut matches: Vec<RoleMatch> = self
            .catalog
            .roles()
            .iter()
            .map(|profile| RoleMatch {
                role: profile.name.clone(),
                score: round2(profile_score(profile, &found)),
            })
            .collect();

        matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        matches
    }

    /// Detailed found/missing breakdown for one role. Returns `None` when
    /// the role is not in the catalog (an absent result, not an error).
    pub fn analyze_target_role(
        &self,
        skills: &[Skill],
        target_role: &str,
    ) -> Option<TargetRoleAnalysis> {
        let profile = match self.catalog.get(target_role) {
            Some(p) => p,
            None => {
                tracing::warn!("Target role '{target_role}' not found in role catalog.");
                return None;
            }
        };

        let found = lowercased_names(skills);
        let score = profile_score(profile, &found);

        Some(TargetRoleAnalysis {
            role: profile.name.clone(),
            score,
            required_found: intersection_sorted(&profile.required_skills, &found),
            required_missing: difference_sorted(&profile.required_skills, &found),
            good_to_have_found: intersection_sorted(&profile.good_to_have, &found),
            good_to_have_missing: difference_sorted(&profile.good_to_have, &found),
        })
    }
}

fn lowercased_names(skills: &[Skill]) -> HashSet<String> {
    skills.iter().map(|s| s.name.to_lowercase()).collect()
}

/// 0.7 * required coverage + 0.3 * good-to-have coverage, scaled to 0–100.
/// An empty requirement set contributes zero rather than dividing by zero.
fn profile_score(profile: &RoleProfile, found: &HashSet<String>) -> f64 {
    let required_score = coverage(&profile.required_skills, found);
    let good_to_have_score = coverage(&profile.good_to_have, found);
    (required_score * REQUIRED_WEIGHT + good_to_have_score * GOOD_TO_HAVE_WEIGHT) * 100.0
}

fn coverage(wanted: &[String], found: &HashSet<String>) -> f64 {
    if wanted.is_empty() {
        return 0.0;
    }
    let hits = wanted.iter().filter(|w| found.contains(*w)).count();
    hits as f64 / wanted.len() as f64
}

fn intersection_sorted(wanted: &[String], found: &HashSet<String>) -> Vec<String> {
    let mut result: Vec<String> = wanted.iter().filter(|w| found.contains(*w)).cloned().collect();
    result.sort();
    result
}

fn difference_sorted(wanted: &[String], found: &HashSet<String>) -> Vec<String> {
    let mut result: Vec<String> = wanted
        .iter()
        .filter(|w| !found.contains(*w))
        .cloned()
        .collect();
    result.sort();
    result
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
