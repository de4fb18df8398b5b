//! Experience analysis — explicit year mentions plus date entities from an
//! injected recognition capability.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::warn;

/// Maximum number of date entities carried into the summary.
const MAX_DATE_ENTITIES: usize = 10;

/// Marker line inserted ahead of the date-entity block.
const KEY_DATES_MARKER: &str = "Key Dates Found:";

// "5 years", "5+ years", "5-7 years"
static YEAR_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b\d+\s*(?:\+\s*)?years?\b").unwrap(),
        Regex::new(r"(?i)\b\d+-\d+\s*years?\b").unwrap(),
    ]
});

/// Date-entity recognition capability. Failures degrade the analysis to the
/// regex pass only; they never propagate.
pub trait DateEntityFinder: Send + Sync {
    fn find_date_entities(&self, text: &str) -> Result<Vec<String>>;
}

/// Pattern-based date recognizer covering the entity shapes resumes carry:
/// month-name + year, year ranges (including open-ended "present"),
/// "since <year>", and bare years.
pub struct HeuristicDateFinder;

static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)\b(?:jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\.?\s+\d{4}\b",
        )
        .unwrap(),
        Regex::new(r"(?i)\b(?:19|20)\d{2}\s*[-–—]\s*(?:(?:19|20)\d{2}|present|current|now)\b")
            .unwrap(),
        Regex::new(r"(?i)\bsince\s+(?:19|20)\d{2}\b").unwrap(),
        Regex::new(r"\b(?:19|20)\d{2}\b").unwrap(),
    ]
});

impl DateEntityFinder for HeuristicDateFinder {
    fn find_date_entities(&self, text: &str) -> Result<Vec<String>> {
        let mut entities = Vec::new();
        for pattern in DATE_PATTERNS.iter() {
            for m in pattern.find_iter(text) {
                entities.push(m.as_str().to_string());
            }
        }
        Ok(entities)
    }
}

/// Scans for experience signals: a regex pass over explicit "N years"
/// mentions, unioned with date entities from the injected finder. The
/// result is deduplicated preserving insertion order.
pub fn analyze_experience(text: &str, finder: &dyn DateEntityFinder) -> Vec<String> {
    let mut snippets = Vec::new();

    for pattern in YEAR_PATTERNS.iter() {
        for m in pattern.find_iter(text) {
            snippets.push(format!("Mention of: {}", m.as_str()));
        }
    }

    match finder.find_date_entities(text) {
        Ok(entities) => {
            let mut unique = Vec::new();
            let mut seen = HashSet::new();
            for entity in entities {
                let cleaned = entity.replace('\n', " ");
                if seen.insert(cleaned.clone()) {
                    unique.push(cleaned);
                }
            }
            // Longest entities first; stable sort keeps ties deterministic.
            unique.sort_by(|a, b| b.len().cmp(&a.len()));
            unique.truncate(MAX_DATE_ENTITIES);
            if !unique.is_empty() {
                snippets.push(KEY_DATES_MARKER.to_string());
                snippets.extend(unique);
            }
        }
        Err(e) => {
            warn!("Date entity analysis failed: {e}");
        }
    }

    let mut seen = HashSet::new();
    snippets.retain(|s| seen.insert(s.clone()));
    snippets
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingFinder;

    impl DateEntityFinder for FailingFinder {
        fn find_date_entities(&self, _text: &str) -> Result<Vec<String>> {
            anyhow::bail!("model not loaded")
        }
    }

    struct FixedFinder(Vec<String>);

    impl DateEntityFinder for FixedFinder {
        fn find_date_entities(&self, _text: &str) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_year_mentions_are_recorded_verbatim() {
        let text = "7 years of backend work, 5+ years with Python, 3-5 years leading teams";
        let result = analyze_experience(text, &FixedFinder(vec![]));

        assert!(result.contains(&"Mention of: 7 years".to_string()));
        assert!(result.contains(&"Mention of: 5+ years".to_string()));
        assert!(result.contains(&"Mention of: 3-5 years".to_string()));
    }

    #[test]
    fn test_finder_failure_degrades_to_regex_results() {
        let result = analyze_experience("10 years of experience", &FailingFinder);
        assert_eq!(result, vec!["Mention of: 10 years".to_string()]);
    }

    #[test]
    fn test_no_marker_without_date_entities() {
        let result = analyze_experience("10 years of experience", &FixedFinder(vec![]));
        assert!(!result.contains(&KEY_DATES_MARKER.to_string()));
    }

    #[test]
    fn test_date_entities_sorted_by_length_desc_and_capped() {
        let entities: Vec<String> = (0..12).map(|i| format!("{:0width$}", 0, width = i + 4)).collect();
        let result = analyze_experience("", &FixedFinder(entities));

        assert_eq!(result[0], KEY_DATES_MARKER);
        let dates = &result[1..];
        assert_eq!(dates.len(), MAX_DATE_ENTITIES);
        for pair in dates.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
        }
        // Longest entity survives the cap.
        assert_eq!(dates[0].len(), 15);
    }

    #[test]
    fn test_date_entities_deduplicated_and_newline_stripped() {
        let entities = vec![
            "June\n2021".to_string(),
            "June 2021".to_string(),
            "2019 - 2022".to_string(),
        ];
        let result = analyze_experience("", &FixedFinder(entities));
        let dates: Vec<_> = result[1..].to_vec();
        assert_eq!(dates.len(), 2);
        assert!(dates.contains(&"June 2021".to_string()));
    }

    #[test]
    fn test_heuristic_finder_recognizes_resume_date_shapes() {
        let text = "Acme Corp, Jan 2020 - present. Previously at Beta Inc since 2016. March 2014.";
        let entities = HeuristicDateFinder.find_date_entities(text).unwrap();

        assert!(entities.iter().any(|e| e == "Jan 2020"));
        assert!(entities.iter().any(|e| e == "since 2016"));
        assert!(entities.iter().any(|e| e == "March 2014"));
    }

    #[test]
    fn test_duplicate_year_mentions_collapse() {
        let text = "5 years of Java. 5 years of SQL.";
        let result = analyze_experience(text, &FixedFinder(vec![]));
        assert_eq!(result, vec!["Mention of: 5 years".to_string()]);
    }
}
