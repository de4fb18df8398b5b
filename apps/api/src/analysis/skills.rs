//! Skill extraction — whole-word keyword scanning against the skill catalog.

use regex::Regex;
use std::collections::HashSet;

use crate::analysis::catalog::SkillCatalog;
use crate::models::analysis::Skill;

struct SkillPattern {
    name: String,
    category: String,
    regex: Regex,
}

/// Scans resume text for catalog keywords. Patterns are compiled once at
/// construction; extraction itself is pure and allocation-light.
pub struct SkillExtractor {
    patterns: Vec<SkillPattern>,
}

impl SkillExtractor {
    pub fn new(catalog: &SkillCatalog) -> Self {
        let mut patterns = Vec::new();
        for category in catalog.categories() {
            for keyword in &category.keywords {
                patterns.push(SkillPattern {
                    name: keyword.clone(),
                    category: category.name.clone(),
                    regex: keyword_regex(keyword),
                });
            }
        }
        Self { patterns }
    }

    /// Returns every catalog skill found in the text, at most once per
    /// distinct lowercased name. When a keyword appears in more than one
    /// category, the first-declared category wins.
    pub fn extract(&self, text: &str) -> Vec<Skill> {
        let mut found = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for pattern in &self.patterns {
            let key = pattern.name.to_lowercase();
            if seen.contains(&key) {
                continue;
            }
            if pattern.regex.is_match(text) {
                found.push(Skill {
                    name: pattern.name.clone(),
                    category: pattern.category.clone(),
                });
                seen.insert(key);
            }
        }

        found
    }
}

/// Whole-word, case-insensitive matcher for one keyword, allowing an
/// optional trailing "s". The regex crate has no lookaround and `\b`
/// fails beside punctuation-edged keywords ("c++", ".net"), so the word
/// boundary is an explicit non-word-character guard on both sides.
fn keyword_regex(keyword: &str) -> Regex {
    let pattern = format!(r"(?i)(?:^|\W){}s?(?:\W|$)", regex::escape(keyword));
    Regex::new(&pattern).expect("keyword pattern must compile")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::{default_skill_catalog, SkillCategory};

    fn extractor() -> SkillExtractor {
        SkillExtractor::new(&default_skill_catalog())
    }

    fn names(skills: &[Skill]) -> Vec<String> {
        skills.iter().map(|s| s.name.to_lowercase()).collect()
    }

    #[test]
    fn test_extracts_software_engineer_skills() {
        let text = "Skills:\nPython, Java, Git, Docker, Kubernetes, AWS, SQL, JavaScript, React";
        let found = names(&extractor().extract(text));

        for expected in ["python", "react", "docker", "git", "sql", "java"] {
            assert!(found.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(!found.contains(&"figma".to_string()));
    }

    #[test]
    fn test_extracts_data_scientist_skills() {
        let text = "Skills:\nPython, R, SQL, Pandas, Scikit-learn, TensorFlow, Matplotlib, Tableau";
        let found = names(&extractor().extract(text));

        for expected in ["python", "r", "sql", "pandas", "scikit-learn", "tensorflow", "tableau"] {
            assert!(found.contains(&expected.to_string()), "missing {expected}");
        }
        assert!(!found.contains(&"docker".to_string()));
    }

    #[test]
    fn test_matches_pluralized_keyword() {
        let found = names(&extractor().extract("Deployed containers with Dockers"));
        assert!(found.contains(&"docker".to_string()));
    }

    #[test]
    fn test_punctuation_edged_keywords_match_literally() {
        let found = names(&extractor().extract("Experience in C++, ASP.NET and CI/CD pipelines"));
        assert!(found.contains(&"c++".to_string()));
        assert!(found.contains(&"asp.net".to_string()));
        assert!(found.contains(&"ci/cd".to_string()));
    }

    #[test]
    fn test_no_substring_matches() {
        // "r" must not fire inside "rust", nor ".net" inside "network".
        let found = names(&extractor().extract("Building network tooling"));
        assert!(!found.contains(&"r".to_string()));
        assert!(!found.contains(&".net".to_string()));
    }

    #[test]
    fn test_empty_text_yields_no_skills() {
        assert!(extractor().extract("").is_empty());
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let text = "Python and Docker, with some SQL.";
        let ext = extractor();
        assert_eq!(ext.extract(text), ext.extract(text));
    }

    #[test]
    fn test_duplicate_keyword_first_category_wins() {
        let catalog = SkillCatalog::new(vec![
            SkillCategory {
                name: "First".to_string(),
                keywords: vec!["python".to_string()],
            },
            SkillCategory {
                name: "Second".to_string(),
                keywords: vec!["python".to_string()],
            },
        ]);
        let found = SkillExtractor::new(&catalog).extract("I write Python daily");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "First");
    }
}
