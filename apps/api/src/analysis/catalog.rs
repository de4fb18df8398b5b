//! Skill and role reference catalogs.
//!
//! Both catalogs are explicitly constructed at startup and injected into the
//! extractor and scorer, never read as ambient globals, so tests can
//! substitute small catalogs. Vec-backed ordering keeps extraction precedence
//! and role-match tie-breaks deterministic.

/// One named skill category and its keywords, in declaration order.
/// Keywords are canonical lowercase forms.
#[derive(Debug, Clone)]
pub struct SkillCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Ordered keyword → category reference data. Immutable after construction.
#[derive(Debug, Clone)]
pub struct SkillCatalog {
    categories: Vec<SkillCategory>,
}

impl SkillCatalog {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[SkillCategory] {
        &self.categories
    }
}

/// A named job role's skill requirements and experience vocabulary.
#[derive(Debug, Clone)]
pub struct RoleProfile {
    pub name: String,
    pub required_skills: Vec<String>,
    pub good_to_have: Vec<String>,
    pub experience_keywords: Vec<String>,
}

/// Ordered role-name → profile reference data. Immutable after construction.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    roles: Vec<RoleProfile>,
}

impl RoleCatalog {
    pub fn new(roles: Vec<RoleProfile>) -> Self {
        Self { roles }
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn get(&self, name: &str) -> Option<&RoleProfile> {
        self.roles.iter().find(|r| r.name == name)
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

fn category(name: &str, keywords: &[&str]) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in skill catalog.
pub fn default_skill_catalog() -> SkillCatalog {
    SkillCatalog::new(vec![
        category(
            "Programming Languages",
            &[
                "python", "java", "javascript", "typescript", "c++", "c#", "go", "golang", "ruby",
                "php", "swift", "kotlin", "r", "matlab", "sql", "scala", "perl", "rust",
            ],
        ),
        category(
            "Web Development (Frontend)",
            &[
                "html", "css", "react", "angular", "vue", "vue.js", "next.js", "nextjs", "svelte",
                "jquery", "bootstrap", "tailwind", "tailwindcss", "sass", "less", "webpack",
                "babel",
            ],
        ),
        category(
            "Web Development (Backend)",
            &[
                "node.js", "nodejs", "express", "django", "flask", "fastapi", "ruby on rails",
                "spring", "spring boot", ".net", "asp.net", "laravel",
            ],
        ),
        category(
            "Database Systems",
            &[
                "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite",
                "microsoft sql server", "sql server", "cassandra", "elasticsearch", "dynamodb",
                "firebase",
            ],
        ),
        category(
            "DevOps & Cloud",
            &[
                "aws", "azure", "gcp", "google cloud platform", "docker", "kubernetes", "k8s",
                "terraform", "ansible", "jenkins", "gitlab ci", "github actions", "ci/cd",
                "prometheus", "grafana", "linux", "bash", "powershell", "nginx", "apache",
            ],
        ),
        category(
            "Data Science & ML",
            &[
                "tensorflow", "pytorch", "scikit-learn", "keras", "pandas", "numpy", "scipy",
                "matplotlib", "seaborn", "jupyter", "spark", "apache spark", "hadoop", "nlp",
                "computer vision", "opencv", "d3.js", "tableau", "power bi", "looker",
            ],
        ),
        category(
            "Project Management & Tools",
            &[
                "agile", "scrum", "kanban", "jira", "confluence", "trello", "asana", "git",
                "github", "gitlab", "bitbucket", "svn", "project management",
            ],
        ),
        category(
            "Soft Skills",
            &[
                "leadership", "communication", "teamwork", "problem solving", "analytical",
                "critical thinking", "collaboration", "mentoring", "adaptability",
                "time management",
            ],
        ),
    ])
}

fn role(
    name: &str,
    required_skills: &[&str],
    good_to_have: &[&str],
    experience_keywords: &[&str],
) -> RoleProfile {
    RoleProfile {
        name: name.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        good_to_have: good_to_have.iter().map(|s| s.to_string()).collect(),
        experience_keywords: experience_keywords.iter().map(|s| s.to_string()).collect(),
    }
}

/// The built-in role-profile catalog.
pub fn default_role_catalog() -> RoleCatalog {
    RoleCatalog::new(vec![
        role(
            "Software Engineer",
            &["python", "java", "javascript", "sql", "git", "teamwork"],
            &[
                "docker", "kubernetes", "aws", "ci/cd", "agile", "react", "node.js", "c++",
            ],
            &[
                "development", "implementation", "testing", "debugging", "optimization",
                "code review",
            ],
        ),
        role(
            "Data Scientist",
            &["python", "r", "sql", "pandas", "scikit-learn", "matplotlib"],
            &[
                "tensorflow", "pytorch", "spark", "tableau", "power bi", "nlp",
                "computer vision", "aws",
            ],
            &[
                "analysis", "modeling", "visualization", "research", "prediction", "a/b testing",
                "algorithms",
            ],
        ),
        role(
            "Frontend Developer",
            &["html", "css", "javascript", "react", "git", "api"],
            &[
                "typescript", "vue", "angular", "next.js", "tailwind", "figma", "sass", "webpack",
            ],
            &[
                "frontend", "ui", "user interface", "web applications", "responsive",
                "cross-browser",
            ],
        ),
        role(
            "Backend Developer",
            &[
                "node.js", "python", "java", "sql", "api", "rest", "git", "mongodb", "postgresql",
            ],
            &[
                "docker", "kubernetes", "aws", "gcp", "django", "flask", "spring boot",
                "microservices", "graphql",
            ],
            &[
                "backend", "api development", "database design", "server-side", "microservices",
                "performance",
            ],
        ),
        role(
            "DevOps Engineer",
            &[
                "linux", "aws", "docker", "kubernetes", "ci/cd", "jenkins", "terraform", "bash",
            ],
            &[
                "python", "ansible", "prometheus", "grafana", "gcp", "azure", "security",
            ],
            &[
                "automation", "deployment", "monitoring", "infrastructure", "iac", "scalability",
                "reliability",
            ],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_skill_catalog_has_eight_categories() {
        let catalog = default_skill_catalog();
        assert_eq!(catalog.categories().len(), 8);
        assert_eq!(catalog.categories()[0].name, "Programming Languages");
        assert_eq!(catalog.categories()[7].name, "Soft Skills");
    }

    #[test]
    fn test_default_role_catalog_has_five_roles() {
        let catalog = default_role_catalog();
        assert_eq!(catalog.len(), 5);
        assert!(!catalog.is_empty());
        assert!(catalog.get("Software Engineer").is_some());
        assert!(catalog.get("Galactic Emperor").is_none());
    }

    #[test]
    fn test_role_lookup_returns_profile_data() {
        let catalog = default_role_catalog();
        let profile = catalog.get("DevOps Engineer").unwrap();
        assert!(profile.required_skills.contains(&"terraform".to_string()));
        assert_eq!(profile.experience_keywords[0], "automation");
    }

    #[test]
    fn test_catalog_keywords_are_lowercase() {
        let catalog = default_skill_catalog();
        for category in catalog.categories() {
            for keyword in &category.keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
            }
        }
    }
}
