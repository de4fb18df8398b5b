use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::catalog::RoleCatalog;
use crate::analysis::experience::DateEntityFinder;
use crate::analysis::scoring::RoleScorer;
use crate::analysis::skills::SkillExtractor;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. The catalogs behind the extractor and scorer are loaded
/// once at startup and read-only thereafter.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub llm: LlmClient,
    pub skill_extractor: Arc<SkillExtractor>,
    pub role_scorer: Arc<RoleScorer>,
    pub role_catalog: Arc<RoleCatalog>,
    /// Injected date-entity capability used by the experience analyzer.
    pub date_finder: Arc<dyn DateEntityFinder>,
}
