mod analysis;
mod config;
mod db;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::catalog::{default_role_catalog, default_skill_catalog};
use crate::analysis::experience::HeuristicDateFinder;
use crate::analysis::scoring::RoleScorer;
use crate::analysis::skills::SkillExtractor;
use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and ensure the audit-log schema
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;

    // Initialize LLM client
    let llm = LlmClient::new(config.anthropic_api_key.clone());
    if llm.is_configured() {
        info!("LLM client initialized (model: {})", llm_client::MODEL);
    } else {
        info!("LLM API key not configured; feedback generation will be skipped");
    }

    // Build the reference catalogs and the analyzers over them
    let skill_catalog = default_skill_catalog();
    let role_catalog = Arc::new(default_role_catalog());
    let skill_extractor = Arc::new(SkillExtractor::new(&skill_catalog));
    let role_scorer = Arc::new(RoleScorer::new(role_catalog.clone()));
    info!(
        "Catalogs loaded: {} skill categories, {} role profiles",
        skill_catalog.categories().len(),
        role_catalog.len()
    );

    // Build app state
    let state = AppState {
        db,
        llm,
        skill_extractor,
        role_scorer,
        role_catalog,
        date_finder: Arc::new(HeuristicDateFinder),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
