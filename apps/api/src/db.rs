use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::models::analysis::{AnalysisRecord, MetricsResponse, RoleCount};

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Ensures the audit-log table and its target_role index exist.
/// Runs once at startup; idempotent.
pub async fn init_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS analysis_logs (
            id                   BIGSERIAL PRIMARY KEY,
            timestamp            TIMESTAMPTZ NOT NULL,
            file_name            TEXT NOT NULL,
            target_role          TEXT NOT NULL,
            match_score          DOUBLE PRECISION NOT NULL,
            skills_found_count   INTEGER NOT NULL,
            analysis_duration_ms BIGINT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_analysis_logs_target_role ON analysis_logs (target_role)",
    )
    .execute(pool)
    .await?;

    info!("Audit log schema ensured (analysis_logs + target_role index)");
    Ok(())
}

/// Appends one audit row per completed analysis.
///
/// The caller treats a failure here as non-fatal: it is logged and
/// discarded, never surfaced to the client.
pub async fn log_analysis(pool: &PgPool, record: &AnalysisRecord) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO analysis_logs
            (timestamp, file_name, target_role, match_score, skills_found_count, analysis_duration_ms)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(record.timestamp)
    .bind(&record.file_name)
    .bind(&record.target_role)
    .bind(record.match_score)
    .bind(record.skills_found_count)
    .bind(record.analysis_duration_ms)
    .execute(pool)
    .await?;

    info!("Logged analysis for {}", record.file_name);
    Ok(())
}

/// Computes aggregate metrics over the audit log.
/// Zero rows produce all-zero defaults with an empty breakdown.
pub async fn fetch_metrics(pool: &PgPool) -> Result<MetricsResponse, sqlx::Error> {
    let (total_analyses, avg_duration_ms, avg_score): (i64, f64, f64) = sqlx::query_as(
        r#"
        SELECT COUNT(*),
               COALESCE(AVG(analysis_duration_ms)::float8, 0),
               COALESCE(AVG(match_score), 0)
        FROM analysis_logs
        "#,
    )
    .fetch_one(pool)
    .await?;

    let breakdown: Vec<(String, i64)> = sqlx::query_as(
        r#"
        SELECT target_role, COUNT(*) AS count
        FROM analysis_logs
        GROUP BY target_role
        ORDER BY count DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(MetricsResponse {
        total_analyses,
        avg_duration_ms,
        avg_score,
        role_breakdown: breakdown
            .into_iter()
            .map(|(role, count)| RoleCount { role, count })
            .collect(),
    })
}
