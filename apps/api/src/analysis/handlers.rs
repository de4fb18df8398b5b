use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crate::analysis::pipeline::analyze_resume;
use crate::db;
use crate::errors::AppError;
use crate::models::analysis::{AnalysisResponse, MetricsResponse};
use crate::state::AppState;

/// POST /api/v1/analyze
/// Multipart form: `resume_file` (.pdf or .docx) + `target_role` (text).
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut file_bytes: Option<Bytes> = None;
    let mut file_name: Option<String> = None;
    let mut target_role: Option<String> = None;

    while let Some(field) = multipart.next_field().await.map_err(read_error)? {
        let field_name = field.name().map(|s| s.to_string());
        match field_name.as_deref() {
            Some("resume_file") => {
                file_name = field.file_name().map(|s| s.to_string());
                file_bytes = Some(field.bytes().await.map_err(read_error)?);
            }
            Some("target_role") => {
                target_role = Some(field.text().await.map_err(read_error)?);
            }
            _ => {}
        }
    }

    let file_bytes = file_bytes
        .ok_or_else(|| AppError::Validation("A resume file is required.".to_string()))?;
    let file_name = file_name
        .ok_or_else(|| AppError::Validation("The resume file must have a file name.".to_string()))?;
    let target_role = target_role
        .ok_or_else(|| AppError::Validation("A target role is required.".to_string()))?;

    info!("Analyzing resume: {file_name} for role: {target_role}");

    let result = analyze_resume(&state, &file_bytes, &file_name, &target_role).await?;
    Ok(Json(result))
}

/// GET /api/v1/metrics
/// Aggregate usage counters from the audit log.
pub async fn handle_metrics(
    State(state): State<AppState>,
) -> Result<Json<MetricsResponse>, AppError> {
    info!("Fetching metrics");
    let metrics = db::fetch_metrics(&state.db).await?;
    Ok(Json(metrics))
}

fn read_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Error reading file: {e}"))
}
