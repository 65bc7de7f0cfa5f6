//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::keywords::join_keywords;
use crate::analysis::pipeline::analyze;
use crate::analysis::verdict::Verdict;
use crate::errors::AppError;
use crate::extraction::{extract, Document};
use crate::models::analysis::AnalysisResult;
use crate::state::AppState;

const JOB_DESCRIPTION_FIELD: &str = "job_description";
const RESUME_FIELD: &str = "resume";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub job_text: String,
    #[serde(default)]
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis_id: Uuid,
    #[serde(flatten)]
    pub result: AnalysisResult,
    /// `missing_keywords` joined for display.
    pub missing_keywords_text: String,
    pub verdict: Verdict,
    pub message: String,
    pub scorer_backend: String,
    pub warnings: Vec<String>,
    pub resume_chars: usize,
}

impl AnalyzeResponse {
    fn new(
        result: AnalysisResult,
        state: &AppState,
        warnings: Vec<String>,
        resume_chars: usize,
    ) -> Self {
        let verdict = Verdict::from_score(result.score);
        AnalyzeResponse {
            analysis_id: Uuid::new_v4(),
            missing_keywords_text: join_keywords(&result.missing_keywords),
            result,
            verdict,
            message: verdict.message().to_string(),
            scorer_backend: state.scorer.backend().to_string(),
            warnings,
            resume_chars,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form with a `job_description` text field and a `resume` file field.
/// An unsupported resume format is reported in `warnings` and scored as empty text.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let mut job_text: Option<String> = None;
    let mut resume: Option<Document> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            JOB_DESCRIPTION_FIELD => job_text = Some(field.text().await?),
            RESUME_FIELD => {
                let file_name = field
                    .file_name()
                    .map(str::to_string)
                    .ok_or_else(|| {
                        AppError::Validation("resume must be uploaded as a file".to_string())
                    })?;
                let bytes = field.bytes().await?;
                resume = Some(Document::from_upload(file_name, bytes));
            }
            _ => {}
        }
    }

    let job_text = job_text
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description cannot be empty".to_string()))?;
    let document =
        resume.ok_or_else(|| AppError::Validation("resume file is required".to_string()))?;

    info!(
        "Analyzing {} ({:?}, {} bytes) against {} chars of job description",
        document.file_name,
        document.format,
        document.bytes.len(),
        job_text.len()
    );

    let extraction = tokio::task::spawn_blocking(move || extract(&document))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))??;

    let result = analyze(&job_text, &extraction.text, state.scorer.as_ref());
    let warnings = extraction.warning.into_iter().collect();
    let response = AnalyzeResponse::new(result, &state, warnings, extraction.text.chars().count());

    info!(
        "Analysis {} scored {} ({:?})",
        response.analysis_id, response.result.score, response.verdict
    );

    Ok(Json(response))
}

/// POST /api/v1/analyze/text
///
/// Same pipeline for callers that already have the resume as plain text.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.job_text.trim().is_empty() {
        return Err(AppError::Validation("job_text cannot be empty".to_string()));
    }

    let result = analyze(&request.job_text, &request.resume_text, state.scorer.as_ref());
    let response = AnalyzeResponse::new(
        result,
        &state,
        Vec::new(),
        request.resume_text.chars().count(),
    );

    info!(
        "Analysis {} scored {} ({:?})",
        response.analysis_id, response.result.score, response.verdict
    );

    Ok(Json(response))
}
