//! Axum route handlers for submissions and artifact downloads.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;

use crate::classify::PredictedLabel;
use crate::errors::AppError;
use crate::export::dispatcher::{ExportArtifact, RenderFailure};
use crate::export::pipeline::{run_submission, Submission};
use crate::state::AppState;
use crate::synthesis::GeneratedDocument;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ArtifactPayload {
    pub filename: String,
    pub media_type: &'static str,
    pub size_bytes: usize,
    pub content_base64: String,
}

impl From<&ExportArtifact> for ArtifactPayload {
    fn from(artifact: &ExportArtifact) -> Self {
        Self {
            filename: artifact.filename.clone(),
            media_type: artifact.media_type,
            size_bytes: artifact.bytes.len(),
            content_base64: STANDARD.encode(&artifact.bytes),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub predicted_category: PredictedLabel,
    pub document: Option<GeneratedDocument>,
    pub artifacts: Vec<ArtifactPayload>,
    pub render_failures: Vec<RenderFailure>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/submissions
///
/// Classifies the resume text and, unless the action is `predict_category`, returns the
/// generated document together with every rendered file (base64).
pub async fn handle_submit(
    State(state): State<AppState>,
    Json(submission): Json<Submission>,
) -> Result<Json<SubmissionResponse>, AppError> {
    let outcome = run_submission(&state.predictor, &state.pipeline, submission).await?;

    let response = match outcome.bundle {
        Some(bundle) => SubmissionResponse {
            predicted_category: outcome.prediction.label,
            artifacts: bundle.artifacts.iter().map(ArtifactPayload::from).collect(),
            render_failures: bundle.failures,
            document: Some(bundle.document),
        },
        None => SubmissionResponse {
            predicted_category: outcome.prediction.label,
            document: None,
            artifacts: Vec::new(),
            render_failures: Vec::new(),
        },
    };

    Ok(Json(response))
}

/// POST /api/v1/submissions/download/:filename
///
/// Runs the same submission and returns one artifact as an attachment.
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    Json(submission): Json<Submission>,
) -> Result<Response, AppError> {
    if submission.action.document_kind().is_none() {
        return Err(AppError::Validation(
            "predict_category does not produce downloadable files".to_string(),
        ));
    }

    let outcome = run_submission(&state.predictor, &state.pipeline, submission).await?;
    let bundle = outcome
        .bundle
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Export produced no bundle")))?;

    if let Some(failure) = bundle.failure(&filename) {
        return Err(AppError::Render(failure.message.clone()));
    }

    let artifact = bundle
        .artifact(&filename)
        .ok_or_else(|| AppError::NotFound(format!("No file named '{filename}' for this document")))?;

    let headers = [
        (header::CONTENT_TYPE, artifact.media_type.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.filename),
        ),
    ];

    Ok((headers, artifact.bytes.clone()).into_response())
}
