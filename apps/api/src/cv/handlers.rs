//! Axum route handlers for the CV API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::cv::{Cv, CvAnalysis};
use crate::models::job::JobPosting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub cv: Cv,
    pub job: JobPosting,
}

/// POST /api/v1/cv/upload
///
/// Multipart upload of a CV document (PDF or plain text in a `file` field).
/// Returns the processed `Cv` with extracted skills. Nothing is persisted —
/// the caller holds the `Cv` and passes it back for analysis.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Cv>, AppError> {
    let mut file: Option<(Bytes, Option<String>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") || field.file_name().is_some() {
            let content_type = field.content_type().map(str::to_string);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            file = Some((bytes, content_type));
            break;
        }
    }

    let (bytes, content_type) =
        file.ok_or_else(|| AppError::Validation("Missing 'file' field in upload".to_string()))?;

    let extracted = state
        .extractor
        .extract(&bytes, content_type.as_deref())
        .await?;

    Ok(Json(Cv {
        id: Uuid::new_v4().to_string(),
        content: extracted.content,
        skills: extracted.skills,
    }))
}

/// POST /api/v1/cv/analyze
///
/// Scores a CV against a job posting. Pure local computation — no upstream
/// calls, so it cannot fail once the payload deserializes.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<CvAnalysis>, AppError> {
    Ok(Json(analyze(&state, &request.cv, &request.job)))
}

/// Builds the full analysis for one CV/job pair. Shared with the interview
/// pipeline so both endpoints report identical numbers.
pub fn analyze(state: &AppState, cv: &Cv, job: &JobPosting) -> CvAnalysis {
    let result = state.scorer.score(&cv.skills, &job.requirements);
    let summary = state.scorer.summarize(&result);
    CvAnalysis {
        cv_id: cv.id.clone(),
        extracted_skills: cv.skills.clone(),
        fit_score: result.score,
        summary,
        matched_requirements: result.matched,
        missing_requirements: result.missing,
    }
}
