//! Axum route handlers for the Interview API.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::cv::handlers::analyze;
use crate::errors::AppError;
use crate::interview::generate_assessment;
use crate::models::cv::{Cv, CvAnalysis};
use crate::models::interview::InterviewAssessment;
use crate::models::job::JobPosting;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub cv: Cv,
    pub job: JobPosting,
}

#[derive(Debug, Serialize)]
pub struct CompleteAssessmentResponse {
    pub cv_analysis: CvAnalysis,
    pub interview_assessment: InterviewAssessment,
}

/// POST /api/v1/interview/generate
///
/// Scores the CV against the job, then either generates questions or returns
/// the rejection with an empty question list.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<InterviewAssessment>, AppError> {
    let analysis = analyze(&state, &request.cv, &request.job);
    let assessment = generate_assessment(
        &state.scorer,
        state.question_generator.as_ref(),
        &request.cv,
        &analysis,
        &request.job,
    )
    .await?;
    Ok(Json(assessment))
}

/// POST /api/v1/interview/complete-assessment
///
/// Full pipeline in one call: CV analysis plus the interview assessment. The
/// analysis is always computed locally, so it is present even when question
/// generation was skipped for a rejection.
pub async fn handle_complete_assessment(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<CompleteAssessmentResponse>, AppError> {
    let cv_analysis = analyze(&state, &request.cv, &request.job);
    let interview_assessment = generate_assessment(
        &state.scorer,
        state.question_generator.as_ref(),
        &request.cv,
        &cv_analysis,
        &request.job,
    )
    .await?;

    Ok(Json(CompleteAssessmentResponse {
        cv_analysis,
        interview_assessment,
    }))
}
