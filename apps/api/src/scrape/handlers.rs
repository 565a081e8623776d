//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::job::JobPosting;
use crate::scrape::{normalize_raw_job, JobSource};
use crate::state::AppState;

const MAX_SCRAPE_LIMIT: usize = 50;

fn default_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    pub query: String,
    #[serde(default)]
    pub location: String,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct JobsHealthResponse {
    pub status: &'static str,
    pub serpapi_configured: bool,
    pub source_kind: &'static str,
}

/// GET /api/v1/jobs/scrape?query=...&location=...&limit=...
///
/// Searches the configured job source. 404 when nothing matches, so clients
/// can tell an empty search from a provider failure.
pub async fn handle_scrape(
    State(state): State<AppState>,
    Query(params): Query<ScrapeQuery>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    if params.query.trim().is_empty() {
        return Err(AppError::Validation("query cannot be empty".to_string()));
    }
    if params.limit == 0 || params.limit > MAX_SCRAPE_LIMIT {
        return Err(AppError::Validation(format!(
            "limit must be between 1 and {MAX_SCRAPE_LIMIT}"
        )));
    }

    let jobs = state
        .job_source
        .search(&params.query, &params.location, params.limit)
        .await?;

    if jobs.is_empty() {
        return Err(AppError::NotFound(
            "No jobs found. Try different search terms or check the search provider configuration."
                .to_string(),
        ));
    }

    Ok(Json(jobs))
}

/// POST /api/v1/jobs/normalize
///
/// Converts a raw job blob from an arbitrary source into the standard
/// `JobPosting` shape with requirements extracted from the description.
pub async fn handle_normalize(
    Json(raw): Json<Value>,
) -> Result<Json<JobPosting>, AppError> {
    if !raw.is_object() {
        return Err(AppError::Validation(
            "job payload must be a JSON object".to_string(),
        ));
    }
    Ok(Json(normalize_raw_job(&raw)))
}

/// GET /api/v1/jobs/sample-jobs
///
/// Returns the bundled fixture postings regardless of provider configuration.
/// Useful for development and testing.
pub async fn handle_sample_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    let jobs = state.samples.search("", "", MAX_SCRAPE_LIMIT).await?;
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/health
///
/// Reports job-source configuration only — no live upstream probe.
pub async fn handle_jobs_health(State(state): State<AppState>) -> Json<JobsHealthResponse> {
    Json(JobsHealthResponse {
        status: "healthy",
        serpapi_configured: state.config.serpapi_key.is_some(),
        source_kind: state.job_source.kind(),
    })
}
