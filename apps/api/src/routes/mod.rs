pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cv::handlers as cv_handlers;
use crate::interview::handlers as interview_handlers;
use crate::scrape::handlers as job_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API
        .route("/api/v1/jobs/scrape", get(job_handlers::handle_scrape))
        .route("/api/v1/jobs/normalize", post(job_handlers::handle_normalize))
        .route(
            "/api/v1/jobs/sample-jobs",
            get(job_handlers::handle_sample_jobs),
        )
        .route("/api/v1/jobs/health", get(job_handlers::handle_jobs_health))
        // CV API
        .route("/api/v1/cv/upload", post(cv_handlers::handle_upload))
        .route("/api/v1/cv/analyze", post(cv_handlers::handle_analyze))
        // Interview API
        .route(
            "/api/v1/interview/generate",
            post(interview_handlers::handle_generate),
        )
        .route(
            "/api/v1/interview/complete-assessment",
            post(interview_handlers::handle_complete_assessment),
        )
        .with_state(state)
}
