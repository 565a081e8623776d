mod config;
mod cv;
mod errors;
mod interview;
mod llm_client;
mod matching;
mod models;
mod routes;
mod scrape;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::cv::CvExtractor;
use crate::interview::generator::LlmQuestionGenerator;
use crate::llm_client::LlmClient;
use crate::matching::fit::{FitScorer, ScoringConfig};
use crate::matching::fuzzy::SkillMatcher;
use crate::routes::build_router;
use crate::scrape::samples::SampleSource;
use crate::scrape::serpapi::SerpApiSource;
use crate::scrape::JobSource;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Jobscout API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the model client
    let llm = LlmClient::new(config.hf_token.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    // Job source: SerpAPI when a key is configured, bundled samples otherwise
    let samples = Arc::new(SampleSource);
    let job_source: Arc<dyn JobSource> = match &config.serpapi_key {
        Some(key) => Arc::new(SerpApiSource::new(key.clone())),
        None => {
            info!("No SerpAPI key configured — serving sample postings");
            samples.clone()
        }
    };

    // Fit scorer: pure and shared read-only across requests
    let scorer = Arc::new(FitScorer::new(
        ScoringConfig {
            rejection_threshold: config.rejection_threshold,
        },
        SkillMatcher::default(),
    ));
    info!(
        "Fit scorer initialized (rejection threshold: {})",
        config.rejection_threshold
    );

    let extractor = Arc::new(CvExtractor::new(llm.clone()));
    let question_generator = Arc::new(LlmQuestionGenerator::new(llm));

    let state = AppState {
        config: config.clone(),
        job_source,
        samples,
        extractor,
        scorer,
        question_generator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
