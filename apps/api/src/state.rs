use std::sync::Arc;

use crate::config::Config;
use crate::cv::CvExtractor;
use crate::interview::QuestionGenerator;
use crate::matching::fit::FitScorer;
use crate::scrape::samples::SampleSource;
use crate::scrape::JobSource;

/// Shared application state injected into all route handlers via Axum extractors.
/// Collaborators are capability ports (`Arc<dyn T>`) so handlers can be
/// exercised with deterministic fakes instead of live network calls.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Active job source: SerpAPI when a key is configured, samples otherwise.
    pub job_source: Arc<dyn JobSource>,
    /// Direct handle on the fixture source for the sample-jobs endpoint.
    pub samples: Arc<SampleSource>,
    pub extractor: Arc<CvExtractor>,
    /// Pure, synchronous scorer — shared read-only across requests.
    pub scorer: Arc<FitScorer>,
    pub question_generator: Arc<dyn QuestionGenerator>,
}
