use serde::{Deserialize, Serialize};

/// A processed CV. Request-scoped: never persisted, discarded after the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cv {
    pub id: String,
    /// Full extracted text content.
    pub content: String,
    /// Deduplicated skill strings extracted from the content.
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Result of analyzing a CV against a job posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CvAnalysis {
    pub cv_id: String,
    pub extracted_skills: Vec<String>,
    /// 0–100 proportion of job requirements satisfied by the CV's skills.
    pub fit_score: u32,
    pub summary: String,
    pub matched_requirements: Vec<String>,
    pub missing_requirements: Vec<String>,
}
