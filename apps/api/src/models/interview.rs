use serde::{Deserialize, Serialize};

/// Outcome of the interview-assessment pipeline for one CV/job pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewAssessment {
    pub fit_score: u32,
    /// Empty when the candidate is rejected — generation is skipped entirely.
    pub questions: Vec<String>,
    pub rejected: bool,
    /// Present iff `rejected` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}
