use serde::{Deserialize, Serialize};

/// A normalized job posting, regardless of which source produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    /// Requirement/skill strings extracted from the posting, in posting order.
    #[serde(default)]
    pub requirements: Vec<String>,
    pub location: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}
