//! Job Source port and its two implementations: SerpAPI-backed search and a
//! static-HTML sample fallback. Handlers depend only on the trait so they can
//! be tested with deterministic fakes.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppError;
use crate::matching::skills::{extract_skills, MAX_JOB_SKILLS};
use crate::models::job::JobPosting;

pub mod handlers;
pub mod samples;
pub mod serpapi;

/// Capability port for job search. Implementations are request-scoped HTTP
/// callers or fixture readers — no cross-request state.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn search(
        &self,
        query: &str,
        location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, AppError>;

    /// Implementation label reported by the jobs health endpoint.
    fn kind(&self) -> &'static str;
}

/// Normalizes a raw job blob from an arbitrary source into a `JobPosting`,
/// extracting requirements from the description text.
pub fn normalize_raw_job(raw: &Value) -> JobPosting {
    let description = raw
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    JobPosting {
        title: str_field(raw, &["title"]).unwrap_or_else(|| "Unknown Position".to_string()),
        company: str_field(raw, &["company_name", "company"])
            .unwrap_or_else(|| "Unknown Company".to_string()),
        requirements: extract_skills(&description, MAX_JOB_SKILLS),
        location: str_field(raw, &["location"]).unwrap_or_else(|| "Unknown Location".to_string()),
        description: (!description.is_empty()).then_some(description),
        url: str_field(raw, &["link", "url"]),
    }
}

fn str_field(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| raw.get(*k).and_then(Value::as_str))
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_extracts_requirements_from_description() {
        let raw = json!({
            "title": "Backend Engineer",
            "company_name": "Acme",
            "location": "Berlin",
            "description": "Looking for Python and Kubernetes expertise.",
            "link": "https://example.com/job"
        });
        let job = normalize_raw_job(&raw);
        assert_eq!(job.title, "Backend Engineer");
        assert_eq!(job.company, "Acme");
        assert!(job.requirements.iter().any(|r| r == "Python"));
        assert!(job.requirements.iter().any(|r| r == "Kubernetes"));
        assert_eq!(job.url.as_deref(), Some("https://example.com/job"));
    }

    #[test]
    fn test_normalize_falls_back_on_missing_fields() {
        let job = normalize_raw_job(&json!({}));
        assert_eq!(job.title, "Unknown Position");
        assert_eq!(job.company, "Unknown Company");
        assert_eq!(job.location, "Unknown Location");
        assert!(job.requirements.is_empty());
        assert!(job.description.is_none());
        assert!(job.url.is_none());
    }

    #[test]
    fn test_normalize_accepts_company_alias() {
        let job = normalize_raw_job(&json!({"title": "Dev", "company": "Initech"}));
        assert_eq!(job.company, "Initech");
    }
}
