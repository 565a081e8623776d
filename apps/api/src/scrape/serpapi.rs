//! SerpAPI-backed job source (Google Jobs engine, scoped to LinkedIn
//! postings). Falls back to the bundled samples when the upstream call fails.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::matching::skills::{extract_skills, MAX_JOB_SKILLS};
use crate::models::job::JobPosting;
use crate::scrape::samples::SampleSource;
use crate::scrape::JobSource;

const SERPAPI_URL: &str = "https://serpapi.com/search.json";
/// SerpAPI caps `num` for the google_jobs engine.
const SERPAPI_MAX_RESULTS: usize = 20;

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    jobs_results: Vec<SerpJob>,
}

#[derive(Debug, Deserialize)]
struct SerpJob {
    #[serde(default)]
    title: String,
    #[serde(default)]
    company_name: String,
    #[serde(default)]
    location: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    related_links: Vec<RelatedLink>,
}

#[derive(Debug, Deserialize)]
struct RelatedLink {
    #[serde(default)]
    link: String,
}

pub struct SerpApiSource {
    client: Client,
    api_key: String,
    fallback: SampleSource,
}

impl SerpApiSource {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            fallback: SampleSource,
        }
    }

    async fn search_serpapi(
        &self,
        query: &str,
        location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, AppError> {
        let num = limit.min(SERPAPI_MAX_RESULTS).to_string();
        let q = format!("{query} site:linkedin.com");
        let response = self
            .client
            .get(SERPAPI_URL)
            .query(&[
                ("engine", "google_jobs"),
                ("q", q.as_str()),
                ("location", location),
                ("num", num.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Search(format!("SerpAPI request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Search(format!(
                "SerpAPI returned {status}: {body}"
            )));
        }

        let parsed: SerpResponse = response
            .json()
            .await
            .map_err(|e| AppError::Search(format!("SerpAPI response parse failed: {e}")))?;

        Ok(parsed
            .jobs_results
            .into_iter()
            .take(limit)
            .filter_map(normalize_serp_job)
            .collect())
    }
}

#[async_trait]
impl JobSource for SerpApiSource {
    async fn search(
        &self,
        query: &str,
        location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, AppError> {
        match self.search_serpapi(query, location, limit).await {
            Ok(jobs) => {
                info!("SerpAPI returned {} jobs for '{query}'", jobs.len());
                Ok(jobs)
            }
            Err(e) => {
                warn!("SerpAPI search failed ({e}), falling back to samples");
                self.fallback.search(query, location, limit).await
            }
        }
    }

    fn kind(&self) -> &'static str {
        "serpapi"
    }
}

/// Skips results missing a title or company; extracts requirements from the
/// description text.
fn normalize_serp_job(job: SerpJob) -> Option<JobPosting> {
    if job.title.trim().is_empty() || job.company_name.trim().is_empty() {
        return None;
    }

    let url = job
        .related_links
        .first()
        .map(|l| l.link.clone())
        .filter(|l| !l.is_empty());

    Some(JobPosting {
        requirements: extract_skills(&job.description, MAX_JOB_SKILLS),
        title: job.title,
        company: job.company_name,
        location: job.location,
        description: (!job.description.is_empty()).then_some(job.description),
        url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serp_job(title: &str, company: &str) -> SerpJob {
        SerpJob {
            title: title.to_string(),
            company_name: company.to_string(),
            location: "Remote".to_string(),
            description: "Needs Python and Docker.".to_string(),
            related_links: vec![RelatedLink {
                link: "https://linkedin.com/jobs/1".to_string(),
            }],
        }
    }

    #[test]
    fn test_normalize_serp_job_extracts_fields() {
        let job = normalize_serp_job(serp_job("Engineer", "Acme")).unwrap();
        assert_eq!(job.title, "Engineer");
        assert_eq!(job.company, "Acme");
        assert_eq!(job.url.as_deref(), Some("https://linkedin.com/jobs/1"));
        assert!(job.requirements.iter().any(|r| r == "Python"));
    }

    #[test]
    fn test_results_without_title_or_company_are_skipped() {
        assert!(normalize_serp_job(serp_job("", "Acme")).is_none());
        assert!(normalize_serp_job(serp_job("Engineer", " ")).is_none());
    }

    #[test]
    fn test_serp_response_tolerates_missing_fields() {
        let parsed: SerpResponse = serde_json::from_str(r#"{"jobs_results": [{"title": "Dev"}]}"#).unwrap();
        assert_eq!(parsed.jobs_results.len(), 1);
        assert!(parsed.jobs_results[0].company_name.is_empty());

        let empty: SerpResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.jobs_results.is_empty());
    }
}
