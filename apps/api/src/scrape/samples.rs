//! Static-HTML fallback job source: parses bundled LinkedIn-style posting
//! fixtures so the API stays usable without a SerpAPI key.

use async_trait::async_trait;
use scraper::{Html, Selector};
use tracing::warn;

use crate::errors::AppError;
use crate::matching::skills::{extract_skills, MAX_JOB_SKILLS};
use crate::models::job::JobPosting;
use crate::scrape::JobSource;

const SAMPLE_PAGES: &[&str] = &[
    include_str!("../../fixtures/senior_python_developer.html"),
    include_str!("../../fixtures/fullstack_engineer.html"),
];

#[derive(Debug, Default, Clone)]
pub struct SampleSource;

#[async_trait]
impl JobSource for SampleSource {
    async fn search(
        &self,
        _query: &str,
        _location: &str,
        limit: usize,
    ) -> Result<Vec<JobPosting>, AppError> {
        Ok(SAMPLE_PAGES
            .iter()
            .filter_map(|html| {
                let job = parse_sample_html(html);
                if job.is_none() {
                    warn!("Skipping unparseable sample posting");
                }
                job
            })
            .take(limit)
            .collect())
    }

    fn kind(&self) -> &'static str {
        "samples"
    }
}

/// Parses one LinkedIn-style job page. Falls back to generic values for
/// missing fields the same way live scrapers must.
pub fn parse_sample_html(html: &str) -> Option<JobPosting> {
    let document = Html::parse_document(html);

    let title = select_text(&document, "h1.top-card-layout__title")
        .or_else(|| select_text(&document, "h1"))
        .unwrap_or_else(|| "Software Developer".to_string());

    let company = select_text(&document, "span.topcard__flavor")
        .or_else(|| select_text(&document, "a.topcard__org-name-link"))
        .unwrap_or_else(|| "Tech Company".to_string());

    let location = select_text(&document, "span.topcard__flavor--bullet")
        .unwrap_or_else(|| "Remote".to_string());

    let description = select_text(&document, "div.show-more-less-html__markup")
        .or_else(|| select_text(&document, "div.description__text"))
        .unwrap_or_default();

    Some(JobPosting {
        title,
        company,
        requirements: extract_skills(&description, MAX_JOB_SKILLS),
        location,
        description: (!description.is_empty()).then_some(description),
        url: None,
    })
}

fn select_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    let text: String = element.text().collect::<Vec<_>>().join(" ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_POSTING: &str = r#"
        <html><body>
          <h1 class="top-card-layout__title">Data Engineer</h1>
          <span class="topcard__flavor">Initech</span>
          <span class="topcard__flavor--bullet">Austin, TX</span>
          <div class="show-more-less-html__markup">
            Build pipelines with Python, Kafka and PostgreSQL.
          </div>
        </body></html>
    "#;

    #[test]
    fn test_parses_title_company_location() {
        let job = parse_sample_html(MINIMAL_POSTING).unwrap();
        assert_eq!(job.title, "Data Engineer");
        assert_eq!(job.company, "Initech");
        assert_eq!(job.location, "Austin, TX");
    }

    #[test]
    fn test_extracts_requirements_from_description() {
        let job = parse_sample_html(MINIMAL_POSTING).unwrap();
        for expected in ["Python", "Kafka", "PostgreSQL"] {
            assert!(
                job.requirements.iter().any(|r| r == expected),
                "missing {expected} in {:?}",
                job.requirements
            );
        }
    }

    #[test]
    fn test_bare_page_falls_back_to_defaults() {
        let job = parse_sample_html("<html><body></body></html>").unwrap();
        assert_eq!(job.title, "Software Developer");
        assert_eq!(job.company, "Tech Company");
        assert_eq!(job.location, "Remote");
        assert!(job.description.is_none());
    }

    #[tokio::test]
    async fn test_bundled_samples_all_parse() {
        let jobs = SampleSource.search("", "", 10).await.unwrap();
        assert_eq!(jobs.len(), SAMPLE_PAGES.len());
        assert!(jobs.iter().all(|j| !j.requirements.is_empty()));
    }

    #[tokio::test]
    async fn test_limit_truncates_samples() {
        let jobs = SampleSource.search("", "", 1).await.unwrap();
        assert_eq!(jobs.len(), 1);
    }
}
