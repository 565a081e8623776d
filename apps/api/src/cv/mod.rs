//! CV Extractor: turns uploaded document bytes into text plus a deduplicated
//! skill set. PDF bytes go through `pdf-extract`; anything else is treated as
//! UTF-8 text. Skill extraction is lexicon-first with a best-effort
//! model-assisted pass that silently degrades on failure.

use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::matching::skills::{extract_skills, push_unique, MAX_CV_SKILLS};

pub mod handlers;

/// Model-assisted extraction only ever sees this much of the CV.
const SKILL_PROMPT_CONTENT_CHARS: usize = 2000;

const SKILL_EXTRACTION_PROMPT: &str = r#"Extract technical skills from this CV content. Return only the skills as a comma-separated list.
Focus on programming languages, frameworks, tools, and technologies.

CV Content:
{cv_content}

Skills:"#;

#[derive(Debug, Clone)]
pub struct ExtractedCv {
    pub content: String,
    pub skills: Vec<String>,
}

pub struct CvExtractor {
    llm: LlmClient,
}

impl CvExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// Extracts text and skills from uploaded bytes. The declared content
    /// type wins; otherwise the PDF magic header decides.
    pub async fn extract(
        &self,
        bytes: &[u8],
        content_type: Option<&str>,
    ) -> Result<ExtractedCv, AppError> {
        let is_pdf = content_type == Some("application/pdf") || bytes.starts_with(b"%PDF");

        let content = if is_pdf {
            pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| AppError::Validation(format!("Error extracting text from PDF: {e}")))?
        } else {
            String::from_utf8(bytes.to_vec())
                .map_err(|_| AppError::Validation("CV text is not valid UTF-8".to_string()))?
        };

        if content.trim().is_empty() {
            return Err(AppError::Validation("CV content is empty".to_string()));
        }

        let skills = self.extract_cv_skills(&content).await;

        Ok(ExtractedCv { content, skills })
    }

    /// Lexicon scan first, then a model pass for skills the lexicon misses.
    /// Model failure only loses the supplemental skills, never the upload.
    async fn extract_cv_skills(&self, content: &str) -> Vec<String> {
        let mut skills = extract_skills(content, MAX_CV_SKILLS);

        let excerpt: String = content.chars().take(SKILL_PROMPT_CONTENT_CHARS).collect();
        let prompt = SKILL_EXTRACTION_PROMPT.replace("{cv_content}", &excerpt);

        match self.llm.call(&prompt, 200, 0.1).await {
            Ok(response) => {
                for candidate in parse_skill_list(&response) {
                    push_unique(&mut skills, &candidate);
                }
            }
            Err(e) => warn!("Model-assisted skill extraction failed: {e}"),
        }

        skills.truncate(MAX_CV_SKILLS);
        skills
    }
}

/// Parses a comma-separated skill list, dropping entries too short or too
/// long to be plausible skill names.
fn parse_skill_list(response: &str) -> Vec<String> {
    response
        .split(',')
        .map(str::trim)
        .filter(|s| s.len() > 2 && s.len() < 30)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skill_list_splits_and_trims() {
        let skills = parse_skill_list("Python, Django , Kubernetes");
        assert_eq!(skills, vec!["Python", "Django", "Kubernetes"]);
    }

    #[test]
    fn test_parse_skill_list_drops_implausible_entries() {
        let skills = parse_skill_list("Go, C, Python, a sentence that is far too long to be a real skill name");
        assert_eq!(skills, vec!["Python"]);
    }

    #[test]
    fn test_parse_skill_list_empty_response() {
        assert!(parse_skill_list("").is_empty());
        assert!(parse_skill_list(" , , ").is_empty());
    }
}
