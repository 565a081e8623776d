//! LLM-backed question generator: one comprehensive prompt, a tolerant output
//! parser (JSON first, then list-style lines), and a role-keyed fallback bank
//! so callers always get a usable question set.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::warn;

use crate::errors::AppError;
use crate::interview::prompts::QUESTIONS_PROMPT_TEMPLATE;
use crate::interview::QuestionGenerator;
use crate::llm_client::LlmClient;
use crate::models::cv::{Cv, CvAnalysis};
use crate::models::job::JobPosting;

/// Every assessment carries exactly this many questions.
const QUESTION_COUNT: usize = 4;
/// Parsed lines shorter than this are prompt debris, not questions.
const MIN_QUESTION_CHARS: usize = 10;

static LIST_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[-•]\s*|\d+\.\s*)").expect("static pattern"));
static QUESTION_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^question\s*\d*:?\s*").expect("static pattern"));

pub struct LlmQuestionGenerator {
    llm: LlmClient,
}

impl LlmQuestionGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn generate(
        &self,
        _cv: &Cv,
        analysis: &CvAnalysis,
        job: &JobPosting,
    ) -> Result<Vec<String>, AppError> {
        let prompt = QUESTIONS_PROMPT_TEMPLATE
            .replace("{job_title}", &job.title)
            .replace("{company}", &job.company)
            .replace("{matched_skills}", &analysis.matched_requirements.join(", "))
            .replace("{extracted_skills}", &analysis.extracted_skills.join(", "))
            .replace("{fit_score}", &analysis.fit_score.to_string())
            .replace("{requirements}", &job.requirements.join(", "));

        let mut questions = match self.llm.call(&prompt, 800, 0.3).await {
            Ok(text) => parse_questions(&text),
            Err(e) => {
                warn!("Question generation failed ({e}), using fallback bank");
                Vec::new()
            }
        };

        if questions.len() < QUESTION_COUNT {
            for q in fallback_questions(&job.title, &analysis.matched_requirements) {
                if !questions.contains(&q) {
                    questions.push(q);
                }
            }
        }

        questions.truncate(QUESTION_COUNT);
        Ok(questions)
    }
}

/// Parses questions from model output. Tries an embedded JSON object with a
/// `questions` array first, then falls back to line-by-line list parsing.
pub fn parse_questions(text: &str) -> Vec<String> {
    if let Some(questions) = parse_json_questions(text) {
        return questions.into_iter().take(QUESTION_COUNT).collect();
    }

    let mut questions = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        let is_candidate = LIST_PREFIX.is_match(line)
            || line.contains('?')
            || line.to_lowercase().contains("question");
        if line.is_empty() || !is_candidate {
            continue;
        }

        let cleaned = LIST_PREFIX.replace(line, "");
        let cleaned = QUESTION_LABEL.replace(&cleaned, "");
        let cleaned = cleaned.trim();
        if cleaned.len() > MIN_QUESTION_CHARS {
            questions.push(cleaned.to_string());
        }
    }

    questions.truncate(QUESTION_COUNT);
    questions
}

fn parse_json_questions(text: &str) -> Option<Vec<String>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    let value: serde_json::Value = serde_json::from_str(&text[start..=end]).ok()?;
    let questions = value.get("questions")?.as_array()?;
    Some(
        questions
            .iter()
            .filter_map(|q| q.as_str())
            .map(str::to_string)
            .collect(),
    )
}

/// Canned questions keyed off the job title, customized by matched skills,
/// always ending in one scenario question.
pub fn fallback_questions(job_title: &str, matched_skills: &[String]) -> Vec<String> {
    let python = [
        "What are Python decorators and how do you use them in practice?",
        "Explain the difference between list comprehensions and generator expressions.",
        "How do you handle exceptions in Python and what are best practices?",
    ];
    let fullstack = [
        "How do you optimize database queries in web applications?",
        "Explain the difference between SQL and NoSQL databases.",
        "What are the key principles of RESTful API design?",
    ];
    let devops = [
        "How do you implement blue-green deployment strategies?",
        "Explain Infrastructure as Code and its benefits.",
        "What are the key metrics you monitor in production systems?",
    ];
    let frontend = [
        "Explain React hooks and when you would use useState vs useEffect.",
        "How do you optimize frontend performance?",
        "What are the differences between server-side and client-side rendering?",
    ];

    let job_lower = job_title.to_lowercase();
    let bank = if ["python", "backend", "django", "flask"]
        .iter()
        .any(|t| job_lower.contains(t))
    {
        python
    } else if ["fullstack", "full stack", "full-stack"]
        .iter()
        .any(|t| job_lower.contains(t))
    {
        fullstack
    } else if ["devops", "sre", "infrastructure"]
        .iter()
        .any(|t| job_lower.contains(t))
    {
        devops
    } else if ["frontend", "react", "vue", "angular"]
        .iter()
        .any(|t| job_lower.contains(t))
    {
        frontend
    } else {
        python
    };

    let mut questions: Vec<String> = bank.iter().map(|q| q.to_string()).collect();

    let has = |skill: &str| matched_skills.iter().any(|s| s.eq_ignore_ascii_case(skill));
    if has("Django") {
        questions[0] =
            "Explain Django's MTV architecture and how it differs from MVC.".to_string();
    } else if has("React") {
        questions[0] =
            "What are React hooks and how do they improve functional components?".to_string();
    } else if has("Docker") {
        questions[1] =
            "How would you optimize a Docker image for production deployment?".to_string();
    }

    questions.push(
        "Scenario: Your application is experiencing high memory usage in production. \
         Walk me through your debugging process."
            .to_string(),
    );
    questions
}
