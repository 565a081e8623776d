//! Interview assessment: the question-selection gate plus the
//! QuestionGenerator port. The gate is the only caller of the generator —
//! rejected candidates never trigger a model call.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::matching::fit::FitScorer;
use crate::models::cv::{Cv, CvAnalysis};
use crate::models::interview::InterviewAssessment;
use crate::models::job::JobPosting;

pub mod generator;
pub mod handlers;
pub mod prompts;

/// Capability port for interview-question generation. Failure surfaces to
/// the caller as a service error; the gate never retries.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        cv: &Cv,
        analysis: &CvAnalysis,
        job: &JobPosting,
    ) -> Result<Vec<String>, AppError>;
}

/// Runs the gate for an already-computed analysis: rejected candidates get an
/// empty question list and the rejection reason; everyone else gets the
/// generator's questions, format-validated (non-empty strings only).
pub async fn generate_assessment(
    scorer: &FitScorer,
    generator: &dyn QuestionGenerator,
    cv: &Cv,
    analysis: &CvAnalysis,
    job: &JobPosting,
) -> Result<InterviewAssessment, AppError> {
    let result = scorer.score(&cv.skills, &job.requirements);
    let decision = scorer.decide(&result, job);

    if decision.rejected {
        return Ok(InterviewAssessment {
            fit_score: decision.score,
            questions: Vec::new(),
            rejected: true,
            rejection_reason: decision.rejection_reason,
        });
    }

    let questions = generator.generate(cv, analysis, job).await?;
    validate_questions(&questions)?;

    Ok(InterviewAssessment {
        fit_score: decision.score,
        questions,
        rejected: false,
        rejection_reason: None,
    })
}

/// Format validation only: every question must be a non-empty string.
/// Count/truncation policy belongs to the generator, not the gate.
fn validate_questions(questions: &[String]) -> Result<(), AppError> {
    if questions.iter().any(|q| q.trim().is_empty()) {
        return Err(AppError::Llm(
            "question generator returned an empty question".to_string(),
        ));
    }
    Ok(())
}
