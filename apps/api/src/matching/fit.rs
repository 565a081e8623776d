//! Fit Scorer — pure, synchronous scoring of a CV skill set against a job's
//! requirement list, plus the reject/proceed decision.
//!
//! No side effects, no retries, no shared mutable state: safe to call
//! concurrently for independent requests.

use serde::{Deserialize, Serialize};

use crate::matching::fuzzy::SkillMatcher;
use crate::models::job::JobPosting;

/// Score below which a candidate is rejected outright.
pub const DEFAULT_REJECTION_THRESHOLD: u32 = 50;

/// Scoring knobs, built once at startup and passed in — never process-wide state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub rejection_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rejection_threshold: DEFAULT_REJECTION_THRESHOLD,
        }
    }
}

/// Requirement classification for one CV/job pair.
/// Invariant: `matched` and `missing` partition the requirement list — their
/// union is the full list (in order), their intersection is empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    /// round(100 × |matched| / |requirements|), clamped to 0–100.
    pub score: u32,
}

/// Reject/proceed decision derived from a `MatchResult`.
/// Invariant: `rejection_reason` is present iff `rejected`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentDecision {
    pub score: u32,
    pub rejected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rejection_reason: Option<String>,
}

pub struct FitScorer {
    config: ScoringConfig,
    matcher: SkillMatcher,
}

impl FitScorer {
    pub fn new(config: ScoringConfig, matcher: SkillMatcher) -> Self {
        Self { config, matcher }
    }

    /// Classifies every requirement as matched or missing and computes the
    /// fit score. An empty requirement list scores 100 with no entries either
    /// way; an empty skill set is not an error and simply matches nothing.
    pub fn score(&self, skills: &[String], requirements: &[String]) -> MatchResult {
        if requirements.is_empty() {
            return MatchResult {
                matched: Vec::new(),
                missing: Vec::new(),
                score: 100,
            };
        }

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        for req in requirements {
            if self.matcher.is_match(req, skills) {
                matched.push(req.clone());
            } else {
                missing.push(req.clone());
            }
        }

        let score = (100.0 * matched.len() as f64 / requirements.len() as f64).round() as u32;

        MatchResult {
            matched,
            missing,
            score: score.min(100),
        }
    }

    /// Applies the rejection threshold. The rejection message is a
    /// deterministic template referencing job title and company.
    pub fn decide(&self, result: &MatchResult, job: &JobPosting) -> AssessmentDecision {
        let rejected = result.score < self.config.rejection_threshold;
        AssessmentDecision {
            score: result.score,
            rejected,
            rejection_reason: rejected.then(|| rejection_message(job)),
        }
    }

    /// One-line deterministic summary of match quality.
    pub fn summarize(&self, result: &MatchResult) -> String {
        format!(
            "Candidate shows {}% compatibility with the position requirements based on skill analysis.",
            result.score
        )
    }
}

fn rejection_message(job: &JobPosting) -> String {
    format!(
        "Thank you for your interest in the {} position at {}. \
         After careful review of your qualifications, we have decided to move forward \
         with other candidates whose experience more closely aligns with our current needs. \
         We encourage you to apply for future opportunities that match your skillset and \
         wish you the best in your job search.",
        job.title, job.company
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn scorer() -> FitScorer {
        FitScorer::new(ScoringConfig::default(), SkillMatcher::default())
    }

    fn job() -> JobPosting {
        JobPosting {
            title: "Python Developer".to_string(),
            company: "Acme Corp".to_string(),
            requirements: strs(&["Python", "Django", "AWS"]),
            location: "Remote".to_string(),
            description: None,
            url: None,
        }
    }

    #[test]
    fn test_two_of_three_requirements_scores_67() {
        let result = scorer().score(&strs(&["python", "django"]), &strs(&["Python", "Django", "AWS"]));
        assert_eq!(result.matched, strs(&["Python", "Django"]));
        assert_eq!(result.missing, strs(&["AWS"]));
        assert_eq!(result.score, 67);
        assert!(!scorer().decide(&result, &job()).rejected);
    }

    #[test]
    fn test_empty_skills_scores_zero_and_rejects_with_job_details() {
        let s = scorer();
        let result = s.score(&[], &strs(&["Python", "Django", "AWS"]));
        assert_eq!(result.score, 0);
        assert_eq!(result.missing.len(), 3);

        let decision = s.decide(&result, &job());
        assert!(decision.rejected);
        let reason = decision.rejection_reason.expect("reason present when rejected");
        assert!(reason.contains("Python Developer"));
        assert!(reason.contains("Acme Corp"));
    }

    #[test]
    fn test_empty_requirements_scores_100() {
        let result = scorer().score(&strs(&["Python"]), &[]);
        assert_eq!(result.score, 100);
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_matched_and_missing_partition_requirements() {
        let reqs = strs(&["Python", "Kafka", "React", "Terraform"]);
        let result = scorer().score(&strs(&["python", "react.js"]), &reqs);

        let mut union: Vec<String> = result.matched.clone();
        union.extend(result.missing.clone());
        union.sort();
        let mut expected = reqs.clone();
        expected.sort();
        assert_eq!(union, expected);
        assert!(result.matched.iter().all(|r| !result.missing.contains(r)));
    }

    #[test]
    fn test_score_monotonic_as_skills_grow() {
        let s = scorer();
        let reqs = strs(&["Python", "Django", "AWS", "Docker"]);
        let mut skills: Vec<String> = Vec::new();
        let mut last = s.score(&skills, &reqs).score;
        for add in ["python", "docker", "aws", "django"] {
            skills.push(add.to_string());
            let now = s.score(&skills, &reqs).score;
            assert!(now >= last, "score dropped from {last} to {now} after adding {add}");
            last = now;
        }
        assert_eq!(last, 100);
    }

    #[test]
    fn test_rejected_iff_below_threshold() {
        let s = scorer();
        for (matched_skills, expect_rejected) in [
            (strs(&[]), true),
            (strs(&["python"]), true),                // 33 < 50
            (strs(&["python", "django"]), false),     // 67 ≥ 50
            (strs(&["python", "django", "aws"]), false),
        ] {
            let result = s.score(&matched_skills, &strs(&["Python", "Django", "AWS"]));
            let decision = s.decide(&result, &job());
            assert_eq!(decision.rejected, result.score < DEFAULT_REJECTION_THRESHOLD);
            assert_eq!(decision.rejected, expect_rejected);
            assert_eq!(decision.rejection_reason.is_some(), decision.rejected);
        }
    }

    #[test]
    fn test_threshold_is_configurable() {
        let strict = FitScorer::new(
            ScoringConfig {
                rejection_threshold: 80,
            },
            SkillMatcher::default(),
        );
        let result = strict.score(&strs(&["python", "django"]), &strs(&["Python", "Django", "AWS"]));
        assert_eq!(result.score, 67);
        assert!(strict.decide(&result, &job()).rejected);
    }

    #[test]
    fn test_summary_embeds_the_score() {
        let s = scorer();
        let result = s.score(&strs(&["python"]), &strs(&["Python", "AWS"]));
        assert!(s.summarize(&result).contains("50%"));
    }

    #[test]
    fn test_one_of_three_rounds_to_33() {
        let s = scorer();
        // 1/3 rounds to 33, 2/3 rounds to 67 — round-half-up on the f64 value.
        assert_eq!(s.score(&strs(&["go"]), &strs(&["Go", "Rust", "C"])).score, 33);
    }
}
