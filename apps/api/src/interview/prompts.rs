// Prompt constants for the interview-question generator.

/// Comprehensive question prompt. Replace: {job_title}, {company},
/// {matched_skills}, {extracted_skills}, {fit_score}, {requirements}.
pub const QUESTIONS_PROMPT_TEMPLATE: &str = r#"Generate exactly 4 interview questions for a {job_title} position at {company}.

Candidate Profile:
- Matched Skills: {matched_skills}
- All Extracted Skills: {extracted_skills}
- Fit Score: {fit_score}%

Job Requirements: {requirements}

Requirements:
1. Generate exactly 3 technical questions focusing on the matched skills
2. Generate exactly 1 scenario-based question related to real work situations
3. Make questions specific to the role and candidate's background
4. Ensure questions test practical knowledge, not just theory
5. The scenario question should start with "Scenario:"

Format your response as a numbered list:
1. [Technical Question 1]
2. [Technical Question 2]
3. [Technical Question 3]
4. [Scenario Question]

Questions:"#;
