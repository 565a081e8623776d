//! Skill extraction from free text (job descriptions, CV content): a curated
//! technology lexicon matched case-insensitively, plus regex patterns for the
//! common variant spellings (k8s, "amazon web services", …).

use std::sync::LazyLock;

use regex::Regex;

/// Skills recognized in job descriptions, capped per the source volume.
pub const MAX_JOB_SKILLS: usize = 12;
/// Skills recognized in CV content.
pub const MAX_CV_SKILLS: usize = 15;

const LEXICON: &[&str] = &[
    // Programming languages
    "Python", "JavaScript", "TypeScript", "Java", "C++", "C#", "Go", "Rust", "PHP", "Ruby",
    "Swift", "Kotlin",
    // Python frameworks
    "Django", "Flask", "FastAPI", "Tornado", "Pyramid", "Bottle",
    // JavaScript frameworks and libraries
    "React", "Vue", "Angular", "Node.js", "Express", "Next.js", "Nuxt.js",
    // Cloud platforms
    "AWS", "Azure", "GCP", "Google Cloud", "DigitalOcean", "Heroku",
    // Databases
    "PostgreSQL", "MySQL", "MongoDB", "Redis", "Elasticsearch", "SQLite", "DynamoDB", "Cassandra",
    // DevOps and tooling
    "Docker", "Kubernetes", "Jenkins", "GitLab CI", "GitHub Actions", "Terraform", "Ansible",
    // Version control
    "Git", "GitHub", "GitLab", "Bitbucket",
    // APIs and architecture
    "REST API", "GraphQL", "Microservices", "gRPC", "WebSocket",
    // Testing
    "pytest", "Jest", "Selenium", "Cypress", "Unit Testing", "Integration Testing",
    // Machine learning
    "Machine Learning", "TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy", "Jupyter",
    // Other
    "Linux", "Unix", "Nginx", "Apache", "RabbitMQ", "Kafka", "CI/CD",
];

/// Variant spellings that the plain lexicon scan misses.
static VARIANT_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("CI/CD", r"\b(ci/cd|continuous integration|continuous deployment|continuous delivery)\b"),
        ("REST API", r"\b(rest|restful)\b"),
        ("Machine Learning", r"\b(ml|machine learning|artificial intelligence|ai)\b"),
        ("Docker", r"\b(docker|containerization|containers)\b"),
        ("Kubernetes", r"\b(kubernetes|k8s)\b"),
        ("AWS", r"\b(aws|amazon web services)\b"),
        ("Azure", r"\b(azure|microsoft azure)\b"),
        ("GCP", r"\b(gcp|google cloud|google cloud platform)\b"),
    ]
    .into_iter()
    .map(|(skill, pattern)| (skill, Regex::new(pattern).expect("static skill pattern")))
    .collect()
});

/// Scans `text` for known skills, deduplicated and capped at `max` in lexicon
/// order. Matching is plain case-insensitive containment — the lexicon terms
/// are distinctive enough that word-boundary precision is not worth the cost,
/// except for the short variant tokens which go through anchored regexes.
pub fn extract_skills(text: &str, max: usize) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for skill in LEXICON {
        if lower.contains(&skill.to_lowercase()) {
            push_unique(&mut found, skill);
        }
    }

    for (skill, pattern) in VARIANT_PATTERNS.iter() {
        if pattern.is_match(&lower) {
            push_unique(&mut found, skill);
        }
    }

    found.truncate(max);
    found
}

/// Case-insensitive dedup preserving first occurrence. Shared by the lexicon
/// scan and the model-assisted CV extraction.
pub fn push_unique(skills: &mut Vec<String>, candidate: &str) {
    let candidate = candidate.trim();
    if candidate.is_empty() {
        return;
    }
    if !skills.iter().any(|s| s.eq_ignore_ascii_case(candidate)) {
        skills.push(candidate.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_lexicon_skills_from_description() {
        let text = "We need strong Python and Django experience, plus PostgreSQL and Docker.";
        let skills = extract_skills(text, MAX_JOB_SKILLS);
        for expected in ["Python", "Django", "PostgreSQL", "Docker"] {
            assert!(skills.iter().any(|s| s == expected), "missing {expected} in {skills:?}");
        }
    }

    #[test]
    fn test_variant_spellings_map_to_canonical_terms() {
        let skills = extract_skills("Experience with k8s and amazon web services required.", 20);
        assert!(skills.iter().any(|s| s == "Kubernetes"));
        assert!(skills.iter().any(|s| s == "AWS"));
    }

    #[test]
    fn test_results_are_deduplicated() {
        let skills = extract_skills("Docker docker DOCKER containers containerization", 20);
        assert_eq!(skills.iter().filter(|s| *s == "Docker").count(), 1);
    }

    #[test]
    fn test_cap_is_honored() {
        let text = LEXICON.join(" ");
        assert_eq!(extract_skills(&text, MAX_JOB_SKILLS).len(), MAX_JOB_SKILLS);
    }

    #[test]
    fn test_no_skills_in_unrelated_text() {
        assert!(extract_skills("We sell artisanal cheese in Vermont.", 20).is_empty());
    }

    #[test]
    fn test_push_unique_ignores_case_duplicates_and_blanks() {
        let mut skills = vec!["Python".to_string()];
        push_unique(&mut skills, "python");
        push_unique(&mut skills, "  ");
        push_unique(&mut skills, "Rust");
        assert_eq!(skills, vec!["Python".to_string(), "Rust".to_string()]);
    }
}
