//! Fuzzy Skill Matcher — decides whether a CV skill string satisfies a job
//! requirement string, tolerating superficial variation (case, ".js"-style
//! suffixes, substring containment, configured aliases).
//!
//! Exact case-insensitive equality never misses. Substring containment can
//! produce false positives ("Java" satisfies "JavaScript") — accepted
//! limitation, not fixed here.

/// Alias table relating a canonical skill term to its common variations.
/// Matching is substring-based on both sides, mirroring how the terms appear
/// inside longer requirement phrases.
const DEFAULT_ALIASES: &[(&str, &[&str])] = &[
    ("react", &["react.js", "reactjs"]),
    ("node", &["node.js", "nodejs"]),
    ("vue", &["vue.js", "vuejs"]),
    ("angular", &["angularjs"]),
    ("javascript", &["js"]),
    ("typescript", &["ts"]),
    ("python", &["py"]),
    ("postgresql", &["postgres"]),
    ("mongodb", &["mongo"]),
    ("ci/cd", &["continuous integration", "continuous deployment"]),
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud platform", "google cloud"]),
    ("azure", &["microsoft azure"]),
];

/// Matches requirement strings against candidate CV skills.
/// Constructed once with its alias table and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    aliases: Vec<(String, Vec<String>)>,
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALIASES
                .iter()
                .map(|(main, vars)| {
                    (
                        (*main).to_string(),
                        vars.iter().map(|v| (*v).to_string()).collect(),
                    )
                })
                .collect(),
        )
    }
}

impl SkillMatcher {
    pub fn new(aliases: Vec<(String, Vec<String>)>) -> Self {
        Self { aliases }
    }

    /// Returns the first candidate skill satisfying `requirement`, for reporting.
    pub fn find_match<'a>(&self, requirement: &str, skills: &'a [String]) -> Option<&'a str> {
        let req = normalize(requirement);
        if req.is_empty() {
            return None;
        }
        skills.iter().map(String::as_str).find(|skill| {
            let sk = normalize(skill);
            !sk.is_empty()
                && (req == sk || req.contains(&sk) || sk.contains(&req) || self.related(&req, &sk))
        })
    }

    pub fn is_match(&self, requirement: &str, skills: &[String]) -> bool {
        self.find_match(requirement, skills).is_some()
    }

    /// True when the alias table relates the two normalized terms, e.g.
    /// "react" vs "reactjs" inside longer phrases.
    fn related(&self, a: &str, b: &str) -> bool {
        self.aliases.iter().any(|(main, variations)| {
            (a.contains(main.as_str()) && variations.iter().any(|v| b.contains(v.as_str())))
                || (b.contains(main.as_str()) && variations.iter().any(|v| a.contains(v.as_str())))
        })
    }
}

/// Lowercases, trims, and strips a trailing dotted suffix token ("react.js"
/// → "react"). Dots inside the term body are left alone.
fn normalize(raw: &str) -> String {
    let s = raw.trim().to_lowercase();
    match s.rsplit_once('.') {
        Some((head, tail))
            if !head.is_empty() && !tail.is_empty() && tail.chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            head.to_string()
        }
        _ => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_case_insensitive_equality_always_matches() {
        let m = SkillMatcher::default();
        assert!(m.is_match("Python", &skills(&["python"])));
        assert!(m.is_match("DJANGO", &skills(&["Django"])));
    }

    #[test]
    fn test_dotted_suffix_variant_matches() {
        let m = SkillMatcher::default();
        assert!(m.is_match("React", &skills(&["React.js"])));
        assert!(m.is_match("Node.js", &skills(&["node"])));
    }

    #[test]
    fn test_unrelated_skills_do_not_match() {
        let m = SkillMatcher::default();
        assert!(!m.is_match("AWS", &skills(&["Azure"])));
        assert!(!m.is_match("Rust", &skills(&["Go", "Kafka"])));
    }

    #[test]
    fn test_substring_containment_either_direction() {
        let m = SkillMatcher::default();
        assert!(m.is_match("REST API", &skills(&["REST"])));
        assert!(m.is_match("Docker", &skills(&["Docker Swarm"])));
    }

    #[test]
    fn test_alias_table_relates_variants() {
        let m = SkillMatcher::default();
        assert!(m.is_match("Amazon Web Services", &skills(&["AWS"])));
        assert!(m.is_match("CI/CD", &skills(&["continuous integration pipelines"])));
    }

    #[test]
    fn test_find_match_reports_the_matched_candidate() {
        let m = SkillMatcher::default();
        let s = skills(&["Kafka", "React.js"]);
        assert_eq!(m.find_match("React", &s), Some("React.js"));
    }

    #[test]
    fn test_empty_strings_never_match() {
        let m = SkillMatcher::default();
        assert!(!m.is_match("", &skills(&["Python"])));
        assert!(!m.is_match("Python", &skills(&["", "  "])));
    }

    #[test]
    fn test_cpp_does_not_collapse_into_c() {
        let m = SkillMatcher::default();
        assert!(!m.is_match("C++", &skills(&["React"])));
    }
}
