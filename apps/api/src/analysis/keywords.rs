use std::collections::HashSet;

/// Maximum number of missing keywords reported per analysis.
pub const MAX_MISSING_KEYWORDS: usize = 20;

/// Lowercased whitespace tokens of the job text that never appear as a
/// whitespace token of the resume. Deduplicated, capped at `MAX_MISSING_KEYWORDS`,
/// emitted in first-seen order. Punctuation is kept: `"sql,"` and `"sql"` differ.
pub fn missing_keywords(job_text: &str, resume_text: &str) -> Vec<String> {
    let resume_lower = resume_text.to_lowercase();
    let resume_tokens: HashSet<&str> = resume_lower.split_whitespace().collect();

    let job_lower = job_text.to_lowercase();
    let mut seen = HashSet::new();

    job_lower
        .split_whitespace()
        .filter(|token| !resume_tokens.contains(token))
        .filter(|token| seen.insert(*token))
        .take(MAX_MISSING_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Display form: `", "`-joined.
pub fn join_keywords(keywords: &[String]) -> String {
    keywords.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_job_tokens_absent_from_resume() {
        let missing = missing_keywords("Python SQL AWS", "Python Java");
        let set: HashSet<&str> = missing.iter().map(String::as_str).collect();
        assert_eq!(set, HashSet::from(["sql", "aws"]));
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        assert!(missing_keywords("KUBERNETES Docker", "kubernetes docker").is_empty());
    }

    #[test]
    fn test_punctuation_makes_tokens_distinct() {
        assert_eq!(missing_keywords("SQL, AWS", "sql aws,"), vec!["sql,", "aws"]);
    }

    #[test]
    fn test_duplicates_reported_once() {
        assert_eq!(missing_keywords("rust Rust RUST go", "go"), vec!["rust"]);
    }

    #[test]
    fn test_first_seen_order() {
        assert_eq!(
            missing_keywords("terraform python ansible python", ""),
            vec!["terraform", "python", "ansible"]
        );
    }

    #[test]
    fn test_empty_resume_reports_every_distinct_job_token() {
        let missing = missing_keywords("Python SQL AWS sql", "");
        assert_eq!(missing, vec!["python", "sql", "aws"]);
    }

    #[test]
    fn test_capped_at_twenty_without_duplicates() {
        let job: String = (0..50)
            .map(|i| format!("skill{i} skill{i}"))
            .collect::<Vec<_>>()
            .join(" ");
        let missing = missing_keywords(&job, "skill0");
        assert_eq!(missing.len(), MAX_MISSING_KEYWORDS);
        let unique: HashSet<&String> = missing.iter().collect();
        assert_eq!(unique.len(), missing.len());
        assert!(!missing.contains(&"skill0".to_string()));
    }

    #[test]
    fn test_stop_words_are_not_filtered() {
        assert_eq!(missing_keywords("the python", "python"), vec!["the"]);
    }

    #[test]
    fn test_empty_job_text_reports_nothing() {
        assert!(missing_keywords("", "Python").is_empty());
    }

    #[test]
    fn test_join_keywords_comma_space() {
        let keywords = vec!["sql".to_string(), "aws".to_string()];
        assert_eq!(join_keywords(&keywords), "sql, aws");
        assert_eq!(join_keywords(&[]), "");
    }
}
