use crate::analysis::keywords::missing_keywords;
use crate::analysis::tfidf::SimilarityScorer;
use crate::models::analysis::AnalysisResult;

/// Scores one resume against one job description and diffs their keywords.
/// Both stages read the same two texts independently.
pub fn analyze(
    job_text: &str,
    resume_text: &str,
    scorer: &dyn SimilarityScorer,
) -> AnalysisResult {
    AnalysisResult {
        score: scorer.score(job_text, resume_text),
        missing_keywords: missing_keywords(job_text, resume_text),
    }
}
