use serde::Serialize;

/// Outcome of scoring one resume against one job description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// 0.0 – 100.0, rounded to 2 decimals.
    pub score: f64,
    /// At most 20 distinct lowercase tokens.
    pub missing_keywords: Vec<String>,
}
