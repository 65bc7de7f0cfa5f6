use serde::Serialize;

/// Qualitative band for a similarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Strong,
    Moderate,
    Low,
}

impl Verdict {
    /// `> 75` strong, `(50, 75]` moderate, `<= 50` low.
    pub fn from_score(score: f64) -> Self {
        if score > 75.0 {
            Verdict::Strong
        } else if score > 50.0 {
            Verdict::Moderate
        } else {
            Verdict::Low
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Verdict::Strong => {
                "Great match! Your resume is well aligned with the job description."
            }
            Verdict::Moderate => "Decent match. You can improve your resume.",
            Verdict::Low => {
                "Low match. Consider revising your resume to better align with the job description."
            }
        }
    }
}
