//! TF-IDF similarity scoring over a closed two-document corpus `[job, resume]`.
//!
//! Weights: raw term count × smoothed idf, `ln((1 + n) / (1 + df)) + 1`,
//! each document L2-normalized. The score is their cosine, as a percentage
//! rounded to 2 decimals. The corpus is rebuilt on every call.

use std::collections::BTreeMap;

use crate::analysis::tokenizer::vocabulary_tokens;

/// Pluggable similarity backend. Carried in `AppState` as `Arc<dyn SimilarityScorer>`.
pub trait SimilarityScorer: Send + Sync {
    /// Similarity of the resume to the job description, 0.0 – 100.0.
    fn score(&self, job_text: &str, resume_text: &str) -> f64;

    /// Backend label surfaced in responses.
    fn backend(&self) -> &'static str;
}

/// Lexical TF-IDF + cosine scorer. Pure and deterministic.
pub struct TfIdfScorer;

impl SimilarityScorer for TfIdfScorer {
    fn score(&self, job_text: &str, resume_text: &str) -> f64 {
        similarity_percent(job_text, resume_text)
    }

    fn backend(&self) -> &'static str {
        "tfidf"
    }
}

type TermCounts = BTreeMap<String, u32>;

fn term_counts(text: &str) -> TermCounts {
    let mut counts = TermCounts::new();
    for token in vocabulary_tokens(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

/// Cosine similarity in [0, 1] between the two documents' TF-IDF vectors.
/// Zero when either document has no vocabulary left after stop-word removal.
pub fn cosine_similarity(job_text: &str, resume_text: &str) -> f64 {
    let corpus = [term_counts(job_text), term_counts(resume_text)];
    let n_docs = corpus.len() as f64;

    let mut document_frequency: BTreeMap<&str, u32> = BTreeMap::new();
    for counts in &corpus {
        for term in counts.keys() {
            *document_frequency.entry(term.as_str()).or_insert(0) += 1;
        }
    }

    let idf = |term: &str| -> f64 {
        let df = document_frequency.get(term).copied().unwrap_or(0) as f64;
        ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0
    };

    let weights: Vec<BTreeMap<&str, f64>> = corpus
        .iter()
        .map(|counts| {
            counts
                .iter()
                .map(|(term, &count)| (term.as_str(), count as f64 * idf(term.as_str())))
                .collect()
        })
        .collect();

    let norm = |v: &BTreeMap<&str, f64>| v.values().map(|w| w * w).sum::<f64>().sqrt();
    let (job, resume) = (&weights[0], &weights[1]);
    let (job_norm, resume_norm) = (norm(job), norm(resume));
    if job_norm == 0.0 || resume_norm == 0.0 {
        return 0.0;
    }

    let dot: f64 = job
        .iter()
        .filter_map(|(term, w)| resume.get(term).map(|r| w * r))
        .sum();

    (dot / (job_norm * resume_norm)).clamp(0.0, 1.0)
}

/// `cosine_similarity` scaled to a percentage and rounded to 2 decimals.
pub fn similarity_percent(job_text: &str, resume_text: &str) -> f64 {
    round_2dp(cosine_similarity(job_text, resume_text) * 100.0)
}

/// Rounds on the exact decimal value of the float, ties to even (`0.125` → `0.12`).
fn round_2dp(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
