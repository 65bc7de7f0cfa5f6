use std::sync::Arc;

use crate::analysis::tfidf::SimilarityScorer;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup; every request gets its own clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable similarity scorer. Default: TfIdfScorer.
    pub scorer: Arc<dyn SimilarityScorer>,
}
