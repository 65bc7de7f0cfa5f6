// Resume analysis: tokenization, TF-IDF scoring, keyword diff, verdict banding.
// Handlers are thin; all logic lives in pure functions below them.

pub mod handlers;
pub mod keywords;
pub mod pipeline;
pub mod stop_words;
pub mod tfidf;
pub mod tokenizer;
pub mod verdict;
