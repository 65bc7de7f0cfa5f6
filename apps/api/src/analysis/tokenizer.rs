//! Tokenizer policy for similarity scoring.
//!
//! Lowercase, then every maximal run of two or more word characters is a token.
//! Single-character tokens and stop words never reach the vocabulary.
//! The keyword differ does NOT use this: it splits on whitespace only.

use std::sync::OnceLock;

use regex::Regex;

use crate::analysis::stop_words::is_stop_word;

const TOKEN_PATTERN: &str = r"\b\w\w+\b";

fn token_regex() -> &'static Regex {
    static TOKEN_RE: OnceLock<Regex> = OnceLock::new();
    TOKEN_RE.get_or_init(|| Regex::new(TOKEN_PATTERN).expect("TOKEN_PATTERN is a valid regex"))
}

/// Vocabulary tokens of `text`, in order of appearance, repeats included.
pub fn vocabulary_tokens(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    token_regex()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}
