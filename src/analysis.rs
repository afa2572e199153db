// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text analysis shared by documents and queries.
//!
//! Both sides must normalize identically or nothing matches, so there is
//! exactly one analyzer chain:
//!
//! ```text
//! SimpleTokenizer → LowerCaser → AsciiFoldingFilter → Stemmer(English)
//! ```
//!
//! "User_Accounts" becomes `user` (position 0) and `account` (position 1).
//! Stop words are recognised on the lower-cased surface word, not the stem.
//! They keep their position but carry no term, so phrase offsets and
//! highlight spans still line up with the original text.

use std::collections::HashSet;
use std::sync::LazyLock;
use tantivy::tokenizer::{
    AsciiFoldingFilter, Language, LowerCaser, SimpleTokenizer, Stemmer, TextAnalyzer,
    TokenStream,
};

/// English stop words (the Snowball list, which is also what the Postgres
/// `english` configuration drops).
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "did", "do", "does", "doing", "don", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "s", "same", "she",
    "should", "so", "some", "such", "t", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "you", "your", "yours", "yourself",
    "yourselves",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Check if a lower-cased surface word is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// One word of analyzed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedWord {
    /// Word position within the field, counting stop words.
    pub position: u32,
    /// Byte span of the surface word in the source text.
    pub start: usize,
    pub end: usize,
    /// Normalized term, or `None` for a stop word.
    pub term: Option<String>,
}

fn analyzer() -> TextAnalyzer {
    TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(AsciiFoldingFilter)
        .filter(Stemmer::new(Language::English))
        .build()
}

/// Run the analyzer chain over `text`, keeping every word.
pub fn analyze(text: &str) -> Vec<AnalyzedWord> {
    let mut analyzer = analyzer();
    let mut stream = analyzer.token_stream(text);
    let mut words = Vec::new();

    while let Some(token) = stream.next() {
        let surface = text[token.offset_from..token.offset_to].to_lowercase();
        let term = if is_stop_word(&surface) || token.text.is_empty() {
            None
        } else {
            Some(token.text.clone())
        };
        words.push(AnalyzedWord {
            position: token.position as u32,
            start: token.offset_from,
            end: token.offset_to,
            term,
        });
    }

    words
}

/// Normalized terms of `text` with their positions, stop words skipped.
pub fn terms(text: &str) -> Vec<(u32, String)> {
    analyze(text)
        .into_iter()
        .filter_map(|word| word.term.map(|term| (word.position, term)))
        .collect()
}
