// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighting matched terms in result text.
//!
//! The field text is re-analyzed with the same chain the document builder
//! uses, so every analyzed word carries its byte span in the original text.
//! Matched leaves are located on those words and wrapped in the configured
//! markers; the stored text is never touched.
//!
//! Two modes:
//!
//! - [`highlight_full`] marks the whole text (used for names, which are
//!   short).
//! - [`highlight_fragments`] cuts windows of at most `max_words` words around
//!   the marks, keeps at most `max_fragments` of them and joins them with the
//!   fragment delimiter (used for descriptions).

use crate::analysis::{analyze, AnalyzedWord};
use crate::config::HighlightConfig;
use crate::query::Expr;

/// Inclusive range of word indices to wrap in one marker pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    first: usize,
    last: usize,
}

/// Word index of the word at `position`, if any.
fn word_at(words: &[AnalyzedWord], position: u32) -> Option<usize> {
    words.binary_search_by_key(&position, |w| w.position).ok()
}

fn has_term(word: &AnalyzedWord, term: &str) -> bool {
    word.term.as_deref() == Some(term)
}

/// Locate every occurrence of the leaves, merged into non-overlapping spans.
fn find_spans(words: &[AnalyzedWord], leaves: &[&Expr]) -> Vec<Span> {
    let mut spans = Vec::new();
    for leaf in leaves {
        match leaf {
            Expr::Term(leaf) => spans.extend(
                words
                    .iter()
                    .enumerate()
                    .filter(|(_, w)| has_term(w, &leaf.term))
                    .map(|(i, _)| Span { first: i, last: i }),
            ),
            Expr::Phrase(terms) => {
                let Some((head, rest)) = terms.split_first() else {
                    continue;
                };
                for (i, word) in words.iter().enumerate() {
                    if !has_term(word, &head.term) {
                        continue;
                    }
                    let mut last = i;
                    let complete = rest.iter().all(|t| {
                        match word_at(words, word.position + t.offset - head.offset) {
                            Some(j) if has_term(&words[j], &t.term) => {
                                last = last.max(j);
                                true
                            }
                            _ => false,
                        }
                    });
                    if complete {
                        spans.push(Span { first: i, last });
                    }
                }
            }
            _ => {}
        }
    }

    spans.sort_by_key(|s| (s.first, s.last));
    let mut merged: Vec<Span> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(prev) if span.first <= prev.last => prev.last = prev.last.max(span.last),
            _ => merged.push(span),
        }
    }
    merged
}

/// Byte range covered by words `first..=last`. A window touching either end
/// of the text keeps the punctuation outside the outermost words.
fn byte_range(text: &str, words: &[AnalyzedWord], first: usize, last: usize) -> (usize, usize) {
    let start = if first == 0 { 0 } else { words[first].start };
    let end = if last + 1 == words.len() {
        text.len()
    } else {
        words[last].end
    };
    (start, end)
}

/// Render words `first..=last` of `text`, wrapping the given spans.
fn render(
    text: &str,
    words: &[AnalyzedWord],
    first: usize,
    last: usize,
    spans: &[Span],
    config: &HighlightConfig,
) -> String {
    let (mut cursor, end) = byte_range(text, words, first, last);
    let mut out = String::with_capacity(end - cursor + spans.len() * 16);
    for span in spans {
        let (start, stop) = (words[span.first].start, words[span.last].end);
        out.push_str(&text[cursor..start]);
        out.push_str(&config.start_sel);
        out.push_str(&text[start..stop]);
        out.push_str(&config.stop_sel);
        cursor = stop;
    }
    out.push_str(&text[cursor..end]);
    out
}

/// The whole text with every matched span marked.
pub fn highlight_full(text: &str, leaves: &[&Expr], config: &HighlightConfig) -> String {
    let words = analyze(text);
    let spans = find_spans(&words, leaves);
    if spans.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + spans.len() * 16);
    let mut cursor = 0;
    for span in &spans {
        let (start, stop) = (words[span.first].start, words[span.last].end);
        out.push_str(&text[cursor..start]);
        out.push_str(&config.start_sel);
        out.push_str(&text[start..stop]);
        out.push_str(&config.stop_sel);
        cursor = stop;
    }
    out.push_str(&text[cursor..]);
    out
}

/// Up to `max_fragments` windows of at most `max_words` words around the
/// matched spans, joined by the fragment delimiter.
///
/// Text without a match yields its first `max_words` words, or the whole
/// text when it is no longer than that.
pub fn highlight_fragments(text: &str, leaves: &[&Expr], config: &HighlightConfig) -> String {
    let words = analyze(text);
    if words.is_empty() {
        return text.to_string();
    }
    let max_words = config.max_words.max(1);
    let spans = find_spans(&words, leaves);

    if spans.is_empty() {
        if words.len() <= max_words {
            return text.to_string();
        }
        let (start, end) = byte_range(text, &words, 0, max_words - 1);
        return text[start..end].to_string();
    }

    let mut fragments = Vec::new();
    let mut next_span = 0;
    let mut floor = 0;
    while next_span < spans.len() && fragments.len() < config.max_fragments {
        let span = spans[next_span];
        let (mut first, mut last) = window(span, words.len(), max_words);
        first = first.max(floor);

        // Take every span that starts inside the window, widening it when a
        // span runs past the end.
        let mut taken = next_span;
        while taken < spans.len() && spans[taken].first <= last {
            last = last.max(spans[taken].last);
            taken += 1;
        }

        fragments.push(render(
            text,
            &words,
            first,
            last,
            &spans[next_span..taken],
            config,
        ));
        next_span = taken;
        floor = last + 1;
    }

    fragments.join(&config.fragment_delimiter)
}

/// A window of `max_words` words roughly centred on `span`, clamped to the
/// text.
fn window(span: Span, word_count: usize, max_words: usize) -> (usize, usize) {
    let len = span.last - span.first + 1;
    if len >= max_words {
        return (span.first, span.last);
    }
    let before = (max_words - len) / 2;
    let mut first = span.first.saturating_sub(before);
    let last = (first + max_words - 1).min(word_count - 1);
    if last + 1 - first < max_words {
        first = (last + 1).saturating_sub(max_words);
    }
    (first, last)
}
