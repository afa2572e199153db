// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Expression evaluation and scoring against search documents.
//!
//! Matching and scoring are separate walks. Matching decides membership with
//! the full boolean semantics. Scoring only looks at positive leaves (those
//! under an even number of `Not`s) because a negated leaf that "matched" is
//! exactly what excludes a document.

use crate::build::{FieldTerms, SearchDocument};
use crate::config::ScoringConfig;
use crate::query::{Expr, PhraseTerm};
use crate::scoring::field_score;
use crate::types::FieldKind;
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Leaves of the query that matched one field of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMatches<'q> {
    pub name: Vec<&'q Expr>,
    pub description: Vec<&'q Expr>,
}

impl<'q> FieldMatches<'q> {
    pub fn get(&self, field: FieldKind) -> &[&'q Expr] {
        match field {
            FieldKind::Name => &self.name,
            FieldKind::Description => &self.description,
        }
    }

    fn push(&mut self, field: FieldKind, leaf: &'q Expr) {
        match field {
            FieldKind::Name => self.name.push(leaf),
            FieldKind::Description => self.description.push(leaf),
        }
    }
}

/// A document that satisfies the query, with its score.
#[derive(Debug, Clone)]
pub struct DocumentMatch<'q> {
    pub doc: Arc<SearchDocument>,
    pub score: f64,
    pub matched: FieldMatches<'q>,
}

/// Number of times a leaf occurs in one field.
///
/// A phrase occurrence is a start position where every phrase term sits at
/// `start + offset`. Phrases never span the name/description boundary
/// because each field has its own positions.
pub fn occurrences(leaf: &Expr, field: &FieldTerms) -> usize {
    match leaf {
        Expr::Term(leaf) => field.positions(&leaf.term).len(),
        Expr::Phrase(terms) => phrase_occurrences(terms, field),
        _ => 0,
    }
}

fn phrase_occurrences(terms: &[PhraseTerm], field: &FieldTerms) -> usize {
    let Some((first, rest)) = terms.split_first() else {
        return 0;
    };
    field
        .positions(&first.term)
        .iter()
        .filter(|&&start| {
            rest.iter()
                .all(|t| field.occurs_at(&t.term, start + t.offset - first.offset))
        })
        .count()
}

/// Boolean membership of a document.
pub fn evaluate(expr: &Expr, doc: &SearchDocument) -> bool {
    match expr {
        Expr::Term(leaf) => doc.contains_term(&leaf.term),
        Expr::Phrase(_) => FieldKind::ALL
            .iter()
            .any(|&field| occurrences(expr, doc.field(field)) > 0),
        Expr::And(children) => children.iter().all(|c| evaluate(c, doc)),
        Expr::Or(children) => children.iter().any(|c| evaluate(c, doc)),
        Expr::Not(inner) => !evaluate(inner, doc),
    }
}

/// Evaluate and score one document.
///
/// Score = Σ over positive leaves, in tree order, of
/// `occurrences × weight(field)` for both fields.
pub fn match_document<'q>(
    expr: &'q Expr,
    doc: &Arc<SearchDocument>,
    scoring: &ScoringConfig,
) -> Option<DocumentMatch<'q>> {
    if !evaluate(expr, doc) {
        return None;
    }

    let mut score = 0.0;
    let mut matched = FieldMatches::default();
    for leaf in expr.positive_leaves() {
        for field in FieldKind::ALL {
            let count = occurrences(leaf, doc.field(field));
            if count > 0 {
                score += field_score(count, field, scoring);
                matched.push(field, leaf);
            }
        }
    }

    Some(DocumentMatch {
        doc: Arc::clone(doc),
        score,
        matched,
    })
}

/// Scan a snapshot of documents. Output keeps the snapshot order, whatever
/// the thread schedule.
pub fn scan<'q>(
    expr: &'q Expr,
    docs: &[Arc<SearchDocument>],
    scoring: &ScoringConfig,
) -> Vec<DocumentMatch<'q>> {
    #[cfg(feature = "parallel")]
    {
        docs.par_iter()
            .filter_map(|doc| match_document(expr, doc, scoring))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        docs.iter()
            .filter_map(|doc| match_document(expr, doc, scoring))
            .collect()
    }
}
