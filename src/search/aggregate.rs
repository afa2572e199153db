// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! From raw matches to one ranked, paginated list.
//!
//! ```text
//! matches (all entity types)
//!   → structural filter (owner, schema)
//!   → parent expansion (column → table, damped)
//!   → dedup on (entity_type, id), direct wins
//!   → total order
//!   → page slice
//! ```
//!
//! `total_count` is the length of the list after dedup, so walking every page
//! visits each result exactly once.

use super::dedup::ResultMerger;
use super::matcher::{DocumentMatch, FieldMatches};
use crate::build::SearchDocument;
use crate::config::ScoringConfig;
use crate::scoring::{expanded_score, Ranked};
use crate::types::{AncestorContext, DocKey, EntityType, OwnerId, SchemaId, TableId};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// How a candidate got into the result list.
#[derive(Debug, Clone)]
pub enum Origin<'q> {
    /// The document satisfied the query itself.
    Direct(FieldMatches<'q>),
    /// A table synthesized from its matching columns. Carries no highlights.
    Expanded,
}

#[derive(Debug, Clone)]
pub struct Candidate<'q> {
    pub doc: Arc<SearchDocument>,
    pub score: f64,
    pub origin: Origin<'q>,
}

impl<'q> Candidate<'q> {
    pub fn key(&self) -> DocKey {
        self.doc.key()
    }

    pub fn is_direct(&self) -> bool {
        matches!(self.origin, Origin::Direct(_))
    }

    /// Matched leaves for highlighting; `None` for expansions.
    pub fn matched(&self) -> Option<&FieldMatches<'q>> {
        match &self.origin {
            Origin::Direct(matched) => Some(matched),
            Origin::Expanded => None,
        }
    }
}

impl<'q> From<DocumentMatch<'q>> for Candidate<'q> {
    fn from(m: DocumentMatch<'q>) -> Self {
        Candidate {
            doc: m.doc,
            score: m.score,
            origin: Origin::Direct(m.matched),
        }
    }
}

impl Ranked for Candidate<'_> {
    fn score(&self) -> f64 {
        self.score
    }

    fn name(&self) -> &str {
        &self.doc.name
    }

    fn key(&self) -> DocKey {
        self.doc.key()
    }
}

/// Exact-match structural filters. `None` admits everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filters {
    pub owner: Option<OwnerId>,
    pub schema: Option<SchemaId>,
}

impl Filters {
    /// Schemas carry no owner, so any owner filter rejects them.
    pub fn admits(&self, context: &AncestorContext) -> bool {
        let owner_ok = self.owner.map_or(true, |id| context.owner_id == Some(id));
        let schema_ok = self.schema.map_or(true, |id| context.schema_id == id);
        owner_ok && schema_ok
    }
}

/// Synthesize parent tables for matching columns.
///
/// One candidate per table, scored from its best column. Tables that are
/// missing from `tables` (deleted since the snapshot) are skipped.
pub fn expand_parents<'q>(
    direct: &[Candidate<'q>],
    tables: &HashMap<TableId, Arc<SearchDocument>>,
    scoring: &ScoringConfig,
) -> Vec<Candidate<'q>> {
    // BTreeMap so expansions come out in table id order.
    let mut child_scores: BTreeMap<TableId, Vec<f64>> = BTreeMap::new();
    for candidate in direct {
        if candidate.doc.entity_type != EntityType::Column {
            continue;
        }
        if let Some(table_id) = candidate.doc.context.table_id {
            child_scores.entry(table_id).or_default().push(candidate.score);
        }
    }

    child_scores
        .into_iter()
        .filter_map(|(table_id, scores)| {
            let doc = tables.get(&table_id)?;
            let score = expanded_score(scores, scoring)?;
            Some(Candidate {
                doc: Arc::clone(doc),
                score,
                origin: Origin::Expanded,
            })
        })
        .collect()
}

/// Filter, expand, dedup and sort. The result is the complete ordered list
/// that pages are cut from.
pub fn aggregate<'q>(
    matches: Vec<DocumentMatch<'q>>,
    tables: &HashMap<TableId, Arc<SearchDocument>>,
    filters: Filters,
    expand: bool,
    scoring: &ScoringConfig,
) -> Vec<Candidate<'q>> {
    let direct: Vec<Candidate<'q>> = matches
        .into_iter()
        .filter(|m| filters.admits(&m.doc.context))
        .map(Candidate::from)
        .collect();

    let expanded = if expand {
        expand_parents(&direct, tables, scoring)
            .into_iter()
            .filter(|c| filters.admits(&c.doc.context))
            .collect()
    } else {
        Vec::new()
    };

    tracing::debug!(
        direct = direct.len(),
        expanded = expanded.len(),
        "aggregating candidates"
    );

    let mut merger = ResultMerger::with_capacity(direct.len() + expanded.len());
    merger.merge_all(direct);
    merger.merge_all(expanded);
    merger.into_sorted()
}

/// One page of an ordered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    pub total_count: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

/// Slice bounds of 1-based `page` over `total_count` items.
///
/// A page past the end is empty (`start == end`) but still reports the real
/// totals. `page` and `page_size` must already be validated as `>= 1`.
pub fn page_bounds(total_count: usize, page: usize, page_size: usize) -> PageBounds {
    let total_pages = total_count.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(total_count);
    let end = start.saturating_add(page_size).min(total_count);
    PageBounds {
        total_count,
        total_pages,
        start,
        end,
    }
}
