// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Type-safe result deduplication.
//!
//! An entity should appear at most once in search results. Parent expansion
//! makes that easy to get wrong: a table can match directly *and* be pulled
//! in by one of its columns. `ResultMerger` keys on [`DocKey`] alone, so the
//! same numeric id under two entity types stays two results, and one entity
//! never becomes two.
//!
//! **Invariant**: each `(entity_type, id)` appears at most once in the
//! merged output, and a direct match is never replaced by an expansion.

use super::aggregate::Candidate;
use crate::scoring::compare_results;
use crate::types::DocKey;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Merges candidates, keeping the best per [`DocKey`].
///
/// # Deduplication Strategy
///
/// When an entity shows up more than once:
/// 1. A **direct** match beats an **expanded** one, whatever the scores
/// 2. Otherwise the one that ranks first by `compare_results()` stays
/// 3. On a full tie the first occurrence stays
#[derive(Default)]
pub struct ResultMerger<'q> {
    map: HashMap<DocKey, Candidate<'q>>,
}

impl<'q> ResultMerger<'q> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Merge a single candidate.
    pub fn merge(&mut self, candidate: Candidate<'q>) {
        match self.map.get_mut(&candidate.key()) {
            Some(existing) => {
                if Self::beats(&candidate, existing) {
                    *existing = candidate;
                }
            }
            None => {
                self.map.insert(candidate.key(), candidate);
            }
        }
    }

    fn beats(challenger: &Candidate<'q>, existing: &Candidate<'q>) -> bool {
        match (challenger.is_direct(), existing.is_direct()) {
            (true, false) => true,
            (false, true) => false,
            _ => compare_results(challenger, existing) == Ordering::Less,
        }
    }

    pub fn merge_all(&mut self, candidates: impl IntoIterator<Item = Candidate<'q>>) {
        for candidate in candidates {
            self.merge(candidate);
        }
    }

    /// All merged candidates in rank order.
    pub fn into_sorted(self) -> Vec<Candidate<'q>> {
        let mut results: Vec<_> = self.map.into_values().collect();
        results.sort_by(|a, b| compare_results(a, b));
        results
    }
}
