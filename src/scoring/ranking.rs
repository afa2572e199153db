// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! The order is total, so two runs over the same corpus always agree and
//! pagination never shows an item twice or skips one.

use crate::types::DocKey;
use std::cmp::Ordering;

/// Anything that can be placed in the result order.
pub trait Ranked {
    fn score(&self) -> f64;
    fn name(&self) -> &str;
    fn key(&self) -> DocKey;
}

/// Compare two results for ranking.
///
/// Sort order:
/// 1. **Score** - descending
/// 2. **Name** - case-insensitive, ascending
/// 3. **Entity type** - by type name (`column` < `schema` < `table`)
/// 4. **Id** - final tiebreaker
pub fn compare_results<R: Ranked + ?Sized>(a: &R, b: &R) -> Ordering {
    b.score()
        .total_cmp(&a.score())
        .then_with(|| compare_names(a.name(), b.name()))
        .then_with(|| a.key().entity_type.cmp(&b.key().entity_type))
        .then_with(|| a.key().id.cmp(&b.key().id))
}

/// Case-insensitive name comparison without allocating.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
