// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the result pipeline.
//!
//! Debug-mode assertions on the properties pagination depends on. They are
//! free in release builds (`debug_assert!`) and fail loudly in tests.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract       | Property                                               |
//! |----------------|--------------------------------------------------------|
//! | `check_ranked` | ranked list is in total order, one entry per DocKey    |
//! | `check_page`   | a page never holds more than `page_size` items         |
//! | `check_entity` | a catalog source returns the entity it was asked for   |
//!
//! If the ranked list were not totally ordered, two identical queries could
//! page differently and an item could show up on two pages.

use crate::catalog::Entity;
use crate::scoring::{compare_results, Ranked, DESCRIPTION_WEIGHT, NAME_WEIGHT, PARENT_DAMPING};
use crate::types::EntityKind;
use std::cmp::Ordering;
use std::collections::HashSet;

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Static assertion that the default weights and damping are sane.
/// If this fails, the crate won't build.
const _: () = {
    // name dominance: one name hit outweighs one description hit
    assert!(NAME_WEIGHT > DESCRIPTION_WEIGHT);
    assert!(DESCRIPTION_WEIGHT > 0.0);

    // an expanded parent never outranks the column it came from
    assert!(PARENT_DAMPING > 0.0);
    assert!(PARENT_DAMPING <= 1.0);
};

// ============================================================================
// RESULT CONTRACTS
// ============================================================================

/// Check that results are strictly increasing under `compare_results` and
/// unique per `(entity_type, id)`.
///
/// # Panics (debug builds only)
/// Panics on the first out-of-order pair or duplicate key.
#[inline]
pub fn check_ranked<R: Ranked>(results: &[R]) {
    if cfg!(debug_assertions) {
        for (i, pair) in results.windows(2).enumerate() {
            debug_assert!(
                compare_results(&pair[0], &pair[1]) == Ordering::Less,
                "Contract violation: results[{}] ({}) does not rank before results[{}] ({})",
                i,
                pair[0].key(),
                i + 1,
                pair[1].key()
            );
        }

        let mut seen = HashSet::with_capacity(results.len());
        for result in results {
            debug_assert!(
                seen.insert(result.key()),
                "Contract violation: {} appears more than once",
                result.key()
            );
        }
    }
}

/// Check that a page fits its size and is itself ranked.
#[inline]
pub fn check_page<R: Ranked>(items: &[R], page_size: usize) {
    debug_assert!(
        items.len() <= page_size,
        "Contract violation: page holds {} items, page_size is {}",
        items.len(),
        page_size
    );
    check_ranked(items);
}

// ============================================================================
// SOURCE CONTRACTS
// ============================================================================

/// Check that a [`CatalogSource`](crate::CatalogSource) lookup answered with
/// the requested entity.
#[inline]
pub fn check_entity(entity: &Entity, kind: EntityKind, id: u64) {
    debug_assert!(
        entity.kind() == kind && entity.id() == id,
        "Contract violation: lookup of {} {} returned {} {}",
        kind,
        id,
        entity.kind(),
        entity.id()
    );
}
