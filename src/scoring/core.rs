// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A match is worth `occurrences × weight(field)`, summed over every matched
//! leaf of the query. There is no length normalization and no position bonus:
//! a name with the word twice scores twice as much as a name with it once.
//!
//! # Key Invariant: Name Dominance
//!
//! One name occurrence outweighs one description occurrence:
//!
//! ```text
//! NAME_WEIGHT > DESCRIPTION_WEIGHT   (4.0 > 1.0)
//! ```
//!
//! Configurations that break this are rejected by
//! [`SearchConfig::validate`](crate::SearchConfig::validate).
//!
//! # Constants
//!
//! | Knob        | Default | Meaning |
//! |-------------|---------|---------|
//! | Name (A)    | 4.0     | Weight of one occurrence in the entity name |
//! | Description (B) | 1.0 | Weight of one occurrence in the description |
//! | Damping     | 0.8     | Share of the best column score a synthesized parent table gets |

use crate::config::ScoringConfig;
use crate::types::FieldKind;

/// Default weight of class A (name) occurrences.
pub const NAME_WEIGHT: f64 = 4.0;

/// Default weight of class B (description) occurrences.
pub const DESCRIPTION_WEIGHT: f64 = 1.0;

/// Default damping for tables pulled in by a matching column.
pub const PARENT_DAMPING: f64 = 0.8;

/// Score of one leaf in one field.
#[inline]
pub fn field_score(occurrences: usize, field: FieldKind, scoring: &ScoringConfig) -> f64 {
    occurrences as f64 * scoring.field_weight(field)
}

/// Score of a parent table synthesized from its matching columns.
///
/// Takes the best child score, not the sum, so a table with many weakly
/// matching columns does not outrank one with a single strong match.
/// Returns `None` when there are no child scores.
pub fn expanded_score(
    child_scores: impl IntoIterator<Item = f64>,
    scoring: &ScoringConfig,
) -> Option<f64> {
    child_scores
        .into_iter()
        .fold(None, |best: Option<f64>, score| match best {
            Some(b) if b >= score => Some(b),
            _ => Some(score),
        })
        .map(|best| best * scoring.parent_damping)
}
