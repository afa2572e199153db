// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Bulk document construction.
//!
//! Loading a catalog snapshot means analyzing every schema, table and column
//! at once. Each document depends only on its own record, so this is
//! embarrassingly parallel: `par_iter()` over records when the `parallel`
//! feature is on, a plain iterator otherwise. Output order always matches
//! input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::document::{build_document, SearchDocument};
use crate::types::EntityRecord;

/// Build documents for a batch of records, preserving input order.
pub fn build_documents(records: &[EntityRecord]) -> Vec<SearchDocument> {
    #[cfg(feature = "parallel")]
    {
        records.par_iter().map(build_document).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        records.iter().map(build_document).collect()
    }
}
