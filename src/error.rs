// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! Three families, one per boundary:
//!
//! - [`SearchError`]: what `SearchEngine::search` can return. Query and
//!   pagination problems are detected before any document is scanned.
//! - [`CatalogError`]: integrity violations in the reference store. A failed
//!   mutation leaves the entity and every search document unchanged.
//! - [`ConfigError`]: loading or validating a [`SearchConfig`](crate::SearchConfig).

use crate::types::EntityKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Malformed boolean/phrase syntax, or a blank query.
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },

    /// Page or page size out of range.
    #[error("invalid pagination: {reason}")]
    InvalidPagination { reason: String },

    /// A referenced entity does not exist.
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u64 },
}

impl SearchError {
    pub(crate) fn invalid_query(reason: impl Into<String>) -> Self {
        SearchError::InvalidQuery {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_pagination(reason: impl Into<String>) -> Self {
        SearchError::InvalidPagination {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("{kind} {id} not found")]
    NotFound { kind: EntityKind, id: u64 },

    #[error("table references missing schema {0}")]
    MissingSchema(u64),

    #[error("column references missing table {0}")]
    MissingTable(u64),

    #[error("table references missing owner {0}")]
    MissingOwner(u64),

    #[error("{kind} {id} still has {count} dependent entities")]
    HasDependents {
        kind: EntityKind,
        id: u64,
        count: usize,
    },

    #[error("duplicate {kind} id {id}")]
    DuplicateId { kind: EntityKind, id: u64 },

    #[error("owner email {0:?} is already taken")]
    DuplicateEmail(String),

    #[error("{kind} name must not be blank")]
    InvalidName { kind: EntityKind },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
