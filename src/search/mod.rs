// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the pieces meet.
//!
//! [`SearchEngine::search`] is the only entry point. One call runs the whole
//! pipeline over a fresh snapshot of the documents:
//!
//! ```text
//! validate paging → parse → check filters → scan → aggregate → page → highlight
//! ```
//!
//! Nothing is cached between calls and no lock is held while scanning, so a
//! query can be dropped at any point without side effects.

pub mod aggregate;
pub mod dedup;
pub mod matcher;

use crate::build::SearchDocument;
use crate::config::SearchConfig;
use crate::contracts;
use crate::error::SearchError;
use crate::highlight::{highlight_fragments, highlight_full};
use crate::query::Query;
use crate::store::CatalogSource;
use crate::types::{ColumnId, EntityKind, EntityType, FieldKind, OwnerId, SchemaId, TableId};
use aggregate::{aggregate, page_bounds, Candidate, Filters};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

fn default_page() -> usize {
    1
}

fn default_expand() -> bool {
    true
}

/// One search request.
///
/// Deserializes from JSON with the same defaults as [`SearchRequest::new`]:
/// page 1, the configured default page size, parent expansion on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub text: String,
    #[serde(default)]
    pub owner_filter: Option<OwnerId>,
    #[serde(default)]
    pub schema_filter: Option<SchemaId>,
    #[serde(default = "default_page")]
    pub page: usize,
    /// `None` means the configured default.
    #[serde(default)]
    pub page_size: Option<usize>,
    #[serde(default = "default_expand")]
    pub expand_parents: bool,
}

impl SearchRequest {
    pub fn new(text: impl Into<String>) -> Self {
        SearchRequest {
            text: text.into(),
            owner_filter: None,
            schema_filter: None,
            page: default_page(),
            page_size: None,
            expand_parents: default_expand(),
        }
    }

    pub fn owner(mut self, owner: OwnerId) -> Self {
        self.owner_filter = Some(owner);
        self
    }

    pub fn schema(mut self, schema: SchemaId) -> Self {
        self.schema_filter = Some(schema);
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn expand_parents(mut self, expand: bool) -> Self {
        self.expand_parents = expand;
        self
    }
}

/// One row of a result page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub entity_type: EntityType,
    pub entity_id: u64,
    pub name: String,
    pub description: Option<String>,
    pub name_highlighted: String,
    pub description_highlighted: String,
    pub score: f64,
    pub schema_id: SchemaId,
    pub schema_name: String,
    pub table_id: Option<TableId>,
    pub table_name: Option<String>,
    pub column_id: Option<ColumnId>,
    pub column_name: Option<String>,
    pub owner_id: Option<OwnerId>,
    pub owner_name: Option<String>,
}

impl crate::scoring::Ranked for SearchResultItem {
    fn score(&self) -> f64 {
        self.score
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn key(&self) -> crate::types::DocKey {
        crate::types::DocKey {
            entity_type: self.entity_type,
            id: self.entity_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchResultItem>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// The query text as submitted.
    pub query: String,
}

impl SearchResponse {
    fn empty(query: &str, page: usize, page_size: usize) -> Self {
        SearchResponse {
            items: Vec::new(),
            total_count: 0,
            page,
            page_size,
            total_pages: 0,
            query: query.to_string(),
        }
    }
}

/// The search core, reading documents from any [`CatalogSource`].
pub struct SearchEngine<S> {
    source: S,
    config: SearchConfig,
}

impl<S: CatalogSource> SearchEngine<S> {
    pub fn new(source: S) -> Self {
        Self::with_config(source, SearchConfig::default())
    }

    pub fn with_config(source: S, config: SearchConfig) -> Self {
        SearchEngine { source, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run one query.
    ///
    /// # Errors
    ///
    /// - `InvalidPagination` if `page < 1` or `page_size` is outside
    ///   `[1, max_page_size]`; checked first.
    /// - `InvalidQuery` if the text does not parse.
    ///
    /// A filter naming an owner or schema that does not exist is not an
    /// error: the result is an empty page.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let page_size = self.validate_paging(request)?;
        let query = Query::parse(&request.text)?;
        let page = request.page;

        let Some(expr) = query.expr.as_ref() else {
            tracing::debug!(query = %request.text, "query has no searchable terms");
            return Ok(SearchResponse::empty(&request.text, page, page_size));
        };

        if !self.filter_targets_exist(request)? {
            return Ok(SearchResponse::empty(&request.text, page, page_size));
        }

        let docs = self.source.list_all_documents();
        let tables: HashMap<TableId, Arc<SearchDocument>> = docs
            .iter()
            .filter(|doc| doc.entity_type == EntityType::Table)
            .map(|doc| (TableId(doc.id), Arc::clone(doc)))
            .collect();

        let matches = matcher::scan(expr, &docs, &self.config.scoring);
        tracing::debug!(
            query = %expr,
            corpus = docs.len(),
            matches = matches.len(),
            "scan complete"
        );

        let filters = Filters {
            owner: request.owner_filter,
            schema: request.schema_filter,
        };
        let ranked = aggregate(
            matches,
            &tables,
            filters,
            request.expand_parents,
            &self.config.scoring,
        );
        contracts::check_ranked(&ranked);

        let bounds = page_bounds(ranked.len(), page, page_size);
        let items: Vec<SearchResultItem> = ranked[bounds.start..bounds.end]
            .iter()
            .map(|candidate| self.to_item(candidate))
            .collect();
        contracts::check_page(&items, page_size);

        Ok(SearchResponse {
            items,
            total_count: bounds.total_count,
            page,
            page_size,
            total_pages: bounds.total_pages,
            query: request.text.clone(),
        })
    }

    fn validate_paging(&self, request: &SearchRequest) -> Result<usize, SearchError> {
        let limits = &self.config.pagination;
        let page_size = request.page_size.unwrap_or(limits.default_page_size);
        if request.page < 1 {
            return Err(SearchError::invalid_pagination("page must be at least 1"));
        }
        if page_size < 1 || page_size > limits.max_page_size {
            return Err(SearchError::invalid_pagination(format!(
                "page_size must be between 1 and {}, got {}",
                limits.max_page_size, page_size
            )));
        }
        Ok(page_size)
    }

    /// `Ok(false)` when a filter names an entity that does not exist.
    fn filter_targets_exist(&self, request: &SearchRequest) -> Result<bool, SearchError> {
        let targets = [
            request.owner_filter.map(|id| (EntityKind::Owner, id.get())),
            request.schema_filter.map(|id| (EntityKind::Schema, id.get())),
        ];
        for (kind, id) in targets.into_iter().flatten() {
            match self.source.get_entity(kind, id) {
                Ok(entity) => {
                    contracts::check_entity(&entity, kind, id);
                    tracing::debug!(%kind, id, name = entity.name(), "search filter target");
                }
                Err(SearchError::NotFound { kind, id }) => {
                    tracing::warn!(%kind, id, "search filter names a missing entity");
                    return Ok(false);
                }
                Err(other) => return Err(other),
            }
        }
        Ok(true)
    }

    fn to_item(&self, candidate: &Candidate<'_>) -> SearchResultItem {
        let doc = &candidate.doc;
        let highlight = &self.config.highlight;
        let description = doc.field_text(FieldKind::Description);

        let (name_highlighted, description_highlighted) = match candidate.matched() {
            Some(matched) => (
                highlight_full(&doc.name, matched.get(FieldKind::Name), highlight),
                highlight_fragments(description, matched.get(FieldKind::Description), highlight),
            ),
            None => (doc.name.clone(), description.to_string()),
        };

        let (column_id, column_name) = match doc.entity_type {
            EntityType::Column => (Some(ColumnId(doc.id)), Some(doc.name.clone())),
            _ => (None, None),
        };

        SearchResultItem {
            entity_type: doc.entity_type,
            entity_id: doc.id,
            name: doc.name.clone(),
            description: doc.description.clone(),
            name_highlighted,
            description_highlighted,
            score: candidate.score,
            schema_id: doc.context.schema_id,
            schema_name: doc.context.schema_name.clone(),
            table_id: doc.context.table_id,
            table_name: doc.context.table_name.clone(),
            column_id,
            column_name,
            owner_id: doc.context.owner_id,
            owner_name: doc.context.owner_name.clone(),
        }
    }
}
