// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance search over a metadata catalog (owners, schemas, tables,
//! columns).
//!
//! Every schema, table and column owns one weighted search document (name =
//! class A, description = class B). Queries use a small boolean language with
//! phrases and negation, results are ranked by weighted term occurrences,
//! matching columns can pull in their parent table, and pages are cut from a
//! totally ordered, deduplicated list with an exact count.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  catalog/   │────▶│   store.rs   │────▶│   search/    │
//! │ (entities,  │     │ (Arc<Search- │     │ (matcher,    │
//! │  integrity) │     │  Document>)  │     │  aggregate)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   ▲                    │
//!        ▼                   │                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ analysis.rs │────▶│   build/     │     │ highlight.rs │
//! │ (tokenizer, │     │ (documents)  │     │ (<mark>)     │
//! │  stemmer)   │────▶│   query/     │     │              │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Documents and queries go through the same analyzer, so `Users` in a
//! query finds `user` in a name and `accounts` finds `Account`.
//!
//! # Usage
//!
//! ```
//! use catalog_search::{Catalog, SearchEngine, SearchRequest};
//!
//! let catalog = Catalog::new();
//! let owner = catalog.add_owner("Alice", "alice@example.com").unwrap();
//! let schema = catalog.add_schema("auth", None).unwrap();
//! let users = catalog
//!     .add_table(schema, "users", Some("User accounts"), Some(owner))
//!     .unwrap();
//! catalog.add_column(users, "email", None).unwrap();
//!
//! let engine = SearchEngine::new(&catalog);
//! let response = engine.search(&SearchRequest::new("email")).unwrap();
//!
//! // the column itself, then its table (damped, unhighlighted)
//! assert_eq!(response.total_count, 2);
//! assert_eq!(response.items[0].name_highlighted, "<mark>email</mark>");
//! assert_eq!(response.items[1].name, "users");
//! ```

// Module declarations
pub mod analysis;
pub mod build;
pub mod catalog;
pub mod config;
pub mod contracts;
pub mod error;
pub mod highlight;
pub mod query;
pub mod scoring;
pub mod search;
pub mod store;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use build::{build_document, build_documents, FieldTerms, SearchDocument};
pub use catalog::{
    seed::demo_catalog, Catalog, CatalogSnapshot, Column, DeletePolicy, Entity, Owner, Schema,
    Table,
};
pub use config::{HighlightConfig, PaginationConfig, ScoringConfig, SearchConfig};
pub use error::{CatalogError, ConfigError, SearchError};
pub use query::{Expr, Query};
pub use search::{SearchEngine, SearchRequest, SearchResponse, SearchResultItem};
pub use store::{CatalogSource, DocumentStore};
pub use types::{
    AncestorContext, ColumnId, DocKey, EntityKind, EntityRecord, EntityType, FieldKind, OwnerId,
    SchemaId, TableId, WeightClass,
};
