// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Copy-on-write document store and the collaborator seam.
//!
//! Each searchable entity owns exactly one `Arc<SearchDocument>`. A write
//! builds the new document with no lock held, then swaps the pointer under
//! one shard lock. Readers clone `Arc`s out of the shards, so a query scans a
//! snapshot that no later write can tear: it sees the old document or the new
//! one, never a mix.
//!
//! Sharding is by [`DocKey`]. Writers to different shards never contend;
//! writers to the same entity serialize on its shard and the last swap wins.
//! No code path holds two shard locks at once.

use crate::build::{build_document, build_documents, SearchDocument};
use crate::catalog::Entity;
use crate::error::SearchError;
use crate::types::{DocKey, EntityKind, EntityRecord, EntityType};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Number of independently locked shards.
pub const SHARD_COUNT: usize = 16;

/// What the search core needs from the transactional store that owns the
/// entities.
pub trait CatalogSource: Send + Sync {
    /// Look up one entity by kind and id.
    ///
    /// # Errors
    ///
    /// `SearchError::NotFound` if no such entity exists.
    fn get_entity(&self, kind: EntityKind, id: u64) -> Result<Entity, SearchError>;

    /// Every current search document. The returned vector is a snapshot:
    /// later writes do not affect it.
    fn list_all_documents(&self) -> Vec<Arc<SearchDocument>>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    fn get_entity(&self, kind: EntityKind, id: u64) -> Result<Entity, SearchError> {
        (**self).get_entity(kind, id)
    }

    fn list_all_documents(&self) -> Vec<Arc<SearchDocument>> {
        (**self).list_all_documents()
    }
}

impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
    fn get_entity(&self, kind: EntityKind, id: u64) -> Result<Entity, SearchError> {
        (**self).get_entity(kind, id)
    }

    fn list_all_documents(&self) -> Vec<Arc<SearchDocument>> {
        (**self).list_all_documents()
    }
}

type Shard = RwLock<HashMap<DocKey, Arc<SearchDocument>>>;

pub struct DocumentStore {
    shards: Vec<Shard>,
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("shards", &self.shards.len())
            .field("documents", &self.len())
            .finish()
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore {
    pub fn new() -> Self {
        DocumentStore {
            shards: (0..SHARD_COUNT).map(|_| RwLock::new(HashMap::new())).collect(),
        }
    }

    /// Build a store from a batch of records, analyzing them in parallel.
    pub fn from_records(records: &[EntityRecord]) -> Self {
        let store = Self::new();
        for doc in build_documents(records) {
            store.shard(&doc.key()).write().insert(doc.key(), Arc::new(doc));
        }
        store
    }

    fn shard(&self, key: &DocKey) -> &Shard {
        let tag = match key.entity_type {
            EntityType::Schema => 0,
            EntityType::Table => 1,
            EntityType::Column => 2,
        };
        let slot = (key.id.wrapping_mul(3).wrapping_add(tag) % SHARD_COUNT as u64) as usize;
        &self.shards[slot]
    }

    /// Rebuild the document of a created or edited entity.
    ///
    /// The document is analyzed before any lock is taken; only the pointer
    /// swap happens under the shard lock. Returns the new document.
    pub fn on_entity_mutated(&self, record: &EntityRecord) -> Arc<SearchDocument> {
        self.install(build_document(record))
    }

    /// Swap in a document that was already built.
    pub fn install(&self, doc: SearchDocument) -> Arc<SearchDocument> {
        let doc = Arc::new(doc);
        let key = doc.key();
        let previous = self.shard(&key).write().insert(key, Arc::clone(&doc));
        tracing::trace!(
            %key,
            replaced = previous.is_some(),
            "search document swapped"
        );
        doc
    }

    /// Drop the document of a deleted entity. Returns the removed document.
    pub fn on_entity_deleted(&self, key: DocKey) -> Option<Arc<SearchDocument>> {
        let removed = self.shard(&key).write().remove(&key);
        tracing::trace!(%key, removed = removed.is_some(), "search document dropped");
        removed
    }

    pub fn get(&self, key: DocKey) -> Option<Arc<SearchDocument>> {
        self.shard(&key).read().get(&key).cloned()
    }

    /// All documents, ordered by key.
    ///
    /// Shards are read one at a time, so the snapshot is consistent per
    /// document, not across documents written concurrently.
    pub fn snapshot(&self) -> Vec<Arc<SearchDocument>> {
        let mut docs: Vec<Arc<SearchDocument>> = self
            .shards
            .iter()
            .flat_map(|shard| shard.read().values().cloned().collect::<Vec<_>>())
            .collect();
        docs.sort_by_key(|doc| doc.key());
        docs
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.read().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
