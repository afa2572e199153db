// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::analysis::terms;
use crate::types::{AncestorContext, DocKey, EntityRecord, EntityType, FieldKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Analyzed terms of one document field.
///
/// Maps each normalized term to the sorted word positions where it occurs.
/// Positions count stop words, so `positions[t] + 1` is always the word that
/// follows `t` in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldTerms {
    postings: HashMap<String, Vec<u32>>,
}

impl FieldTerms {
    pub fn from_text(text: &str) -> Self {
        let mut postings: HashMap<String, Vec<u32>> = HashMap::new();
        for (position, term) in terms(text) {
            postings.entry(term).or_default().push(position);
        }
        // Positions arrive in order from the analyzer; keep the invariant explicit.
        for positions in postings.values_mut() {
            positions.sort_unstable();
        }
        FieldTerms { postings }
    }

    /// Positions of `term`, empty if absent.
    pub fn positions(&self, term: &str) -> &[u32] {
        self.postings.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, term: &str) -> bool {
        self.postings.contains_key(term)
    }

    /// Whether `term` occurs at exactly `position`.
    pub fn occurs_at(&self, term: &str, position: u32) -> bool {
        self.positions(term).binary_search(&position).is_ok()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// The derived, weighted search record of one schema, table or column.
///
/// Never mutated after construction: the store replaces the whole document
/// (behind an `Arc`) when the entity changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub entity_type: EntityType,
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub context: AncestorContext,
    name_terms: FieldTerms,
    description_terms: FieldTerms,
}

impl SearchDocument {
    pub fn key(&self) -> DocKey {
        DocKey {
            entity_type: self.entity_type,
            id: self.id,
        }
    }

    /// Terms of the given field.
    pub fn field(&self, field: FieldKind) -> &FieldTerms {
        match field {
            FieldKind::Name => &self.name_terms,
            FieldKind::Description => &self.description_terms,
        }
    }

    /// Raw text of the given field (empty for a missing description).
    pub fn field_text(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::Name => &self.name,
            FieldKind::Description => self.description.as_deref().unwrap_or(""),
        }
    }

    /// The entity record this document was built from.
    pub fn record(&self) -> EntityRecord {
        EntityRecord {
            entity_type: self.entity_type,
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            context: self.context.clone(),
        }
    }

    /// Whether `term` appears in either field.
    pub fn contains_term(&self, term: &str) -> bool {
        self.name_terms.contains(term) || self.description_terms.contains(term)
    }
}

/// Build the search document for one entity.
///
/// Pure: the same record always yields the same document. Name and
/// description are analyzed independently so a phrase never spans the two.
pub fn build_document(record: &EntityRecord) -> SearchDocument {
    let description = record
        .description
        .as_ref()
        .filter(|d| !d.trim().is_empty())
        .cloned();

    SearchDocument {
        entity_type: record.entity_type,
        id: record.id,
        name_terms: FieldTerms::from_text(&record.name),
        description_terms: description
            .as_deref()
            .map(FieldTerms::from_text)
            .unwrap_or_default(),
        name: record.name.clone(),
        description,
        context: record.context.clone(),
    }
}
