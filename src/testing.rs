// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::build::{build_document, SearchDocument};
use crate::types::{AncestorContext, EntityRecord, EntityType, OwnerId, SchemaId, TableId};

/// Context shared by the helper records: schema 1 `auth`, table 10 `users`,
/// owner 100 `Alice`.
pub fn default_context() -> AncestorContext {
    AncestorContext {
        schema_id: SchemaId(1),
        schema_name: "auth".to_string(),
        table_id: Some(TableId(10)),
        table_name: Some("users".to_string()),
        owner_id: Some(OwnerId(100)),
        owner_name: Some("Alice".to_string()),
    }
}

/// Create a schema record. Its context points at itself.
pub fn schema_record(id: u64, name: &str, description: Option<&str>) -> EntityRecord {
    EntityRecord {
        entity_type: EntityType::Schema,
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
        context: AncestorContext {
            schema_id: SchemaId(id),
            schema_name: name.to_string(),
            table_id: None,
            table_name: None,
            owner_id: None,
            owner_name: None,
        },
    }
}

/// Create a table record in the default schema, owned by the default owner.
pub fn table_record(id: u64, name: &str, description: Option<&str>) -> EntityRecord {
    let mut context = default_context();
    context.table_id = Some(TableId(id));
    context.table_name = Some(name.to_string());
    EntityRecord {
        entity_type: EntityType::Table,
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
        context,
    }
}

/// Create a column record under the default table.
pub fn column_record(id: u64, name: &str, description: Option<&str>) -> EntityRecord {
    EntityRecord {
        entity_type: EntityType::Column,
        id,
        name: name.to_string(),
        description: description.map(str::to_string),
        context: default_context(),
    }
}

/// Build a document straight from a record.
pub fn make_doc(record: &EntityRecord) -> SearchDocument {
    build_document(record)
}
