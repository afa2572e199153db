// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog entities.
//!
//! These are the rows of the reference store. Search never reads them
//! directly: it reads the [`EntityRecord`]s derived from them (entity text
//! plus denormalized ancestry), which the catalog hands to the document store
//! on every write.

use crate::types::{ColumnId, EntityKind, OwnerId, SchemaId, TableId};
use serde::{Deserialize, Serialize};

/// A person or team responsible for tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    /// Contact email, unique across owners.
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub id: SchemaId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub id: TableId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub schema_id: SchemaId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<OwnerId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub table_id: TableId,
}

/// Any catalog entity, as returned by
/// [`CatalogSource::get_entity`](crate::CatalogSource::get_entity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Entity {
    Owner(Owner),
    Schema(Schema),
    Table(Table),
    Column(Column),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Owner(_) => EntityKind::Owner,
            Entity::Schema(_) => EntityKind::Schema,
            Entity::Table(_) => EntityKind::Table,
            Entity::Column(_) => EntityKind::Column,
        }
    }

    pub fn id(&self) -> u64 {
        match self {
            Entity::Owner(o) => o.id.get(),
            Entity::Schema(s) => s.id.get(),
            Entity::Table(t) => t.id.get(),
            Entity::Column(c) => c.id.get(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entity::Owner(o) => &o.name,
            Entity::Schema(s) => &s.name,
            Entity::Table(t) => &t.name,
            Entity::Column(c) => &c.name,
        }
    }
}

/// The whole catalog as plain data, the JSON interchange format of the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSnapshot {
    pub owners: Vec<Owner>,
    pub schemas: Vec<Schema>,
    pub tables: Vec<Table>,
    pub columns: Vec<Column>,
}
