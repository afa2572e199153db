// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the catalog search model.
//!
//! Four entity kinds live in the catalog (owner, schema, table, column), but
//! only three of them are searchable. Each searchable entity owns exactly one
//! search document, identified by a [`DocKey`]. Ancestor names are
//! denormalized into [`AncestorContext`] so a result can be rendered without
//! going back to the store.
//!
//! # Invariants
//!
//! - **AncestorContext**: a table document has `table_id == Some(entity id)`;
//!   a column document has `table_id` pointing at its parent table; a schema
//!   document has no table and no owner.
//! - **DocKey**: `(entity_type, id)` is unique across the corpus. Two entity
//!   types may reuse the same numeric id.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES: Type-safe entity identifiers
// =============================================================================

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Get the underlying value.
            #[inline]
            pub fn get(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                $name(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of an owner (a person or team).
    OwnerId
);
entity_id!(
    /// Identifier of a schema.
    SchemaId
);
entity_id!(
    /// Identifier of a table.
    TableId
);
entity_id!(
    /// Identifier of a column.
    ColumnId
);

// =============================================================================
// ENTITY TAGS
// =============================================================================

/// Searchable entity types. The tag carried by every search document and
/// every result row.
///
/// `Ord` follows the type *name* (`column` < `schema` < `table`), which is
/// the tertiary sort key of the result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Schema,
    Table,
    Column,
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [EntityType::Schema, EntityType::Table, EntityType::Column];

    pub fn as_str(self) -> &'static str {
        match self {
            EntityType::Schema => "schema",
            EntityType::Table => "table",
            EntityType::Column => "column",
        }
    }
}

impl PartialOrd for EntityType {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityType {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every kind of entity the store knows about, searchable or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Owner,
    Schema,
    Table,
    Column,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Owner => "owner",
            EntityKind::Schema => "schema",
            EntityKind::Table => "table",
            EntityKind::Column => "column",
        }
    }
}

impl From<EntityType> for EntityKind {
    fn from(entity_type: EntityType) -> Self {
        match entity_type {
            EntityType::Schema => EntityKind::Schema,
            EntityType::Table => EntityKind::Table,
            EntityType::Column => EntityKind::Column,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a search document: entity type plus raw id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocKey {
    pub entity_type: EntityType,
    pub id: u64,
}

impl DocKey {
    pub fn schema(id: SchemaId) -> Self {
        DocKey {
            entity_type: EntityType::Schema,
            id: id.get(),
        }
    }

    pub fn table(id: TableId) -> Self {
        DocKey {
            entity_type: EntityType::Table,
            id: id.get(),
        }
    }

    pub fn column(id: ColumnId) -> Self {
        DocKey {
            entity_type: EntityType::Column,
            id: id.get(),
        }
    }
}

impl fmt::Display for DocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.entity_type, self.id)
    }
}

// =============================================================================
// WEIGHTS AND CONTEXT
// =============================================================================

/// Weight class of a document field. The name field is primary (A), the
/// description secondary (B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightClass {
    A,
    B,
}

/// Which document field a term or highlight belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Name,
    Description,
}

impl FieldKind {
    pub const ALL: [FieldKind; 2] = [FieldKind::Name, FieldKind::Description];

    pub fn weight_class(self) -> WeightClass {
        match self {
            FieldKind::Name => WeightClass::A,
            FieldKind::Description => WeightClass::B,
        }
    }
}

/// Denormalized ancestry of a searchable entity.
///
/// Everything a result row needs beyond the entity's own name and
/// description. Nullable fields follow the entity type: schemas have no
/// table or owner, tables have no column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorContext {
    pub schema_id: SchemaId,
    pub schema_name: String,
    pub table_id: Option<TableId>,
    pub table_name: Option<String>,
    pub owner_id: Option<OwnerId>,
    pub owner_name: Option<String>,
}

/// The input of the document builder: one entity's searchable text plus its
/// ancestry. This is what the store hands to
/// [`DocumentStore::on_entity_mutated`](crate::DocumentStore::on_entity_mutated).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub entity_type: EntityType,
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub context: AncestorContext,
}

impl EntityRecord {
    pub fn key(&self) -> DocKey {
        DocKey {
            entity_type: self.entity_type,
            id: self.id,
        }
    }
}
