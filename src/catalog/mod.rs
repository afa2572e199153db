// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory reference catalog.
//!
//! The catalog owns the entities and keeps their search documents in step.
//! A write validates and analyzes under the shared lock, then commits the
//! entity and swaps the affected documents under the write lock, so a reader
//! never sees an entity without its document or the other way round. A
//! failed write changes nothing.
//!
//! Ancestor names live in every descendant document, so a rename touches more
//! than one document:
//!
//! | Write                      | Documents rebuilt                          |
//! |----------------------------|--------------------------------------------|
//! | schema renamed             | schema, its tables, their columns          |
//! | table renamed / re-parented| table, its columns                         |
//! | owner renamed              | owned tables, their columns                |
//! | column edited              | column                                     |
//!
//! There is no durability: [`Catalog::snapshot`] and
//! [`Catalog::from_snapshot`] are the only way in and out.

mod model;
pub mod seed;

pub use model::{CatalogSnapshot, Column, Entity, Owner, Schema, Table};

use crate::build::{build_document, build_documents, SearchDocument};
use crate::error::{CatalogError, SearchError};
use crate::store::{CatalogSource, DocumentStore};
use crate::types::{
    AncestorContext, ColumnId, DocKey, EntityKind, EntityRecord, EntityType, OwnerId, SchemaId,
    TableId,
};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// What to do with the children of a deleted entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Refuse to delete an entity that still has children.
    #[default]
    Restrict,
    /// Delete schemas and tables together with their children; detach the
    /// tables of a deleted owner.
    Cascade,
}

#[derive(Debug, Default)]
struct CatalogData {
    owners: BTreeMap<OwnerId, Owner>,
    schemas: BTreeMap<SchemaId, Schema>,
    tables: BTreeMap<TableId, Table>,
    columns: BTreeMap<ColumnId, Column>,
    /// Bumped by every committed write.
    version: u64,
}

/// Entities a write is about to commit. Records planned before the commit
/// read these in place of the stored versions.
#[derive(Debug, Clone, Copy, Default)]
struct Pending<'a> {
    owner: Option<&'a Owner>,
    schema: Option<&'a Schema>,
}

impl CatalogData {
    fn tables_in_schema(&self, schema_id: SchemaId) -> Vec<TableId> {
        self.tables
            .values()
            .filter(|t| t.schema_id == schema_id)
            .map(|t| t.id)
            .collect()
    }

    fn tables_of_owner(&self, owner_id: OwnerId) -> Vec<TableId> {
        self.tables
            .values()
            .filter(|t| t.owner_id == Some(owner_id))
            .map(|t| t.id)
            .collect()
    }

    fn columns_of_table(&self, table_id: TableId) -> Vec<ColumnId> {
        self.columns
            .values()
            .filter(|c| c.table_id == table_id)
            .map(|c| c.id)
            .collect()
    }

    fn check_owner_ref(&self, owner_id: Option<OwnerId>) -> Result<(), CatalogError> {
        match owner_id {
            Some(id) if !self.owners.contains_key(&id) => Err(CatalogError::MissingOwner(id.get())),
            _ => Ok(()),
        }
    }

    fn check_email(&self, email: &str, except: Option<OwnerId>) -> Result<(), CatalogError> {
        let taken = self
            .owners
            .values()
            .any(|o| Some(o.id) != except && o.email.eq_ignore_ascii_case(email));
        if taken {
            return Err(CatalogError::DuplicateEmail(email.to_string()));
        }
        Ok(())
    }

    fn table_or_missing(&self, table_id: TableId) -> Result<&Table, CatalogError> {
        self.tables
            .get(&table_id)
            .ok_or(CatalogError::MissingTable(table_id.get()))
    }

    fn schema_record(&self, schema: &Schema) -> EntityRecord {
        EntityRecord {
            entity_type: EntityType::Schema,
            id: schema.id.get(),
            name: schema.name.clone(),
            description: schema.description.clone(),
            context: AncestorContext {
                schema_id: schema.id,
                schema_name: schema.name.clone(),
                table_id: None,
                table_name: None,
                owner_id: None,
                owner_name: None,
            },
        }
    }

    fn table_context(&self, table: &Table, pending: Pending<'_>) -> AncestorContext {
        let schema_name = match pending.schema {
            Some(schema) if schema.id == table.schema_id => schema.name.clone(),
            _ => self
                .schemas
                .get(&table.schema_id)
                .map(|s| s.name.clone())
                .unwrap_or_default(),
        };
        let owner = table.owner_id.and_then(|id| match pending.owner {
            Some(owner) if owner.id == id => Some(owner),
            _ => self.owners.get(&id),
        });
        AncestorContext {
            schema_id: table.schema_id,
            schema_name,
            table_id: Some(table.id),
            table_name: Some(table.name.clone()),
            owner_id: owner.map(|o| o.id),
            owner_name: owner.map(|o| o.name.clone()),
        }
    }

    fn table_record(&self, table: &Table, pending: Pending<'_>) -> EntityRecord {
        EntityRecord {
            entity_type: EntityType::Table,
            id: table.id.get(),
            name: table.name.clone(),
            description: table.description.clone(),
            context: self.table_context(table, pending),
        }
    }

    fn column_record(&self, column: &Column, table: &Table, pending: Pending<'_>) -> EntityRecord {
        EntityRecord {
            entity_type: EntityType::Column,
            id: column.id.get(),
            name: column.name.clone(),
            description: column.description.clone(),
            context: self.table_context(table, pending),
        }
    }

    /// Records of `table` (as it will be stored) and of its columns.
    fn table_subtree(&self, table: &Table, pending: Pending<'_>) -> Vec<EntityRecord> {
        let mut records = vec![self.table_record(table, pending)];
        records.extend(
            self.columns
                .values()
                .filter(|c| c.table_id == table.id)
                .map(|c| self.column_record(c, table, pending)),
        );
        records
    }

    fn records(&self) -> Vec<EntityRecord> {
        let pending = Pending::default();
        let schemas = self.schemas.values().map(|s| self.schema_record(s));
        let tables = self.tables.values().map(|t| self.table_record(t, pending));
        let columns = self.columns.values().filter_map(|c| {
            let table = self.tables.get(&c.table_id)?;
            Some(self.column_record(c, table, pending))
        });
        schemas.chain(tables).chain(columns).collect()
    }
}

fn check_name(kind: EntityKind, name: &str) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::InvalidName { kind });
    }
    Ok(())
}

fn not_found(kind: EntityKind, id: u64) -> CatalogError {
    CatalogError::NotFound { kind, id }
}

/// Plans made against a version that moved on are redone this many times
/// before the write falls back to planning under the write lock.
const OPTIMISTIC_ATTEMPTS: usize = 4;

/// The reference entity store.
#[derive(Debug)]
pub struct Catalog {
    data: RwLock<CatalogData>,
    documents: DocumentStore,
    /// Last id handed out. One sequence for every entity kind.
    next_id: AtomicU64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Catalog {
            data: RwLock::new(CatalogData::default()),
            documents: DocumentStore::new(),
            next_id: AtomicU64::new(0),
        }
    }

    /// Load a catalog, checking every reference. Documents are built in one
    /// parallel batch.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> Result<Self, CatalogError> {
        let mut data = CatalogData::default();

        for owner in snapshot.owners {
            check_name(EntityKind::Owner, &owner.name)?;
            data.check_email(&owner.email, None)?;
            if data.owners.contains_key(&owner.id) {
                return Err(CatalogError::DuplicateId {
                    kind: EntityKind::Owner,
                    id: owner.id.get(),
                });
            }
            data.owners.insert(owner.id, owner);
        }
        for schema in snapshot.schemas {
            check_name(EntityKind::Schema, &schema.name)?;
            if data.schemas.contains_key(&schema.id) {
                return Err(CatalogError::DuplicateId {
                    kind: EntityKind::Schema,
                    id: schema.id.get(),
                });
            }
            data.schemas.insert(schema.id, schema);
        }
        for table in snapshot.tables {
            check_name(EntityKind::Table, &table.name)?;
            if !data.schemas.contains_key(&table.schema_id) {
                return Err(CatalogError::MissingSchema(table.schema_id.get()));
            }
            data.check_owner_ref(table.owner_id)?;
            if data.tables.contains_key(&table.id) {
                return Err(CatalogError::DuplicateId {
                    kind: EntityKind::Table,
                    id: table.id.get(),
                });
            }
            data.tables.insert(table.id, table);
        }
        for column in snapshot.columns {
            check_name(EntityKind::Column, &column.name)?;
            if !data.tables.contains_key(&column.table_id) {
                return Err(CatalogError::MissingTable(column.table_id.get()));
            }
            if data.columns.contains_key(&column.id) {
                return Err(CatalogError::DuplicateId {
                    kind: EntityKind::Column,
                    id: column.id.get(),
                });
            }
            data.columns.insert(column.id, column);
        }

        let last_id = data
            .owners
            .keys()
            .map(|id| id.get())
            .chain(data.schemas.keys().map(|id| id.get()))
            .chain(data.tables.keys().map(|id| id.get()))
            .chain(data.columns.keys().map(|id| id.get()))
            .max()
            .unwrap_or(0);

        let documents = DocumentStore::from_records(&data.records());
        tracing::info!(
            owners = data.owners.len(),
            schemas = data.schemas.len(),
            tables = data.tables.len(),
            columns = data.columns.len(),
            documents = documents.len(),
            "catalog loaded"
        );

        Ok(Catalog {
            data: RwLock::new(data),
            documents,
            next_id: AtomicU64::new(last_id),
        })
    }

    /// Export every entity, ordered by id within each kind.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let data = self.data.read();
        CatalogSnapshot {
            owners: data.owners.values().cloned().collect(),
            schemas: data.schemas.values().cloned().collect(),
            tables: data.tables.values().cloned().collect(),
            columns: data.columns.values().cloned().collect(),
        }
    }

    pub fn documents(&self) -> &DocumentStore {
        &self.documents
    }

    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Run one write in two steps.
    ///
    /// `plan` validates and analyzes under a shared lock, so concurrent
    /// writers overlap on the expensive part. `commit` applies the plan under
    /// the write lock and must not fail. A plan whose version moved on before
    /// the commit is redone.
    fn write<P, R>(
        &self,
        mut plan: impl FnMut(&CatalogData) -> Result<P, CatalogError>,
        commit: impl FnOnce(&mut CatalogData, P) -> R,
    ) -> Result<R, CatalogError> {
        for _ in 0..OPTIMISTIC_ATTEMPTS {
            let (version, planned) = {
                let data = self.data.read();
                (data.version, plan(&*data)?)
            };
            let mut data = self.data.write();
            if data.version == version {
                data.version += 1;
                return Ok(commit(&mut *data, planned));
            }
            tracing::trace!(version, "catalog moved on while planning, replanning");
        }

        let mut data = self.data.write();
        let planned = plan(&*data)?;
        data.version += 1;
        Ok(commit(&mut *data, planned))
    }

    fn install(&self, documents: Vec<SearchDocument>) {
        for doc in documents {
            self.documents.install(doc);
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    pub fn owner(&self, id: OwnerId) -> Option<Owner> {
        self.data.read().owners.get(&id).cloned()
    }

    pub fn schema(&self, id: SchemaId) -> Option<Schema> {
        self.data.read().schemas.get(&id).cloned()
    }

    pub fn table(&self, id: TableId) -> Option<Table> {
        self.data.read().tables.get(&id).cloned()
    }

    pub fn column(&self, id: ColumnId) -> Option<Column> {
        self.data.read().columns.get(&id).cloned()
    }

    /// All owners, sorted by name.
    pub fn list_owners(&self) -> Vec<Owner> {
        let mut owners: Vec<Owner> = self.data.read().owners.values().cloned().collect();
        owners.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        owners
    }

    /// Schemas sorted by name. With an owner, only schemas holding at least
    /// one table of that owner.
    pub fn list_schemas(&self, owner: Option<OwnerId>) -> Vec<Schema> {
        let data = self.data.read();
        let mut schemas: Vec<Schema> = match owner {
            None => data.schemas.values().cloned().collect(),
            Some(owner_id) => {
                let used: HashSet<SchemaId> = data
                    .tables
                    .values()
                    .filter(|t| t.owner_id == Some(owner_id))
                    .map(|t| t.schema_id)
                    .collect();
                data.schemas
                    .values()
                    .filter(|s| used.contains(&s.id))
                    .cloned()
                    .collect()
            }
        };
        schemas.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        schemas
    }

    // =========================================================================
    // INSERTS
    // =========================================================================
    //
    // The id is taken once the first plan validates, so a rejected insert
    // does not use one up.

    pub fn add_owner(&self, name: &str, email: &str) -> Result<OwnerId, CatalogError> {
        check_name(EntityKind::Owner, name)?;
        let mut id = None;
        let owner = self.write(
            |data| {
                data.check_email(email, None)?;
                let id = OwnerId(*id.get_or_insert_with(|| self.allocate_id()));
                Ok(Owner {
                    id,
                    name: name.to_string(),
                    email: email.to_string(),
                })
            },
            |data, owner| {
                data.owners.insert(owner.id, owner.clone());
                owner
            },
        )?;
        tracing::debug!(id = %owner.id, name, "owner added");
        Ok(owner.id)
    }

    pub fn add_schema(&self, name: &str, description: Option<&str>) -> Result<SchemaId, CatalogError> {
        check_name(EntityKind::Schema, name)?;
        let id = SchemaId(self.allocate_id());
        let schema = Schema {
            id,
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        self.write(
            |data| Ok(build_document(&data.schema_record(&schema))),
            |data, doc| {
                data.schemas.insert(id, schema.clone());
                self.documents.install(doc);
            },
        )?;
        tracing::debug!(%id, name, "schema added");
        Ok(id)
    }

    pub fn add_table(
        &self,
        schema_id: SchemaId,
        name: &str,
        description: Option<&str>,
        owner_id: Option<OwnerId>,
    ) -> Result<TableId, CatalogError> {
        check_name(EntityKind::Table, name)?;
        let mut id = None;
        let table = self.write(
            |data| {
                if !data.schemas.contains_key(&schema_id) {
                    return Err(CatalogError::MissingSchema(schema_id.get()));
                }
                data.check_owner_ref(owner_id)?;
                let table = Table {
                    id: TableId(*id.get_or_insert_with(|| self.allocate_id())),
                    name: name.to_string(),
                    description: description.map(str::to_string),
                    schema_id,
                    owner_id,
                };
                let doc = build_document(&data.table_record(&table, Pending::default()));
                Ok((table, doc))
            },
            |data, (table, doc)| {
                data.tables.insert(table.id, table.clone());
                self.documents.install(doc);
                table
            },
        )?;
        tracing::debug!(id = %table.id, name, "table added");
        Ok(table.id)
    }

    pub fn add_column(
        &self,
        table_id: TableId,
        name: &str,
        description: Option<&str>,
    ) -> Result<ColumnId, CatalogError> {
        check_name(EntityKind::Column, name)?;
        let mut id = None;
        let column = self.write(
            |data| {
                let table = data.table_or_missing(table_id)?;
                let column = Column {
                    id: ColumnId(*id.get_or_insert_with(|| self.allocate_id())),
                    name: name.to_string(),
                    description: description.map(str::to_string),
                    table_id,
                };
                let doc = build_document(&data.column_record(&column, table, Pending::default()));
                Ok((column, doc))
            },
            |data, (column, doc)| {
                data.columns.insert(column.id, column.clone());
                self.documents.install(doc);
                column
            },
        )?;
        tracing::debug!(id = %column.id, name, "column added");
        Ok(column.id)
    }

    // =========================================================================
    // UPDATES
    // =========================================================================
    //
    // Each update applies the closure to a copy, validates the copy and
    // rebuilds the affected documents, then commits both. The id cannot
    // change. The closure runs again if the plan has to be redone.

    pub fn update_owner(
        &self,
        id: OwnerId,
        mut edit: impl FnMut(&mut Owner),
    ) -> Result<Owner, CatalogError> {
        let owner = self.write(
            |data| {
                let mut owner = data
                    .owners
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| not_found(EntityKind::Owner, id.get()))?;
                edit(&mut owner);
                owner.id = id;
                check_name(EntityKind::Owner, &owner.name)?;
                data.check_email(&owner.email, Some(id))?;

                let pending = Pending {
                    owner: Some(&owner),
                    ..Pending::default()
                };
                let records: Vec<EntityRecord> = data
                    .tables
                    .values()
                    .filter(|t| t.owner_id == Some(id))
                    .flat_map(|t| data.table_subtree(t, pending))
                    .collect();
                let docs = build_documents(&records);
                Ok((owner, docs))
            },
            |data, (owner, docs)| {
                data.owners.insert(id, owner.clone());
                self.install(docs);
                owner
            },
        )?;
        tracing::debug!(%id, "owner updated");
        Ok(owner)
    }

    pub fn update_schema(
        &self,
        id: SchemaId,
        mut edit: impl FnMut(&mut Schema),
    ) -> Result<Schema, CatalogError> {
        let schema = self.write(
            |data| {
                let mut schema = data
                    .schemas
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| not_found(EntityKind::Schema, id.get()))?;
                edit(&mut schema);
                schema.id = id;
                check_name(EntityKind::Schema, &schema.name)?;

                let pending = Pending {
                    schema: Some(&schema),
                    ..Pending::default()
                };
                let mut records = vec![data.schema_record(&schema)];
                records.extend(
                    data.tables
                        .values()
                        .filter(|t| t.schema_id == id)
                        .flat_map(|t| data.table_subtree(t, pending)),
                );
                let docs = build_documents(&records);
                Ok((schema, docs))
            },
            |data, (schema, docs)| {
                data.schemas.insert(id, schema.clone());
                self.install(docs);
                schema
            },
        )?;
        tracing::debug!(%id, "schema updated");
        Ok(schema)
    }

    pub fn update_table(
        &self,
        id: TableId,
        mut edit: impl FnMut(&mut Table),
    ) -> Result<Table, CatalogError> {
        let table = self.write(
            |data| {
                let mut table = data
                    .tables
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| not_found(EntityKind::Table, id.get()))?;
                edit(&mut table);
                table.id = id;
                check_name(EntityKind::Table, &table.name)?;
                if !data.schemas.contains_key(&table.schema_id) {
                    return Err(CatalogError::MissingSchema(table.schema_id.get()));
                }
                data.check_owner_ref(table.owner_id)?;

                let docs = build_documents(&data.table_subtree(&table, Pending::default()));
                Ok((table, docs))
            },
            |data, (table, docs)| {
                data.tables.insert(id, table.clone());
                self.install(docs);
                table
            },
        )?;
        tracing::debug!(%id, "table updated");
        Ok(table)
    }

    pub fn update_column(
        &self,
        id: ColumnId,
        mut edit: impl FnMut(&mut Column),
    ) -> Result<Column, CatalogError> {
        let column = self.write(
            |data| {
                let mut column = data
                    .columns
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| not_found(EntityKind::Column, id.get()))?;
                edit(&mut column);
                column.id = id;
                check_name(EntityKind::Column, &column.name)?;
                let table = data.table_or_missing(column.table_id)?;

                let doc = build_document(&data.column_record(&column, table, Pending::default()));
                Ok((column, doc))
            },
            |data, (column, doc)| {
                data.columns.insert(id, column.clone());
                self.documents.install(doc);
                column
            },
        )?;
        tracing::debug!(%id, "column updated");
        Ok(column)
    }

    // =========================================================================
    // DELETES
    // =========================================================================

    /// Delete an owner. Under `Cascade` its tables are kept and detached.
    pub fn delete_owner(&self, id: OwnerId, policy: DeletePolicy) -> Result<Owner, CatalogError> {
        let owner = self.write(
            |data| {
                let owner = data
                    .owners
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| not_found(EntityKind::Owner, id.get()))?;
                let owned = data.tables_of_owner(id);
                if policy == DeletePolicy::Restrict && !owned.is_empty() {
                    return Err(CatalogError::HasDependents {
                        kind: EntityKind::Owner,
                        id: id.get(),
                        count: owned.len(),
                    });
                }

                let records: Vec<EntityRecord> = owned
                    .iter()
                    .filter_map(|table_id| data.tables.get(table_id))
                    .flat_map(|table| {
                        let detached = Table {
                            owner_id: None,
                            ..table.clone()
                        };
                        data.table_subtree(&detached, Pending::default())
                    })
                    .collect();
                let docs = build_documents(&records);
                Ok((owner, owned, docs))
            },
            |data, (owner, owned, docs)| {
                data.owners.remove(&id);
                for table_id in owned {
                    if let Some(table) = data.tables.get_mut(&table_id) {
                        table.owner_id = None;
                    }
                }
                self.install(docs);
                owner
            },
        )?;
        tracing::debug!(%id, ?policy, "owner deleted");
        Ok(owner)
    }

    /// Delete a schema. Under `Cascade` its tables and their columns go too.
    pub fn delete_schema(
        &self,
        id: SchemaId,
        policy: DeletePolicy,
    ) -> Result<Schema, CatalogError> {
        let schema = self.write(
            |data| {
                let schema = data
                    .schemas
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| not_found(EntityKind::Schema, id.get()))?;
                let tables = data.tables_in_schema(id);
                if policy == DeletePolicy::Restrict && !tables.is_empty() {
                    return Err(CatalogError::HasDependents {
                        kind: EntityKind::Schema,
                        id: id.get(),
                        count: tables.len(),
                    });
                }
                Ok((schema, tables))
            },
            |data, (schema, tables)| {
                for table_id in tables {
                    self.remove_table(data, table_id);
                }
                data.schemas.remove(&id);
                self.documents.on_entity_deleted(DocKey::schema(id));
                schema
            },
        )?;
        tracing::debug!(%id, ?policy, "schema deleted");
        Ok(schema)
    }

    /// Delete a table. Under `Cascade` its columns go too.
    pub fn delete_table(&self, id: TableId, policy: DeletePolicy) -> Result<Table, CatalogError> {
        let table = self.write(
            |data| {
                let table = data
                    .tables
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| not_found(EntityKind::Table, id.get()))?;
                let columns = data.columns_of_table(id);
                if policy == DeletePolicy::Restrict && !columns.is_empty() {
                    return Err(CatalogError::HasDependents {
                        kind: EntityKind::Table,
                        id: id.get(),
                        count: columns.len(),
                    });
                }
                Ok(table)
            },
            |data, table| {
                self.remove_table(data, id);
                table
            },
        )?;
        tracing::debug!(%id, ?policy, "table deleted");
        Ok(table)
    }

    pub fn delete_column(&self, id: ColumnId) -> Result<Column, CatalogError> {
        let column = self.write(
            |data| {
                data.columns
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| not_found(EntityKind::Column, id.get()))
            },
            |data, column| {
                data.columns.remove(&id);
                self.documents.on_entity_deleted(DocKey::column(id));
                column
            },
        )?;
        tracing::debug!(%id, "column deleted");
        Ok(column)
    }

    /// Remove a table and its columns, entities and documents.
    fn remove_table(&self, data: &mut CatalogData, table_id: TableId) {
        for column_id in data.columns_of_table(table_id) {
            data.columns.remove(&column_id);
            self.documents.on_entity_deleted(DocKey::column(column_id));
        }
        if data.tables.remove(&table_id).is_some() {
            self.documents.on_entity_deleted(DocKey::table(table_id));
        }
    }
}

impl CatalogSource for Catalog {
    fn get_entity(&self, kind: EntityKind, id: u64) -> Result<Entity, SearchError> {
        let data = self.data.read();
        let entity = match kind {
            EntityKind::Owner => data.owners.get(&OwnerId(id)).cloned().map(Entity::Owner),
            EntityKind::Schema => data.schemas.get(&SchemaId(id)).cloned().map(Entity::Schema),
            EntityKind::Table => data.tables.get(&TableId(id)).cloned().map(Entity::Table),
            EntityKind::Column => data.columns.get(&ColumnId(id)).cloned().map(Entity::Column),
        };
        entity.ok_or(SearchError::NotFound { kind, id })
    }

    fn list_all_documents(&self) -> Vec<Arc<SearchDocument>> {
        self.documents.snapshot()
    }
}
