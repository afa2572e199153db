//! Loading catalogs from snapshots and JSON files.

use crate::common::{demo, keys, query};
use catalog_search::catalog::seed::demo_snapshot;
use catalog_search::{
    Catalog, CatalogError, CatalogSnapshot, Column, ColumnId, EntityKind, Owner, OwnerId,
    SchemaId, Table, TableId,
};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_snapshot_json_round_trip_preserves_search() {
    let catalog = demo();
    let json = serde_json::to_string_pretty(&catalog.snapshot()).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, &json).unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let snapshot: CatalogSnapshot = serde_json::from_str(&raw).unwrap();
    assert_eq!(snapshot, demo_snapshot());

    let reloaded = Catalog::from_snapshot(snapshot).unwrap();
    for text in ["email", "order", "\"date of sales\"", "user -admin"] {
        assert_eq!(keys(&query(&reloaded, text)), keys(&query(&catalog, text)));
    }
}

#[test]
fn test_sparse_json_uses_defaults() {
    let raw = r#"{
        "schemas": [{ "id": 1, "name": "core" }],
        "tables": [{ "id": 2, "name": "accounts", "schema_id": 1 }]
    }"#;
    let snapshot: CatalogSnapshot = serde_json::from_str(raw).unwrap();
    assert!(snapshot.owners.is_empty());
    assert!(snapshot.columns.is_empty());

    let catalog = Catalog::from_snapshot(snapshot).unwrap();
    let response = query(&catalog, "account");
    assert_eq!(response.total_count, 1);
    assert_eq!(response.items[0].owner_id, None);
}

#[test]
fn test_new_ids_continue_after_loaded_ones() {
    let catalog = demo();
    let id = catalog.add_schema("scratch", None).unwrap();
    assert_eq!(id, SchemaId(23));
}

#[test]
fn test_dangling_references_are_rejected() {
    let mut snapshot = demo_snapshot();
    snapshot.columns.push(Column {
        id: ColumnId(100),
        name: "orphan".to_string(),
        description: None,
        table_id: TableId(99),
    });
    assert_eq!(
        Catalog::from_snapshot(snapshot).unwrap_err(),
        CatalogError::MissingTable(99)
    );

    let mut snapshot = demo_snapshot();
    snapshot.tables.push(Table {
        id: TableId(100),
        name: "orphan".to_string(),
        description: None,
        schema_id: SchemaId(1),
        owner_id: Some(OwnerId(99)),
    });
    assert_eq!(
        Catalog::from_snapshot(snapshot).unwrap_err(),
        CatalogError::MissingOwner(99)
    );
}

#[test]
fn test_duplicate_ids_and_emails_are_rejected() {
    let mut snapshot = demo_snapshot();
    snapshot.owners.push(Owner {
        id: OwnerId(1),
        name: "Twin".to_string(),
        email: "twin@example.com".to_string(),
    });
    assert_eq!(
        Catalog::from_snapshot(snapshot).unwrap_err(),
        CatalogError::DuplicateId {
            kind: EntityKind::Owner,
            id: 1,
        }
    );

    let mut snapshot = demo_snapshot();
    snapshot.owners.push(Owner {
        id: OwnerId(50),
        name: "Copycat".to_string(),
        email: "alice@example.com".to_string(),
    });
    assert!(matches!(
        Catalog::from_snapshot(snapshot).unwrap_err(),
        CatalogError::DuplicateEmail(_)
    ));
}

#[test]
fn test_listing_helpers() {
    let catalog = demo();
    let owners: Vec<String> = catalog.list_owners().into_iter().map(|o| o.name).collect();
    assert_eq!(owners, vec!["Alice", "Analytics", "Data Engineering", "Product"]);

    let schemas: Vec<String> = catalog
        .list_schemas(Some(OwnerId(1)))
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(schemas, vec!["raw"]);
    assert_eq!(catalog.list_schemas(None).len(), 5);
}
