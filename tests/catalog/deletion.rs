//! Delete policies and their effect on search.

use crate::common::{demo, ids, keys, query, search};
use catalog_search::{CatalogError, DeletePolicy, EntityKind, EntityType, SearchRequest};

#[test]
fn test_deleted_column_disappears_with_its_expansion() {
    let catalog = demo();
    catalog.delete_column(ids::AUTH_EMAIL).unwrap();

    let response = query(&catalog, "email");
    assert_eq!(
        keys(&response),
        vec![
            (EntityType::Column, ids::RAW_EMAIL.get()),
            (EntityType::Table, ids::RAW_USERS.get()),
        ]
    );
}

#[test]
fn test_restrict_refuses_tables_with_columns() {
    let catalog = demo();
    let err = catalog
        .delete_table(ids::AUTH_USERS, DeletePolicy::Restrict)
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::HasDependents {
            kind: EntityKind::Table,
            id: ids::AUTH_USERS.get(),
            count: 1,
        }
    );
    assert_eq!(query(&catalog, "email").total_count, 4);
}

#[test]
fn test_cascade_table_removes_columns() {
    let catalog = demo();
    catalog
        .delete_table(ids::AUTH_USERS, DeletePolicy::Cascade)
        .unwrap();
    assert!(catalog.column(ids::AUTH_EMAIL).is_none());
    assert_eq!(query(&catalog, "email").total_count, 2);
    assert_eq!(query(&catalog, "login").total_count, 0);
}

#[test]
fn test_cascade_schema_removes_everything_below() {
    let catalog = demo();
    let before = catalog.documents().len();
    catalog.delete_schema(ids::RAW, DeletePolicy::Cascade).unwrap();

    // raw: 1 schema, 3 tables, 12 columns
    assert_eq!(catalog.documents().len(), before - 16);
    let response = query(&catalog, "order");
    assert!(response.items.iter().all(|i| i.schema_id != ids::RAW));

    // the schema filter now names a missing schema
    let filtered = search(&catalog, SearchRequest::new("order").schema(ids::RAW));
    assert_eq!(filtered.total_count, 0);
}

#[test]
fn test_restrict_refuses_schemas_with_tables() {
    let catalog = demo();
    let err = catalog
        .delete_schema(ids::REPORTING, DeletePolicy::Restrict)
        .unwrap_err();
    assert!(matches!(err, CatalogError::HasDependents { count: 1, .. }));
}

#[test]
fn test_owner_cascade_detaches_tables() {
    let catalog = demo();
    let err = catalog
        .delete_owner(ids::ALICE, DeletePolicy::Restrict)
        .unwrap_err();
    assert!(matches!(err, CatalogError::HasDependents { .. }));

    catalog.delete_owner(ids::ALICE, DeletePolicy::Cascade).unwrap();
    let table = catalog.table(ids::AUTH_USERS).unwrap();
    assert_eq!(table.owner_id, None);

    let response = search(&catalog, SearchRequest::new("login").expand_parents(false));
    assert_eq!(response.items[0].owner_id, None);
    assert_eq!(response.items[0].owner_name, None);

    let filtered = search(&catalog, SearchRequest::new("email").owner(ids::ALICE));
    assert_eq!(filtered.total_count, 0);
}

#[test]
fn test_empty_schema_deletes_under_restrict() {
    let catalog = demo();
    let schema = catalog.add_schema("scratch", None).unwrap();
    assert_eq!(query(&catalog, "scratch").total_count, 1);
    catalog.delete_schema(schema, DeletePolicy::Restrict).unwrap();
    assert_eq!(query(&catalog, "scratch").total_count, 0);
}

#[test]
fn test_deleting_missing_entities() {
    let catalog = demo();
    let err = catalog
        .delete_column(catalog_search::ColumnId(999))
        .unwrap_err();
    assert_eq!(
        err,
        CatalogError::NotFound {
            kind: EntityKind::Column,
            id: 999,
        }
    );
}
