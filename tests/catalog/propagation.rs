//! Entity edits reach the search documents of the entity and its
//! descendants.

use crate::common::{demo, ids, query, search};
use catalog_search::{CatalogError, EntityType, SearchRequest};

fn raw_email_item(catalog: &catalog_search::Catalog) -> catalog_search::SearchResultItem {
    search(catalog, SearchRequest::new("email").expand_parents(false))
        .items
        .into_iter()
        .find(|i| i.entity_id == ids::RAW_EMAIL.get())
        .unwrap()
}

#[test]
fn test_table_rename_reaches_columns() {
    let catalog = demo();
    catalog
        .update_table(ids::RAW_USERS, |t| t.name = "members".to_string())
        .unwrap();

    let item = raw_email_item(&catalog);
    assert_eq!(item.table_name.as_deref(), Some("members"));

    let response = query(&catalog, "members");
    assert_eq!(response.items[0].entity_type, EntityType::Table);
    assert_eq!(response.items[0].entity_id, ids::RAW_USERS.get());
}

#[test]
fn test_schema_rename_reaches_tables_and_columns() {
    let catalog = demo();
    catalog
        .update_schema(ids::RAW, |s| s.name = "landing".to_string())
        .unwrap();

    let item = raw_email_item(&catalog);
    assert_eq!(item.schema_name, "landing");

    let response = search(&catalog, SearchRequest::new("order").schema(ids::RAW));
    assert!(!response.items.is_empty());
    assert!(response.items.iter().all(|i| i.schema_name == "landing"));
}

#[test]
fn test_owner_rename_reaches_owned_entities() {
    let catalog = demo();
    catalog
        .update_owner(ids::DATA_ENGINEERING, |o| o.name = "Platform".to_string())
        .unwrap();
    let item = raw_email_item(&catalog);
    assert_eq!(item.owner_name.as_deref(), Some("Platform"));
}

#[test]
fn test_description_edit_changes_matches() {
    let catalog = demo();
    assert_eq!(query(&catalog, "gdpr").total_count, 0);
    catalog
        .update_column(ids::AUTH_EMAIL, |c| {
            c.description = Some("Login address, subject to GDPR".to_string())
        })
        .unwrap();

    let response = search(&catalog, SearchRequest::new("gdpr").expand_parents(false));
    assert_eq!(response.total_count, 1);
    assert_eq!(
        response.items[0].description_highlighted,
        "Login address, subject to <mark>GDPR</mark>"
    );
}

#[test]
fn test_moving_a_table_updates_filters() {
    let catalog = demo();
    catalog
        .update_table(ids::RAW_USERS, |t| {
            t.schema_id = ids::AUTH;
            t.owner_id = Some(ids::ALICE);
        })
        .unwrap();

    let response = search(&catalog, SearchRequest::new("email").schema(ids::AUTH));
    let columns: Vec<u64> = response
        .items
        .iter()
        .filter(|i| i.entity_type == EntityType::Column)
        .map(|i| i.entity_id)
        .collect();
    assert_eq!(columns, vec![ids::RAW_EMAIL.get(), ids::AUTH_EMAIL.get()]);
    assert!(response
        .items
        .iter()
        .all(|i| i.owner_id == Some(ids::ALICE)));
}

#[test]
fn test_rejected_update_leaves_search_unchanged() {
    let catalog = demo();
    let before = query(&catalog, "email");

    let err = catalog
        .update_table(ids::RAW_USERS, |t| {
            t.name = "members".to_string();
            t.schema_id = catalog_search::SchemaId(999);
        })
        .unwrap_err();
    assert_eq!(err, CatalogError::MissingSchema(999));

    let err = catalog
        .update_column(ids::RAW_EMAIL, |c| c.name = "  ".to_string())
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidName { .. }));

    assert_eq!(query(&catalog, "email"), before);
    assert_eq!(query(&catalog, "members").total_count, 0);
}

#[test]
fn test_update_cannot_change_id() {
    let catalog = demo();
    let updated = catalog
        .update_column(ids::RAW_EMAIL, |c| c.id = catalog_search::ColumnId(77))
        .unwrap();
    assert_eq!(updated.id, ids::RAW_EMAIL);
    assert!(catalog.column(catalog_search::ColumnId(77)).is_none());
}

#[test]
fn test_new_entities_are_searchable_immediately() {
    let catalog = demo();
    let column = catalog
        .add_column(ids::AUTH_USERS, "password_hash", Some("Salted hash"))
        .unwrap();
    let response = search(&catalog, SearchRequest::new("password").expand_parents(false));
    assert_eq!(response.items.len(), 1);
    assert_eq!(response.items[0].entity_id, column.get());
    assert_eq!(response.items[0].table_name.as_deref(), Some("users"));
    assert_eq!(response.items[0].owner_name.as_deref(), Some("Alice"));
}
