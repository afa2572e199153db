//! Owner and schema filters.

use crate::common::{demo, ids, keys, placement, query, search};
use catalog_search::{EntityType, OwnerId, SchemaId, SearchRequest};

#[test]
fn test_schema_filter_keeps_only_that_schema() {
    let catalog = demo();
    let response = search(&catalog, SearchRequest::new("email").schema(ids::AUTH));
    assert_eq!(
        keys(&response),
        vec![
            (EntityType::Column, ids::AUTH_EMAIL.get()),
            (EntityType::Table, ids::AUTH_USERS.get()),
        ]
    );
}

#[test]
fn test_owner_filter_keeps_owned_tables_and_their_columns() {
    let catalog = demo();
    let response = search(
        &catalog,
        SearchRequest::new("email").owner(ids::DATA_ENGINEERING),
    );
    assert_eq!(
        keys(&response),
        vec![
            (EntityType::Column, ids::RAW_EMAIL.get()),
            (EntityType::Table, ids::RAW_USERS.get()),
        ]
    );
}

#[test]
fn test_owner_filter_excludes_schemas() {
    let catalog = demo();
    // "analytics" names a schema owned by nobody and tables owned by Analytics
    let unfiltered = query(&catalog, "analytics");
    assert!(unfiltered
        .items
        .iter()
        .any(|i| i.entity_type == EntityType::Schema));

    let response = search(&catalog, SearchRequest::new("analytics").owner(ids::ANALYTICS));
    assert!(!response.items.is_empty());
    for item in &response.items {
        assert_ne!(item.entity_type, EntityType::Schema);
        assert_eq!(item.owner_id, Some(ids::ANALYTICS));
    }
}

#[test]
fn test_combined_filters_are_exact() {
    let catalog = demo();
    let request = SearchRequest::new("user OR order")
        .owner(ids::ANALYTICS)
        .schema(ids::ANALYTICS_SCHEMA);
    let response = search(&catalog, request);
    assert!(!response.items.is_empty());
    for item in &response.items {
        let (owner, schema, _) = placement(item);
        assert_eq!(owner, Some(ids::ANALYTICS));
        assert_eq!(schema, ids::ANALYTICS_SCHEMA);
    }
}

#[test]
fn test_filter_on_missing_entity_gives_empty_page() {
    let catalog = demo();
    let by_owner = search(&catalog, SearchRequest::new("email").owner(OwnerId(404)));
    assert_eq!(by_owner.total_count, 0);
    assert!(by_owner.items.is_empty());

    let by_schema = search(&catalog, SearchRequest::new("email").schema(SchemaId(404)));
    assert_eq!(by_schema.total_count, 0);
    assert_eq!(by_schema.total_pages, 0);
}

#[test]
fn test_filter_with_no_matches_in_scope() {
    let catalog = demo();
    // Product owns only raw.products
    let response = search(&catalog, SearchRequest::new("email").owner(ids::PRODUCT));
    assert_eq!(response.total_count, 0);
}
