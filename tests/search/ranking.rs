//! Score ordering and tie-breaks.

use crate::common::{query, search};
use catalog_search::{
    Catalog, EntityType, SearchConfig, SearchEngine, SearchRequest, SearchResponse,
};

fn shop() -> Catalog {
    let catalog = Catalog::new();
    let schema = catalog.add_schema("shop", None).unwrap();
    let orders = catalog.add_table(schema, "orders", None, None).unwrap();
    catalog
        .add_column(orders, "status", Some("Status of the order"))
        .unwrap();
    catalog
}

#[test]
fn test_name_hit_outranks_description_hit() {
    let catalog = shop();
    let response = search(&catalog, SearchRequest::new("order").expand_parents(false));
    let names: Vec<&str> = response.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["orders", "status"]);
    assert_eq!(response.items[0].score, 4.0);
    assert_eq!(response.items[1].score, 1.0);
}

#[test]
fn test_occurrences_add_up() {
    let catalog = Catalog::new();
    let schema = catalog.add_schema("misc", None).unwrap();
    let table = catalog.add_table(schema, "things", None, None).unwrap();
    catalog
        .add_column(table, "alpha", Some("alpha alpha alpha"))
        .unwrap();
    let response = search(&catalog, SearchRequest::new("alpha").expand_parents(false));
    assert_eq!(response.items[0].score, 7.0);
}

#[test]
fn test_ties_break_on_case_insensitive_name() {
    let catalog = Catalog::new();
    let schema = catalog.add_schema("misc", None).unwrap();
    let table = catalog.add_table(schema, "things", None, None).unwrap();
    for name in ["Beta", "alpha", "Gamma"] {
        catalog
            .add_column(table, name, Some("tagged widget"))
            .unwrap();
    }
    let response = search(&catalog, SearchRequest::new("widget").expand_parents(false));
    let names: Vec<&str> = response.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "Beta", "Gamma"]);
}

#[test]
fn test_ties_on_name_break_on_type_then_id() {
    let catalog = Catalog::new();
    let schema = catalog.add_schema("events", None).unwrap();
    let events = catalog.add_table(schema, "events", None, None).unwrap();
    let other = catalog.add_table(schema, "log", None, None).unwrap();
    let first = catalog.add_column(other, "events", None).unwrap();
    let second = catalog.add_column(events, "events", None).unwrap();

    let response = search(&catalog, SearchRequest::new("events").expand_parents(false));
    let keys: Vec<(EntityType, u64)> = response
        .items
        .iter()
        .map(|i| (i.entity_type, i.entity_id))
        .collect();
    assert_eq!(
        keys,
        vec![
            (EntityType::Column, first.get()),
            (EntityType::Column, second.get()),
            (EntityType::Schema, schema.get()),
            (EntityType::Table, events.get()),
        ]
    );
}

#[test]
fn test_custom_weights_change_ranking() {
    let catalog = shop();
    let mut config = SearchConfig::default();
    config.scoring.name_weight = 10.0;
    config.scoring.description_weight = 3.0;
    let engine = SearchEngine::with_config(&catalog, config);
    let response: SearchResponse = engine
        .search(&SearchRequest::new("order").expand_parents(false))
        .unwrap();
    assert_eq!(response.items[0].score, 10.0);
    assert_eq!(response.items[1].score, 3.0);
}

#[test]
fn test_scores_never_increase_down_the_list() {
    let catalog = crate::common::demo();
    for text in ["user", "order", "id", "date OR report", "product -name"] {
        let response = query(&catalog, text);
        for pair in response.items.windows(2) {
            assert!(
                pair[0].score >= pair[1].score,
                "{:?}: {} before {}",
                text,
                pair[0].score,
                pair[1].score
            );
        }
    }
}
