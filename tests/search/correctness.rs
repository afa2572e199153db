//! Query semantics on the demo catalog.

use crate::common::{demo, ids, keys, query, search};
use catalog_search::{EntityType, SearchEngine, SearchError, SearchRequest};

#[test]
fn test_order_query_full_ranking() {
    let catalog = demo();
    let response = query(&catalog, "order");

    let names: Vec<&str> = response.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            // 5.0: one name hit plus one description hit
            "fact_orders",
            "order_count",
            "order_date",
            "order_id",
            "order_key",
            "orders",
            // 4.0: daily_sales, expanded from order_count
            "daily_sales",
            // 1.0: description only
            "quantity",
            "revenue",
            "total_amount",
            "user_id",
        ]
    );
    assert_eq!(response.total_count, 11);
    assert_eq!(response.total_pages, 1);
}

#[test]
fn test_email_matches_both_columns_and_parents() {
    let catalog = demo();
    let response = query(&catalog, "email");
    assert_eq!(
        keys(&response),
        vec![
            (EntityType::Column, ids::RAW_EMAIL.get()),
            (EntityType::Column, ids::AUTH_EMAIL.get()),
            (EntityType::Table, ids::RAW_USERS.get()),
            (EntityType::Table, ids::AUTH_USERS.get()),
        ]
    );
    assert_eq!(response.items[0].score, 5.0);
    assert_eq!(response.items[1].score, 4.0);
}

#[test]
fn test_query_is_case_insensitive_and_stemmed() {
    let catalog = demo();
    assert_eq!(keys(&query(&catalog, "EMAIL")), keys(&query(&catalog, "email")));
    assert_eq!(keys(&query(&catalog, "Orders")), keys(&query(&catalog, "order")));
}

#[test]
fn test_negation_removes_documents() {
    let catalog = demo();
    let all = query(&catalog, "revenue");
    let names: Vec<&str> = all.items.iter().map(|i| i.name.as_str()).collect();
    assert!(names.contains(&"total_revenue"));

    let response = query(&catalog, "revenue -total");
    let names: Vec<&str> = response.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["revenue", "fact_orders"]);

    let spelled = query(&catalog, "revenue NOT total");
    assert_eq!(keys(&spelled), keys(&response));
}

#[test]
fn test_conjunction_requires_every_term() {
    let catalog = demo();
    let response = search(
        &catalog,
        SearchRequest::new("unique AND identifier").expand_parents(false),
    );
    let names: Vec<&str> = response.items.iter().map(|i| i.name.as_str()).collect();
    // "Unique identifier for each user", "Unique order identifier",
    // "Unique product identifier"
    assert_eq!(names, vec!["order_id", "product_id", "user_id"]);
}

#[test]
fn test_or_and_grouping() {
    let catalog = demo();
    let either = search(
        &catalog,
        SearchRequest::new("email OR revenue").expand_parents(false),
    );
    assert_eq!(either.total_count, 4);

    let grouped = search(
        &catalog,
        SearchRequest::new("(email OR revenue) -total -login").expand_parents(false),
    );
    let names: Vec<&str> = grouped.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["email", "revenue"]);
    assert_eq!(grouped.items[0].entity_id, ids::RAW_EMAIL.get());
}

#[test]
fn test_phrase_needs_adjacent_words() {
    let catalog = demo();
    let response = search(
        &catalog,
        SearchRequest::new("\"date of sales\"").expand_parents(false),
    );
    assert_eq!(keys(&response), vec![(EntityType::Column, ids::REPORT_DATE.get())]);
    assert_eq!(response.items[0].score, 1.0);

    let loose = search(
        &catalog,
        SearchRequest::new("\"date report\"").expand_parents(false),
    );
    assert_eq!(loose.total_count, 0);
}

#[test]
fn test_stop_word_query_returns_nothing() {
    let catalog = demo();
    let response = query(&catalog, "the of");
    assert!(response.items.is_empty());
    assert_eq!(response.total_count, 0);
    assert_eq!(response.total_pages, 0);
}

#[test]
fn test_malformed_queries_are_rejected() {
    let catalog = demo();
    let engine = SearchEngine::new(&catalog);
    for text in ["", "   ", "(email", "email)", "email AND", "OR email", "()", "\"email"] {
        let err = engine.search(&SearchRequest::new(text)).unwrap_err();
        assert!(
            matches!(err, SearchError::InvalidQuery { .. }),
            "{:?} gave {:?}",
            text,
            err
        );
    }
}

#[test]
fn test_response_echoes_query() {
    let catalog = demo();
    let response = query(&catalog, "  email ");
    assert_eq!(response.query, "  email ");
}
