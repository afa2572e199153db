//! `<mark>` highlighting of names and description fragments.

use crate::common::{demo, ids, query, search};
use catalog_search::{Catalog, EntityType, SearchConfig, SearchEngine, SearchRequest};

fn long_description(hits: &[usize], len: usize) -> String {
    (0..len)
        .map(|i| {
            if hits.contains(&i) {
                "needle".to_string()
            } else {
                format!("w{}", i)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn catalog_with_description(description: &str) -> Catalog {
    let catalog = Catalog::new();
    let schema = catalog.add_schema("docs", None).unwrap();
    let table = catalog.add_table(schema, "pages", None, None).unwrap();
    catalog.add_column(table, "body", Some(description)).unwrap();
    catalog
}

#[test]
fn test_direct_match_is_marked_in_name_and_description() {
    let catalog = demo();
    let response = query(&catalog, "email");
    let column = &response.items[0];
    assert_eq!(column.entity_id, ids::RAW_EMAIL.get());
    assert_eq!(column.name_highlighted, "<mark>email</mark>");
    assert_eq!(column.description_highlighted, "User <mark>email</mark> address");
    assert_eq!(column.description.as_deref(), Some("User email address"));
}

#[test]
fn test_expanded_parent_is_not_marked() {
    let catalog = demo();
    let response = query(&catalog, "email");
    let table = response
        .items
        .iter()
        .find(|i| i.entity_type == EntityType::Table && i.entity_id == ids::RAW_USERS.get())
        .unwrap();
    assert_eq!(table.name_highlighted, "users");
    assert_eq!(
        table.description_highlighted,
        "User account information and profiles"
    );
}

#[test]
fn test_stemmed_match_marks_surface_word() {
    let catalog = demo();
    let response = search(&catalog, SearchRequest::new("user").expand_parents(false));
    let raw_users = response
        .items
        .iter()
        .find(|i| i.entity_type == EntityType::Table && i.entity_id == ids::RAW_USERS.get())
        .unwrap();
    assert_eq!(raw_users.name_highlighted, "<mark>users</mark>");
    assert_eq!(
        raw_users.description_highlighted,
        "<mark>User</mark> account information and profiles"
    );
}

#[test]
fn test_phrase_is_marked_as_one_span() {
    let catalog = demo();
    let response = search(
        &catalog,
        SearchRequest::new("\"date of sales\"").expand_parents(false),
    );
    assert_eq!(
        response.items[0].description_highlighted,
        "<mark>Date of sales</mark> report"
    );
}

#[test]
fn test_negated_terms_are_not_marked() {
    let catalog = demo();
    let response = search(
        &catalog,
        SearchRequest::new("email -login").expand_parents(false),
    );
    assert_eq!(response.total_count, 1);
    assert!(!response.items[0].description_highlighted.contains("login"));
}

#[test]
fn test_distant_matches_become_fragments() {
    let description = long_description(&[0, 100, 200, 300], 320);
    let catalog = catalog_with_description(&description);
    let response = search(&catalog, SearchRequest::new("needle").expand_parents(false));
    let highlighted = &response.items[0].description_highlighted;

    // four hits, three fragments kept
    assert_eq!(highlighted.matches(" ... ").count(), 2);
    assert_eq!(highlighted.matches("<mark>needle</mark>").count(), 3);
    assert!(highlighted.starts_with("<mark>needle</mark> w1"));
    assert!(!highlighted.contains("w301"));
}

#[test]
fn test_fragment_is_at_most_max_words() {
    let description = long_description(&[60], 200);
    let catalog = catalog_with_description(&description);
    let response = search(&catalog, SearchRequest::new("needle").expand_parents(false));
    let highlighted = &response.items[0].description_highlighted;
    assert_eq!(highlighted.split_whitespace().count(), 50);
    assert!(highlighted.contains("<mark>needle</mark>"));
    assert!(!highlighted.contains(" ... "));
}

#[test]
fn test_description_without_hit_is_truncated() {
    let description = long_description(&[], 80);
    let catalog = Catalog::new();
    let schema = catalog.add_schema("docs", None).unwrap();
    let table = catalog.add_table(schema, "pages", None, None).unwrap();
    catalog.add_column(table, "needle", Some(&description)).unwrap();

    let response = search(&catalog, SearchRequest::new("needle").expand_parents(false));
    let item = &response.items[0];
    assert_eq!(item.name_highlighted, "<mark>needle</mark>");
    assert_eq!(item.description_highlighted.split_whitespace().count(), 50);
    assert!(item.description_highlighted.starts_with("w0 w1"));
}

#[test]
fn test_custom_markers() {
    let catalog = demo();
    let mut config = SearchConfig::default();
    config.highlight.start_sel = "[".to_string();
    config.highlight.stop_sel = "]".to_string();
    let engine = SearchEngine::with_config(&catalog, config);
    let response = engine.search(&SearchRequest::new("email")).unwrap();
    assert_eq!(response.items[0].name_highlighted, "[email]");
}

#[test]
fn test_missing_description_highlights_to_empty() {
    let catalog = Catalog::new();
    let schema = catalog.add_schema("docs", None).unwrap();
    let table = catalog.add_table(schema, "pages", None, None).unwrap();
    catalog.add_column(table, "slug", None).unwrap();
    let response = search(&catalog, SearchRequest::new("slug").expand_parents(false));
    assert_eq!(response.items[0].description_highlighted, "");
    assert_eq!(response.items[0].description, None);
}

#[test]
fn test_short_description_keeps_its_punctuation() {
    let catalog = catalog_with_description("(Legacy) user email address.");
    let response = search(&catalog, SearchRequest::new("email").expand_parents(false));
    assert_eq!(
        response.items[0].description_highlighted,
        "(Legacy) user <mark>email</mark> address."
    );

    let response = search(&catalog, SearchRequest::new("body").expand_parents(false));
    assert_eq!(
        response.items[0].description_highlighted,
        "(Legacy) user email address."
    );
}
