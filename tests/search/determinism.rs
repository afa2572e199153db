//! Identical requests give identical responses, from any thread.

use crate::common::{demo, search, wide_catalog};
use catalog_search::{SearchEngine, SearchRequest};
use std::thread;

const QUERIES: &[&str] = &["user", "order", "id OR key", "\"order date\"", "report -daily"];

#[test]
fn test_repeated_search_is_identical() {
    let catalog = demo();
    for text in QUERIES {
        let request = SearchRequest::new(*text).page_size(5);
        let first = search(&catalog, request.clone());
        for _ in 0..10 {
            assert_eq!(search(&catalog, request.clone()), first, "{:?}", text);
        }
    }
}

#[test]
fn test_parallel_readers_agree() {
    let catalog = demo();
    let engine = SearchEngine::new(&catalog);
    let expected: Vec<_> = QUERIES
        .iter()
        .map(|q| engine.search(&SearchRequest::new(*q)).unwrap())
        .collect();

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                for _ in 0..20 {
                    for (q, want) in QUERIES.iter().zip(&expected) {
                        let got = engine.search(&SearchRequest::new(*q)).unwrap();
                        assert_eq!(&got, want);
                    }
                }
            });
        }
    });
}

#[test]
fn test_equal_scores_order_is_stable_across_pages() {
    let (catalog, ..) = wide_catalog(25);
    let request = SearchRequest::new("revenue").expand_parents(false);
    let a = search(&catalog, request.clone().page_size(25));
    let b = search(&catalog, request.page_size(25));
    let names: Vec<&str> = a.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names[0], "revenue_0");
    assert_eq!(names[1], "revenue_1");
    assert_eq!(names[2], "revenue_10");
    assert_eq!(a, b);
}
