//! Readers and writers at the same time.
//!
//! Searches never block on each other, and every response is internally
//! consistent even while the catalog changes underneath.

use crate::common::{assert_unique, demo, ids};
use catalog_search::{DeletePolicy, EntityType, SearchEngine, SearchRequest};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

#[test]
fn test_searches_stay_consistent_during_writes() {
    let catalog = demo();
    let engine = SearchEngine::new(&catalog);
    let done = AtomicBool::new(false);

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..200 {
                let column = catalog
                    .add_column(ids::RAW_ORDERS, &format!("order_note_{}", i), None)
                    .unwrap();
                if i % 3 == 0 {
                    catalog.delete_column(column).unwrap();
                }
                if i % 50 == 0 {
                    catalog
                        .update_table(ids::RAW_ORDERS, |t| t.name = format!("orders_v{}", i))
                        .unwrap();
                }
            }
            done.store(true, Ordering::SeqCst);
        });

        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::SeqCst) {
                    let response = engine
                        .search(&SearchRequest::new("order").page_size(100))
                        .unwrap();
                    assert_unique(&response.items);
                    assert!(response.items.len() <= 100);
                    assert_eq!(
                        response.total_pages,
                        response.total_count.div_ceil(100)
                    );
                    for pair in response.items.windows(2) {
                        assert!(pair[0].score >= pair[1].score);
                    }
                }
            });
        }
    });

    // 200 added, 67 deleted
    let final_response = engine
        .search(&SearchRequest::new("note").expand_parents(false).page_size(100))
        .unwrap();
    assert_eq!(final_response.total_count, 133);
}

#[test]
fn test_parallel_writers_get_distinct_ids() {
    let catalog = demo();
    let created: Vec<Vec<u64>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|w| {
                let catalog = &catalog;
                scope.spawn(move || {
                    (0..25)
                        .map(|i| {
                            catalog
                                .add_column(ids::AUTH_USERS, &format!("field_{}_{}", w, i), None)
                                .unwrap()
                                .get()
                        })
                        .collect()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let mut all: Vec<u64> = created.into_iter().flatten().collect();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), 100);

    let engine = SearchEngine::new(&catalog);
    let response = engine
        .search(&SearchRequest::new("field").expand_parents(false).page_size(100))
        .unwrap();
    assert_eq!(response.total_count, 100);
    assert!(response
        .items
        .iter()
        .all(|i| i.entity_type == EntityType::Column));
}

#[test]
fn test_cascade_delete_during_search() {
    let catalog = demo();
    let engine = SearchEngine::new(&catalog);

    thread::scope(|scope| {
        scope.spawn(|| {
            catalog.delete_schema(ids::RAW, DeletePolicy::Cascade).unwrap();
        });
        scope.spawn(|| {
            for _ in 0..50 {
                let response = engine.search(&SearchRequest::new("user")).unwrap();
                assert_unique(&response.items);
            }
        });
    });

    let response = engine.search(&SearchRequest::new("user")).unwrap();
    assert!(response.items.iter().all(|i| i.schema_id != ids::RAW));
}

#[test]
fn test_concurrent_renames_leave_documents_in_step() {
    let catalog = demo();

    thread::scope(|scope| {
        scope.spawn(|| {
            for i in 0..40 {
                catalog
                    .update_schema(ids::RAW, |s| s.name = format!("raw_{}", i))
                    .unwrap();
            }
        });
        scope.spawn(|| {
            for i in 0..40 {
                catalog
                    .update_table(ids::RAW_USERS, |t| t.name = format!("users_{}", i))
                    .unwrap();
            }
        });
        scope.spawn(|| {
            for i in 0..40 {
                catalog
                    .update_owner(ids::DATA_ENGINEERING, |o| o.name = format!("team_{}", i))
                    .unwrap();
            }
        });
    });

    let schema = catalog.schema(ids::RAW).unwrap();
    let table = catalog.table(ids::RAW_USERS).unwrap();
    assert_eq!((schema.name.as_str(), table.name.as_str()), ("raw_39", "users_39"));

    let docs = catalog.documents().snapshot();
    let subtree: Vec<_> = docs
        .iter()
        .filter(|d| d.context.table_id == Some(ids::RAW_USERS))
        .collect();
    assert!(subtree.len() > 1);
    for doc in subtree {
        assert_eq!(doc.context.schema_name, "raw_39");
        assert_eq!(doc.context.table_name.as_deref(), Some("users_39"));
        if doc.context.owner_id == Some(ids::DATA_ENGINEERING) {
            assert_eq!(doc.context.owner_name.as_deref(), Some("team_39"));
        }
    }
}
