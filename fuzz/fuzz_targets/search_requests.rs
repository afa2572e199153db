// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for whole search requests against the demo catalog.
//!
//! Arbitrary text, filters and paging. The engine must answer with a page
//! that respects its size and the exact-count invariants, or with an error.

#![no_main]

use arbitrary::Arbitrary;
use catalog_search::{demo_catalog, Catalog, OwnerId, SchemaId, SearchEngine, SearchRequest};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    owner: Option<u8>,
    schema: Option<u8>,
    page: u16,
    page_size: Option<u8>,
    expand_parents: bool,
}

fuzz_target!(|input: Input| {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    let catalog = CATALOG.get_or_init(|| demo_catalog().expect("demo catalog loads"));
    let engine = SearchEngine::new(catalog);

    let mut request = SearchRequest::new(input.text)
        .page(input.page as usize)
        .expand_parents(input.expand_parents);
    if let Some(size) = input.page_size {
        request = request.page_size(size as usize);
    }
    if let Some(owner) = input.owner {
        request = request.owner(OwnerId(owner as u64));
    }
    if let Some(schema) = input.schema {
        request = request.schema(SchemaId(schema as u64));
    }

    if let Ok(response) = engine.search(&request) {
        assert!(response.items.len() <= response.page_size);
        assert_eq!(
            response.total_pages,
            response.total_count.div_ceil(response.page_size)
        );
        assert!(response.total_count <= catalog.documents().len());
    }
});
