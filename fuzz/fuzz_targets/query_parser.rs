// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the query parser.
//!
//! Any string either parses or comes back as `InvalidQuery`. A tree that
//! parses must print to text that parses back to the same tree.

#![no_main]

use catalog_search::{Query, SearchError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    match Query::parse(text) {
        Ok(query) => {
            if let Some(expr) = query.expr {
                let printed = expr.to_string();
                match Query::parse(&printed) {
                    Ok(again) => assert_eq!(
                        again.expr.as_ref(),
                        Some(&expr),
                        "{:?} printed as {:?}",
                        text,
                        printed
                    ),
                    Err(e) => panic!("{:?} printed as {:?}: {}", text, printed, e),
                }
            }
        }
        Err(SearchError::InvalidQuery { .. }) => {}
        Err(other) => panic!("parser returned {:?}", other),
    }
});
