// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query language: words, phrases, boolean operators, grouping.
//!
//! ```text
//! user account           both words (implicit AND)
//! "user account"         exact phrase
//! user OR customer       either word
//! user -admin            user, but not admin
//! (user OR customer) AND email
//! ```
//!
//! Words are normalized with the same analyzer as documents, so `Users`
//! matches `user` and `accounts` matches `account`.

mod lexer;
mod parser;

pub use lexer::{lex, Lexeme};
pub use parser::{Expr, PhraseTerm, QueryParser, QueryTerm};

use crate::error::SearchError;

/// Query syntax examples shown by `catalog-search syntax`.
pub const EXAMPLES: &[(&str, &str)] = &[
    ("user", "Simple search"),
    ("user email", "Both words (AND)"),
    ("user OR customer", "Either word (OR)"),
    ("\"user account\"", "Exact phrase"),
    ("user -admin", "Exclude word"),
    ("(user OR customer) AND email", "Grouping with parentheses"),
    ("orders NOT staging", "Exclude with NOT"),
];

/// A parsed query: the original text plus its expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub text: String,
    /// `None` when every word was a stop word.
    pub expr: Option<Expr>,
}

impl Query {
    /// Parse query text.
    ///
    /// # Errors
    ///
    /// `SearchError::InvalidQuery` for blank input, unbalanced parentheses,
    /// dangling operators, empty groups and unterminated quotes.
    pub fn parse(text: &str) -> Result<Self, SearchError> {
        let expr = QueryParser::new(text)?.parse()?;
        Ok(Query {
            text: text.to_string(),
            expr,
        })
    }

    /// True if the query is valid but can match nothing.
    pub fn is_empty(&self) -> bool {
        self.expr.is_none()
    }
}
