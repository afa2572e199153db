// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recursive descent parser producing the query expression tree.
//!
//! Precedence, tightest first: negation, AND (explicit or implicit), OR.
//! Parentheses override it.
//!
//! ```text
//! or    := and ("OR" and)*
//! and   := unary (["AND"] unary)*
//! unary := ("NOT" | "-") unary | primary
//! primary := WORD | PHRASE | "(" or ")"
//! ```
//!
//! Leaves are analyzed while parsing, so the tree only ever holds normalized
//! terms. A word that analyzes to nothing (a stop word) vanishes, and the
//! operators around it collapse; syntax errors are still reported because
//! they are detected on lexemes, before analysis.

use super::lexer::{lex, Lexeme};
use crate::analysis::analyze;
use crate::error::SearchError;
use serde::Serialize;
use std::fmt;

/// A single query word: the normalized term that is matched, and the word
/// as it was typed, which is what `Display` writes back.
///
/// The surface word is needed because a stem does not always reparse to
/// itself (`abouts` stems to the stop word `about`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryTerm {
    pub term: String,
    pub surface: String,
}

/// One term of a phrase, with its word offset from the phrase start.
///
/// Offsets are usually `0, 1, 2, ...`; a stop word inside the phrase leaves
/// a gap (`"date of report"` → `date@0`, `report@2`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhraseTerm {
    pub offset: u32,
    pub term: String,
    pub surface: String,
}

/// Stop word written into each gap of a phrase so offsets survive printing.
const GAP_FILLER: &str = "the";

/// Parsed query expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Expr {
    Term(QueryTerm),
    Phrase(Vec<PhraseTerm>),
    And(Vec<Expr>),
    Or(Vec<Expr>),
    Not(Box<Expr>),
}

impl Expr {
    /// Leaves that sit under an even number of `Not` nodes, in tree order.
    /// These are the only leaves that can contribute score or highlights.
    pub fn positive_leaves(&self) -> Vec<&Expr> {
        let mut leaves = Vec::new();
        collect_leaves(self, true, &mut leaves);
        leaves
    }
}

fn collect_leaves<'a>(expr: &'a Expr, positive: bool, out: &mut Vec<&'a Expr>) {
    match expr {
        Expr::Term(_) | Expr::Phrase(_) => {
            if positive {
                out.push(expr);
            }
        }
        Expr::And(children) | Expr::Or(children) => {
            for child in children {
                collect_leaves(child, positive, out);
            }
        }
        Expr::Not(inner) => collect_leaves(inner, !positive, out),
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Term(leaf) => write!(f, "{}", leaf.surface),
            Expr::Phrase(terms) => {
                write!(f, "\"")?;
                for (i, t) in terms.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                        // one filler per missing offset
                        for _ in terms[i - 1].offset + 1..t.offset {
                            write!(f, "{} ", GAP_FILLER)?;
                        }
                    }
                    write!(f, "{}", t.surface)?;
                }
                write!(f, "\"")
            }
            Expr::Not(inner) => write!(f, "-{}", inner),
            Expr::And(nodes) => write_joined(f, nodes, " AND "),
            Expr::Or(nodes) => write_joined(f, nodes, " OR "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, nodes: &[Expr], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, node) in nodes.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", node)?;
    }
    write!(f, ")")
}

/// Turn analyzed text into a leaf: one term, a phrase, or nothing.
fn leaf_from_text(text: &str) -> Option<Expr> {
    let analyzed: Vec<(u32, String, &str)> = analyze(text)
        .into_iter()
        .filter_map(|word| {
            let surface = &text[word.start..word.end];
            word.term.map(|term| (word.position, term, surface))
        })
        .collect();
    let first = analyzed.first()?.0;
    if analyzed.len() == 1 {
        return analyzed.into_iter().next().map(|(_, term, surface)| {
            Expr::Term(QueryTerm {
                term,
                surface: surface.to_string(),
            })
        });
    }
    Some(Expr::Phrase(
        analyzed
            .into_iter()
            .map(|(position, term, surface)| PhraseTerm {
                offset: position - first,
                term,
                surface: surface.to_string(),
            })
            .collect(),
    ))
}

/// Build an And/Or node from the surviving operands, flattening nested
/// nodes of the same kind.
fn combine(parts: Vec<Expr>, is_and: bool) -> Option<Expr> {
    let mut flat = Vec::with_capacity(parts.len());
    for part in parts {
        match (part, is_and) {
            (Expr::And(children), true) | (Expr::Or(children), false) => flat.extend(children),
            (other, _) => flat.push(other),
        }
    }
    match flat.len() {
        0 => None,
        1 => flat.pop(),
        _ if is_and => Some(Expr::And(flat)),
        _ => Some(Expr::Or(flat)),
    }
}

pub struct QueryParser {
    lexemes: Vec<Lexeme>,
    pos: usize,
}

impl QueryParser {
    pub fn new(input: &str) -> Result<Self, SearchError> {
        Ok(QueryParser {
            lexemes: lex(input)?,
            pos: 0,
        })
    }

    fn peek(&self) -> Option<&Lexeme> {
        self.lexemes.get(self.pos)
    }

    fn consume(&mut self) -> Option<Lexeme> {
        let lexeme = self.lexemes.get(self.pos).cloned();
        if lexeme.is_some() {
            self.pos += 1;
        }
        lexeme
    }

    /// Parse the whole input. `Ok(None)` means the query was well-formed
    /// but every word in it was a stop word.
    pub fn parse(mut self) -> Result<Option<Expr>, SearchError> {
        if self.lexemes.is_empty() {
            return Err(SearchError::invalid_query("empty query"));
        }
        let expr = self.parse_or()?;
        if let Some(extra) = self.peek() {
            return Err(match extra {
                Lexeme::RParen => {
                    SearchError::invalid_query("unbalanced parentheses: unexpected ')'")
                }
                other => SearchError::invalid_query(format!("unexpected {}", other.describe())),
            });
        }
        Ok(expr)
    }

    fn parse_or(&mut self) -> Result<Option<Expr>, SearchError> {
        let mut branches = Vec::new();
        branches.extend(self.parse_and()?);
        while self.peek() == Some(&Lexeme::Or) {
            self.consume();
            branches.extend(self.parse_and()?);
        }
        Ok(combine(branches, false))
    }

    fn parse_and(&mut self) -> Result<Option<Expr>, SearchError> {
        let mut parts = Vec::new();
        parts.extend(self.parse_unary()?);
        loop {
            match self.peek() {
                Some(Lexeme::And) => {
                    self.consume();
                    parts.extend(self.parse_unary()?);
                }
                Some(lexeme) if lexeme.starts_operand() => {
                    parts.extend(self.parse_unary()?);
                }
                _ => break,
            }
        }
        Ok(combine(parts, true))
    }

    fn parse_unary(&mut self) -> Result<Option<Expr>, SearchError> {
        match self.peek() {
            Some(Lexeme::Not) | Some(Lexeme::Minus) => {
                self.consume();
                let inner = self.parse_unary()?;
                Ok(inner.map(|expr| match expr {
                    Expr::Not(double) => *double,
                    other => Expr::Not(Box::new(other)),
                }))
            }
            _ => self.parse_primary(),
        }
    }

    fn parse_primary(&mut self) -> Result<Option<Expr>, SearchError> {
        match self.consume() {
            Some(Lexeme::Word(word)) => Ok(leaf_from_text(&word)),
            Some(Lexeme::Phrase(phrase)) => Ok(leaf_from_text(&phrase)),
            Some(Lexeme::LParen) => {
                if self.peek() == Some(&Lexeme::RParen) {
                    return Err(SearchError::invalid_query("empty group '()'"));
                }
                let inner = self.parse_or()?;
                match self.consume() {
                    Some(Lexeme::RParen) => Ok(inner),
                    _ => Err(SearchError::invalid_query(
                        "unbalanced parentheses: missing ')'",
                    )),
                }
            }
            Some(Lexeme::RParen) => Err(SearchError::invalid_query(
                "unbalanced parentheses: unexpected ')'",
            )),
            Some(op @ (Lexeme::And | Lexeme::Or)) => Err(SearchError::invalid_query(format!(
                "dangling operator {}",
                op.describe()
            ))),
            // NOT and '-' are handled by parse_unary
            Some(other) => Err(SearchError::invalid_query(format!(
                "unexpected {}",
                other.describe()
            ))),
            None => Err(SearchError::invalid_query(
                "dangling operator: query ends without an operand",
            )),
        }
    }
}
