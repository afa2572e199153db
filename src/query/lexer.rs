// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query lexer: splits raw query text into words, phrases and operators.

use crate::error::SearchError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lexeme {
    Word(String),
    Phrase(String),
    LParen,
    RParen,
    And,
    Or,
    /// The `NOT` keyword.
    Not,
    /// A `-` attached to the following token.
    Minus,
}

impl Lexeme {
    /// Whether this lexeme can start an operand.
    pub fn starts_operand(&self) -> bool {
        matches!(
            self,
            Lexeme::Word(_) | Lexeme::Phrase(_) | Lexeme::LParen | Lexeme::Not | Lexeme::Minus
        )
    }

    pub fn describe(&self) -> String {
        match self {
            Lexeme::Word(w) => format!("word {:?}", w),
            Lexeme::Phrase(p) => format!("phrase {:?}", p),
            Lexeme::LParen => "'('".to_string(),
            Lexeme::RParen => "')'".to_string(),
            Lexeme::And => "AND".to_string(),
            Lexeme::Or => "OR".to_string(),
            Lexeme::Not => "NOT".to_string(),
            Lexeme::Minus => "'-'".to_string(),
        }
    }
}

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && c != '(' && c != ')' && c != '"'
}

/// Split a query string into lexemes.
///
/// Keywords are case-insensitive and only recognised as whole words. A `-`
/// negates only when glued to the next token (`-admin`, `-"a b"`, `-(a)`);
/// otherwise it is part of a word.
pub fn lex(input: &str) -> Result<Vec<Lexeme>, SearchError> {
    let chars: Vec<char> = input.chars().collect();
    let mut lexemes = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                lexemes.push(Lexeme::LParen);
                i += 1;
            }
            ')' => {
                lexemes.push(Lexeme::RParen);
                i += 1;
            }
            '"' => {
                let start = i + 1;
                let Some(len) = chars[start..].iter().position(|&ch| ch == '"') else {
                    return Err(SearchError::invalid_query("unterminated phrase quote"));
                };
                let phrase: String = chars[start..start + len].iter().collect();
                lexemes.push(Lexeme::Phrase(phrase));
                i = start + len + 1;
            }
            '-' if chars
                .get(i + 1)
                .is_some_and(|&next| !next.is_whitespace() && next != ')') =>
            {
                lexemes.push(Lexeme::Minus);
                i += 1;
            }
            _ => {
                let start = i;
                while i < chars.len() && is_word_char(chars[i]) {
                    i += 1;
                }
                let word: String = chars[start..i].iter().collect();
                let lexeme = if word.eq_ignore_ascii_case("and") {
                    Lexeme::And
                } else if word.eq_ignore_ascii_case("or") {
                    Lexeme::Or
                } else if word.eq_ignore_ascii_case("not") {
                    Lexeme::Not
                } else {
                    Lexeme::Word(word)
                };
                lexemes.push(lexeme);
            }
        }
    }

    Ok(lexemes)
}
