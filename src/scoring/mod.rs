// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! The name field dominates. Each name occurrence is worth four description
//! occurrences by default, and a table that only shows up because one of its
//! columns matched gets a damped copy of that column's score.

mod core;
pub mod ranking;

pub use core::*;
pub use ranking::{compare_results, Ranked};
