// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search document construction.
//!
//! An entity's name becomes weight class A, its description weight class B.
//! Both are analyzed with the shared chain in [`crate::analysis`] and stored
//! as `term → positions` maps, which is all the matcher needs for terms and
//! phrases alike.

pub mod document;
pub mod parallel;

pub use document::*;
pub use parallel::*;
