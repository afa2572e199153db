// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the catalog-search command-line interface.
//!
//! `search` runs a query, `owners` and `schemas` list the values the search
//! filters accept, `seed` dumps the demo catalog as JSON (a starting point for
//! `--catalog` files), and `syntax` prints the query language cheat sheet.
//! Every command that reads a catalog falls back to the demo catalog when
//! `--catalog` is not given.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catalog-search",
    about = "Boolean full-text search over a metadata catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the catalog comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Catalog JSON file (owners, schemas, tables, columns). Defaults to the
    /// built-in demo catalog.
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search schemas, tables and columns
    Search {
        /// Query, e.g. `user -admin` or `"order date" OR revenue`
        query: String,

        #[command(flatten)]
        source: CatalogArgs,

        /// Search configuration JSON (weights, highlighting, page limits)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only results owned by this owner id (excludes schemas)
        #[arg(long)]
        owner: Option<u64>,

        /// Only results inside this schema id
        #[arg(long)]
        schema: Option<u64>,

        /// Page number, starting at 1
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Results per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Do not add parent tables of matching columns
        #[arg(long)]
        no_parents: bool,

        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },

    /// List owners (ids for `search --owner`)
    Owners {
        #[command(flatten)]
        source: CatalogArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List schemas (ids for `search --schema`)
    Schemas {
        #[command(flatten)]
        source: CatalogArgs,

        /// Only schemas holding at least one table of this owner
        #[arg(long)]
        owner: Option<u64>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the demo catalog as JSON
    Seed {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show query syntax examples
    Syntax,
}
