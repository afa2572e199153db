// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use catalog_search::catalog::seed::demo_snapshot;
use catalog_search::query::EXAMPLES;
use catalog_search::{
    demo_catalog, Catalog, CatalogSnapshot, HighlightConfig, OwnerId, SchemaId, SearchConfig,
    SearchEngine, SearchRequest, SearchResponse,
};
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::display::{self, Role, BOLD, DIM};
use cli::{CatalogArgs, Cli, Commands};

fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(e) = run(cli.command) {
        eprintln!("❌ {}", display::themed(Role::Error, &[], &format!("{:#}", e)));
        std::process::exit(1);
    }
}

/// Log to stderr so `--json` output stays machine-readable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            query,
            source,
            config,
            owner,
            schema,
            page,
            page_size,
            no_parents,
            json,
        } => {
            let catalog = load_catalog(&source)?;
            let config = match config {
                Some(path) => SearchConfig::from_file(&path)
                    .with_context(|| format!("failed to load config {}", path.display()))?,
                None => SearchConfig::default(),
            };

            let mut request = SearchRequest::new(query)
                .page(page)
                .expand_parents(!no_parents);
            if let Some(size) = page_size {
                request = request.page_size(size);
            }
            if let Some(id) = owner {
                request = request.owner(OwnerId(id));
            }
            if let Some(id) = schema {
                request = request.schema(SchemaId(id));
            }

            let engine = SearchEngine::with_config(&catalog, config);
            let response = engine.search(&request)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_response(&response, &engine.config().highlight);
            }
        }
        Commands::Owners { source, json } => {
            let catalog = load_catalog(&source)?;
            let owners = catalog.list_owners();
            if json {
                println!("{}", serde_json::to_string_pretty(&owners)?);
            } else {
                display::section_top("OWNERS");
                for owner in &owners {
                    display::row(&format!(
                        "  {:>4}  {:<28} {}",
                        owner.id.get(),
                        display::truncate(&owner.name, 28),
                        display::themed(Role::Muted, &[], &owner.email)
                    ));
                }
                if owners.is_empty() {
                    display::row("  (none)");
                }
                display::section_bot();
            }
        }
        Commands::Schemas {
            source,
            owner,
            json,
        } => {
            let catalog = load_catalog(&source)?;
            let schemas = catalog.list_schemas(owner.map(OwnerId));
            if json {
                println!("{}", serde_json::to_string_pretty(&schemas)?);
            } else {
                display::section_top("SCHEMAS");
                for schema in &schemas {
                    let description = schema.description.as_deref().unwrap_or("");
                    display::row(&format!(
                        "  {:>4}  {:<20} {}",
                        schema.id.get(),
                        display::truncate(&schema.name, 20),
                        display::themed(Role::Muted, &[], &display::truncate(description, 50))
                    ));
                }
                if schemas.is_empty() {
                    display::row("  (none)");
                }
                display::section_bot();
            }
        }
        Commands::Seed { output } => {
            let json = serde_json::to_string_pretty(&demo_snapshot())?;
            match output {
                Some(path) => {
                    fs::write(&path, json)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("✓ demo catalog written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Commands::Syntax => print_syntax(),
    }
    Ok(())
}

fn load_catalog(source: &CatalogArgs) -> Result<Catalog> {
    match &source.catalog {
        Some(path) => load_catalog_file(path),
        None => demo_catalog().context("failed to build the demo catalog"),
    }
}

fn load_catalog_file(path: &Path) -> Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let snapshot: CatalogSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse catalog {}", path.display()))?;
    Catalog::from_snapshot(snapshot)
        .with_context(|| format!("invalid catalog {}", path.display()))
}

fn print_response(response: &SearchResponse, highlight: &HighlightConfig) {
    display::query_banner(&response.query);

    if response.items.is_empty() {
        display::section_top("NO RESULTS");
        let hint = if response.total_count > 0 {
            format!(
                "  page {} is past the last page ({})",
                response.page, response.total_pages
            )
        } else {
            "  nothing matched; try `catalog-search syntax`".to_string()
        };
        display::row(&hint);
        display::section_bot();
        return;
    }

    let first = (response.page - 1) * response.page_size + 1;
    let last = first + response.items.len() - 1;
    display::section_top(&format!(
        "RESULTS {}-{} OF {}",
        first, last, response.total_count
    ));

    // badge (8) + score (6) + spacing
    let text_width = display::BOX_WIDTH - 18;
    for (i, item) in response.items.iter().enumerate() {
        if i > 0 {
            display::divider();
        }
        let name = display::render_marks(&item.name_highlighted, highlight);
        display::row(&format!(
            "  {} {}  {}",
            display::entity_badge(item.entity_type),
            display::score_value(item.score),
            display::themed(Role::Title, &[BOLD], &name)
        ));

        let mut location = display::breadcrumb(item);
        if let Some(owner) = item.owner_name.as_deref() {
            location = format!("{}  ·  {}", location, owner);
        }
        display::row(&format!(
            "{}{}",
            " ".repeat(18),
            display::themed(Role::Muted, &[], &display::truncate(&location, text_width))
        ));

        let description = display::render_marks(&item.description_highlighted, highlight);
        for line in display::wrap(&description, text_width) {
            display::row(&format!(
                "{}{}{}",
                " ".repeat(18),
                if display::use_colors() { DIM } else { "" },
                line
            ));
        }
    }
    display::section_bot();

    println!(
        "  page {} of {}  ({} per page)",
        response.page, response.total_pages, response.page_size
    );
}

fn print_syntax() {
    display::section_top("QUERY SYNTAX");
    for (query, meaning) in EXAMPLES {
        display::row(&format!(
            "  {} {}",
            display::themed(Role::Example, &[], &format!("{:<32}", query)),
            meaning
        ));
    }
    display::row("");
    display::row("  AND, OR and NOT ignore case. Adjacent terms are joined with AND.");
    display::row("  Words are stemmed and case-insensitive; common words are ignored.");
    display::section_bot();
}
