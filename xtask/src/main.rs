//! Custom cargo commands for catalog-search.
//!
//! Usage:
//!   cargo xtask test               - Run all tests
//!   cargo xtask check              - Check, test and lint
//!   cargo xtask bench              - Run the search benchmarks
//!   cargo xtask fuzz [target] [s]  - Fuzz one target for a few seconds

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

const FUZZ_TARGETS: &[&str] = &["query_parser", "search_requests"];
const DEFAULT_FUZZ_SECS: u64 = 60;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.get(1).map(String::as_str), args.get(2).map(String::as_str))?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test                    Run all Rust tests
  check                   cargo check + test + clippy
  bench                   Run the criterion search benchmarks
  fuzz [TARGET] [SECS]    Fuzz a target (query_parser, search_requests), default 60s each
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Check, test, lint
fn check() -> Result<()> {
    println!("Running checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--all-targets", "--", "-D", "warnings"])?;

    println!("\n✓ Checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--bench", "search_bench"])
}

/// Fuzz one target, or every target in turn when none is named.
fn fuzz(target: Option<&str>, secs: Option<&str>) -> Result<()> {
    let secs = match secs {
        Some(s) => s
            .parse::<u64>()
            .with_context(|| format!("Invalid fuzz duration '{}'", s))?,
        None => DEFAULT_FUZZ_SECS,
    };
    let targets: Vec<&str> = match target {
        Some(t) if FUZZ_TARGETS.contains(&t) => vec![t],
        Some(t) => bail!("Unknown fuzz target '{}' (expected one of {:?})", t, FUZZ_TARGETS),
        None => FUZZ_TARGETS.to_vec(),
    };

    let fuzz_dir = project_root()?.join("fuzz");
    let max_time = format!("-max_total_time={}", secs);
    for (i, target) in targets.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, targets.len(), target, secs);
        let status = Command::new("cargo")
            .args(["+nightly", "fuzz", "run", target, "--", &max_time])
            .current_dir(&fuzz_dir)
            .status()
            .context("Failed to run cargo fuzz (is cargo-fuzz installed?)")?;
        if !status.success() {
            bail!("Fuzz target {} failed", target);
        }
    }

    println!("\n✓ No crashes found");
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
