//! CLI entry point for enredo
//!
//! Plays a story catalog in the terminal, or lints one.

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use enredo::lint::{lint, LintLevel};
use enredo::repository::{CatalogId, CatalogRepository, FileCatalogRepository};
use enredo::types::StoryCatalog;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = &args[1];

    match command.as_str() {
        "play" => {
            let (path, debug) = parse_play_args(&args[2..]);
            run_play(path, debug);
        }
        "lint" => {
            let path = args.get(2).map(PathBuf::from);
            run_lint(path);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Error: Unknown command '{command}'");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    println!("enredo - Branching Story Engine");
    println!();
    println!("USAGE:");
    println!("    cargo run -- play [catalog.json] [--debug]");
    println!("    cargo run -- lint [catalog.json]");
    println!();
    println!("COMMANDS:");
    println!("    play [file] [--debug]    Play a catalog in CUI player mode");
    println!("                             (the built-in story when no file is given)");
    println!("    lint [file]              Report dead scenes and unsatisfiable gates");
    println!("    --help, -h               Show this help message");
    println!();
    println!("OPTIONS:");
    println!("    --debug    Show traversal internals (scene, position, history)");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run -- play");
    println!("    cargo run -- play stories/love-story.json --debug");
}

fn parse_play_args(rest: &[String]) -> (Option<PathBuf>, bool) {
    let mut path = None;
    let mut debug = false;
    for arg in rest {
        if arg == "--debug" {
            debug = true;
        } else {
            path = Some(PathBuf::from(arg));
        }
    }
    (path, debug)
}

fn run_play(path: Option<PathBuf>, debug: bool) {
    let catalog = match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Error: Failed to load catalog");
            eprintln!("Reason: {err:#}");
            process::exit(1);
        }
    };

    if let Err(err) = enredo::cli::play::run_play(catalog, debug) {
        eprintln!("Error: Player mode failed");
        eprintln!("Reason: {err:#}");
        process::exit(1);
    }
}

fn run_lint(path: Option<PathBuf>) {
    let catalog = match load_catalog(path) {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Error: Failed to load catalog");
            eprintln!("Reason: {err:#}");
            process::exit(1);
        }
    };

    let result = lint(&catalog);
    if result.is_clean() {
        println!("Catalog '{}' is clean.", catalog.title());
        return;
    }

    for issue in &result.issues {
        let level = match issue.level {
            LintLevel::Warning => "warning",
            LintLevel::Info => "info",
        };
        println!("{level}: [{}] {}", issue.category, issue.message);
    }
    println!(
        "{} warning(s), {} info message(s)",
        result.warning_count, result.info_count
    );

    if result.has_warnings() {
        process::exit(1);
    }
}

/// Built-in story by default; a JSON catalog document when a path is given.
fn load_catalog(path: Option<PathBuf>) -> anyhow::Result<StoryCatalog> {
    let Some(path) = path else {
        return Ok(enredo::content::love_story());
    };

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("'{}' has no usable file name", path.display()))?
        .to_string();
    let base = match path.parent() {
        Some(parent) if parent != Path::new("") => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let catalog = runtime
        .block_on(async {
            FileCatalogRepository::new(base)
                .load_catalog(&CatalogId::from(stem))
                .await
        })
        .with_context(|| format!("failed to load '{}'", path.display()))?;
    Ok(catalog)
}
