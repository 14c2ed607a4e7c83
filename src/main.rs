// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use phonerank::corpus::seed::{self, SeedOptions};
use phonerank::{InMemoryCorpus, PhoneQuery, RelatedNumberSearch, SearchConfig};

mod cli;
use cli::{display, Cli, Commands, CorpusArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON on stdout stays machine-readable
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            corpus,
            area_code,
            number,
            limit,
            json,
        } => run_search(&corpus, &area_code, &number, limit, json),
        Commands::Batch {
            corpus,
            queries,
            limit,
            json,
        } => run_batch(&corpus, &queries, limit, json),
        Commands::Prefixes {
            corpus,
            query,
            limit,
            offset,
            json,
        } => run_prefixes(&corpus, query.as_deref(), limit, offset, json),
        Commands::Seed {
            output,
            count,
            seed,
        } => run_seed(&output, count, seed),
    }
}

fn load_searcher(args: &CorpusArgs) -> Result<RelatedNumberSearch<InMemoryCorpus>> {
    let config = match &args.config {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SearchConfig::default(),
    };
    let corpus = InMemoryCorpus::from_path(&args.corpus)
        .with_context(|| format!("Failed to load corpus {}", args.corpus.display()))?;
    tracing::info!(entries = corpus.len(), fan_out = config.fan_out, "corpus ready");
    RelatedNumberSearch::new(corpus, config).context("Invalid search config")
}

fn run_search(args: &CorpusArgs, area_code: &str, number: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let query = PhoneQuery::new(area_code, number)?;
    let searcher = load_searcher(args)?;
    let results = searcher.search(&query, limit)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "results": results }))?
        );
    } else {
        display::print_results(&query, &results);
    }
    Ok(())
}

/// Parse "AREA NUMBER" or ten contiguous digits.
fn parse_query_line(line: &str) -> Result<PhoneQuery> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let query = match parts.as_slice() {
        [area, local] => PhoneQuery::new(*area, *local)?,
        [full] if full.len() == 10 && full.is_ascii() => PhoneQuery::new(&full[..3], &full[3..])?,
        _ => bail!("expected 'AREA NUMBER' or ten digits, got '{}'", line),
    };
    Ok(query)
}

fn run_batch(args: &CorpusArgs, path: &Path, limit: Option<usize>, json: bool) -> Result<()> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let queries = raw
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(lineno, line)| parse_query_line(line).with_context(|| format!("{}:{}", path.display(), lineno)))
        .collect::<Result<Vec<_>>>()?;

    let searcher = load_searcher(args)?;
    let outcomes = searcher.search_batch(&queries, limit);

    let mut failures = 0;
    for (query, outcome) in queries.iter().zip(outcomes) {
        match outcome {
            Ok(results) if json => {
                println!(
                    "{}",
                    serde_json::to_string(&serde_json::json!({
                        "query": query.full_number(),
                        "results": results,
                    }))?
                );
            }
            Ok(results) => display::print_results(query, &results),
            Err(e) => {
                failures += 1;
                tracing::error!(query = %query, error = %e, "search failed");
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} queries failed", failures, queries.len());
    }
    Ok(())
}

fn run_prefixes(args: &CorpusArgs, prefix: Option<&str>, limit: Option<usize>, offset: usize, json: bool) -> Result<()> {
    let corpus = InMemoryCorpus::from_path(&args.corpus)
        .with_context(|| format!("Failed to load corpus {}", args.corpus.display()))?;
    let page = corpus.area_code_counts(prefix, limit, offset);

    if json {
        println!("{}", serde_json::to_string_pretty(&page)?);
    } else {
        display::print_prefixes(&page);
    }
    Ok(())
}

fn run_seed(output: &Path, count: usize, seed: u64) -> Result<()> {
    let entries = seed::generate(&SeedOptions {
        count,
        seed,
        ..SeedOptions::default()
    })?;
    let corpus = InMemoryCorpus::new(entries)?;
    fs::write(output, corpus.to_json()?).with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Wrote {} numbers to {}", corpus.len(), output.display());
    Ok(())
}
