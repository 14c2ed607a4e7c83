// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the phonerank command-line interface.
//!
//! Four subcommands: `search` for one query, `batch` for a file of queries run
//! in parallel, `prefixes` to list area codes by population, and `seed` to
//! write a deterministic sample corpus.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "phonerank",
    about = "Find phone numbers related to a query number",
    version
)]
pub struct Cli {
    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the corpus and search settings come from.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Corpus JSON file (array of numbers)
    #[arg(short, long, env = "PHONERANK_CORPUS")]
    pub corpus: PathBuf,

    /// Search config JSON file (default_limit, max_limit, fan_out)
    #[arg(long, env = "PHONERANK_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank numbers related to a single query
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Three-digit area code
        area_code: String,

        /// Seven-digit local number
        number: String,

        /// Maximum number of results to return (capped by max_limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Rank related numbers for every query in a file
    ///
    /// One query per line, either "AREA NUMBER" or ten contiguous digits.
    /// Blank lines and lines starting with '#' are skipped.
    Batch {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// File of queries
        queries: PathBuf,

        /// Maximum number of results per query (capped by max_limit)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON lines instead of tables
        #[arg(long)]
        json: bool,
    },

    /// List area codes with their entry counts
    Prefixes {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Only area codes starting with this prefix
        #[arg(short, long)]
        query: Option<String>,

        /// Page size (1-500)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Number of area codes to skip
        #[arg(long, default_value = "0")]
        offset: usize,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a deterministic sample corpus
    Seed {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of entries to generate
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },
}
