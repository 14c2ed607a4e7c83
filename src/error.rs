// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the search engine and its corpus collaborator.
//!
//! Three failure sources exist: a malformed request, a search configuration
//! that cannot produce results, and a corpus that could not answer. An empty
//! corpus is not an error. Scoring and ranking are total and
//! have no error path at all.

use std::io;
use thiserror::Error;

/// Why a corpus lookup failed.
///
/// The engine never retries or swallows these; they surface to the caller
/// wrapped in [`SearchError::Corpus`].
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The backing store could not be reached.
    #[error("corpus unavailable: {0}")]
    Unavailable(String),

    /// Reading corpus data from disk failed.
    #[error("failed to read corpus: {0}")]
    Io(#[from] io::Error),

    /// Corpus data was readable but not well-formed.
    #[error("malformed corpus: {0}")]
    Malformed(String),
}

/// Why a search configuration or seed request was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A setting is out of range.
    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    /// Reading the config file failed.
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    /// The config file is not valid JSON for [`crate::SearchConfig`].
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Everything [`crate::search`] can fail with.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A query field is not a fixed-length digit string.
    #[error("invalid {field} '{value}': {reason}")]
    InvalidQuery {
        field: &'static str,
        value: String,
        reason: String,
    },

    /// `limit` must be at least 1.
    #[error("limit must be positive, got {0}")]
    InvalidLimit(usize),

    /// The search configuration cannot produce results.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The corpus collaborator failed.
    #[error(transparent)]
    Corpus(#[from] CorpusError),
}
