// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search configuration.
//!
//! Defaults match what the HTTP layer has always used: ten results per query
//! and a candidate pool of at most five times the limit. A JSON file can
//! override any subset of the fields.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

/// Default number of results returned per query
pub const DEFAULT_LIMIT: usize = 10;

/// Maximum number of results a caller may request
pub const MAX_LIMIT: usize = 100;

/// Candidate pool cap, as a multiple of the limit
pub const DEFAULT_FAN_OUT: usize = 5;

/// Default page size for prefix listings
pub const DEFAULT_PREFIX_LIMIT: usize = 100;

/// Maximum page size for prefix listings
pub const MAX_PREFIX_LIMIT: usize = 500;

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Limit used when the caller does not ask for one.
    pub default_limit: usize,
    /// Upper bound applied to every requested limit.
    pub max_limit: usize,
    /// Suffix widening stops once `limit * fan_out` candidates are collected.
    ///
    /// A performance bound only: results are still correct for any value >= 1.
    pub fan_out: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            fan_out: DEFAULT_FAN_OUT,
        }
    }
}

impl SearchConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path.as_ref())?;
        let config: SearchConfig = serde_json::from_str(&raw)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.as_ref().display(), e)))?;
        config.validated()
    }

    /// Reject settings that would make every search fail or skip widening.
    pub fn check(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("default_limit", self.default_limit),
            ("max_limit", self.max_limit),
            ("fan_out", self.fan_out),
        ] {
            if value == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be at least 1".to_string(),
                });
            }
        }
        Ok(())
    }

    /// [`check`](Self::check), by value.
    pub fn validated(self) -> Result<Self, ConfigError> {
        self.check()?;
        Ok(self)
    }

    /// Resolve a requested limit: default when absent, capped at `max_limit`.
    ///
    /// Zero is passed through so the engine can reject it.
    pub fn clamp_limit(&self, requested: Option<usize>) -> usize {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }

    /// Size at which candidate widening stops for a given limit.
    pub fn candidate_cap(&self, limit: usize) -> usize {
        limit.saturating_mul(self.fan_out)
    }
}
