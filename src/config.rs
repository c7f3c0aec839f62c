// src/config.rs

//! Defines the configuration structures for the `core-calc` input core.
//!
//! This module provides structs that can be deserialized from a JSON
//! configuration file to customize the calculator's display width and
//! numeric range. Default values match the reference hardware: a ten-cell
//! display whose decimal separator glyph occupies no cell, backed by an
//! internal numeric range that is wider than what the display can spell.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for the calculator core.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Display-related settings.
    pub display: DisplayConfig,
    /// Bounds on computed results.
    pub limits: LimitsConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

/// Defines settings for the display the core renders into.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of character cells available for digits. The decimal
    /// separator is excluded from this count.
    pub width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig { width: 10 }
    }
}

/// Defines the calculator's full internal numeric range, independent of the
/// display width. Results outside it surface as underflow/overflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Smallest representable result.
    pub min_value: f64,
    /// Largest representable result.
    pub max_value: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        LimitsConfig {
            min_value: -999_999_999.0,
            max_value: 9_999_999_999.0,
        }
    }
}
