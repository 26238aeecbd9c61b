//! Tool configuration file loading and parsing.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::schema::SCHEMA_FILE_NAME;

pub const CONFIG_FILE_NAME: &str = ".configlintrc.json";

pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/*.test.tsx",
    "**/*.test.ts",
    "**/*.test.jsx",
    "**/*.test.js",
    "**/*.spec.tsx",
    "**/*.spec.ts",
    "**/*.spec.jsx",
    "**/*.spec.js",
    "**/__tests__/**",
];

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Paths or glob patterns excluded from scanning.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Directories to scan, relative to the source root. Empty means the
    /// whole source root.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Path of the reference schema file, relative to the working directory.
    #[serde(default = "default_schema_path")]
    pub schema_path: String,
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_schema_path() -> String {
    SCHEMA_FILE_NAME.to_string()
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignores: Vec::new(),
            includes: Vec::new(),
            schema_path: default_schema_path(),
            source_root: default_source_root(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        Ok(())
    }
}

/// Load the configuration file from `root`, falling back to defaults when
/// the file does not exist.
pub fn load_config(root: &Path) -> Result<Config> {
    let config_path = root.join(CONFIG_FILE_NAME);
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?
    } else {
        Config::default()
    };
    config.validate()?;
    Ok(config)
}

/// Pretty-printed default configuration, written by `configlint init`.
pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json)
}
