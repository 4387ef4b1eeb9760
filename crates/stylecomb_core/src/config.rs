//! Run configuration.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use jsonc_parser::ParseOptions;
use serde::Deserialize;

use crate::Error;

/// Configuration for one run.
///
/// A config file is a JSON object (comments tolerated) whose keys are the
/// canonical option names plus `exclude` and `verbose`. Option values are
/// kept as raw JSON: each handler interprets its own value when the run's
/// handler list is built, and unknown keys are simply never looked up.
///
/// `lint` is injected by the caller, never read from a file.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Glob patterns removing paths (and their subtrees) from a run.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Per-file progress output.
    #[serde(default)]
    pub verbose: bool,

    /// Report would-be changes without rewriting anything.
    #[serde(skip)]
    pub lint: bool,

    /// Formatting options by canonical name.
    #[serde(flatten)]
    options: HashMap<String, serde_json::Value>,
}

impl Config {
    /// Dotfile name looked up by configuration discovery.
    pub const FILE_NAME: &'static str = ".stylecomb.json";

    /// Creates an empty configuration: nothing excluded, no options, quiet.
    pub fn new() -> Self {
        Self {
            exclude: Vec::new(),
            verbose: false,
            lint: false,
            options: HashMap::new(),
        }
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parses configuration from a JSON string. Comments are tolerated.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| Error::config(format!("Invalid JSON: {}", e)))?
            .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));

        serde_json::from_value(value)
            .map_err(|e| Error::config(format!("Invalid config: {}", e)))
    }

    /// Looks up the configured value of an option, if present.
    pub fn option(&self, name: &str) -> Option<&serde_json::Value> {
        self.options.get(name)
    }

    /// Sets an option value, replacing any previous one.
    pub fn set_option(&mut self, name: impl Into<String>, value: serde_json::Value) {
        self.options.insert(name.into(), value);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
