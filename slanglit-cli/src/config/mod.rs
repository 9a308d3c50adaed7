//! Configuration file for the CLI
//!
//! ```toml
//! [transform]
//! dictionary = "slang.toml"
//! mode = "annotate"
//! match_policy = "strict_suffix"
//! precedence = "context_first"
//! agree_modifiers = false
//!
//! [output]
//! default_format = "json"
//! pretty_json = false
//! include_replacements = true
//!
//! [performance]
//! worker_threads = 4
//! ```

use serde::{Deserialize, Serialize};
use slanglit_core::{MatchPolicy, Precedence, TransformConfig, TransformMode};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Transformation configuration
    #[serde(default)]
    pub transform: TransformSection,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Transformation-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct TransformSection {
    /// Dictionary file used instead of the built-in one
    pub dictionary: Option<PathBuf>,
    pub mode: TransformMode,
    pub match_policy: MatchPolicy,
    pub precedence: Precedence,
    pub agree_modifiers: bool,
}

impl Default for TransformSection {
    fn default() -> Self {
        let defaults = TransformConfig::default();
        Self {
            dictionary: None,
            mode: defaults.mode,
            match_policy: defaults.match_policy,
            precedence: defaults.precedence,
            agree_modifiers: defaults.agree_modifiers,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Include the replacement report in JSON output
    pub include_replacements: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
            include_replacements: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// Core settings described by the `[transform]` section
    pub fn to_transform_config(&self) -> TransformConfig {
        TransformConfig::builder()
            .mode(self.transform.mode)
            .match_policy(self.transform.match_policy)
            .precedence(self.transform.precedence)
            .agree_modifiers(self.transform.agree_modifiers)
            .build()
    }
}
