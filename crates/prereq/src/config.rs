//! Configuration management for prereq.
//!
//! Configuration lives in an optional `prereq.yaml`. Every field has a
//! default, so a missing file or a partial file is fine.

use crate::domain::DEFAULT_EDGE_WEIGHT;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file
pub const CONFIG_FILE_NAME: &str = "prereq.yaml";

/// Default label prefix for imported items ("Item 1", "Item 2", ...)
pub const DEFAULT_LABEL_PREFIX: &str = "Item";

/// Configuration file structure for prereq
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PrereqConfig {
    /// Matrix import settings
    #[serde(default)]
    pub import: ImportConfig,
}

/// Import configuration section
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct ImportConfig {
    /// Label prefix; row `i` becomes `"<prefix> <i + 1>"`
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,

    /// Weight recorded on imported and interactively created edges
    #[serde(default = "default_edge_weight")]
    pub edge_weight: f64,
}

fn default_label_prefix() -> String {
    DEFAULT_LABEL_PREFIX.to_string()
}

fn default_edge_weight() -> f64 {
    DEFAULT_EDGE_WEIGHT
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            label_prefix: default_label_prefix(),
            edge_weight: default_edge_weight(),
        }
    }
}

impl PrereqConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `prereq.yaml` in `dir` is
    /// used when present, and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Loading configuration");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(&self) -> Result<()> {
        if self.import.label_prefix.trim().is_empty() {
            return Err(Error::Config("import.label-prefix cannot be empty".to_string()));
        }
        if !self.import.edge_weight.is_finite() {
            return Err(Error::Config(
                "import.edge-weight must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Write a default configuration file into `dir`.
///
/// Refuses to overwrite an existing file. Returns the path written.
pub fn init(dir: &Path) -> Result<PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() {
        return Err(Error::Config(format!(
            "Configuration already exists at '{}'",
            path.display()
        )));
    }

    PrereqConfig::default().save(&path)?;
    Ok(path)
}
