//! Configuration file support for pipo-diff.
//!
//! Provides YAML-based configuration through `pipo-diff.config.yml`
//! files, including data structures, file loading, and validation.
//! Command-line flags always win over config values.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::OutputFormat;
use crate::rule_comparison::services::ViewFilter;
use crate::shared::Result;

const CONFIG_FILENAME: &str = "pipo-diff.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub view: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured display format, parsed and validated.
    pub fn display_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|s| {
                OutputFormat::from_str(s)
                    .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
            })
            .transpose()
    }

    /// The configured view filter, parsed and validated.
    pub fn view_filter(&self) -> Result<Option<ViewFilter>> {
        self.view
            .as_deref()
            .map(|s| {
                ViewFilter::from_str(s).map_err(|e| anyhow::anyhow!("Invalid config: {}", e))
            })
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    config.display_format()?;
    config.view_filter()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
