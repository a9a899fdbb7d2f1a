//! Configuration file support for yum-deps.
//!
//! Provides YAML-based configuration through `yum-deps.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::OutputFormat;
use crate::ports::outbound::DiagnosticsSink;
use crate::shared::error::YumDepsError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "yum-deps.config.yml";

/// Top-level configuration file schema.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub input_root: Option<String>,
    pub output_format: Option<String>,
    pub all: Option<bool>,
    pub verbose: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured output format, parsed
    pub fn parsed_output_format(&self) -> Result<Option<OutputFormat>> {
        let Some(format) = self.output_format.as_deref() else {
            return Ok(None);
        };
        let parsed = format
            .parse::<OutputFormat>()
            .map_err(|message| YumDepsError::InvalidConfig {
                message,
                hint: "output_format must be one of: text, csv, wiki".to_string(),
            })?;
        Ok(Some(parsed))
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path<D: DiagnosticsSink>(
    path: &Path,
    diagnostics: &D,
) -> Result<ConfigFile> {
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
    warn_unknown_fields(&config, diagnostics);
    diagnostics.debug(&format!("⚙️  Using config file: {}", path.display()));

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config<D: DiagnosticsSink>(
    dir: &Path,
    diagnostics: &D,
) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path, diagnostics)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref root) = config.input_root {
        if root.trim().is_empty() {
            return Err(YumDepsError::InvalidConfig {
                message: "input_root must not be empty".to_string(),
                hint: "Give the root name of the report files (e.g. \"pkg\") or remove the field."
                    .to_string(),
            }
            .into());
        }
    }
    config.parsed_output_format()?;
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields<D: DiagnosticsSink>(config: &ConfigFile, diagnostics: &D) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        diagnostics.warn(&format!("Unknown config field '{}' will be ignored.", key));
    }
}
