//! Reporting settings from the top level of .brevity.toml

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use brevity_core::config::CONFIG_FILE_NAME;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Deserialize, Serialize)]
pub struct ConfigFile {
    pub format: Option<OutputFormat>,
    pub strict: Option<bool>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            format: Some(OutputFormat::Human),
            strict: Some(false),
        }
    }
}

pub fn load_config(path: Option<&Utf8PathBuf>) -> Result<ConfigFile> {
    let config_path = path
        .cloned()
        .unwrap_or_else(|| Utf8PathBuf::from(CONFIG_FILE_NAME));

    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {config_path}"))?;
        Ok(toml::from_str(&content).with_context(|| format!("failed to parse {config_path}"))?)
    } else {
        Ok(ConfigFile::default())
    }
}

/// Rule configuration, from `path` or the default location.
pub fn load_rule_config(path: Option<&Utf8PathBuf>) -> Result<Option<brevity_core::BrevityConfig>> {
    let config = if let Some(p) = path {
        Some(brevity_core::BrevityConfig::from_file(p.as_std_path())?)
    } else {
        brevity_core::BrevityConfig::load_default_strict()?
    };
    Ok(config)
}
