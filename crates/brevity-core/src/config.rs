//! Configuration loading for .brevity.toml

use garde::Validate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default config file name, looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".brevity.toml";

/// Root configuration from .brevity.toml
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BrevityConfig {
    #[serde(default)]
    pub rule: HashMap<String, RuleSettings>,
}

/// Settings for a single rule, keyed by rule identifier.
///
/// Limits are signed so that negative values parse; they are clamped to zero
/// when thresholds are built.
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[garde(context(()))]
pub struct RuleSettings {
    #[garde(skip)]
    pub enabled: Option<bool>,
    #[garde(skip)]
    pub warning: Option<i64>,
    #[garde(skip)]
    pub error: Option<i64>,
    /// Shorthand: `[warning]` or `[warning, error]`.
    #[garde(custom(validate_levels))]
    pub levels: Option<Vec<i64>>,
}

impl RuleSettings {
    /// `levels` and the `warning`/`error` keys describe the same thing; only one form may be used.
    fn check_exclusive_forms(&self) -> Result<(), String> {
        if self.levels.is_some() && (self.warning.is_some() || self.error.is_some()) {
            return Err("use either 'levels' or 'warning'/'error', not both".to_string());
        }
        Ok(())
    }
}

#[allow(
    clippy::ref_option,
    clippy::trivially_copy_pass_by_ref,
    clippy::option_if_let_else
)]
fn validate_levels(value: &Option<Vec<i64>>, _ctx: &()) -> garde::Result {
    if let Some(levels) = value {
        match levels.len() {
            1 | 2 => Ok(()),
            n => Err(garde::Error::new(format!(
                "{n} entries given - use [warning] or [warning, error]"
            ))),
        }
    } else {
        Ok(())
    }
}

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config read error: {0}")]
    Io(String),
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("config validation error: {0}")]
    Validation(String),
}

impl BrevityConfig {
    /// Parse and validate configuration text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the TOML content is invalid.
    /// Returns `ConfigError::Validation` if rule settings fail validation.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

        for (name, settings) in &config.rule {
            settings
                .validate()
                .map_err(|e| ConfigError::Validation(format!("rule.{name}: {e}")))?;
            settings
                .check_exclusive_forms()
                .map_err(|e| ConfigError::Validation(format!("rule.{name}: {e}")))?;
        }

        Ok(config)
    }

    /// Load configuration from a TOML file with validation.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise the
    /// errors of [`BrevityConfig::from_toml`].
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Load from default location, returning error details on failure.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` with details if loading or validation fails.
    pub fn load_default_strict() -> Result<Option<Self>, ConfigError> {
        let cwd = std::env::current_dir().map_err(|e| ConfigError::Io(e.to_string()))?;
        let config_path = cwd.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(None);
        }

        Self::from_file(&config_path).map(Some)
    }

    /// Settings for `rule`, if the config mentions it.
    #[must_use]
    pub fn rule_settings(&self, rule: &str) -> Option<&RuleSettings> {
        self.rule.get(rule)
    }

    /// A rule runs unless its settings say `enabled = false`.
    #[must_use]
    pub fn is_enabled(&self, rule: &str) -> bool {
        self.rule_settings(rule)
            .is_none_or(|settings| settings.enabled != Some(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_table_form() {
        let toml = r"
[rule.closure_body_length]
enabled = true
warning = 25
error = 80
";
        let config = BrevityConfig::from_toml(toml).unwrap();
        let settings = config.rule_settings("closure_body_length").unwrap();
        assert_eq!(settings.warning, Some(25));
        assert_eq!(settings.error, Some(80));
        assert!(config.is_enabled("closure_body_length"));
    }

    #[test]
    fn parses_levels_shorthand() {
        let toml = r"
[rule.closure_body_length]
levels = [10, 50]
";
        let config = BrevityConfig::from_toml(toml).unwrap();
        let settings = config.rule_settings("closure_body_length").unwrap();
        assert_eq!(settings.levels, Some(vec![10, 50]));
    }

    #[test]
    fn accepts_negative_limits() {
        let toml = r"
[rule.closure_body_length]
warning = -3
";
        let config = BrevityConfig::from_toml(toml).unwrap();
        assert_eq!(
            config.rule_settings("closure_body_length").unwrap().warning,
            Some(-3)
        );
    }

    #[test]
    fn rejects_oversized_levels() {
        let toml = r"
[rule.closure_body_length]
levels = [10, 50, 90]
";
        let err = BrevityConfig::from_toml(toml).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("[warning, error]"));
    }

    #[test]
    fn rejects_empty_levels() {
        let settings = RuleSettings {
            levels: Some(vec![]),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_levels_mixed_with_keys() {
        let toml = r"
[rule.closure_body_length]
levels = [10]
error = 90
";
        let err = BrevityConfig::from_toml(toml).unwrap_err();
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = BrevityConfig::from_toml("[rule.closure_body_length\nwarning = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn disabled_rule_is_not_enabled() {
        let toml = r"
[rule.closure_body_length]
enabled = false
";
        let config = BrevityConfig::from_toml(toml).unwrap();
        assert!(!config.is_enabled("closure_body_length"));
        assert!(config.is_enabled("some_other_rule"));
    }

    #[test]
    fn ignores_unknown_top_level_keys() {
        let toml = r#"
format = "json"
strict = true
"#;
        let config = BrevityConfig::from_toml(toml).unwrap();
        assert!(config.rule.is_empty());
    }
}
