//! Severity thresholds for line-count style rules.

use brevity_rule_abi::Severity;
use serde::Serialize;

use crate::config::RuleSettings;

/// A severity paired with the largest allowed effective line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityThreshold {
    pub severity: Severity,
    pub max_lines: usize,
}

impl SeverityThreshold {
    #[must_use]
    pub const fn new(severity: Severity, max_lines: usize) -> Self {
        Self {
            severity,
            max_lines,
        }
    }
}

/// Warning limit plus an optional error limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityLevels {
    pub warning: usize,
    pub error: Option<usize>,
}

impl SeverityLevels {
    #[must_use]
    pub const fn new(warning: usize, error: Option<usize>) -> Self {
        Self { warning, error }
    }

    /// Thresholds in evaluation order: warning first, then error.
    #[must_use]
    pub fn thresholds(&self) -> Vec<SeverityThreshold> {
        std::iter::once(SeverityThreshold::new(Severity::Warning, self.warning))
            .chain(
                self.error
                    .map(|limit| SeverityThreshold::new(Severity::Error, limit)),
            )
            .collect()
    }

    /// Apply rule settings on top of `defaults`.
    ///
    /// - `levels = [w]` / `levels = [w, e]` replaces both limits.
    /// - `warning`/`error` keys: setting `warning` alone drops the error level;
    ///   setting only `error` keeps the default warning.
    /// - Neither form present: `defaults` unchanged.
    #[must_use]
    pub fn from_settings(settings: &RuleSettings, defaults: Self) -> Self {
        if let Some(levels) = settings.levels.as_deref()
            && let Some((&warning, rest)) = levels.split_first()
        {
            return Self::new(clamp_limit(warning), rest.first().copied().map(clamp_limit));
        }

        match (settings.warning, settings.error) {
            (None, None) => defaults,
            (warning, error) => Self::new(
                warning.map_or(defaults.warning, clamp_limit),
                error.map(clamp_limit),
            ),
        }
    }
}

/// Negative limits behave like zero: any counted line exceeds them.
#[must_use]
pub fn clamp_limit(limit: i64) -> usize {
    usize::try_from(limit).unwrap_or(0)
}
