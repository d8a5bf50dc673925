#![warn(rust_2024_compatibility, clippy::all)]

//! closure_body_length - closure bodies should not span too many lines.

pub mod examples;

use brevity_core::{BoxRule, Rule, RuleSettings, SeverityLevels, SeverityThreshold, SourceText};
use brevity_rule_abi::{ClosureNode, RuleDescription, RuleKind, Severity, Violation, Violations};

pub const RULE_ID: &str = "closure_body_length";

/// Default limits, in effective lines.
pub const DEFAULT_WARNING: usize = 20;
pub const DEFAULT_ERROR: usize = 100;

/// Configuration for the closure body length rule
#[derive(Debug, Clone)]
pub struct ClosureBodyLengthConfig {
    pub levels: SeverityLevels,
}

impl Default for ClosureBodyLengthConfig {
    fn default() -> Self {
        Self {
            levels: SeverityLevels::new(DEFAULT_WARNING, Some(DEFAULT_ERROR)),
        }
    }
}

#[must_use]
pub fn description() -> RuleDescription {
    RuleDescription {
        identifier: RULE_ID.to_string(),
        name: "Closure Body Length".to_string(),
        description: "Closure bodies should not span too many lines.".to_string(),
        kind: RuleKind::Metrics,
        opt_in: true,
    }
}

/// Measure one closure against `thresholds`.
///
/// Every exceeded threshold produces its own violation, in the order given.
/// The reason always quotes the limit of the lowest severity present, so a
/// closure past both limits reads the same at warning and error level.
/// A body span that does not map onto the text yields nothing.
#[must_use]
pub fn evaluate(
    file: &SourceText<'_>,
    closure: &ClosureNode,
    thresholds: &[SeverityThreshold],
) -> Violations {
    let Some(guideline) = thresholds
        .iter()
        .min_by_key(|threshold| threshold.severity)
        .map(|threshold| threshold.max_lines)
    else {
        return Violations::new();
    };

    let Some(range) = file.line_range(closure.body) else {
        tracing::trace!(
            offset = closure.offset,
            body_offset = closure.body.offset,
            body_length = closure.body.length,
            "closure body span does not resolve to lines"
        );
        return Violations::new();
    };

    thresholds
        .iter()
        .filter_map(|threshold| {
            let (exceeds, line_count) = file.exceeds_effective_lines(range, threshold.max_lines);
            exceeds.then(|| violation(threshold.severity, closure.offset, guideline, line_count))
        })
        .collect()
}

fn violation(severity: Severity, offset: usize, guideline: usize, line_count: usize) -> Violation {
    Violation {
        rule: RULE_ID.to_string(),
        severity,
        offset,
        reason: format!(
            "Closure body should span {guideline} lines or less excluding comments and \
             whitespace: currently spans {line_count} lines"
        ),
    }
}

pub struct ClosureBodyLength {
    thresholds: Vec<SeverityThreshold>,
}

impl Default for ClosureBodyLength {
    fn default() -> Self {
        Self::new(&ClosureBodyLengthConfig::default())
    }
}

impl ClosureBodyLength {
    #[must_use]
    pub fn new(config: &ClosureBodyLengthConfig) -> Self {
        Self {
            thresholds: config.levels.thresholds(),
        }
    }

    #[must_use]
    pub fn thresholds(&self) -> &[SeverityThreshold] {
        &self.thresholds
    }
}

impl Rule for ClosureBodyLength {
    fn description(&self) -> RuleDescription {
        description()
    }

    fn validate(&self, file: &SourceText<'_>, closure: &ClosureNode) -> Violations {
        evaluate(file, closure, &self.thresholds)
    }
}

#[must_use]
pub fn init_rule() -> BoxRule {
    Box::new(ClosureBodyLength::default())
}

/// Create rule with custom config
#[must_use]
pub fn init_rule_with_config(config: &ClosureBodyLengthConfig) -> BoxRule {
    Box::new(ClosureBodyLength::new(config))
}

/// Convert `RuleSettings` to `ClosureBodyLengthConfig`
#[must_use]
pub fn config_from_rule_settings(settings: &RuleSettings) -> ClosureBodyLengthConfig {
    ClosureBodyLengthConfig {
        levels: SeverityLevels::from_settings(settings, ClosureBodyLengthConfig::default().levels),
    }
}
