#![warn(rust_2024_compatibility, clippy::all)]

pub mod comments;
pub mod config;
pub mod levels;
pub mod source;

use brevity_rule_abi::{BoxClosureSource, ClosureNode, ClosureSource, RuleDescription, Violations};
use camino::Utf8Path;
use std::collections::HashSet;

pub use config::{BrevityConfig, ConfigError, RuleSettings};
pub use levels::{SeverityLevels, SeverityThreshold, clamp_limit};
pub use source::{LineRange, SourceText};

/// A rule evaluated once per closure expression.
pub trait Rule: Send + Sync {
    #[must_use]
    fn description(&self) -> RuleDescription;

    /// Violations for a single closure. Must not fail: anything that cannot
    /// be measured yields no violations.
    fn validate(&self, file: &SourceText<'_>, closure: &ClosureNode) -> Violations;
}

/// Boxed rule for dynamic dispatch.
pub type BoxRule = Box<dyn Rule>;

/// In-memory source file handed to the [`Linter`].
pub struct SourceFile<'a> {
    pub path: &'a Utf8Path,
    pub text: &'a str,
}

/// Owns front-ends and rules, and runs the rules over every closure a
/// front-end finds.
#[derive(Default)]
pub struct Linter {
    front_ends: Vec<BoxClosureSource>,
    rules: Vec<BoxRule>,
}

impl Linter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_front_end(mut self, front_end: BoxClosureSource) -> Self {
        self.front_ends.push(front_end);
        self
    }

    #[must_use]
    pub fn with_rule(mut self, rule: BoxRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn add_rule(&mut self, rule: BoxRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn rule_descriptions(&self) -> Vec<RuleDescription> {
        self.rules.iter().map(|rule| rule.description()).collect()
    }

    /// Union of the (lowercased) extensions every front-end understands.
    #[must_use]
    pub fn supported_extensions(&self) -> HashSet<String> {
        self.front_ends
            .iter()
            .flat_map(|front_end| front_end.supported_extensions())
            .map(|ext| ext.to_ascii_lowercase())
            .collect()
    }

    fn front_end_for(&self, path: &Utf8Path) -> Option<&dyn ClosureSource> {
        let ext = path.extension()?.to_ascii_lowercase();
        self.front_ends
            .iter()
            .find(|front_end| front_end.supported_extensions().contains(&ext))
            .map(|front_end| &**front_end)
    }

    /// Run every rule over every closure in `source`.
    ///
    /// Files without a matching front-end, or that the front-end cannot
    /// parse, produce no violations.
    #[must_use]
    pub fn lint(&self, source: &SourceFile<'_>) -> Violations {
        let Some(front_end) = self.front_end_for(source.path) else {
            tracing::trace!(path = %source.path, "no front-end for file");
            return Violations::new();
        };

        let closures = match front_end.closures(source.text) {
            Ok(closures) => closures,
            Err(e) => {
                tracing::warn!(
                    path = %source.path,
                    front_end = front_end.name(),
                    "skipping unparsable file: {e}"
                );
                return Violations::new();
            }
        };

        if closures.is_empty() || self.rules.is_empty() {
            return Violations::new();
        }

        let text = SourceText::new(source.text, &front_end.comment_syntax());
        let mut violations = Violations::new();
        for closure in &closures {
            for rule in &self.rules {
                violations.extend(rule.validate(&text, closure));
            }
        }

        tracing::debug!(
            path = %source.path,
            lines = text.line_count(),
            closures = closures.len(),
            violations = violations.len(),
            "linted file"
        );
        violations
    }
}
