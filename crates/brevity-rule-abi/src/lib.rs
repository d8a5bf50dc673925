#![warn(rust_2024_compatibility, clippy::all)]

//! Types shared by front-ends, rules and the reporting host.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a violation. Only the ordering matters: `Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category a rule belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// Size and complexity measurements
    Metrics,
}

/// Static description of a rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleDescription {
    /// Stable identifier used in config and output, e.g. `closure_body_length`.
    pub identifier: String,
    /// Human-readable name, e.g. "Closure Body Length".
    pub name: String,
    pub description: String,
    pub kind: RuleKind,
    /// Outside the recommended default set. Informational only.
    pub opt_in: bool,
}

/// Byte extent within a source file: `length` bytes starting at `offset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ByteSpan {
    pub offset: usize,
    pub length: usize,
}

impl ByteSpan {
    #[must_use]
    pub const fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// One past the last byte, or `None` if `offset + length` overflows.
    #[must_use]
    pub const fn end(&self) -> Option<usize> {
        self.offset.checked_add(self.length)
    }
}

/// A closure expression as reported by a front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureNode {
    /// Byte offset where the whole closure expression starts.
    pub offset: usize,
    /// Extent of the closure body.
    pub body: ByteSpan,
}

impl ClosureNode {
    #[must_use]
    pub const fn new(offset: usize, body: ByteSpan) -> Self {
        Self { offset, body }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Rule identifier, e.g. "closure_body_length".
    pub rule: String,
    pub severity: Severity,
    /// Byte offset of the offending construct.
    pub offset: usize,
    pub reason: String,
}

pub type Violations = Vec<Violation>;

/// Lexical comment conventions of a language.
///
/// Only what is needed to tell comment lines from code lines: comment markers
/// and the literal forms that may contain those markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSyntax {
    pub line: &'static str,
    pub block_open: &'static str,
    pub block_close: &'static str,
    /// Block comments nest (`/* /* */ */` is one comment).
    pub nested_blocks: bool,
    /// `r"..."` / `r#"..."#` raw strings.
    pub raw_strings: bool,
    /// `'x'` char literals (as opposed to a bare `'` used for lifetimes).
    pub char_literals: bool,
}

impl CommentSyntax {
    #[must_use]
    pub const fn rust() -> Self {
        Self {
            line: "//",
            block_open: "/*",
            block_close: "*/",
            nested_blocks: true,
            raw_strings: true,
            char_literals: true,
        }
    }
}

/// Language front-end: turns source text into closure nodes.
///
/// Implementors wrap a concrete parser; nothing downstream sees its AST.
pub trait ClosureSource: Send + Sync {
    /// Front-end name, e.g. "rust".
    #[must_use]
    fn name(&self) -> &str;

    /// File extensions handled, lowercase without the dot (e.g. `["rs"]`).
    #[must_use]
    fn supported_extensions(&self) -> Vec<String>;

    #[must_use]
    fn comment_syntax(&self) -> CommentSyntax;

    /// Every closure expression in `source`, nested ones included.
    ///
    /// # Errors
    ///
    /// Returns a message when the source cannot be parsed.
    fn closures(&self, source: &str) -> Result<Vec<ClosureNode>, String>;
}

/// Boxed front-end for dynamic dispatch.
pub type BoxClosureSource = Box<dyn ClosureSource>;
