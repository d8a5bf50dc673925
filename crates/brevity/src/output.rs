//! Output formatting and violation display

use brevity_rule_abi::{Severity, Violation};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SerializableViolation {
    pub path: String,
    pub line: usize,
    pub col: usize,
    pub rule: String,
    pub severity: Severity,
    pub offset: usize,
    pub reason: String,
}

impl SerializableViolation {
    pub fn new(path: &str, source: &str, violation: &Violation) -> Self {
        let (line, col) = byte_to_line_col(source, violation.offset);
        Self {
            path: path.to_string(),
            line,
            col,
            rule: violation.rule.clone(),
            severity: violation.severity,
            offset: violation.offset,
            reason: violation.reason.clone(),
        }
    }
}

/// `path:line:col: severity: Closure Body Length Violation: reason (rule)`
pub fn format_violation(violation: &SerializableViolation, rule_name: &str) -> String {
    format!(
        "{path}:{line}:{col}: {severity}: {rule_name} Violation: {reason} ({rule})",
        path = violation.path,
        line = violation.line,
        col = violation.col,
        severity = violation.severity,
        reason = violation.reason,
        rule = violation.rule,
    )
}

/// 1-based line and column (in chars) of a byte offset.
pub fn byte_to_line_col(src: &str, byte_idx: usize) -> (usize, usize) {
    let mut line = 1;
    let mut col = 1;
    for (i, ch) in src.char_indices() {
        if i >= byte_idx {
            return (line, col);
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_col_is_one_based() {
        let src = "ab\ncd\n";
        assert_eq!(byte_to_line_col(src, 0), (1, 1));
        assert_eq!(byte_to_line_col(src, 1), (1, 2));
        assert_eq!(byte_to_line_col(src, 3), (2, 1));
        assert_eq!(byte_to_line_col(src, src.len()), (3, 1));
    }

    #[test]
    fn line_col_counts_chars() {
        let src = "é|| 1";
        assert_eq!(byte_to_line_col(src, src.find("||").unwrap()), (1, 2));
    }

    #[test]
    fn human_format() {
        let src = "fn main() {\n    let f = || 1;\n}\n";
        let violation = Violation {
            rule: "closure_body_length".to_string(),
            severity: Severity::Warning,
            offset: src.find("||").unwrap(),
            reason: "too long".to_string(),
        };
        let record = SerializableViolation::new("src/main.rs", src, &violation);
        assert_eq!(
            format_violation(&record, "Closure Body Length"),
            "src/main.rs:2:13: warning: Closure Body Length Violation: too long (closure_body_length)"
        );
    }
}
