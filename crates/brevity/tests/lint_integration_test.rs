//! Integration tests for the lint command

use anyhow::Result;
use brevity::lint::collect_report;
use brevity::linter::init_linter;
use brevity_core::BrevityConfig;
use brevity_rule_abi::Severity;
use camino::Utf8PathBuf;
use std::fmt::Write;
use std::fs;
use tempfile::TempDir;

fn utf8_dir(temp_dir: &TempDir) -> Result<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(temp_dir.path().to_path_buf())
        .map_err(|_| anyhow::anyhow!("non-utf8 path"))
}

/// A function holding one closure whose body has `statements` lines
/// between its braces.
fn closure_source(statements: usize) -> String {
    let mut src = String::from("fn main() {\n    let mut total = 0;\n    let mut add = || {\n");
    for i in 0..statements {
        let _ = writeln!(src, "        total += {i};");
    }
    src.push_str("    };\n    add();\n}\n");
    src
}

#[test]
fn test_lint_reports_long_closures_in_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = utf8_dir(&temp_dir)?;
    fs::create_dir(root.join("src"))?;
    fs::write(root.join("src/short.rs"), closure_source(3))?;
    fs::write(root.join("src/long.rs"), closure_source(25))?;
    fs::write(root.join("src/notes.md"), closure_source(200))?;

    let report = collect_report(&init_linter(None), &[root.clone()], false)?;

    assert_eq!(report.files, 2);
    assert_eq!(report.violations.len(), 1);
    let violation = &report.violations[0];
    assert!(violation.path.ends_with("long.rs"));
    assert_eq!(violation.severity, Severity::Warning);
    assert_eq!((violation.line, violation.col), (3, 19));
    assert!(violation.reason.ends_with("currently spans 27 lines"));
    assert_eq!(report.exit_code(false), 0);
    assert_eq!(report.exit_code(true), 1);

    Ok(())
}

#[test]
fn test_lint_highest_only_keeps_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = utf8_dir(&temp_dir)?;
    let file = root.join("huge.rs");
    fs::write(&file, closure_source(120))?;

    let linter = init_linter(None);
    let all = collect_report(&linter, std::slice::from_ref(&file), false)?;
    assert_eq!(all.violations.len(), 2);
    assert_eq!(all.exit_code(false), 2);

    let highest = collect_report(&linter, std::slice::from_ref(&file), true)?;
    assert_eq!(highest.violations.len(), 1);
    assert_eq!(highest.violations[0].severity, Severity::Error);

    Ok(())
}

#[test]
fn test_lint_respects_configured_levels() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = utf8_dir(&temp_dir)?;
    let file = root.join("main.rs");
    fs::write(&file, closure_source(8))?;

    let config = BrevityConfig::from_toml("[rule.closure_body_length]\nlevels = [5, 9]\n")?;
    let report = collect_report(&init_linter(Some(&config)), &[file.clone()], false)?;
    let severities: Vec<_> = report.violations.iter().map(|v| v.severity).collect();
    assert_eq!(severities, vec![Severity::Warning, Severity::Error]);
    assert!(report.violations[0].reason.contains("should span 5 lines or less"));

    let disabled = BrevityConfig::from_toml("[rule.closure_body_length]\nenabled = false\n")?;
    let report = collect_report(&init_linter(Some(&disabled)), &[file], false)?;
    assert!(report.violations.is_empty());

    Ok(())
}

#[test]
fn test_lint_skips_unparseable_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = utf8_dir(&temp_dir)?;
    fs::write(root.join("broken.rs"), "fn main() { let = ; }\n")?;

    let report = collect_report(&init_linter(None), &[root], false)?;
    assert_eq!(report.files, 1);
    assert!(report.violations.is_empty());

    Ok(())
}
