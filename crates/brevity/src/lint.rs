//! Lint command implementation

use anyhow::{Context, Result};
use brevity_core::{Linter, SourceFile};
use brevity_rule_abi::{Severity, Violations};
use camino::Utf8PathBuf;
use rayon::prelude::*;
use std::collections::HashMap;
use std::fs;

use crate::cli::{LintArgs, OutputFormat};
use crate::config::{load_config, load_rule_config};
use crate::files::collect_all_files;
use crate::linter::init_linter;
use crate::output::{SerializableViolation, format_violation};

/// Violations across all linted files, ordered by path then offset.
#[derive(Debug, Default)]
pub struct Report {
    pub files: usize,
    pub violations: Vec<SerializableViolation>,
}

impl Report {
    pub fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// 2 on any error, 1 on warnings when strict, else 0.
    pub fn exit_code(&self, strict: bool) -> i32 {
        if self.count(Severity::Error) > 0 {
            2
        } else if strict && self.count(Severity::Warning) > 0 {
            1
        } else {
            0
        }
    }
}

/// Keep the most severe violation per offset, first one on ties.
pub fn keep_highest(violations: Violations) -> Violations {
    let mut best: HashMap<usize, usize> = HashMap::new();
    let mut kept: Violations = Vec::new();
    for violation in violations {
        if let Some(&idx) = best.get(&violation.offset) {
            if violation.severity > kept[idx].severity {
                kept[idx] = violation;
            }
        } else {
            best.insert(violation.offset, kept.len());
            kept.push(violation);
        }
    }
    kept
}

pub fn collect_report(
    linter: &Linter,
    paths: &[Utf8PathBuf],
    highest_only: bool,
) -> Result<Report> {
    let files = collect_all_files(paths, &linter.supported_extensions())?;

    let per_file: Vec<Vec<SerializableViolation>> = files
        .par_iter()
        .map(|path| lint_file(linter, path, highest_only))
        .collect::<Result<_>>()?;

    let mut violations: Vec<SerializableViolation> = per_file.into_iter().flatten().collect();
    violations.sort_by(|a, b| a.path.cmp(&b.path).then(a.offset.cmp(&b.offset)));

    Ok(Report {
        files: files.len(),
        violations,
    })
}

fn lint_file(
    linter: &Linter,
    path: &Utf8PathBuf,
    highest_only: bool,
) -> Result<Vec<SerializableViolation>> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::InvalidData => {
            tracing::warn!("skipping {path}: not valid UTF-8");
            return Ok(Vec::new());
        }
        Err(err) => return Err(err).with_context(|| format!("failed to read {path}")),
    };

    let source = SourceFile {
        path: path.as_path(),
        text: &text,
    };
    let mut violations = linter.lint(&source);
    if highest_only {
        violations = keep_highest(violations);
    }

    Ok(violations
        .iter()
        .map(|v| SerializableViolation::new(path.as_str(), &text, v))
        .collect())
}

pub fn run_once(args: LintArgs) -> Result<()> {
    let cfg = load_config(args.config.as_ref())?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        cfg.format.unwrap_or(OutputFormat::Human)
    };
    let strict = args.strict || cfg.strict.unwrap_or(false);

    let rule_config = load_rule_config(args.config.as_ref())?;
    let linter = init_linter(rule_config.as_ref());

    let report = collect_report(&linter, &args.paths, args.highest_only)?;
    if report.files == 0 {
        eprintln!("No files found");
        return Ok(());
    }

    let names: HashMap<String, String> = linter
        .rule_descriptions()
        .into_iter()
        .map(|d| (d.identifier, d.name))
        .collect();

    match format {
        OutputFormat::Human => {
            for violation in &report.violations {
                let name = names
                    .get(&violation.rule)
                    .map_or(violation.rule.as_str(), String::as_str);
                println!("{}", format_violation(violation, name));
            }
            eprintln!(
                "{} files, {} warnings, {} errors",
                report.files,
                report.count(Severity::Warning),
                report.count(Severity::Error)
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report.violations)?);
        }
    }

    std::process::exit(report.exit_code(strict));
}
