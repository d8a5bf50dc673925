//! CLI argument parsing and command definitions

use camino::Utf8PathBuf;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "brevity", version, about = "Closure body length linter")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Lint files/directories once and exit
    Lint(LintArgs),
    /// List rules with their effective thresholds
    Rules(RulesArgs),
    /// Write a default .brevity.toml
    Init(InitArgs),
}

#[derive(Debug, Parser)]
pub struct LintArgs {
    /// Files or directories to lint.
    #[arg(required = true)]
    pub paths: Vec<Utf8PathBuf>,

    /// Optional config file (TOML only). Default: .brevity.toml if present.
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Output JSON instead of human format
    #[arg(long)]
    pub json: bool,

    /// Fail on warnings too
    #[arg(long)]
    pub strict: bool,

    /// Report only the most severe violation per closure
    #[arg(long)]
    pub highest_only: bool,
}

#[derive(Debug, Parser)]
pub struct RulesArgs {
    /// Optional config file (TOML only). Default: .brevity.toml if present.
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,

    /// Output JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Directory to write .brevity.toml into
    #[arg(default_value = ".")]
    pub path: Utf8PathBuf,

    /// Overwrite an existing .brevity.toml
    #[arg(long)]
    pub force: bool,
}
