#![warn(rust_2024_compatibility, clippy::all)]
#![allow(clippy::needless_pass_by_value)]

use anyhow::Result;
use brevity::cli::{Args, Command};
use brevity::init::run_init;
use brevity::lint::run_once;
use brevity::rules::run_rules;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries results; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.command {
        Command::Lint(lint) => run_once(lint),
        Command::Rules(rules) => run_rules(rules),
        Command::Init(init) => run_init(init),
    }
}
