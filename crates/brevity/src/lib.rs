//! Brevity library interface for the binary and integration tests

#![warn(rust_2024_compatibility, clippy::all)]
#![allow(
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::too_many_lines
)]

pub mod cli;
pub mod config;
pub mod files;
pub mod init;
pub mod lint;
pub mod linter;
pub mod output;
pub mod rules;
