//! Output generation for CLI results.
//!
//! # Submodules
//!
//! - [`json`]: pretty JSON, and writing rendered output to stdout or a file
//! - [`markdown`]: human readable listings of articles and sources

use clap::ValueEnum;

pub mod json;
pub mod markdown;

/// How the CLI renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
}
