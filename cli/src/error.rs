#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use linkt_core::AppError;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// Failure reported by the core library.
    #[display("{}", _0)]
    Core(AppError),

    /// Output could not be rendered.
    #[from(ignore)]
    #[display("Failed to render output: {}", _0)]
    Render(String),

    /// General failure message.
    #[display("Operation failed: {}", _0)]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for CliError {}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// Helper to parse "key=value" arguments.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    linkt_core::Invocation::parse_arg(s)
        .ok_or_else(|| format!("invalid KEY=value: expected `name=value`, got `{}`", s))
}
