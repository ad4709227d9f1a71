//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The resolved base URI could not be parsed as a URL.
    ///
    /// Fatal: the route or resolver is misconfigured, retrying cannot help.
    #[from(ignore)]
    #[display("Malformed URI '{uri}': {reason}")]
    MalformedInput {
        /// The offending input.
        uri: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// No route is registered under the given name.
    #[from(ignore)]
    #[display("Unknown route: {_0}")]
    UnknownRoute(String),

    /// A path segment or required query parameter had no argument.
    #[from(ignore)]
    #[display("Route '{route}' is missing argument '{name}'")]
    MissingArgument {
        /// Route name.
        route: String,
        /// Parameter name.
        name: String,
    },

    /// A parameter name was rejected by the strict naming policy.
    #[from(ignore)]
    #[display("Invalid template parameter name: '{_0}'")]
    InvalidParameterName(String),

    /// Route manifest could not be loaded.
    #[from(ignore)]
    #[display("Config Error: {_0}")]
    Config(String),

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
