//! Error types for cursor-init operations
//!
//! Declining an overwrite is not an error; see [`crate::installer::InstallOutcome`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by template resolution and installation
#[derive(Debug, Error)]
pub enum InitError {
    /// Key not present in the builtin or remote catalog
    #[error("Template '{key}' not found")]
    UnknownTemplate {
        key: String,
        /// Every key that would have resolved, for the user-facing hint
        available: Vec<String>,
    },

    /// Remote URL or registry unreachable, or returned a non-2xx status
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// Filesystem failure while writing the rules file
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the overwrite confirmation failed
    #[error("Failed to read confirmation: {source}")]
    Prompt {
        #[source]
        source: std::io::Error,
    },

    /// `--url` value is not an http(s) URL
    #[error("Invalid URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    /// Neither a template key nor a URL was given
    #[error("No template given. Pass a template name or --url <URL>")]
    MissingTemplate,

    /// Malformed config file
    #[error("Invalid config at {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

/// Result type alias for cursor-init operations
pub type Result<T> = std::result::Result<T, InitError>;
