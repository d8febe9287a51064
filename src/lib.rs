//! cursor-init library
//!
//! Resolves `.cursorrules` templates from the builtin set, a remote registry,
//! or a direct URL, and installs them into a project directory.

pub mod config;
pub mod error;
pub mod installer;
pub mod resolver;
pub mod templates;

pub use error::{InitError, Result};
