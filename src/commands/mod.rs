//! CLI commands

pub mod install;
pub mod list;
pub mod show;
pub mod utils;
