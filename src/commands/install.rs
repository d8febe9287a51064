//! Install command - Write a template to `.cursorrules`

use anyhow::{bail, Result};
use cursor_init::config::{Settings, CURSORRULES_FILENAME};
use cursor_init::installer::{self, Confirm, InstallOutcome};
use cursor_init::resolver::{self, InstallRequest};
use cursor_init::templates::builtin::builtin_catalog;
use owo_colors::OwoColorize;
use tracing::debug;

use super::utils;

/// Execute the install command.
///
/// A declined overwrite returns `Ok(InstallOutcome::Aborted)`.
pub fn execute(
    settings: &Settings,
    request: &InstallRequest,
    confirm: &mut dyn Confirm,
) -> Result<InstallOutcome> {
    if !request.target_directory.is_dir() {
        bail!(
            "Target directory does not exist: {}",
            request.target_directory.display()
        );
    }

    let fetcher = utils::fetcher(settings);

    // A direct URL is the only network call; the registry is not consulted
    let entry = if request.url.is_some() {
        resolver::resolve(request, &builtin_catalog(), None, &fetcher)?
    } else {
        let catalogs = utils::load_catalogs(settings, &fetcher);
        resolver::resolve(
            request,
            &catalogs.builtin,
            catalogs.remote.as_ref(),
            &fetcher,
        )?
    };
    debug!("Installing '{}' from {}", entry.key, entry.origin);

    let target_path = request.target_directory.join(CURSORRULES_FILENAME);

    if target_path.exists() && !request.force {
        println!(
            "\n{} A {} file already exists in this directory.\n",
            "Warning:".yellow(),
            CURSORRULES_FILENAME.bold()
        );
    }

    let outcome = installer::install(&entry.content, &target_path, request.force, confirm)?;

    match &outcome {
        InstallOutcome::Written(path) => {
            let shown = path.canonicalize().unwrap_or_else(|_| path.clone());
            println!();
            println!(
                "{} {}{}",
                "Successfully initialized cursor rules for".green(),
                entry.name.green().bold(),
                "!".green()
            );
            println!("{} {}", "Created:".dimmed(), shown.display().cyan());
            println!();
        }
        InstallOutcome::Aborted => {
            println!("\n{}\n", "Operation cancelled.".dimmed());
        }
    }

    Ok(outcome)
}
