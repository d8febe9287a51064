//! Write resolved template content into a project
//!
//! Existing files are only replaced after confirmation (or with `force`).
//! Content goes to a temporary file in the target directory first and is
//! renamed into place, so an interrupted run never leaves a partial file.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tempfile::Builder;
use tracing::debug;

use crate::error::{InitError, Result};

/// Result of an install that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// File created or overwritten at this path
    Written(PathBuf),
    /// The user declined to overwrite; nothing was touched
    Aborted,
}

/// Yes/no gate asked before overwriting an existing file
pub trait Confirm {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;
}

/// Prompt on stdout and read the answer from a line-oriented reader.
/// Only `y` or `yes` (any case) counts as yes; EOF counts as no.
pub struct LinePrompt<R> {
    input: R,
}

impl<R: BufRead> LinePrompt<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

/// Prompt reading from the process's stdin
pub fn stdin_prompt() -> LinePrompt<io::StdinLock<'static>> {
    LinePrompt::new(io::stdin().lock())
}

impl<R: BufRead> Confirm for LinePrompt<R> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        print!("{} (y/N) ", question);
        io::stdout().flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;

        let answer = answer.trim();
        Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
    }
}

/// Write `content` to `target_path`.
///
/// When the file exists and `force` is false, `confirm` decides whether to
/// overwrite; a "no" returns [`InstallOutcome::Aborted`] without side effects.
pub fn install(
    content: &str,
    target_path: &Path,
    force: bool,
    confirm: &mut dyn Confirm,
) -> Result<InstallOutcome> {
    if target_path.exists() && !force {
        let overwrite = confirm
            .confirm("Do you want to overwrite it?")
            .map_err(|source| InitError::Prompt { source })?;
        if !overwrite {
            debug!("Overwrite of {} declined", target_path.display());
            return Ok(InstallOutcome::Aborted);
        }
    }

    write_atomic(content, target_path).map_err(|source| InitError::Write {
        path: target_path.to_path_buf(),
        source,
    })?;

    debug!("Wrote {} bytes to {}", content.len(), target_path.display());
    Ok(InstallOutcome::Written(target_path.to_path_buf()))
}

/// Write through a sibling temp file and rename over the target.
///
/// An existing target keeps its permissions; a new file gets the same mode
/// a plain create would give it (0o666 minus the umask).
fn write_atomic(content: &str, target_path: &Path) -> io::Result<()> {
    let dir = match target_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = fs::metadata(target_path).ok().map(|m| m.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut temp = builder.tempfile_in(dir)?;
    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions)?;
    }
    temp.write_all(content.as_bytes())?;
    temp.as_file().sync_all()?;
    temp.persist(target_path).map_err(|e| e.error)?;
    Ok(())
}
