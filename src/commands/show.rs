//! Show command - Preview a template without installing it

use anyhow::Result;
use cursor_init::config::Settings;
use cursor_init::resolver;
use cursor_init::templates::TemplateEntry;
use owo_colors::OwoColorize;

use super::utils;

/// Execute the show command and return the text to print
pub fn execute(settings: &Settings, key: &str, raw: bool) -> Result<String> {
    let fetcher = utils::fetcher(settings);
    let catalogs = utils::load_catalogs(settings, &fetcher);

    let entry = resolver::resolve_key(
        key,
        &catalogs.builtin,
        catalogs.remote.as_ref(),
        &fetcher,
    )?;

    Ok(if raw {
        entry.content
    } else {
        format_entry(&entry)
    })
}

/// Header with the template name and origin, then the content
pub fn format_entry(entry: &TemplateEntry) -> String {
    let mut output = format!(
        "{} {}\n",
        format!("{} Template", entry.name).cyan().bold(),
        format!("({}, {})", entry.key, entry.origin).dimmed()
    );
    if let Some(author) = &entry.author {
        output.push_str(&format!("{}\n", format!("by {}", author).dimmed()));
    }
    output.push('\n');
    output.push_str(&entry.content);
    output
}
