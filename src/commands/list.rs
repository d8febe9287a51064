//! List command - Show every resolvable template

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use cursor_init::config::Settings;
use cursor_init::templates::TemplateCatalog;
use owo_colors::OwoColorize;

use super::utils;

/// Execute the list command and return formatted output.
///
/// Never fails on network problems: an unreachable registry just means the
/// builtin templates are listed alone.
pub fn execute(settings: &Settings) -> String {
    let fetcher = utils::fetcher(settings);
    let catalogs = utils::load_catalogs(settings, &fetcher);
    format_catalog(&catalogs.merged())
}

/// Render a catalog as a table followed by a usage hint
pub fn format_catalog(catalog: &TemplateCatalog) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Template"),
            Cell::new("Name"),
            Cell::new("Description"),
            Cell::new("Source"),
        ]);

    for entry in catalog.iter() {
        table.add_row(vec![
            Cell::new(&entry.key),
            Cell::new(&entry.name),
            Cell::new(&entry.description),
            Cell::new(entry.origin.to_string()),
        ]);
    }

    let mut output = table.to_string();
    output.push_str(&format!("\n\n{} templates available", catalog.len()));
    output.push_str(&format!(
        "\n{}",
        "Usage: cursor-init install <template>".dimmed()
    ));
    output
}
