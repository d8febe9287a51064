//! Shared utilities for commands

use cursor_init::config::Settings;
use cursor_init::templates::builtin::builtin_catalog;
use cursor_init::templates::registry::{fetch_remote_catalog, HttpFetcher};
use cursor_init::templates::TemplateCatalog;

/// Catalogs available to one invocation
pub struct Catalogs {
    pub builtin: TemplateCatalog,
    /// `None` when offline or the registry could not be used
    pub remote: Option<TemplateCatalog>,
}

impl Catalogs {
    /// Builtin plus remote, remote entries winning
    pub fn merged(&self) -> TemplateCatalog {
        TemplateCatalog::merged(&self.builtin, self.remote.as_ref())
    }
}

/// Build the HTTP client for this invocation
pub fn fetcher(settings: &Settings) -> HttpFetcher {
    HttpFetcher::new(settings.timeout)
}

/// Load the builtin catalog and, when online, try the registry
pub fn load_catalogs(settings: &Settings, fetcher: &HttpFetcher) -> Catalogs {
    let remote = settings
        .registry_url
        .as_deref()
        .and_then(|url| fetch_remote_catalog(fetcher, url));

    Catalogs {
        builtin: builtin_catalog(),
        remote,
    }
}
