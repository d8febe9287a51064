//! Turn a template key or URL into concrete template content
//!
//! Resolution performs no filesystem writes. The only network access is the
//! download of a direct `--url` body or of a registry entry hosted by URL.

use std::path::PathBuf;
use tracing::{debug, warn};
use url::Url;

use crate::error::{InitError, Result};
use crate::templates::registry::HttpFetcher;
use crate::templates::{Origin, TemplateCatalog, TemplateEntry};

/// What the user asked to install
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub key: Option<String>,
    pub url: Option<String>,
    pub force: bool,
    pub target_directory: PathBuf,
}

/// Resolve a request to a template with its content filled in.
///
/// A URL takes precedence over a key when both are given. Keys are looked up
/// in the remote catalog first, then the builtin one.
pub fn resolve(
    request: &InstallRequest,
    builtin: &TemplateCatalog,
    remote: Option<&TemplateCatalog>,
    fetcher: &HttpFetcher,
) -> Result<TemplateEntry> {
    match (&request.url, &request.key) {
        (Some(url), key) => {
            if let Some(key) = key {
                debug!("Both key '{}' and URL given; using URL", key);
            }
            resolve_url(url, fetcher)
        }
        (None, Some(key)) => resolve_key(key, builtin, remote, fetcher),
        (None, None) => Err(InitError::MissingTemplate),
    }
}

/// Look up `key` and download its body if it is hosted by URL.
///
/// When the download of a remote override fails and the key is also
/// builtin, the builtin entry is returned instead.
pub fn resolve_key(
    key: &str,
    builtin: &TemplateCatalog,
    remote: Option<&TemplateCatalog>,
    fetcher: &HttpFetcher,
) -> Result<TemplateEntry> {
    let entry = lookup(key, builtin, remote)?;
    match download_if_needed(entry, fetcher) {
        Ok(entry) => Ok(entry),
        Err(e) => match builtin.get(key) {
            Some(fallback) => {
                warn!("{}; using builtin '{}' template", e, key);
                Ok(fallback.clone())
            }
            None => Err(e),
        },
    }
}

/// Find `key` without downloading anything
pub fn lookup(
    key: &str,
    builtin: &TemplateCatalog,
    remote: Option<&TemplateCatalog>,
) -> Result<TemplateEntry> {
    if let Some(entry) = remote.and_then(|r| r.get(key)) {
        debug!("Resolved '{}' from registry", key);
        return Ok(entry.clone());
    }

    if let Some(entry) = builtin.get(key) {
        debug!("Resolved '{}' from builtin templates", key);
        return Ok(entry.clone());
    }

    let available = TemplateCatalog::merged(builtin, remote)
        .keys()
        .map(String::from)
        .collect();
    Err(InitError::UnknownTemplate {
        key: key.to_string(),
        available,
    })
}

/// Download the body of a registry entry hosted by URL
pub fn download_if_needed(mut entry: TemplateEntry, fetcher: &HttpFetcher) -> Result<TemplateEntry> {
    if !entry.needs_download() {
        return Ok(entry);
    }
    if let Some(url) = entry.source_url.as_deref() {
        entry.content = fetcher.fetch_text(url)?;
    }
    Ok(entry)
}

/// Build an ad-hoc entry from a raw text URL
fn resolve_url(url: &str, fetcher: &HttpFetcher) -> Result<TemplateEntry> {
    let parsed = Url::parse(url).map_err(|e| InitError::InvalidUrl {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(InitError::InvalidUrl {
            url: url.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    let content = fetcher.fetch_text(parsed.as_str())?;
    let name = url_display_name(&parsed);

    Ok(TemplateEntry {
        key: name.clone(),
        name,
        description: format!("Fetched from {}", parsed),
        content,
        tags: Vec::new(),
        source_url: Some(parsed.to_string()),
        author: None,
        origin: Origin::Url,
    })
}

/// Last non-empty path segment, or the host for bare domains
fn url_display_name(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .map(String::from)
        .or_else(|| url.host_str().map(String::from))
        .unwrap_or_else(|| url.to_string())
}
