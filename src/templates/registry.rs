//! Remote template registry
//!
//! The registry is a JSON document:
//!
//! ```json
//! {
//!   "templates": {
//!     "rust": {
//!       "name": "Rust",
//!       "description": "Idiomatic Rust",
//!       "url": "templates/rust.md",
//!       "author": "someone",
//!       "tags": ["rust"]
//!     }
//!   }
//! }
//! ```
//!
//! Each entry carries either inline `content` or a `url` to the raw body.
//! Relative `url`s are resolved against the registry URL.

use reqwest::blocking::Client;
use serde_json::{Map, Value};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

use super::{is_valid_key, Origin, TemplateCatalog, TemplateEntry};
use crate::error::{InitError, Result};

/// Blocking HTTP client with a fixed timeout
pub struct HttpFetcher {
    /// Holds the builder error when the client could not be set up; every
    /// request then fails with [`InitError::Fetch`].
    client: std::result::Result<Client, String>,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!("cursor-init/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| e.to_string());
        if let Err(e) = &client {
            warn!("Failed to set up HTTP client: {}", e);
        }
        Self { client }
    }

    /// GET `url` and return the body as text. Non-2xx statuses are errors.
    pub fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);
        let fetch_err = |message: String| InitError::Fetch {
            url: url.to_string(),
            message,
        };

        let client = self
            .client
            .as_ref()
            .map_err(|e| fetch_err(format!("HTTP client unavailable: {}", e)))?;

        let response = client
            .get(url)
            .send()
            .map_err(|e| fetch_err(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_err(format!("HTTP {}", status)));
        }

        response.text().map_err(|e| fetch_err(e.to_string()))
    }
}

/// Fetch and parse the registry. Any failure yields `None` so callers fall
/// back to the builtin catalog.
pub fn fetch_remote_catalog(fetcher: &HttpFetcher, registry_url: &str) -> Option<TemplateCatalog> {
    let body = match fetcher.fetch_text(registry_url) {
        Ok(body) => body,
        Err(e) => {
            warn!("Registry unavailable, using builtin templates: {}", e);
            return None;
        }
    };

    match parse_registry(&body, registry_url) {
        Some(catalog) => {
            debug!("Registry provided {} template(s)", catalog.len());
            Some(catalog)
        }
        None => {
            warn!("Registry at {} is malformed, using builtin templates", registry_url);
            None
        }
    }
}

/// Parse a registry document. Returns `None` when the document itself is
/// unusable; individual bad entries are skipped.
pub fn parse_registry(body: &str, registry_url: &str) -> Option<TemplateCatalog> {
    let document: serde_json::Value = serde_json::from_str(body).ok()?;
    let templates = document.get("templates")?.as_object()?;
    let base = Url::parse(registry_url).ok();

    let catalog = templates
        .iter()
        .filter_map(|(key, value)| {
            let entry = parse_entry(key, value, base.as_ref());
            if entry.is_none() {
                warn!("Skipping invalid registry entry '{}'", key);
            }
            entry
        })
        .collect();

    Some(catalog)
}

/// `name` plus a body (`content` or `url`) are required. Optional fields
/// with the wrong type are ignored rather than rejecting the entry.
fn parse_entry(key: &str, value: &Value, base: Option<&Url>) -> Option<TemplateEntry> {
    if !is_valid_key(key) {
        return None;
    }

    let fields = value.as_object()?;
    let name = str_field(fields, "name").filter(|n| !n.trim().is_empty())?;
    let content = str_field(fields, "content").filter(|c| !c.is_empty());

    let source_url = match str_field(fields, "url") {
        Some(url) => match resolve_url(url, base) {
            Some(resolved) => Some(resolved),
            // Inline content still makes the entry usable
            None if content.is_some() => {
                warn!("Ignoring invalid url '{}' for registry entry '{}'", url, key);
                None
            }
            None => return None,
        },
        None => None,
    };

    if content.is_none() && source_url.is_none() {
        return None;
    }

    let tags = fields
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default();

    Some(TemplateEntry {
        key: key.to_string(),
        name: name.to_string(),
        description: str_field(fields, "description")
            .unwrap_or_default()
            .to_string(),
        content: content.unwrap_or_default().to_string(),
        tags,
        source_url,
        author: str_field(fields, "author").map(String::from),
        origin: Origin::Remote,
    })
}

fn str_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}

/// Absolute URLs pass through; relative ones are joined onto the registry URL
fn resolve_url(url: &str, base: Option<&Url>) -> Option<String> {
    match Url::parse(url) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            base.and_then(|b| b.join(url).ok()).map(|u| u.to_string())
        }
        Err(_) => None,
    }
}
