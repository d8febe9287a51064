//! Template entries and catalogs
//!
//! A catalog is built once and never mutated; combining the builtin and
//! remote catalogs produces a new one via [`TemplateCatalog::merged`].

pub mod builtin;
pub mod registry;

use std::collections::BTreeMap;

/// Where a template entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Compiled into the binary
    Builtin,
    /// Listed in the remote registry
    Remote,
    /// Fetched from a URL given on the command line
    Url,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Builtin => write!(f, "builtin"),
            Self::Remote => write!(f, "remote"),
            Self::Url => write!(f, "url"),
        }
    }
}

/// A single `.cursorrules` template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Unique kebab-case identifier
    pub key: String,
    /// Display name
    pub name: String,
    /// One-line summary, ideally under 60 characters
    pub description: String,
    /// Rules text. Empty for registry entries whose body lives at `source_url`
    /// and has not been downloaded yet.
    pub content: String,
    pub tags: Vec<String>,
    /// Location of the raw body, when it is hosted separately
    pub source_url: Option<String>,
    pub author: Option<String>,
    pub origin: Origin,
}

impl TemplateEntry {
    /// True when the body must still be downloaded from `source_url`
    pub fn needs_download(&self) -> bool {
        self.content.is_empty() && self.source_url.is_some()
    }
}

/// Check that a key is kebab-case: lowercase ASCII alphanumerics separated by
/// single hyphens
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        })
}

/// Mapping from template key to entry, iterated in key order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    entries: BTreeMap<String, TemplateEntry>,
}

impl TemplateCatalog {
    pub fn get(&self, key: &str) -> Option<&TemplateEntry> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Union of both catalogs. A remote entry replaces the builtin entry with
    /// the same key as a whole; fields are never mixed.
    pub fn merged(builtin: &TemplateCatalog, remote: Option<&TemplateCatalog>) -> TemplateCatalog {
        let mut entries = builtin.entries.clone();
        if let Some(remote) = remote {
            for (key, entry) in &remote.entries {
                entries.insert(key.clone(), entry.clone());
            }
        }
        TemplateCatalog { entries }
    }
}

impl FromIterator<TemplateEntry> for TemplateCatalog {
    /// Later entries win on duplicate keys
    fn from_iter<I: IntoIterator<Item = TemplateEntry>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|entry| (entry.key.clone(), entry))
            .collect();
        Self { entries }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn entry(key: &str, content: &str, origin: Origin) -> TemplateEntry {
        TemplateEntry {
            key: key.to_string(),
            name: key.to_uppercase(),
            description: format!("{} rules", key),
            content: content.to_string(),
            tags: Vec::new(),
            source_url: None,
            author: None,
            origin,
        }
    }

    #[test]
    fn test_valid_keys() {
        assert!(is_valid_key("python"));
        assert!(is_valid_key("java-spring"));
        assert!(is_valid_key("vue3"));
        assert!(is_valid_key("a-b-c"));
    }

    #[test]
    fn test_invalid_keys() {
        assert!(!is_valid_key(""));
        assert!(!is_valid_key("Python"));
        assert!(!is_valid_key("java_spring"));
        assert!(!is_valid_key("-python"));
        assert!(!is_valid_key("python-"));
        assert!(!is_valid_key("java--spring"));
        assert!(!is_valid_key("has space"));
    }

    #[test]
    fn test_catalog_iterates_in_key_order() {
        let catalog: TemplateCatalog = vec![
            entry("rust", "r", Origin::Builtin),
            entry("go", "g", Origin::Builtin),
            entry("python", "p", Origin::Builtin),
        ]
        .into_iter()
        .collect();

        let keys: Vec<&str> = catalog.keys().collect();
        assert_eq!(keys, vec!["go", "python", "rust"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_merge_remote_replaces_whole_entry() {
        let builtin: TemplateCatalog = vec![entry("python", "builtin body", Origin::Builtin)]
            .into_iter()
            .collect();
        let mut remote_python = entry("python", "remote body", Origin::Remote);
        remote_python.description = String::new();
        let remote: TemplateCatalog = vec![remote_python].into_iter().collect();

        let merged = TemplateCatalog::merged(&builtin, Some(&remote));
        let python = merged.get("python").unwrap();
        assert_eq!(python.content, "remote body");
        assert_eq!(python.origin, Origin::Remote);
        // No field-level merge: the empty remote description is kept
        assert_eq!(python.description, "");
    }

    #[test]
    fn test_merge_unions_disjoint_keys() {
        let builtin: TemplateCatalog = vec![entry("python", "p", Origin::Builtin)]
            .into_iter()
            .collect();
        let remote: TemplateCatalog = vec![entry("rust", "r", Origin::Remote)]
            .into_iter()
            .collect();

        let merged = TemplateCatalog::merged(&builtin, Some(&remote));
        assert_eq!(merged.len(), 2);
        assert!(merged.contains("python"));
        assert!(merged.contains("rust"));
    }

    #[test]
    fn test_merge_without_remote_is_builtin() {
        let builtin: TemplateCatalog = vec![entry("python", "p", Origin::Builtin)]
            .into_iter()
            .collect();
        assert_eq!(TemplateCatalog::merged(&builtin, None), builtin);
    }

    #[test]
    fn test_needs_download() {
        let mut e = entry("remote-only", "", Origin::Remote);
        assert!(!e.needs_download());
        e.source_url = Some("https://example.com/rules.md".to_string());
        assert!(e.needs_download());
        e.content = "body".to_string();
        assert!(!e.needs_download());
    }

    #[test]
    fn test_origin_display() {
        assert_eq!(Origin::Builtin.to_string(), "builtin");
        assert_eq!(Origin::Remote.to_string(), "remote");
        assert_eq!(Origin::Url.to_string(), "url");
    }
}
