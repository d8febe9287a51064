//! Templates compiled into the binary
//!
//! Bodies live under `templates/` at the crate root and are embedded with
//! `include_str!`, so the builtin catalog never touches the filesystem or
//! network.

use super::{Origin, TemplateCatalog, TemplateEntry};

struct BuiltinTemplate {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    tags: &'static [&'static str],
    content: &'static str,
}

/// Descriptions should stay under this many characters to fit the `list` table
pub const DESCRIPTION_ADVISORY_LEN: usize = 60;

const BUILTIN_TEMPLATES: &[BuiltinTemplate] = &[
    BuiltinTemplate {
        key: "python",
        name: "Python",
        description: "Modern Python with type hints, docstrings, best practices",
        tags: &["python", "backend"],
        content: include_str!("../../templates/python.md"),
    },
    BuiltinTemplate {
        key: "nextjs",
        name: "Next.js",
        description: "Next.js 14+ with App Router, Server Components, Tailwind",
        tags: &["typescript", "react", "frontend"],
        content: include_str!("../../templates/nextjs.md"),
    },
    BuiltinTemplate {
        key: "flutter",
        name: "Flutter",
        description: "Flutter/Dart with clean architecture and best practices",
        tags: &["dart", "mobile"],
        content: include_str!("../../templates/flutter.md"),
    },
    BuiltinTemplate {
        key: "java-spring",
        name: "Java Spring Boot",
        description: "Spring Boot 3+ with modern Java practices",
        tags: &["java", "backend"],
        content: include_str!("../../templates/java-spring.md"),
    },
];

/// Build the builtin catalog. Pure and deterministic.
pub fn builtin_catalog() -> TemplateCatalog {
    BUILTIN_TEMPLATES
        .iter()
        .map(|t| TemplateEntry {
            key: t.key.to_string(),
            name: t.name.to_string(),
            description: t.description.to_string(),
            content: t.content.to_string(),
            tags: t.tags.iter().map(|tag| tag.to_string()).collect(),
            source_url: None,
            author: None,
            origin: Origin::Builtin,
        })
        .collect()
}
