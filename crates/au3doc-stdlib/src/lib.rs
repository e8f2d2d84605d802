//! AutoIt3 standard library documentation registry
//!
//! This crate holds the per-module signature tables for the documented
//! AutoIt3 names and builds the two process-wide lookup tables derived
//! from them: hover markdown and completion entries, both keyed by
//! lower-cased name.
//!
//! # Example
//!
//! ```
//! use au3doc_stdlib::{lookup_completion, lookup_hover};
//!
//! // Lookups are case-insensitive
//! let hover = lookup_hover("_colorgetred").unwrap();
//! assert!(hover.contains("_ColorGetRed ( $iColor )"));
//!
//! let entry = lookup_completion("_FTP_Open").unwrap();
//! assert_eq!(entry.insert_text, "_FTP_Open");
//! ```

pub mod modules;

use once_cell::sync::Lazy;

// Re-export the core model so consumers need only this crate
pub use au3doc_core::{
    CompletionEntry, CompletionKind, DocError, DocModule, Parameter, Registry, Signature,
    SignatureTable,
};

/// The fixed aggregation order of all documentation modules.
///
/// Both lookup tables are built from this one list; its order decides
/// the winner when two modules document the same name (the later module
/// wins). Append new modules here when adding a file under `modules/`.
pub const MODULES: &[DocModule] = &[
    DocModule {
        name: "keywords",
        kind: CompletionKind::Keyword,
        include: None,
        table: modules::keywords::signatures,
    },
    DocModule {
        name: "macros",
        kind: CompletionKind::Macro,
        include: None,
        table: modules::macros::signatures,
    },
    DocModule {
        name: "array",
        kind: CompletionKind::Function,
        include: Some(modules::array::INCLUDE),
        table: modules::array::signatures,
    },
    DocModule {
        name: "clipboard",
        kind: CompletionKind::Function,
        include: Some(modules::clipboard::INCLUDE),
        table: modules::clipboard::signatures,
    },
    DocModule {
        name: "color",
        kind: CompletionKind::Function,
        include: Some(modules::color::INCLUDE),
        table: modules::color::signatures,
    },
    DocModule {
        name: "date",
        kind: CompletionKind::Function,
        include: Some(modules::date::INCLUDE),
        table: modules::date::signatures,
    },
    DocModule {
        name: "file",
        kind: CompletionKind::Function,
        include: Some(modules::file::INCLUDE),
        table: modules::file::signatures,
    },
    DocModule {
        name: "ftpex",
        kind: CompletionKind::Function,
        include: Some(modules::ftpex::INCLUDE),
        table: modules::ftpex::signatures,
    },
    DocModule {
        name: "guibutton",
        kind: CompletionKind::Function,
        include: Some(modules::guibutton::INCLUDE),
        table: modules::guibutton::signatures,
    },
    DocModule {
        name: "inet",
        kind: CompletionKind::Function,
        include: Some(modules::inet::INCLUDE),
        table: modules::inet::signatures,
    },
    DocModule {
        name: "memory",
        kind: CompletionKind::Function,
        include: Some(modules::memory::INCLUDE),
        table: modules::memory::signatures,
    },
    DocModule {
        name: "misc",
        kind: CompletionKind::Function,
        include: Some(modules::misc::INCLUDE),
        table: modules::misc::signatures,
    },
    DocModule {
        name: "namedpipes",
        kind: CompletionKind::Function,
        include: Some(modules::namedpipes::INCLUDE),
        table: modules::namedpipes::signatures,
    },
    DocModule {
        name: "process",
        kind: CompletionKind::Function,
        include: Some(modules::process::INCLUDE),
        table: modules::process::signatures,
    },
    DocModule {
        name: "screencapture",
        kind: CompletionKind::Function,
        include: Some(modules::screencapture::INCLUDE),
        table: modules::screencapture::signatures,
    },
    DocModule {
        name: "sound",
        kind: CompletionKind::Function,
        include: Some(modules::sound::INCLUDE),
        table: modules::sound::signatures,
    },
    DocModule {
        name: "string",
        kind: CompletionKind::Function,
        include: Some(modules::string::INCLUDE),
        table: modules::string::signatures,
    },
    DocModule {
        name: "timers",
        kind: CompletionKind::Function,
        include: Some(modules::timers::INCLUDE),
        table: modules::timers::signatures,
    },
];

/// The documentation registry, built eagerly on first access and held
/// for the process lifetime. Malformed data is a startup failure, not a
/// partially usable registry.
static REGISTRY: Lazy<Registry> = Lazy::new(|| match build_registry() {
    Ok(registry) => registry,
    Err(err) => panic!("documentation registry failed to build: {err}"),
});

/// Build a fresh registry from [`MODULES`]. The static accessors below
/// are the usual entry point; this is for callers that want the error.
pub fn build_registry() -> Result<Registry, DocError> {
    Registry::build(MODULES)
}

/// The shared process-wide registry
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Look up hover markdown for a name, case-insensitively
pub fn lookup_hover(name: &str) -> Option<&'static str> {
    REGISTRY.hover(name)
}

/// Look up a completion entry for a name, case-insensitively
pub fn lookup_completion(name: &str) -> Option<&'static CompletionEntry> {
    REGISTRY.completion(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_module_names_are_unique() {
        let names: HashSet<&str> = MODULES.iter().map(|m| m.name).collect();
        assert_eq!(names.len(), MODULES.len(), "Duplicate module name in MODULES");
    }

    #[test]
    fn test_native_modules_precede_udf_modules() {
        assert_eq!(MODULES[0].name, "keywords");
        assert_eq!(MODULES[1].name, "macros");
        assert!(MODULES[2..].iter().all(|m| m.include.is_some()));
    }

    #[test]
    fn test_registry_builds() {
        let registry = build_registry().unwrap();
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_every_key_is_lower_case() {
        let registry = registry();
        for key in registry.hovers().keys().chain(registry.completions().keys()) {
            assert_eq!(key, &key.to_lowercase(), "Non-lowered key: {key}");
        }
    }

    #[test]
    fn test_hover_and_completion_tables_cover_the_same_names() {
        let registry = registry();
        let hovers: HashSet<&String> = registry.hovers().keys().collect();
        let completions: HashSet<&String> = registry.completions().keys().collect();
        assert_eq!(hovers, completions);
    }
}
