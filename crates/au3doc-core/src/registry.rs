//! The global documentation registry: ordered module aggregation and
//! case-insensitive lookup

use std::collections::HashMap;

use crate::completion::{format_completions, CompletionEntry, CompletionKind};
use crate::error::DocError;
use crate::hover::format_hover;
use crate::signature::SignatureTable;

/// One documentation domain participating in the registry.
///
/// The table is a function rather than data so module definitions stay
/// plain `const` items; it is invoked exactly once per build.
#[derive(Clone, Copy)]
pub struct DocModule {
    /// Module name, used in error messages
    pub name: &'static str,
    /// Completion kind tagged onto every entry of this module
    pub kind: CompletionKind,
    /// UDF include file, e.g. `Date.au3`; rendered as a "Requires
    /// `#include <...>`" note on completions. `None` for native names.
    pub include: Option<&'static str>,
    pub table: fn() -> SignatureTable,
}

impl DocModule {
    fn note(&self) -> String {
        match self.include {
            Some(include) => format!("Requires `#include <{include}>`"),
            None => String::new(),
        }
    }
}

/// Fold a sequence of per-module maps into one, in iteration order.
/// Later maps overwrite earlier keys.
pub fn aggregate<T>(parts: impl IntoIterator<Item = HashMap<String, T>>) -> HashMap<String, T> {
    let mut merged = HashMap::new();
    for part in parts {
        merged.extend(part);
    }
    merged
}

/// The process-wide lookup tables, built once and immutable afterwards
#[derive(Clone, Debug)]
pub struct Registry {
    hovers: HashMap<String, String>,
    completions: HashMap<String, CompletionEntry>,
}

impl Registry {
    /// Build both lookup tables from `modules`, walking the list once
    /// in its given order so hovers and completions always agree on
    /// collision winners. Any malformed module fails the whole build;
    /// a partially-built registry is never returned.
    pub fn build(modules: &[DocModule]) -> Result<Self, DocError> {
        let mut hover_parts = Vec::with_capacity(modules.len());
        let mut completion_parts = Vec::with_capacity(modules.len());
        for module in modules {
            let table = (module.table)();
            hover_parts.push(format_hover(module.name, &table)?);
            completion_parts.push(format_completions(
                module.name,
                &table,
                module.kind,
                &module.note(),
            )?);
        }
        Ok(Self {
            hovers: aggregate(hover_parts),
            completions: aggregate(completion_parts),
        })
    }

    /// Look up hover markdown by name, case-insensitively
    pub fn hover(&self, name: &str) -> Option<&str> {
        self.hovers.get(&name.to_lowercase()).map(String::as_str)
    }

    /// Look up a completion entry by name, case-insensitively
    pub fn completion(&self, name: &str) -> Option<&CompletionEntry> {
        self.completions.get(&name.to_lowercase())
    }

    /// All hover entries, keyed by lower-cased name
    pub fn hovers(&self) -> &HashMap<String, String> {
        &self.hovers
    }

    /// All completion entries, keyed by lower-cased name
    pub fn completions(&self) -> &HashMap<String, CompletionEntry> {
        &self.completions
    }

    pub fn len(&self) -> usize {
        self.completions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.completions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::{Parameter, Signature};

    fn sig(name: &str, label: &str, doc: &str) -> Signature {
        Signature {
            name: name.to_string(),
            documentation: doc.to_string(),
            label: label.to_string(),
            params: vec![],
        }
    }

    fn module_a() -> SignatureTable {
        vec![sig("_Foo", "_Foo (  )", "foo from module a")]
    }

    fn module_b() -> SignatureTable {
        vec![sig("_Foo", "_Foo ( $x )", "foo from module b")]
    }

    fn color_table() -> SignatureTable {
        vec![Signature {
            name: "_ColorGetRed".to_string(),
            documentation: "Returns the red component of a given color".to_string(),
            label: "_ColorGetRed ( $iColor )".to_string(),
            params: vec![Parameter {
                label: "$iColor".to_string(),
                documentation: "The color to work with".to_string(),
            }],
        }]
    }

    fn broken_table() -> SignatureTable {
        vec![sig("_Broken", "", "no label")]
    }

    #[test]
    fn test_aggregate_later_map_wins() {
        let mut first = HashMap::new();
        first.insert("_foo".to_string(), 1);
        first.insert("_bar".to_string(), 2);
        let mut second = HashMap::new();
        second.insert("_foo".to_string(), 3);

        let merged = aggregate([first, second]);
        assert_eq!(merged["_foo"], 3);
        assert_eq!(merged["_bar"], 2);
    }

    #[test]
    fn test_cross_module_collision_last_module_wins() {
        let modules = [
            DocModule {
                name: "a",
                kind: CompletionKind::Function,
                include: None,
                table: module_a,
            },
            DocModule {
                name: "b",
                kind: CompletionKind::Function,
                include: None,
                table: module_b,
            },
        ];
        let registry = Registry::build(&modules).unwrap();

        assert!(registry.hover("_foo").unwrap().contains("foo from module b"));
        assert_eq!(registry.completion("_foo").unwrap().detail, "foo from module b");
    }

    #[test]
    fn test_hover_and_completion_agree_on_winner() {
        let modules = [
            DocModule {
                name: "a",
                kind: CompletionKind::Function,
                include: None,
                table: module_a,
            },
            DocModule {
                name: "b",
                kind: CompletionKind::Function,
                include: None,
                table: module_b,
            },
        ];
        let registry = Registry::build(&modules).unwrap();

        let hover = registry.hover("_foo").unwrap();
        let completion = registry.completion("_foo").unwrap();
        assert!(hover.contains(&completion.detail));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let modules = [DocModule {
            name: "color",
            kind: CompletionKind::Function,
            include: Some("Color.au3"),
            table: color_table,
        }];
        let registry = Registry::build(&modules).unwrap();

        let lower = registry.hover("_colorgetred").unwrap();
        let authored = registry.hover("_ColorGetRed").unwrap();
        let upper = registry.hover("_COLORGETRED").unwrap();
        assert_eq!(lower, authored);
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_include_note_reaches_completion_documentation() {
        let modules = [DocModule {
            name: "color",
            kind: CompletionKind::Function,
            include: Some("Color.au3"),
            table: color_table,
        }];
        let registry = Registry::build(&modules).unwrap();

        let entry = registry.completion("_colorgetred").unwrap();
        assert!(entry.documentation.ends_with("Requires `#include <Color.au3>`"));
        assert_eq!(entry.detail, "Returns the red component of a given color");
    }

    #[test]
    fn test_lookup_miss_is_none() {
        let registry = Registry::build(&[]).unwrap();
        assert!(registry.hover("_DoesNotExist").is_none());
        assert!(registry.completion("_DoesNotExist").is_none());
    }

    #[test]
    fn test_bad_module_fails_whole_build() {
        let modules = [
            DocModule {
                name: "a",
                kind: CompletionKind::Function,
                include: None,
                table: module_a,
            },
            DocModule {
                name: "broken",
                kind: CompletionKind::Function,
                include: None,
                table: broken_table,
            },
        ];
        let err = Registry::build(&modules).unwrap_err();
        assert_eq!(
            err,
            DocError::InvalidSignature {
                name: "_Broken".to_string(),
                module: "broken".to_string(),
            }
        );
    }
}
