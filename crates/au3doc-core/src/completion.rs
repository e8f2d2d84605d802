//! Completion entries derived from signature tables

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DocError;
use crate::signature::Signature;

/// A completion suggestion for one documented name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEntry {
    /// Full call-syntax label, shown in the completion list
    pub label: String,
    pub kind: CompletionKind,
    /// Short description shown next to the label
    pub detail: String,
    /// Description plus the module's include note, when one exists
    pub documentation: String,
    /// Text inserted on accept: the callable name without its
    /// parameter list
    pub insert_text: String,
}

/// The kind of completion item, supplied per documentation module
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompletionKind {
    Function,
    Keyword,
    Constant,
    Macro,
}

impl CompletionKind {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionKind::Function => "function",
            CompletionKind::Keyword => "keyword",
            CompletionKind::Constant => "constant",
            CompletionKind::Macro => "macro",
        }
    }
}

/// Derive one module's completion entries, keyed by lower-cased name.
///
/// `kind` tags every entry produced by this call; `note` (typically a
/// "Requires `#include <X.au3>`" reminder) is appended to each entry's
/// documentation when non-empty. Key collisions after lower-casing
/// resolve to the later entry, matching [`crate::hover::format_hover`].
pub fn format_completions(
    module: &str,
    table: &[Signature],
    kind: CompletionKind,
    note: &str,
) -> Result<HashMap<String, CompletionEntry>, DocError> {
    let mut entries = HashMap::with_capacity(table.len());
    for signature in table {
        if signature.label.trim().is_empty() {
            return Err(DocError::InvalidSignature {
                name: signature.name.clone(),
                module: module.to_string(),
            });
        }
        let documentation = if note.is_empty() {
            signature.documentation.clone()
        } else {
            format!("{}\n\n{}", signature.documentation, note)
        };
        entries.insert(
            signature.name.to_lowercase(),
            CompletionEntry {
                label: signature.label.clone(),
                kind,
                detail: signature.documentation.clone(),
                documentation,
                insert_text: insert_text(&signature.label),
            },
        );
    }
    Ok(entries)
}

/// The callable-name truncation rule: everything before the first `(`,
/// right-trimmed. Labels without a parameter list (macros, keywords)
/// are inserted verbatim.
fn insert_text(label: &str) -> String {
    match label.find('(') {
        Some(paren) => label[..paren].trim_end().to_string(),
        None => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(name: &str, label: &str, doc: &str) -> Signature {
        Signature {
            name: name.to_string(),
            documentation: doc.to_string(),
            label: label.to_string(),
            params: vec![],
        }
    }

    #[test]
    fn test_insert_text_truncates_at_first_paren() {
        let table = vec![sig(
            "_ColorGetRed",
            "_ColorGetRed ( $iColor )",
            "Returns the red component of a given color",
        )];
        let entries = format_completions("color", &table, CompletionKind::Function, "").unwrap();
        assert_eq!(entries["_colorgetred"].insert_text, "_ColorGetRed");
    }

    #[test]
    fn test_insert_text_keeps_parenless_label_verbatim() {
        let table = vec![sig("@CRLF", "@CRLF", "Carriage return and line feed")];
        let entries = format_completions("macros", &table, CompletionKind::Macro, "").unwrap();
        assert_eq!(entries["@crlf"].insert_text, "@CRLF");
    }

    #[test]
    fn test_detail_is_documentation_verbatim() {
        let table = vec![sig(
            "_ColorGetRed",
            "_ColorGetRed ( $iColor )",
            "Returns the red component of a given color",
        )];
        let entries = format_completions("color", &table, CompletionKind::Function, "").unwrap();
        assert_eq!(
            entries["_colorgetred"].detail,
            "Returns the red component of a given color"
        );
    }

    #[test]
    fn test_note_is_appended_after_blank_line() {
        let table = vec![sig("_Now", "_Now (  )", "Returns the current date and time")];
        let note = "Requires `#include <Date.au3>`";
        let entries = format_completions("date", &table, CompletionKind::Function, note).unwrap();
        assert_eq!(
            entries["_now"].documentation,
            "Returns the current date and time\n\nRequires `#include <Date.au3>`"
        );
        // detail stays note-free
        assert_eq!(entries["_now"].detail, "Returns the current date and time");
    }

    #[test]
    fn test_empty_note_leaves_documentation_untouched() {
        let table = vec![sig("_Now", "_Now (  )", "Returns the current date and time")];
        let entries = format_completions("date", &table, CompletionKind::Function, "").unwrap();
        assert_eq!(entries["_now"].documentation, "Returns the current date and time");
    }

    #[test]
    fn test_kind_tags_every_entry() {
        let table = vec![
            sig("ContinueLoop", "ContinueLoop", "Continue with the next loop iteration"),
            sig("ExitLoop", "ExitLoop", "Terminate the enclosing loop"),
        ];
        let entries = format_completions("keywords", &table, CompletionKind::Keyword, "").unwrap();
        assert!(entries.values().all(|e| e.kind == CompletionKind::Keyword));
    }

    #[test]
    fn test_blank_label_fails_fast() {
        let table = vec![sig("_Broken", "", "doc")];
        let err = format_completions("misc", &table, CompletionKind::Function, "").unwrap_err();
        assert_eq!(
            err,
            DocError::InvalidSignature {
                name: "_Broken".to_string(),
                module: "misc".to_string(),
            }
        );
    }

    #[test]
    fn test_case_variant_duplicate_later_wins() {
        let table = vec![
            sig("_Foo", "_Foo (  )", "first"),
            sig("_FOO", "_FOO ( $x )", "second"),
        ];
        let entries = format_completions("misc", &table, CompletionKind::Function, "").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries["_foo"].detail, "second");
    }
}
