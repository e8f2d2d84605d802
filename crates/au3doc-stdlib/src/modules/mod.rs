//! Per-domain signature tables for the AutoIt3 standard library
//!
//! One file per documentation domain. UDF modules also export the
//! `INCLUDE` constant naming the `.au3` file a script must include to
//! call them; native modules (keywords, macros) have none.
//!
//! Entries are authored in help-file order. Order matters: if two
//! entries lower-case to the same key, the later one wins.

use au3doc_core::{Parameter, Signature};

pub mod array;
pub mod clipboard;
pub mod color;
pub mod date;
pub mod file;
pub mod ftpex;
pub mod guibutton;
pub mod inet;
pub mod keywords;
pub mod macros;
pub mod memory;
pub mod misc;
pub mod namedpipes;
pub mod process;
pub mod screencapture;
pub mod sound;
pub mod string;
pub mod timers;

/// Table-entry shorthand used by every data module
pub(crate) fn sig(name: &str, label: &str, doc: &str, params: &[(&str, &str)]) -> Signature {
    Signature {
        name: name.to_string(),
        documentation: doc.to_string(),
        label: label.to_string(),
        params: params
            .iter()
            .map(|(label, doc)| Parameter {
                label: label.to_string(),
                documentation: doc.to_string(),
            })
            .collect(),
    }
}
