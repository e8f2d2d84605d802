//! Native macros; no include required

use au3doc_core::SignatureTable;

use super::sig;

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "@AutoItVersion",
            "@AutoItVersion",
            "Version number of AutoIt such as 3.3.16.1",
            &[],
        ),
        sig(
            "@CRLF",
            "@CRLF",
            "Carriage return and line feed, Chr(13) & Chr(10); occasionally used for line breaks",
            &[],
        ),
        sig(
            "@ScriptDir",
            "@ScriptDir",
            "Directory containing the running script, without a trailing backslash",
            &[],
        ),
        sig(
            "@TAB",
            "@TAB",
            "Tab character, Chr(9)",
            &[],
        ),
        sig(
            "@error",
            "@error",
            "Status of the error flag set by the last function call",
            &[],
        ),
        sig(
            "@extended",
            "@extended",
            "Extended function return, meaning depends on the function",
            &[],
        ),
    ]
}
