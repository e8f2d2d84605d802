//! End-to-end lookups against the full registry

use au3doc_stdlib::{build_registry, lookup_completion, lookup_hover, CompletionKind};

#[test]
fn test_lookup_is_case_insensitive() {
    let authored = lookup_hover("_FTP_Open").expect("hover for _FTP_Open");
    let lower = lookup_hover("_ftp_open").expect("hover for _ftp_open");
    let upper = lookup_hover("_FTP_OPEN").expect("hover for _FTP_OPEN");

    assert_eq!(authored, lower);
    assert_eq!(authored, upper);
}

#[test]
fn test_colorgetred_detail_is_verbatim_documentation() {
    let entry = lookup_completion("_colorgetred").expect("completion for _colorgetred");
    assert_eq!(entry.detail, "Returns the red component of a given color");
    assert_eq!(entry.kind, CompletionKind::Function);
    assert_eq!(entry.insert_text, "_ColorGetRed");
    assert!(entry.documentation.ends_with("Requires `#include <Color.au3>`"));
}

#[test]
fn test_now_hover_has_label_and_no_parameter_section() {
    let hover = lookup_hover("_now").expect("hover for _now");
    assert!(hover.contains("_Now (  )"));
    assert!(!hover.contains("- `"), "Zero-param hover must have no bullets");
}

#[test]
fn test_unknown_name_misses_both_tables() {
    assert!(lookup_hover("_DoesNotExist").is_none());
    assert!(lookup_completion("_DoesNotExist").is_none());
}

#[test]
fn test_hover_lists_parameters_in_author_order() {
    let hover = lookup_hover("_dateadd").expect("hover for _dateadd");
    let type_pos = hover.find("`$sType`").expect("$sType bullet");
    let number_pos = hover.find("`$iNumber`").expect("$iNumber bullet");
    let date_pos = hover.find("`$sDate`").expect("$sDate bullet");
    assert!(type_pos < number_pos && number_pos < date_pos);
}

#[test]
fn test_macros_and_keywords_insert_verbatim() {
    let crlf = lookup_completion("@crlf").expect("completion for @crlf");
    assert_eq!(crlf.insert_text, "@CRLF");
    assert_eq!(crlf.kind, CompletionKind::Macro);
    // Native names carry no include note
    assert_eq!(crlf.documentation, crlf.detail);

    let exit_loop = lookup_completion("exitloop").expect("completion for exitloop");
    assert_eq!(exit_loop.insert_text, "ExitLoop");
    assert_eq!(exit_loop.kind, CompletionKind::Keyword);
}

#[test]
fn test_rebuilding_yields_identical_tables() {
    let first = build_registry().unwrap();
    let second = build_registry().unwrap();

    assert_eq!(first.hovers(), second.hovers());
    assert_eq!(first.completions(), second.completions());
}
