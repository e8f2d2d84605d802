//! Hover rendering: signature tables to markdown tooltip bodies

use std::collections::HashMap;

use crate::error::DocError;
use crate::signature::Signature;

/// Render one module's signature table into hover markdown, keyed by
/// lower-cased name.
///
/// Each body is: the label in a fenced `autoit` code block, the
/// documentation text, and one bullet per parameter in author order.
/// Empty documentation and an empty parameter list just shorten the
/// output. A blank label fails the build with [`DocError::InvalidSignature`].
///
/// If two entries lower-case to the same key, the later one wins.
pub fn format_hover(
    module: &str,
    table: &[Signature],
) -> Result<HashMap<String, String>, DocError> {
    let mut hovers = HashMap::with_capacity(table.len());
    for signature in table {
        if signature.label.trim().is_empty() {
            return Err(DocError::InvalidSignature {
                name: signature.name.clone(),
                module: module.to_string(),
            });
        }
        hovers.insert(signature.name.to_lowercase(), render(signature));
    }
    Ok(hovers)
}

fn render(signature: &Signature) -> String {
    let mut sections = vec![format!("```autoit\n{}\n```", signature.label)];

    if !signature.documentation.is_empty() {
        sections.push(signature.documentation.clone());
    }

    if !signature.params.is_empty() {
        let bullets: Vec<String> = signature
            .params
            .iter()
            .map(|p| format!("- `{}`: {}", p.label, p.documentation))
            .collect();
        sections.push(bullets.join("\n"));
    }

    sections.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signature::Parameter;

    fn sig(name: &str, label: &str, doc: &str, params: &[(&str, &str)]) -> Signature {
        Signature {
            name: name.to_string(),
            documentation: doc.to_string(),
            label: label.to_string(),
            params: params
                .iter()
                .map(|(l, d)| Parameter {
                    label: l.to_string(),
                    documentation: d.to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_hover_contains_label_doc_and_params_in_order() {
        let table = vec![sig(
            "_FTP_Open",
            "_FTP_Open ( $sAgent [, $iAccessType = 1] )",
            "Opens an FTP session",
            &[
                ("$sAgent", "Name of the agent"),
                ("$iAccessType", "Type of access required"),
            ],
        )];
        let hovers = format_hover("ftpex", &table).unwrap();
        let body = &hovers["_ftp_open"];

        assert!(body.contains("```autoit\n_FTP_Open ( $sAgent [, $iAccessType = 1] )\n```"));
        assert!(body.contains("Opens an FTP session"));
        let first = body.find("$sAgent`: Name of the agent").unwrap();
        let second = body.find("$iAccessType`: Type of access required").unwrap();
        assert!(first < second, "Parameters must render in author order");
    }

    #[test]
    fn test_zero_param_hover_has_no_bullets() {
        let table = vec![sig("_Now", "_Now (  )", "Returns the current date and time", &[])];
        let hovers = format_hover("date", &table).unwrap();
        let body = &hovers["_now"];

        assert!(body.contains("_Now (  )"));
        assert!(!body.contains("- `"), "No bullet markers for zero params");
    }

    #[test]
    fn test_empty_documentation_degrades_to_label_only() {
        let table = vec![sig("_Thing", "_Thing (  )", "", &[])];
        let hovers = format_hover("misc", &table).unwrap();
        assert_eq!(hovers["_thing"], "```autoit\n_Thing (  )\n```");
    }

    #[test]
    fn test_blank_label_fails_fast() {
        let table = vec![sig("_Broken", "   ", "doc", &[])];
        let err = format_hover("misc", &table).unwrap_err();
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
            sig("_Foo", "_Foo (  )", "first", &[]),
            sig("_FOO", "_FOO (  )", "second", &[]),
        ];
        let hovers = format_hover("misc", &table).unwrap();
        assert_eq!(hovers.len(), 1);
        assert!(hovers["_foo"].contains("second"));
    }

    #[test]
    fn test_formatting_is_deterministic() {
        let table = vec![sig(
            "_MemGlobalAlloc",
            "_MemGlobalAlloc ( $iBytes [, $iFlags = 0] )",
            "Allocates the specified number of bytes from the heap",
            &[("$iBytes", "Number of bytes to allocate")],
        )];
        let a = format_hover("memory", &table).unwrap();
        let b = format_hover("memory", &table).unwrap();
        assert_eq!(a, b);
    }
}
