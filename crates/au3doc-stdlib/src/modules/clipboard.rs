//! Clipboard management functions, from Clipboard.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Clipboard.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_ClipBoard_Close",
            "_ClipBoard_Close (  )",
            "Closes the clipboard",
            &[],
        ),
        sig(
            "_ClipBoard_Empty",
            "_ClipBoard_Empty (  )",
            "Empties the clipboard and frees handles to data in the clipboard",
            &[],
        ),
        sig(
            "_ClipBoard_GetData",
            "_ClipBoard_GetData ( [$iFormat = 1] )",
            "Retrieves data from the clipboard in a specified format",
            &[(
                "[$iFormat]",
                "[optional] Specifies a clipboard format, $CF_TEXT by default",
            )],
        ),
        sig(
            "_ClipBoard_Open",
            "_ClipBoard_Open ( $hOwner )",
            "Opens the clipboard and prevents other applications from modifying its content",
            &[(
                "$hOwner",
                "Handle to the window to be associated with the open clipboard",
            )],
        ),
        sig(
            "_ClipBoard_SetData",
            "_ClipBoard_SetData ( $vData [, $iFormat = 1] )",
            "Places data on the clipboard in a specified clipboard format",
            &[
                ("$vData", "Data in the specified format. Can be binary or text"),
                ("[$iFormat]", "[optional] Specifies a clipboard format, $CF_TEXT by default"),
            ],
        ),
    ]
}
