//! Button control functions, from GuiButton.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "GuiButton.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_GUICtrlButton_Click",
            "_GUICtrlButton_Click ( $hWnd )",
            "Simulates the user clicking a button",
            &[("$hWnd", "Control ID/Handle to the control")],
        ),
        sig(
            "_GUICtrlButton_GetCheck",
            "_GUICtrlButton_GetCheck ( $hWnd )",
            "Gets the check state of a radio button or check box",
            &[("$hWnd", "Control ID/Handle to the control")],
        ),
        sig(
            "_GUICtrlButton_GetText",
            "_GUICtrlButton_GetText ( $hWnd )",
            "Retrieve the text of the button",
            &[("$hWnd", "Control ID/Handle to the control")],
        ),
        sig(
            "_GUICtrlButton_SetCheck",
            "_GUICtrlButton_SetCheck ( $hWnd [, $iState = 1] )",
            "Sets the check state of a radio button or check box",
            &[
                ("$hWnd", "Control ID/Handle to the control"),
                ("[$iState]", "[optional] The check state, $BST_CHECKED by default"),
            ],
        ),
        sig(
            "_GUICtrlButton_SetText",
            "_GUICtrlButton_SetText ( $hWnd, $sText )",
            "Sets the text of the button",
            &[
                ("$hWnd", "Control ID/Handle to the control"),
                ("$sText", "New button text"),
            ],
        ),
    ]
}
