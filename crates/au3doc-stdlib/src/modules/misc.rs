//! Miscellaneous helper functions, from Misc.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Misc.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_ChooseColor",
            "_ChooseColor ( [$iReturnType = 0 [, $iColorRef = 0 [, $iRefType = 0 [, $hWndOwner = 0]]]] )",
            "Creates a Color dialog box that enables the user to select a color",
            &[
                ("[$iReturnType]", "[optional] Determines return type: COLORREF, BGR hex or RGB hex"),
                ("[$iColorRef]", "[optional] Initially selected color"),
                ("[$iRefType]", "[optional] Type of the $iColorRef passed"),
                ("[$hWndOwner]", "[optional] Handle to the window that owns the dialog box"),
            ],
        ),
        sig(
            "_IsPressed",
            "_IsPressed ( $sHexKey [, $vDLL = \"user32.dll\"] )",
            "Check if key has been pressed",
            &[
                ("$sHexKey", "Key to check for, as a hex code"),
                ("[$vDLL]", "[optional] Handle to an already opened user32.dll"),
            ],
        ),
        sig(
            "_MouseTrap",
            "_MouseTrap ( [$iLeft = 0 [, $iTop = 0 [, $iRight = 0 [, $iBottom = 0]]]] )",
            "Confine the mouse cursor to specified coords",
            &[
                ("[$iLeft]", "[optional] Left coord"),
                ("[$iTop]", "[optional] Top coord"),
                ("[$iRight]", "[optional] Right coord"),
                ("[$iBottom]", "[optional] Bottom coord"),
            ],
        ),
        sig(
            "_Singleton",
            "_Singleton ( $sOccurrenceName [, $iFlag = 0] )",
            "Enforce that only one instance of the script is running",
            &[
                ("$sOccurrenceName", "String to identify the occurrence of the script"),
                ("[$iFlag]", "[optional] Behavior when the script is already running"),
            ],
        ),
        sig(
            "_VersionCompare",
            "_VersionCompare ( $sVersion1, $sVersion2 )",
            "Compares two file versions for equality",
            &[
                ("$sVersion1", "The first version"),
                ("$sVersion2", "The second version"),
            ],
        ),
    ]
}
