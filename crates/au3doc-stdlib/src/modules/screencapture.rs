//! Screen capture functions, from ScreenCapture.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "ScreenCapture.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_ScreenCapture_Capture",
            "_ScreenCapture_Capture ( [$sFileName = \"\" [, $iLeft = 0 [, $iTop = 0 [, $iRight = -1 [, $iBottom = -1 [, $bCursor = True]]]]]] )",
            "Captures a region of the screen",
            &[
                ("[$sFileName]", "[optional] Full path and extension of the image file to save"),
                ("[$iLeft]", "[optional] X coordinate of the upper left corner of the rectangle"),
                ("[$iTop]", "[optional] Y coordinate of the upper left corner of the rectangle"),
                ("[$iRight]", "[optional] X coordinate of the lower right corner, -1 = entire screen width"),
                ("[$iBottom]", "[optional] Y coordinate of the lower right corner, -1 = entire screen height"),
                ("[$bCursor]", "[optional] If True the cursor is captured with the image"),
            ],
        ),
        sig(
            "_ScreenCapture_CaptureWnd",
            "_ScreenCapture_CaptureWnd ( $sFileName, $hWnd [, $iLeft = 0 [, $iTop = 0 [, $iRight = -1 [, $iBottom = -1 [, $bCursor = True]]]]] )",
            "Captures a region of a window",
            &[
                ("$sFileName", "Full path and extension of the image file to save"),
                ("$hWnd", "Handle to the window to be captured"),
                ("[$iLeft]", "[optional] X coordinate of the upper left corner of the rectangle"),
                ("[$iTop]", "[optional] Y coordinate of the upper left corner of the rectangle"),
                ("[$iRight]", "[optional] X coordinate of the lower right corner, -1 = window width"),
                ("[$iBottom]", "[optional] Y coordinate of the lower right corner, -1 = window height"),
                ("[$bCursor]", "[optional] If True the cursor is captured with the image"),
            ],
        ),
        sig(
            "_ScreenCapture_SaveImage",
            "_ScreenCapture_SaveImage ( $sFileName, $hBitmap [, $bFreeBmp = True] )",
            "Saves an image to file",
            &[
                ("$sFileName", "Full path and extension of the image file to save"),
                ("$hBitmap", "HBITMAP handle of the image to save"),
                ("[$bFreeBmp]", "[optional] If True the bitmap is freed on a successful save"),
            ],
        ),
        sig(
            "_ScreenCapture_SetJPGQuality",
            "_ScreenCapture_SetJPGQuality ( $iQuality )",
            "Sets the quality level used for JPEG screen captures",
            &[("$iQuality", "Quality level from 0 (lowest) to 100 (highest)")],
        ),
    ]
}
