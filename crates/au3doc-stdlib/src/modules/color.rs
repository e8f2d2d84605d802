//! Color management functions, from Color.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Color.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_ColorConvertHSLtoRGB",
            "_ColorConvertHSLtoRGB ( $aArray )",
            "Converts HSL color components to RGB",
            &[(
                "$aArray",
                "An array containing HSL components in the range 0 to 1",
            )],
        ),
        sig(
            "_ColorConvertRGBtoHSL",
            "_ColorConvertRGBtoHSL ( $aArray )",
            "Converts RGB color components to HSL",
            &[(
                "$aArray",
                "An array containing RGB components in the range 0 to 255",
            )],
        ),
        sig(
            "_ColorGetBlue",
            "_ColorGetBlue ( $iColor )",
            "Returns the blue component of a given color",
            &[("$iColor", "The color to work with (0x00RRGGBB format)")],
        ),
        sig(
            "_ColorGetGreen",
            "_ColorGetGreen ( $iColor )",
            "Returns the green component of a given color",
            &[("$iColor", "The color to work with (0x00RRGGBB format)")],
        ),
        sig(
            "_ColorGetRed",
            "_ColorGetRed ( $iColor )",
            "Returns the red component of a given color",
            &[("$iColor", "The color to work with (0x00RRGGBB format)")],
        ),
    ]
}
