//! String helper functions, from String.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "String.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_StringBetween",
            "_StringBetween ( $sString, $sStart, $sEnd [, $iMode = 0 [, $bCase = False]] )",
            "Find strings between two string delimiters",
            &[
                ("$sString", "The string to search"),
                ("$sStart", "The beginning of the string to find. Use an empty string for the string start"),
                ("$sEnd", "The end of the string to find. Use an empty string for the string end"),
                ("[$iMode]", "[optional] Search mode: loose or strict delimiter matching"),
                ("[$bCase]", "[optional] False = case insensitive, True = case sensitive"),
            ],
        ),
        sig(
            "_StringExplode",
            "_StringExplode ( $sString, $sDelimiter [, $iLimit = 0] )",
            "Splits up a string into substrings depending on the given delimiters, PHP style",
            &[
                ("$sString", "String to be split"),
                ("$sDelimiter", "Delimiter to split the string on"),
                ("[$iLimit]", "[optional] Limit number of splits; negative trims elements from the end"),
            ],
        ),
        sig(
            "_StringInsert",
            "_StringInsert ( $sString, $sInsertString, $iPosition )",
            "Inserts a string within another string",
            &[
                ("$sString", "Original string"),
                ("$sInsertString", "String to be inserted"),
                ("$iPosition", "Position to insert the string, negative counts from the right"),
            ],
        ),
        sig(
            "_StringProper",
            "_StringProper ( $sString )",
            "Changes a string to proper case, similar to the =Proper function in Excel",
            &[("$sString", "Input string")],
        ),
        sig(
            "_StringRepeat",
            "_StringRepeat ( $sString, $iRepeatCount )",
            "Repeats a string a specified number of times",
            &[
                ("$sString", "String to repeat"),
                ("$iRepeatCount", "Number of times to repeat the string"),
            ],
        ),
        sig(
            "_StringToHex",
            "_StringToHex ( $sString )",
            "Convert a string to a hex string",
            &[("$sString", "String to be converted")],
        ),
    ]
}
