//! Functions for manipulating arrays, from Array.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Array.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_ArrayAdd",
            "_ArrayAdd ( ByRef $aArray, $vValue [, $iStart = 0 [, $sDelim_Item = \"|\" [, $sDelim_Row = @CRLF [, $iForce = $ARRAYFILL_FORCE_DEFAULT]]]] )",
            "Adds a specified value at the end of an existing 1D or 2D array",
            &[
                ("$aArray", "Array to modify"),
                ("$vValue", "Value(s) to add - can be a single item, delimited string or array"),
                ("[$iStart]", "[optional] Column in which addition is to begin (2D array only)"),
                ("[$sDelim_Item]", "[optional] Delimiter used if a string is to be split into items"),
                ("[$sDelim_Row]", "[optional] Delimiter used if a string is to be split into rows (2D array only)"),
                ("[$iForce]", "[optional] Maintains default behaviour, or forces datatype for all added items"),
            ],
        ),
        sig(
            "_ArrayBinarySearch",
            "_ArrayBinarySearch ( Const ByRef $aArray, $vValue [, $iStart = 0 [, $iEnd = 0 [, $iColumn = 0]]] )",
            "Uses the binary search algorithm to search through a 1D or 2D array",
            &[
                ("$aArray", "The array to search"),
                ("$vValue", "The value to search for"),
                ("[$iStart]", "[optional] Index of array to start searching at"),
                ("[$iEnd]", "[optional] Index of array to stop searching at"),
                ("[$iColumn]", "[optional] Column of array to search (2D array only)"),
            ],
        ),
        sig(
            "_ArrayConcatenate",
            "_ArrayConcatenate ( ByRef $aArrayTarget, Const ByRef $aArraySource [, $iStart = 0] )",
            "Concatenate two arrays - either 1D or 2D with the same number of columns",
            &[
                ("$aArrayTarget", "The array to concatenate onto"),
                ("$aArraySource", "The array to concatenate from"),
                ("[$iStart]", "[optional] Index of the first Source array entry"),
            ],
        ),
        sig(
            "_ArrayDisplay",
            "_ArrayDisplay ( Const ByRef $aArray [, $sTitle = \"ArrayDisplay\" [, $sArrayRange = \"\" [, $iFlags = 0]]] )",
            "Displays a 1D or 2D array in a ListView to aid debugging",
            &[
                ("$aArray", "Array to display"),
                ("[$sTitle]", "[optional] Title for the ListView window"),
                ("[$sArrayRange]", "[optional] Range of rows/columns to display"),
                ("[$iFlags]", "[optional] Determine GUI options"),
            ],
        ),
        sig(
            "_ArrayMax",
            "_ArrayMax ( Const ByRef $aArray [, $iCompNumeric = 0 [, $iStart = -1 [, $iEnd = -1 [, $iSubItem = 0]]]] )",
            "Returns the highest value held in a 1D or 2D array",
            &[
                ("$aArray", "Array to search"),
                ("[$iCompNumeric]", "[optional] Comparison method: 0 = compare alphanumerically, 1 = compare numerically"),
                ("[$iStart]", "[optional] Index of array to start searching at"),
                ("[$iEnd]", "[optional] Index of array to stop searching at"),
                ("[$iSubItem]", "[optional] Column of array to search (2D array only)"),
            ],
        ),
        sig(
            "_ArraySearch",
            "_ArraySearch ( Const ByRef $aArray, $vValue [, $iStart = 0 [, $iEnd = 0 [, $iCase = 0 [, $iCompare = 0 [, $iForward = 1 [, $iSubItem = -1 [, $bRow = False]]]]]]] )",
            "Finds an entry within a 1D or 2D array",
            &[
                ("$aArray", "The array to search"),
                ("$vValue", "What to search for"),
                ("[$iStart]", "[optional] Index of array to start searching at"),
                ("[$iEnd]", "[optional] Index of array to stop searching at"),
                ("[$iCase]", "[optional] If set to 1, search is case sensitive"),
                ("[$iCompare]", "[optional] Comparison type"),
                ("[$iForward]", "[optional] Determines search direction"),
                ("[$iSubItem]", "[optional] Sub-index to search on in 2D arrays"),
                ("[$bRow]", "[optional] If True then rows are searched instead of columns"),
            ],
        ),
        sig(
            "_ArraySort",
            "_ArraySort ( ByRef $aArray [, $iDescending = 0 [, $iStart = 0 [, $iEnd = 0 [, $iSubItem = 0 [, $iPivot = 0]]]]] )",
            "Sort a 1D or 2D array on a specified index using the dualpivotsort/quicksort/insertionsort algorithms",
            &[
                ("$aArray", "Array to sort"),
                ("[$iDescending]", "[optional] If set to 1, sort in descending order"),
                ("[$iStart]", "[optional] Index of array to start sorting at"),
                ("[$iEnd]", "[optional] Index of array to stop sorting at"),
                ("[$iSubItem]", "[optional] Sub-index to sort on in 2D arrays"),
                ("[$iPivot]", "[optional] Use pivot sort instead of quicksort"),
            ],
        ),
    ]
}
