//! Date and time manipulation functions, from Date.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Date.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_DateAdd",
            "_DateAdd ( $sType, $iNumber, $sDate )",
            "Calculates a new date based on a given date and an interval from that date",
            &[
                ("$sType", "One of the following: D = day, M = month, Y = year, w = week, h = hour, n = minute, s = second"),
                ("$iNumber", "Number of intervals to add, may be negative"),
                ("$sDate", "Input date in the format YYYY/MM/DD[ HH:MM:SS]"),
            ],
        ),
        sig(
            "_DateDaysInMonth",
            "_DateDaysInMonth ( $iYear, $iMonth )",
            "Returns the number of days in a month, taking leap years into account",
            &[
                ("$iYear", "The four digit year"),
                ("$iMonth", "The month as a number from 1 to 12"),
            ],
        ),
        sig(
            "_DateDiff",
            "_DateDiff ( $sType, $sStartDate, $sEndDate )",
            "Returns the difference between two dates, expressed in the type requested",
            &[
                ("$sType", "One of the following: D = day, M = month, Y = year, w = week, h = hour, n = minute, s = second"),
                ("$sStartDate", "Start date in the format YYYY/MM/DD[ HH:MM:SS]"),
                ("$sEndDate", "End date in the format YYYY/MM/DD[ HH:MM:SS]"),
            ],
        ),
        sig(
            "_DateIsValid",
            "_DateIsValid ( $sDate )",
            "Checks that the given date is a valid date",
            &[("$sDate", "Date in the format YYYY/MM/DD[ HH:MM:SS]")],
        ),
        sig(
            "_DateTimeFormat",
            "_DateTimeFormat ( $sDate, $sType )",
            "Returns the date in the PC's regional settings format",
            &[
                ("$sDate", "Input date in the format YYYY/MM/DD[ HH:MM:SS]"),
                ("$sType", "Format type from 0 to 5"),
            ],
        ),
        sig(
            "_Now",
            "_Now (  )",
            "Returns the current date and time in the PC's regional settings format",
            &[],
        ),
        sig(
            "_NowCalc",
            "_NowCalc (  )",
            "Returns the current date and time in the format YYYY/MM/DD HH:MM:SS for use in date calculations",
            &[],
        ),
    ]
}
