//! File and directory helper functions, from File.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "File.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_FileCountLines",
            "_FileCountLines ( $sFilePath )",
            "Returns the number of lines in the specified file",
            &[("$sFilePath", "Path of the file to count the lines of")],
        ),
        sig(
            "_FileCreate",
            "_FileCreate ( $sFilePath )",
            "Creates or zeroes out the length of the file specified",
            &[("$sFilePath", "Path of the file to create or zero out")],
        ),
        sig(
            "_FileListToArray",
            "_FileListToArray ( $sFilePath [, $sFilter = \"*\" [, $iFlag = 0 [, $bReturnPath = False]]] )",
            "Lists files and/or folders in a specified folder (limited filter support)",
            &[
                ("$sFilePath", "Folder to generate the list from"),
                ("[$sFilter]", "[optional] Filter for result, * and ? wildcards accepted"),
                ("[$iFlag]", "[optional] Specifies whether to return files, folders or both"),
                ("[$bReturnPath]", "[optional] If True the full path is appended to the file/folder name"),
            ],
        ),
        sig(
            "_FileReadToArray",
            "_FileReadToArray ( $sFilePath, ByRef $vReturn [, $iFlags = 1 [, $sDelimiter = \"\"]] )",
            "Reads the specified file into a 1D or 2D array",
            &[
                ("$sFilePath", "Path and filename of the file to be read"),
                ("$vReturn", "Variable to hold returned data"),
                ("[$iFlags]", "[optional] Flags controlling count element and row splitting"),
                ("[$sDelimiter]", "[optional] Used to further split each line, e.g. for CSV files"),
            ],
        ),
        sig(
            "_FileWriteLog",
            "_FileWriteLog ( $sLogPath, $sLogMsg [, $iFlag = -1] )",
            "Writes current date, time and the specified message to a log file",
            &[
                ("$sLogPath", "Path and filename of the log file, or an open file handle"),
                ("$sLogMsg", "Message to be written to the log file"),
                ("[$iFlag]", "[optional] -1 = write to end of file, 0 = write to beginning of file"),
            ],
        ),
    ]
}
