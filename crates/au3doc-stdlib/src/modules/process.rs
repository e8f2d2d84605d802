//! Process helper functions, from Process.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Process.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_ProcessGetName",
            "_ProcessGetName ( $iPID )",
            "Returns a string containing the process name that belongs to a given PID",
            &[("$iPID", "The PID of a currently running process")],
        ),
        sig(
            "_ProcessGetPriority",
            "_ProcessGetPriority ( $vProcess )",
            "Get the priority of an open process",
            &[("$vProcess", "The name or PID of a currently running process")],
        ),
        sig(
            "_RunDos",
            "_RunDos ( $sCommand )",
            "Executes a DOS command in a hidden command window",
            &[("$sCommand", "Command to execute")],
        ),
    ]
}
