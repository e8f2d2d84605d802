//! Timer functions, from Timers.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Timers.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_Timer_Diff",
            "_Timer_Diff ( $hTimer )",
            "Returns the difference in time from a previous call to _Timer_Init()",
            &[("$hTimer", "Timestamp returned by a previous call to _Timer_Init()")],
        ),
        sig(
            "_Timer_GetIdleTime",
            "_Timer_GetIdleTime (  )",
            "Returns the number of ticks since last user activity (i.e. keystroke or mouse movement)",
            &[],
        ),
        sig(
            "_Timer_Init",
            "_Timer_Init (  )",
            "Returns a timestamp (in milliseconds)",
            &[],
        ),
        sig(
            "_Timer_KillAllTimers",
            "_Timer_KillAllTimers ( $hWnd )",
            "Destroys all timers",
            &[("$hWnd", "Handle of the window the timers were created for")],
        ),
        sig(
            "_Timer_KillTimer",
            "_Timer_KillTimer ( $hWnd, $iTimerID )",
            "Destroys the specified timer",
            &[
                ("$hWnd", "Handle of the window the timer was created for"),
                ("$iTimerID", "Timer ID as returned by _Timer_SetTimer()"),
            ],
        ),
        sig(
            "_Timer_SetTimer",
            "_Timer_SetTimer ( $hWnd [, $iElapse = 250 [, $sTimerFunc = \"\" [, $iTimerID = -1]]] )",
            "Creates a timer with the specified time-out value",
            &[
                ("$hWnd", "Handle of the window to be associated with this timer"),
                ("[$iElapse]", "[optional] Time-out value, in milliseconds"),
                ("[$sTimerFunc]", "[optional] Name of the function to be notified when the time-out value elapses"),
                ("[$iTimerID]", "[optional] Timer ID to recreate; -1 creates a new timer"),
            ],
        ),
    ]
}
