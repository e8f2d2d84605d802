//! Sound playback functions, from Sound.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Sound.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_SoundClose",
            "_SoundClose ( $sSnd_ID )",
            "Closes a sound previously opened with _SoundOpen()",
            &[("$sSnd_ID", "Sound ID returned by _SoundOpen()")],
        ),
        sig(
            "_SoundLength",
            "_SoundLength ( $sSnd_ID [, $iMode = 1] )",
            "Returns the length of the sound",
            &[
                ("$sSnd_ID", "Sound ID returned by _SoundOpen(), or a file name"),
                ("[$iMode]", "[optional] 1 = hh:mm:ss format, 2 = milliseconds"),
            ],
        ),
        sig(
            "_SoundOpen",
            "_SoundOpen ( $sFile )",
            "Opens a sound file for use with other _Sound functions",
            &[("$sFile", "The sound file to open")],
        ),
        sig(
            "_SoundPause",
            "_SoundPause ( $sSnd_ID )",
            "Pause a playing sound",
            &[("$sSnd_ID", "Sound ID returned by _SoundOpen()")],
        ),
        sig(
            "_SoundPlay",
            "_SoundPlay ( $sSnd_ID [, $iWait = 0] )",
            "Play a sound from the current position",
            &[
                ("$sSnd_ID", "Sound ID returned by _SoundOpen(), or a file name"),
                ("[$iWait]", "[optional] 1 = wait until the sound has finished, 0 = continue the script"),
            ],
        ),
        sig(
            "_SoundStatus",
            "_SoundStatus ( $sSnd_ID )",
            "Returns the status of the sound",
            &[("$sSnd_ID", "Sound ID returned by _SoundOpen()")],
        ),
    ]
}
