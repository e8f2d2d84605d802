//! Internet helper functions, from Inet.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Inet.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_GetIP",
            "_GetIP (  )",
            "Get public IP address of a network/computer",
            &[],
        ),
        sig(
            "_INetExplorerCapable",
            "_INetExplorerCapable ( $sIEString )",
            "Converts a string to IE capable line",
            &[("$sIEString", "String to convert to IE capable line")],
        ),
        sig(
            "_INetGetSource",
            "_INetGetSource ( $sURL [, $bString = True] )",
            "Gets the source from an URL without writing a temp file",
            &[
                ("$sURL", "The URL of the site, e.g. https://www.autoitscript.com"),
                ("[$bString]", "[optional] If True the data is returned as a string, otherwise binary"),
            ],
        ),
        sig(
            "_INetMail",
            "_INetMail ( $sMailTo, $sMailSubject, $sMailBody )",
            "Opens default user's mail client with given address, subject and body",
            &[
                ("$sMailTo", "Address of recipient"),
                ("$sMailSubject", "Subject of the mail"),
                ("$sMailBody", "Body of the mail"),
            ],
        ),
        sig(
            "_TCPIpToName",
            "_TCPIpToName ( $sIp [, $iOption = 0 [, $hDll = \"Ws2_32.dll\"]] )",
            "Resolves IP address to Hostname",
            &[
                ("$sIp", "IP address in dotted form, e.g. 192.168.1.1"),
                ("[$iOption]", "[optional] 0 = returns hostname, 1 = returns array with hostname and aliases"),
                ("[$hDll]", "[optional] Handle to an already opened Ws2_32.dll"),
            ],
        ),
    ]
}
