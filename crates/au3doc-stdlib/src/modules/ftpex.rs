//! FTP session functions, from FTPEx.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "FTPEx.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_FTP_Close",
            "_FTP_Close ( $hSession )",
            "Closes the _FTP_Open or _FTP_Connect session",
            &[("$hSession", "Session handle as returned by _FTP_Open() or _FTP_Connect()")],
        ),
        sig(
            "_FTP_Connect",
            "_FTP_Connect ( $hInternetSession, $sServerName, $sUsername, $sPassword [, $iPassive = 0 [, $iServerPort = 0 [, $iService = 1 [, $iFlags = 0 [, $fuContext = 0]]]]] )",
            "Connects to an FTP server",
            &[
                ("$hInternetSession", "Session handle as returned by _FTP_Open()"),
                ("$sServerName", "Server name/IP address"),
                ("$sUsername", "Username"),
                ("$sPassword", "Password"),
                ("[$iPassive]", "[optional] Passive mode: 0 = not passive, 1 = passive"),
                ("[$iServerPort]", "[optional] Server port, 0 = default (21)"),
                ("[$iService]", "[optional] Service type, $INTERNET_SERVICE_FTP by default"),
                ("[$iFlags]", "[optional] Flags controlling caching and semantics"),
                ("[$fuContext]", "[optional] Application-defined value associating this search with application data"),
            ],
        ),
        sig(
            "_FTP_FileGet",
            "_FTP_FileGet ( $hFTPSession, $sRemoteFile, $sLocalFile [, $bFailIfExists = False [, $iFlagsAndAttributes = 0 [, $iFlags = 0 [, $fuContext = 0]]]] )",
            "Get a file from an FTP server",
            &[
                ("$hFTPSession", "Session handle as returned by _FTP_Connect()"),
                ("$sRemoteFile", "The remote file to get"),
                ("$sLocalFile", "The local file to create"),
                ("[$bFailIfExists]", "[optional] True = do not overwrite an existing local file"),
                ("[$iFlagsAndAttributes]", "[optional] File attributes for the new file"),
                ("[$iFlags]", "[optional] Transfer mode and caching flags"),
                ("[$fuContext]", "[optional] Application-defined value associating this search with application data"),
            ],
        ),
        sig(
            "_FTP_FilePut",
            "_FTP_FilePut ( $hFTPSession, $sLocalFile, $sRemoteFile [, $iFlags = 0 [, $fuContext = 0]] )",
            "Puts a file on an FTP server",
            &[
                ("$hFTPSession", "Session handle as returned by _FTP_Connect()"),
                ("$sLocalFile", "The local file to upload"),
                ("$sRemoteFile", "The remote location to store the file"),
                ("[$iFlags]", "[optional] Transfer mode and caching flags"),
                ("[$fuContext]", "[optional] Application-defined value associating this search with application data"),
            ],
        ),
        sig(
            "_FTP_Open",
            "_FTP_Open ( $sAgent [, $iAccessType = 1 [, $sProxyName = \"\" [, $sProxyBypass = \"\" [, $iFlags = 0]]]] )",
            "Opens an FTP session",
            &[
                ("$sAgent", "Name of the agent establishing the session, e.g. \"MyFTP Control\""),
                ("[$iAccessType]", "[optional] Access type: direct, preconfig or through proxy"),
                ("[$sProxyName]", "[optional] Proxy name when $iAccessType selects a proxy"),
                ("[$sProxyBypass]", "[optional] Host names or addresses not routed through the proxy"),
                ("[$iFlags]", "[optional] Connection flags, e.g. $INTERNET_FLAG_ASYNC"),
            ],
        ),
    ]
}
