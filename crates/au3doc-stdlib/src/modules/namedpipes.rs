//! Named pipe functions, from NamedPipes.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "NamedPipes.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_NamedPipes_CallNamedPipe",
            "_NamedPipes_CallNamedPipe ( $sPipeName, $pInpBuf, $iInpSize, $pOutBuf, $iOutSize, ByRef $iRead [, $iTimeOut = 0] )",
            "Connects to a message-type pipe, writes to and reads from it, then closes the pipe",
            &[
                ("$sPipeName", "Pipe name in the form \\\\ServerName\\pipe\\PipeName"),
                ("$pInpBuf", "Pointer to the buffer containing the data written to the pipe"),
                ("$iInpSize", "Size, in bytes, of the write buffer"),
                ("$pOutBuf", "Pointer to the buffer that receives the data read from the pipe"),
                ("$iOutSize", "Size, in bytes, of the read buffer"),
                ("$iRead", "Number of bytes read from the pipe"),
                ("[$iTimeOut]", "[optional] Number of milliseconds to wait for the pipe to be available"),
            ],
        ),
        sig(
            "_NamedPipes_ConnectNamedPipe",
            "_NamedPipes_ConnectNamedPipe ( $hNamedPipe [, $pOverlapped = 0] )",
            "Enables a named pipe server to wait for a client to connect",
            &[
                ("$hNamedPipe", "Handle to the server end of a named pipe instance"),
                ("[$pOverlapped]", "[optional] Pointer to an $tagOVERLAPPED structure"),
            ],
        ),
        sig(
            "_NamedPipes_CreateNamedPipe",
            "_NamedPipes_CreateNamedPipe ( $sName [, $iAccess = 2 [, $iFlags = 2 [, $iACL = 0 [, $iType = 1 [, $iReadType = 1 [, $iWait = 0 [, $iMaxInst = 25 [, $iOutBufSize = 4096 [, $iInpBufSize = 4096 [, $iDefaultTimeout = 5000 [, $pSecurity = 0]]]]]]]]]]] )",
            "Creates an instance of a named pipe and returns a handle for subsequent pipe operations",
            &[
                ("$sName", "Pipe name in the form \\\\.\\pipe\\PipeName"),
                ("[$iAccess]", "[optional] Pipe access: inbound, outbound or duplex"),
                ("[$iFlags]", "[optional] Pipe flags controlling write-through and overlapped mode"),
                ("[$iACL]", "[optional] Access control for the pipe"),
                ("[$iType]", "[optional] Pipe type mode: byte or message"),
                ("[$iReadType]", "[optional] Pipe read mode: byte or message"),
                ("[$iWait]", "[optional] Pipe wait mode: blocking or nonblocking"),
                ("[$iMaxInst]", "[optional] Maximum number of instances that can be created for this pipe"),
                ("[$iOutBufSize]", "[optional] Number of bytes to reserve for the output buffer"),
                ("[$iInpBufSize]", "[optional] Number of bytes to reserve for the input buffer"),
                ("[$iDefaultTimeout]", "[optional] Default time-out value, in milliseconds"),
                ("[$pSecurity]", "[optional] Pointer to a $tagSECURITY_ATTRIBUTES structure"),
            ],
        ),
        sig(
            "_NamedPipes_DisconnectNamedPipe",
            "_NamedPipes_DisconnectNamedPipe ( $hNamedPipe )",
            "Disconnects the server end of a named pipe instance from a client process",
            &[("$hNamedPipe", "Handle to an instance of a named pipe")],
        ),
        sig(
            "_NamedPipes_WaitNamedPipe",
            "_NamedPipes_WaitNamedPipe ( $sPipeName [, $iTimeOut = 0] )",
            "Waits until a time-out interval elapses or an instance of the specified named pipe is available",
            &[
                ("$sPipeName", "Pipe name in the form \\\\ServerName\\pipe\\PipeName"),
                ("[$iTimeOut]", "[optional] Number of milliseconds to wait for the pipe to be available"),
            ],
        ),
    ]
}
