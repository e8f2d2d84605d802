//! Memory management functions, from Memory.au3

use au3doc_core::SignatureTable;

use super::sig;

pub const INCLUDE: &str = "Memory.au3";

pub fn signatures() -> SignatureTable {
    vec![
        sig(
            "_MemGlobalAlloc",
            "_MemGlobalAlloc ( $iBytes [, $iFlags = 0] )",
            "Allocates the specified number of bytes from the heap",
            &[
                ("$iBytes", "Number of bytes to allocate"),
                ("[$iFlags]", "[optional] Memory allocation attributes, $GMEM_FIXED by default"),
            ],
        ),
        sig(
            "_MemGlobalFree",
            "_MemGlobalFree ( $hMemory )",
            "Frees the specified global memory object and invalidates its handle",
            &[("$hMemory", "Handle to the global memory object")],
        ),
        sig(
            "_MemGlobalLock",
            "_MemGlobalLock ( $hMemory )",
            "Locks a global memory object and returns a pointer to the first byte of the object's memory block",
            &[("$hMemory", "Handle to the global memory object")],
        ),
        sig(
            "_MemGlobalSize",
            "_MemGlobalSize ( $hMemory )",
            "Retrieves the current size of the specified global memory object",
            &[("$hMemory", "Handle to the global memory object")],
        ),
        sig(
            "_MemGlobalUnlock",
            "_MemGlobalUnlock ( $hMemory )",
            "Decrements the lock count associated with a memory object",
            &[("$hMemory", "Handle to the global memory object")],
        ),
        sig(
            "_MemVirtualAlloc",
            "_MemVirtualAlloc ( $pAddress, $iSize, $iAllocation, $iProtect )",
            "Reserves or commits a region of pages in the virtual address space of the calling process",
            &[
                ("$pAddress", "Starting address of the region to allocate"),
                ("$iSize", "Size of the region in bytes"),
                ("$iAllocation", "Type of memory allocation"),
                ("$iProtect", "Type of memory protection for the region of pages"),
            ],
        ),
    ]
}
