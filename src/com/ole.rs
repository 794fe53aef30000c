// @fileoverview COM apartment control through CoInitializeEx
//
// Keeps the OLE-era entry point semantics the host has always relied on
// while routing through CoInitializeEx, so the caller chooses the
// apartment model instead of being forced into the single-threaded one.

use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT};

use crate::com::ComLifecycle;
use crate::error::OsStatus;

/// [`ComLifecycle`] over the process-wide COM runtime.
pub struct OleRuntime;

impl ComLifecycle for OleRuntime {
    fn initialize(&self, mode: i32) -> OsStatus {
        unsafe { CoInitializeEx(None, COINIT(mode)).0 }
    }

    fn uninitialize(&self) {
        unsafe { CoUninitialize() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::com::{
        COINIT_APARTMENTTHREADED, COINIT_MULTITHREADED, RPC_E_CHANGED_MODE, S_FALSE, S_OK,
    };

    #[test]
    fn test_initialize_reports_verbatim_statuses() {
        let com = OleRuntime;
        assert_eq!(com.initialize(COINIT_APARTMENTTHREADED), S_OK);
        assert_eq!(com.initialize(COINIT_APARTMENTTHREADED), S_FALSE);
        assert_eq!(com.initialize(COINIT_MULTITHREADED), RPC_E_CHANGED_MODE);
        com.uninitialize();
        com.uninitialize();
    }
}
