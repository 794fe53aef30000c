// @fileoverview COM lifecycle capability
//
// Thin seam over per-thread COM apartment setup. Status codes pass
// through unchanged so the host observes exactly what the OS reported.

use crate::error::OsStatus;

#[cfg(target_os = "windows")]
pub mod ole;

/// Multithreaded apartment concurrency model.
pub const COINIT_MULTITHREADED: i32 = 0x0;
/// Single-threaded apartment concurrency model.
pub const COINIT_APARTMENTTHREADED: i32 = 0x2;

/// COM initialized successfully on this thread.
pub const S_OK: OsStatus = 0;
/// COM was already initialized on this thread.
pub const S_FALSE: OsStatus = 1;
/// The thread already belongs to an apartment of a different model.
pub const RPC_E_CHANGED_MODE: OsStatus = 0x8001_0106_u32 as i32;

/// Per-thread COM runtime setup and teardown.
pub trait ComLifecycle {
    /// Initialize COM on the calling thread with the given concurrency
    /// model, returning the OS status code verbatim.
    fn initialize(&self, mode: i32) -> OsStatus;

    /// Close COM on the calling thread. Never fails and never reports.
    fn uninitialize(&self);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct ScriptedRuntime {
        status: OsStatus,
        uninit_calls: Cell<u32>,
    }

    impl ComLifecycle for ScriptedRuntime {
        fn initialize(&self, _mode: i32) -> OsStatus {
            self.status
        }

        fn uninitialize(&self) {
            self.uninit_calls.set(self.uninit_calls.get() + 1);
        }
    }

    #[test]
    fn test_status_codes_pass_through_unchanged() {
        for status in [S_OK, S_FALSE, RPC_E_CHANGED_MODE] {
            let runtime = ScriptedRuntime {
                status,
                uninit_calls: Cell::new(0),
            };
            assert_eq!(runtime.initialize(COINIT_APARTMENTTHREADED), status);
            assert_eq!(runtime.initialize(COINIT_MULTITHREADED), status);
        }
    }

    #[test]
    fn test_uninitialize_is_repeatable() {
        let runtime = ScriptedRuntime {
            status: S_OK,
            uninit_calls: Cell::new(0),
        };
        runtime.uninitialize();
        runtime.uninitialize();
        assert_eq!(runtime.uninit_calls.get(), 2);
    }

    #[test]
    fn test_changed_mode_is_a_failure_hresult() {
        assert!(RPC_E_CHANGED_MODE < 0);
        assert_eq!(RPC_E_CHANGED_MODE as u32, 0x8001_0106);
    }
}
