// @fileoverview Native bridge for COM runtime lifecycle
//
// OleInitialize forwards the caller's concurrency model and returns the
// OS status code verbatim, success or not. OleUninitialize returns
// nothing and never raises.

use napi_derive::napi;

use crate::com;

// COM concurrency models and status codes the host checks against
#[napi]
pub const COINIT_MULTITHREADED: i32 = com::COINIT_MULTITHREADED;
#[napi]
pub const COINIT_APARTMENTTHREADED: i32 = com::COINIT_APARTMENTTHREADED;
#[napi]
pub const S_OK: i32 = com::S_OK;
#[napi]
pub const S_FALSE: i32 = com::S_FALSE;
#[napi]
pub const RPC_E_CHANGED_MODE: i32 = com::RPC_E_CHANGED_MODE;

/// Initialize COM on the calling thread with the requested concurrency
/// model. The OS status code is returned unchanged; callers decide what
/// a non-zero status means for them.
#[napi(js_name = "OleInitialize")]
pub fn ole_initialize(mode: i32) -> napi::Result<i32> {
    #[cfg(target_os = "windows")]
    {
        use crate::com::ole::OleRuntime;
        use crate::com::ComLifecycle;

        Ok(OleRuntime.initialize(mode))
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = mode;
        Err(napi::Error::new(
            napi::Status::GenericFailure,
            "COM initialization is only available on Windows",
        ))
    }
}

/// Close COM on the calling thread. A no-op away from Windows.
#[napi(js_name = "OleUninitialize")]
pub fn ole_uninitialize() {
    #[cfg(target_os = "windows")]
    {
        use crate::com::ole::OleRuntime;
        use crate::com::ComLifecycle;

        OleRuntime.uninitialize();
    }
}
