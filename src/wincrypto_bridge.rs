// @fileoverview Native bridge for Windows DPAPI data protection
//
// winencrypt and windecrypt take a byte buffer and hand back a freshly
// allocated buffer, or null when no data can be produced. Failures are
// logged, never raised.

use napi::{Env, JsBuffer, Result};
use napi_derive::napi;

/// Encrypt bytes for the current OS user. Returns null on failure.
#[napi]
pub fn winencrypt(env: Env, data: JsBuffer) -> Result<Option<JsBuffer>> {
    #[cfg(target_os = "windows")]
    {
        use crate::protect::dpapi::DpapiProtector;
        use crate::protect::{into_sentinel, DataProtector};

        let input = match data.into_value() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("winencrypt could not borrow the input buffer: {}", err);
                return Ok(None);
            }
        };
        match into_sentinel(DpapiProtector::new().protect(&input)) {
            Some(encrypted) => Ok(Some(env.create_buffer_with_data(encrypted)?.into_raw())),
            None => Ok(None),
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = (env, data);
        Err(napi::Error::new(
            napi::Status::GenericFailure,
            "Data protection is only available on Windows",
        ))
    }
}

/// Decrypt bytes previously produced by winencrypt. Returns null on
/// failure.
#[napi]
pub fn windecrypt(env: Env, data: JsBuffer) -> Result<Option<JsBuffer>> {
    #[cfg(target_os = "windows")]
    {
        use crate::protect::dpapi::DpapiProtector;
        use crate::protect::{into_sentinel, DataProtector};

        let input = match data.into_value() {
            Ok(value) => value,
            Err(err) => {
                log::warn!("windecrypt could not borrow the input buffer: {}", err);
                return Ok(None);
            }
        };
        match into_sentinel(DpapiProtector::new().unprotect(&input)) {
            Some(decrypted) => Ok(Some(env.create_buffer_with_data(decrypted)?.into_raw())),
            None => Ok(None),
        }
    }

    #[cfg(not(target_os = "windows"))]
    {
        let _ = (env, data);
        Err(napi::Error::new(
            napi::Status::GenericFailure,
            "Data protection is only available on Windows",
        ))
    }
}
