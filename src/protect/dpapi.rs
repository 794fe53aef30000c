// @fileoverview Windows DPAPI data protection
//
// User-scope CryptProtectData/CryptUnprotectData wrappers carrying the
// fixed blob description the host ships. Every OS-allocated output
// buffer is copied into owned memory and released with LocalFree.

use std::os::raw::c_void;
use std::slice;

use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::{LocalFree, HLOCAL};
use windows::Win32::Security::Cryptography::{
    CryptProtectData, CryptUnprotectData, CRYPT_INTEGER_BLOB,
};

use crate::error::{BridgeError, BridgeResult};
use crate::protect::DataProtector;

/// Description stored alongside every encrypted blob.
pub const PROTECTION_DESCRIPTION: &str = "Equinox";

/// [`DataProtector`] backed by the user-scope DPAPI master key.
pub struct DpapiProtector {
    description: Vec<u16>,
}

impl DpapiProtector {
    pub fn new() -> Self {
        let description = PROTECTION_DESCRIPTION
            .encode_utf16()
            .chain(std::iter::once(0))
            .collect();
        Self { description }
    }
}

impl Default for DpapiProtector {
    fn default() -> Self {
        Self::new()
    }
}

fn blob_for(data: &[u8]) -> CRYPT_INTEGER_BLOB {
    CRYPT_INTEGER_BLOB {
        cbData: data.len() as u32,
        pbData: data.as_ptr() as *mut u8,
    }
}

/// Copy an OS-allocated blob into owned memory and free the original.
unsafe fn take_blob(blob: &CRYPT_INTEGER_BLOB) -> Vec<u8> {
    if blob.pbData.is_null() {
        return Vec::new();
    }
    let bytes = slice::from_raw_parts(blob.pbData, blob.cbData as usize).to_vec();
    let _ = LocalFree(HLOCAL(blob.pbData as *mut c_void));
    bytes
}

impl DataProtector for DpapiProtector {
    fn protect(&self, data: &[u8]) -> BridgeResult<Vec<u8>> {
        let input = blob_for(data);
        let mut output = CRYPT_INTEGER_BLOB::default();
        unsafe {
            CryptProtectData(
                &input,
                PCWSTR(self.description.as_ptr()),
                None,
                None,
                None,
                0,
                &mut output,
            )
            .map_err(|err| BridgeError::Protect(err.code().0))?;
            Ok(take_blob(&output))
        }
    }

    fn unprotect(&self, data: &[u8]) -> BridgeResult<Vec<u8>> {
        let input = blob_for(data);
        let mut output = CRYPT_INTEGER_BLOB::default();
        // The emitted description is freed and never surfaced; callers
        // only ever see the decrypted bytes.
        let mut description = PWSTR::null();
        unsafe {
            CryptUnprotectData(
                &input,
                Some(&mut description),
                None,
                None,
                None,
                0,
                &mut output,
            )
            .map_err(|err| BridgeError::Unprotect(err.code().0))?;
            if !description.is_null() {
                let _ = LocalFree(HLOCAL(description.as_ptr() as *mut c_void));
            }
            Ok(take_blob(&output))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protect_round_trip() {
        let protector = DpapiProtector::new();
        let secret = b"equinox session token".to_vec();
        let encrypted = protector.protect(&secret).unwrap();
        assert_ne!(encrypted, secret);
        assert_eq!(protector.unprotect(&encrypted).unwrap(), secret);
    }

    #[test]
    fn test_protect_empty_input_round_trips() {
        let protector = DpapiProtector::new();
        let encrypted = protector.protect(&[]).unwrap();
        assert!(!encrypted.is_empty());
        assert_eq!(protector.unprotect(&encrypted).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_unprotect_rejects_garbage() {
        let protector = DpapiProtector::new();
        let err = protector.unprotect(&[0u8; 16]).unwrap_err();
        assert!(matches!(err, BridgeError::Unprotect(_)));
    }
}
