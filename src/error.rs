use thiserror::Error;

/// Raw status code returned by an OS service call.
///
/// Keychain calls report `OSStatus` values (negative four-digit codes such
/// as `-25300`), COM and DPAPI calls report `HRESULT`s. Both fit in an
/// `i32` and cross the bridge unchanged.
pub type OsStatus = i32;

/// Main error type for the native bridge operations.
///
/// The keychain variants render the exact messages the host matches on,
/// double space included. Do not reword them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Keychain lookup failed while reading a password.
    #[error("Could not obtain password.  Result: {0}")]
    PasswordLookup(OsStatus),

    /// A duplicate item was reported but the existing item could not be found.
    #[error("Could not locate existing password item.  Result: {0}")]
    DuplicateResolution(OsStatus),

    /// Adding or updating a keychain password failed.
    #[error("Could change password.  Result: {0}")]
    PasswordUpdate(OsStatus),

    /// DPAPI encryption failed.
    #[error("data protection encrypt failed with status {0:#010x}")]
    Protect(OsStatus),

    /// DPAPI decryption failed.
    #[error("data protection decrypt failed with status {0:#010x}")]
    Unprotect(OsStatus),
}

impl BridgeError {
    /// The OS status code carried by this error.
    pub fn status(&self) -> OsStatus {
        match self {
            BridgeError::PasswordLookup(status) => *status,
            BridgeError::DuplicateResolution(status) => *status,
            BridgeError::PasswordUpdate(status) => *status,
            BridgeError::Protect(status) => *status,
            BridgeError::Unprotect(status) => *status,
        }
    }

    /// Short operation name for logging.
    pub fn operation(&self) -> &'static str {
        match self {
            BridgeError::PasswordLookup(_) => "password_lookup",
            BridgeError::DuplicateResolution(_) => "duplicate_resolution",
            BridgeError::PasswordUpdate(_) => "password_update",
            BridgeError::Protect(_) => "protect",
            BridgeError::Unprotect(_) => "unprotect",
        }
    }
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

/// Surface a bridge error as a JavaScript exception.
impl From<BridgeError> for napi::Error {
    fn from(err: BridgeError) -> Self {
        napi::Error::new(napi::Status::GenericFailure, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use napi::Status;

    #[test]
    fn test_lookup_message_matches_host_contract() {
        let err = BridgeError::PasswordLookup(-25300);
        assert_eq!(err.to_string(), "Could not obtain password.  Result: -25300");
    }

    #[test]
    fn test_update_message_matches_host_contract() {
        let err = BridgeError::PasswordUpdate(-61);
        assert_eq!(err.to_string(), "Could change password.  Result: -61");
    }

    #[test]
    fn test_duplicate_resolution_message_is_distinct() {
        let err = BridgeError::DuplicateResolution(-25300);
        assert_eq!(
            err.to_string(),
            "Could not locate existing password item.  Result: -25300"
        );
        assert_ne!(
            err.to_string(),
            BridgeError::PasswordLookup(-25300).to_string()
        );
    }

    #[test]
    fn test_protection_messages_render_hresult_in_hex() {
        let err = BridgeError::Unprotect(0x8007000Du32 as i32);
        assert_eq!(
            err.to_string(),
            "data protection decrypt failed with status 0x8007000d"
        );
    }

    #[test]
    fn test_error_conversion_to_js_exception() {
        let err = BridgeError::PasswordLookup(-25293);
        let js_error: napi::Error = err.into();
        assert_eq!(js_error.status, Status::GenericFailure);
        assert_eq!(js_error.reason, "Could not obtain password.  Result: -25293");
    }

    #[test]
    fn test_status_and_operation_accessors() {
        let err = BridgeError::DuplicateResolution(-25300);
        assert_eq!(err.status(), -25300);
        assert_eq!(err.operation(), "duplicate_resolution");
        assert_eq!(BridgeError::Protect(5).operation(), "protect");
    }
}
