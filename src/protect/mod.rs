// @fileoverview Data protection capability and sentinel mapping
//
// Protectors encrypt and decrypt caller-supplied bytes for the current
// OS user. Failures inside a protector carry the OS status code; the
// binding layer collapses them to the null sentinel the host expects.

use crate::error::BridgeResult;

#[cfg(target_os = "windows")]
pub mod dpapi;

/// Reversible byte-level protection of caller-supplied data.
pub trait DataProtector {
    /// Encrypt the given bytes for the current OS user.
    fn protect(&self, data: &[u8]) -> BridgeResult<Vec<u8>>;

    /// Decrypt bytes previously produced by [`DataProtector::protect`].
    fn unprotect(&self, data: &[u8]) -> BridgeResult<Vec<u8>>;
}

/// Collapse a protection result into the null-sentinel contract.
///
/// The host treats a null return as "operation failed". The status that
/// caused the failure is logged here and never raised as an exception.
pub fn into_sentinel<T>(result: BridgeResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            log::warn!("{} returned no data: {}", err.operation(), err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BridgeError;

    /// XOR protector used to exercise the trait without touching the OS.
    struct MirrorProtector;

    impl DataProtector for MirrorProtector {
        fn protect(&self, data: &[u8]) -> BridgeResult<Vec<u8>> {
            Ok(data.iter().map(|byte| byte ^ 0x5a).collect())
        }

        fn unprotect(&self, data: &[u8]) -> BridgeResult<Vec<u8>> {
            Ok(data.iter().map(|byte| byte ^ 0x5a).collect())
        }
    }

    struct FailingProtector(BridgeError);

    impl DataProtector for FailingProtector {
        fn protect(&self, _data: &[u8]) -> BridgeResult<Vec<u8>> {
            Err(self.0.clone())
        }

        fn unprotect(&self, _data: &[u8]) -> BridgeResult<Vec<u8>> {
            Err(self.0.clone())
        }
    }

    #[test]
    fn test_round_trip_through_protector() {
        let protector = MirrorProtector;
        let secret = b"session token bytes";
        let protected = protector.protect(secret).unwrap();
        assert_ne!(&protected[..], &secret[..]);
        assert_eq!(protector.unprotect(&protected).unwrap(), secret);
    }

    #[test]
    fn test_round_trip_empty_input() {
        let protector = MirrorProtector;
        let protected = protector.protect(&[]).unwrap();
        assert_eq!(protector.unprotect(&protected).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_sentinel_passes_data_through() {
        let protector = MirrorProtector;
        let protected = into_sentinel(protector.protect(b"data")).unwrap();
        assert_eq!(into_sentinel(protector.unprotect(&protected)), Some(b"data".to_vec()));
    }

    #[test]
    fn test_sentinel_collapses_failure_to_none() {
        let protector = FailingProtector(BridgeError::Protect(0x80070005u32 as i32));
        assert_eq!(into_sentinel(protector.protect(b"data")), None);
        let protector = FailingProtector(BridgeError::Unprotect(0x8009000Bu32 as i32));
        assert_eq!(into_sentinel(protector.unprotect(b"data")), None);
    }
}
