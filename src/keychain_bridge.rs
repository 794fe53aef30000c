// @fileoverview Native bridge for macOS Keychain password access
//
// Exposes the two generic password entry points the host calls. Errors
// surface as JavaScript exceptions carrying the exact messages the host
// matches on.

use napi::Result;
use napi_derive::napi;

use crate::credentials;

// Error code constants that match macOS Security framework
#[napi]
pub const ERR_SEC_SUCCESS: i32 = credentials::ERR_SEC_SUCCESS;
#[napi]
pub const ERR_SEC_ITEM_NOT_FOUND: i32 = credentials::ERR_SEC_ITEM_NOT_FOUND;
#[napi]
pub const ERR_SEC_DUPLICATE_ITEM: i32 = credentials::ERR_SEC_DUPLICATE_ITEM;
#[napi]
pub const ERR_SEC_USER_CANCELED: i32 = credentials::ERR_SEC_USER_CANCELED;
#[napi]
pub const ERR_SEC_AUTH_FAILED: i32 = credentials::ERR_SEC_AUTH_FAILED;

/// Read the password stored for a service and account pair.
#[napi]
pub fn get_password(service: String, account: String) -> Result<String> {
    #[cfg(target_os = "macos")]
    {
        use crate::credentials::keychain::SecKeychainVault;
        use crate::credentials::{CredentialStore, VaultCredentialStore};
        use crate::error::BridgeError;

        log::debug!(
            "keychain lookup for service={}, account={}",
            service,
            account
        );
        let vault = SecKeychainVault::open().map_err(BridgeError::PasswordLookup)?;
        let store = VaultCredentialStore::new(vault);
        Ok(store.get_password(&service, &account)?)
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = (service, account);
        Err(napi::Error::new(
            napi::Status::GenericFailure,
            "Keychain access is only available on macOS",
        ))
    }
}

/// Store a password for a service and account pair, updating the
/// existing item when the pair already has one.
#[napi]
pub fn set_password(service: String, account: String, password: String) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        use crate::credentials::keychain::SecKeychainVault;
        use crate::credentials::{CredentialStore, VaultCredentialStore};
        use crate::error::BridgeError;

        log::debug!(
            "keychain store for service={}, account={}",
            service,
            account
        );
        let vault = SecKeychainVault::open().map_err(BridgeError::PasswordUpdate)?;
        let mut store = VaultCredentialStore::new(vault);
        store.set_password(&service, &account, &password)?;
        Ok(())
    }

    #[cfg(not(target_os = "macos"))]
    {
        let _ = (service, account, password);
        Err(napi::Error::new(
            napi::Status::GenericFailure,
            "Keychain access is only available on macOS",
        ))
    }
}
