// @fileoverview Credential storage over OS generic password services
//
// The vault trait models the raw password primitives a keychain exposes;
// the store layered on top implements the add-then-update flow and the
// error surfacing the host relies on.

use crate::error::{BridgeError, BridgeResult, OsStatus};

#[cfg(target_os = "macos")]
pub mod keychain;

/// The operation completed (errSecSuccess).
pub const ERR_SEC_SUCCESS: OsStatus = 0;
/// No item matched the service and account pair (errSecItemNotFound).
pub const ERR_SEC_ITEM_NOT_FOUND: OsStatus = -25300;
/// An item for the pair already exists (errSecDuplicateItem).
pub const ERR_SEC_DUPLICATE_ITEM: OsStatus = -25299;
/// Authorization or authentication failed (errSecAuthFailed).
pub const ERR_SEC_AUTH_FAILED: OsStatus = -25293;
/// The user canceled the operation (errSecUserCanceled).
pub const ERR_SEC_USER_CANCELED: OsStatus = -128;

/// Why a find-and-modify update of an existing item failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateFailure {
    /// The existing item could not be located again.
    Locate(OsStatus),
    /// The item was found but its secret data could not be rewritten.
    Modify(OsStatus),
}

/// Raw generic password primitives of an OS keychain.
///
/// `add_password` must fail with [`ERR_SEC_DUPLICATE_ITEM`] when an item
/// for the same service and account already exists instead of silently
/// replacing it; the store above decides how duplicates are resolved.
pub trait GenericPasswordVault {
    /// Look up the secret bytes stored for a service and account pair.
    fn find_password(&self, service: &str, account: &str) -> Result<Vec<u8>, OsStatus>;

    /// Create a new item for the pair. Fails on duplicates.
    fn add_password(&mut self, service: &str, account: &str, password: &[u8])
        -> Result<(), OsStatus>;

    /// Locate the existing item for the pair and rewrite its secret data.
    fn update_existing(&mut self, service: &str, account: &str, password: &[u8])
        -> Result<(), UpdateFailure>;
}

/// Password storage capability exposed to the binding layer.
pub trait CredentialStore {
    /// Read the password stored for a service and account pair.
    fn get_password(&self, service: &str, account: &str) -> BridgeResult<String>;

    /// Store a password, replacing the secret of an existing item when the
    /// pair is already present.
    fn set_password(&mut self, service: &str, account: &str, password: &str) -> BridgeResult<()>;
}

/// [`CredentialStore`] over any [`GenericPasswordVault`].
pub struct VaultCredentialStore<V> {
    vault: V,
}

impl<V: GenericPasswordVault> VaultCredentialStore<V> {
    pub fn new(vault: V) -> Self {
        Self { vault }
    }
}

impl<V: GenericPasswordVault> CredentialStore for VaultCredentialStore<V> {
    fn get_password(&self, service: &str, account: &str) -> BridgeResult<String> {
        let secret = self
            .vault
            .find_password(service, account)
            .map_err(BridgeError::PasswordLookup)?;
        // Secret bytes are copied out of the OS-owned buffer before this
        // returns; bytes that are not valid UTF-8 are converted lossily.
        Ok(String::from_utf8_lossy(&secret).into_owned())
    }

    fn set_password(&mut self, service: &str, account: &str, password: &str) -> BridgeResult<()> {
        match self.vault.add_password(service, account, password.as_bytes()) {
            Ok(()) => Ok(()),
            Err(ERR_SEC_DUPLICATE_ITEM) => {
                log::debug!(
                    "item already exists for service={}, account={}; updating in place",
                    service,
                    account
                );
                self.vault
                    .update_existing(service, account, password.as_bytes())
                    .map_err(|failure| match failure {
                        UpdateFailure::Locate(status) => BridgeError::DuplicateResolution(status),
                        UpdateFailure::Modify(status) => BridgeError::PasswordUpdate(status),
                    })
            }
            Err(status) => Err(BridgeError::PasswordUpdate(status)),
        }
    }
}
