// @fileoverview Default keychain access through the Security framework
//
// Generic password items are added through the raw keychain calls so a
// duplicate item surfaces as a status instead of being replaced; lookups
// go through the safe wrappers, which release item references on drop.
// Lookups pass no keychain array and therefore consult the user's whole
// default keychain search list; only adds target the default keychain.

use std::os::raw::{c_char, c_void};
use std::ptr;

use core_foundation::base::TCFType;
use security_framework::os::macos::keychain::SecKeychain;
use security_framework::os::macos::passwords::find_generic_password;
use security_framework_sys::keychain::SecKeychainAddGenericPassword;
use security_framework_sys::keychain_item::SecKeychainItemModifyAttributesAndData;

use crate::credentials::{GenericPasswordVault, UpdateFailure, ERR_SEC_SUCCESS};
use crate::error::OsStatus;

/// Generic password storage over the user's default keychain.
///
/// New items land in the default keychain; lookups and updates resolve
/// through the default keychain search list, so an item stored in any
/// keychain on that list is still found.
pub struct SecKeychainVault {
    keychain: SecKeychain,
}

impl SecKeychainVault {
    /// Open the default keychain for the current user.
    pub fn open() -> Result<Self, OsStatus> {
        SecKeychain::default()
            .map(|keychain| Self { keychain })
            .map_err(|err| err.code())
    }
}

/// Whether the default keychain can be opened.
pub fn is_available() -> bool {
    SecKeychain::default().is_ok()
}

impl GenericPasswordVault for SecKeychainVault {
    fn find_password(&self, service: &str, account: &str) -> Result<Vec<u8>, OsStatus> {
        let (password, _item) = find_generic_password(None, service, account)
            .map_err(|err| err.code())?;
        Ok(password.to_vec())
    }

    fn add_password(
        &mut self,
        service: &str,
        account: &str,
        password: &[u8],
    ) -> Result<(), OsStatus> {
        let status = unsafe {
            SecKeychainAddGenericPassword(
                self.keychain.as_concrete_TypeRef(),
                service.len() as u32,
                service.as_ptr() as *const c_char,
                account.len() as u32,
                account.as_ptr() as *const c_char,
                password.len() as u32,
                password.as_ptr() as *const c_void,
                ptr::null_mut(),
            )
        };
        if status == ERR_SEC_SUCCESS {
            Ok(())
        } else {
            Err(status)
        }
    }

    fn update_existing(
        &mut self,
        service: &str,
        account: &str,
        password: &[u8],
    ) -> Result<(), UpdateFailure> {
        // The item wrapper releases its keychain reference when dropped,
        // including on the early-return paths below.
        let (_, item) = find_generic_password(None, service, account)
            .map_err(|err| UpdateFailure::Locate(err.code()))?;
        let status = unsafe {
            SecKeychainItemModifyAttributesAndData(
                item.as_concrete_TypeRef(),
                ptr::null(),
                password.len() as u32,
                password.as_ptr() as *const c_void,
            )
        };
        if status == ERR_SEC_SUCCESS {
            Ok(())
        } else {
            Err(UpdateFailure::Modify(status))
        }
    }
}
