// @fileoverview Unified native module entry point for the Equinox OS bridges
//
// Exports the COM lifecycle, keychain password, and data protection
// bridges with platform-appropriate availability checks.

#![allow(dead_code)]

pub mod com;
pub mod credentials;
pub mod error;
pub mod protect;

pub mod keychain_bridge;
pub mod ole_bridge;
pub mod wincrypto_bridge;

use napi::Result;
use napi_derive::napi;
use once_cell::sync::OnceCell;

// Global initialization state
static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize the native bridge module. Safe to call more than once.
#[napi]
pub fn init_native_bridges() {
    INITIALIZED.get_or_init(|| {
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn"),
        )
        .try_init();
        log::debug!("native bridges loaded on {}", std::env::consts::OS);
    });
}

/// Get platform information
#[napi]
pub fn get_platform_info() -> Result<String> {
    let platform = if cfg!(target_os = "macos") {
        "macos"
    } else if cfg!(target_os = "windows") {
        "windows"
    } else if cfg!(target_os = "linux") {
        "linux"
    } else {
        "unknown"
    };

    Ok(platform.to_string())
}

/// Check if the keychain password bridge can reach a credential store.
#[napi]
pub fn is_credential_store_available() -> Result<bool> {
    #[cfg(target_os = "macos")]
    {
        Ok(credentials::keychain::is_available())
    }

    #[cfg(not(target_os = "macos"))]
    {
        Ok(false)
    }
}

/// Check if DPAPI data protection is available on this platform.
#[napi]
pub fn is_data_protection_available() -> Result<bool> {
    Ok(cfg!(target_os = "windows"))
}
