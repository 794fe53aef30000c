// Build script for the Equinox native bridge module
// Sets up N-API symbol resolution and platform-specific linking

use std::env;

fn main() {
    napi_build::setup();

    let target = env::var("TARGET").unwrap_or_default();
    if target.contains("apple") {
        println!("cargo:rustc-link-lib=framework=Security");
    }
}
