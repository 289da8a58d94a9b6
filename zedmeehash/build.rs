// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

extern crate version_check as rustc;

fn main() {
    // Avoid unnecessary rebuilding.
    println!("cargo:rerun-if-changed=build.rs");

    // Custom cfgs are declared only where Cargo understands the key.
    if rustc::is_min_version("1.80.0").unwrap_or(false) {
        println!("cargo:rustc-check-cfg=cfg(zedmeehash_error_in_core, values(\"stable\", \"fallback\"))");
        println!("cargo:rustc-check-cfg=cfg(zedmeehash_tests_without_debug_assertions)");
    }

    // Trait: core::error::Error
    // error_in_core: 1.65-1.80 ("error_in_core" unstable feature; not to support)
    // error_in_core: 1.81-     (stable)
    if rustc::is_min_version("1.81.0").unwrap_or(false) {
        println!("cargo:rustc-cfg=zedmeehash_error_in_core=\"stable\"");
    } else {
        println!("cargo:rustc-cfg=zedmeehash_error_in_core=\"fallback\"");
    }
}
