// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! Tests: [`crate::macros`].

#![cfg(test)]

use core::fmt;

#[cfg(all(not(feature = "std"), zedmeehash_error_in_core = "stable"))]
use core::error::Error;
#[cfg(feature = "std")]
use std::error::Error;

#[derive(Debug)]
struct ExampleError;

impl fmt::Display for ExampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("example")
    }
}

super::impl_error! { ExampleError {} }

#[cfg(any(feature = "std", zedmeehash_error_in_core = "stable"))]
#[test]
fn error_impl_has_no_source() {
    let err = ExampleError;
    assert!(err.source().is_none());
    assert_eq!(err.to_string(), "example");
}

#[test]
fn trace_log_accepts_format_arguments() {
    // With or without the `log` feature, this is a statement which does nothing
    // observable in the test (no logger is installed).
    let value = [1u32, 2, 3];
    super::trace_log!("value: {:?}", value);
    super::trace_log!("constant");
    assert_eq!(value, [1, 2, 3]);
}
