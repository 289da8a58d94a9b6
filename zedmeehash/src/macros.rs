// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! Internal macros.

/// Implements [`Error`](std::error::Error) trait either in `std` or `core`.
///
/// This macro is used to implement appropriate [`Error`](std::error::Error)
/// trait, either in `core` or `std`, depending on the configuration.
macro_rules! impl_error_impl {
    ($type:ty { $($tokens:tt)* }) => {
        #[cfg(feature = "std")]
        #[cfg_attr(feature = "unstable", doc(cfg(all())))]
        impl std::error::Error for $type {
            $($tokens)*
        }
        #[cfg(all(not(feature = "std"), zedmeehash_error_in_core = "stable"))]
        impl core::error::Error for $type {
            $($tokens)*
        }
    }
}
pub(crate) use impl_error_impl as impl_error;

/// Leaves a trace record through the `log` facade.
///
/// Without the `log` feature, this macro is expanded to nothing
/// (and its arguments are not evaluated).
#[doc(alias = "trace_log")]
macro_rules! trace_log_impl {
    ($($arg: tt)+) => {
        cfg_if::cfg_if! {
            if #[cfg(feature = "log")] {
                log::trace!(target: "zedmeehash", $($arg)+);
            }
        }
    };
}
pub(crate) use trace_log_impl as trace_log;

mod tests;
