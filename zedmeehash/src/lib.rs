// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! ZedmeeHash: strong, fast and simple non-cryptographic hash functions.
//!
//! This crate provides two hash functions, a 32-bit one ([`hash32()`]) and
//! a 64-bit one ([`hash64()`]).  Both of them fold the input through a
//! 256-entry substitution table generated by a combined LFSR
//! (LFSR113 for 32-bit tables and LFSR258 for 64-bit tables).
//!
//! # Usage
//!
//! The easiest way is to use the default tables:
//!
//! ```
//! assert_eq!(zedmeehash::hash32_default(b"blablabla"), 0x65218EDA);
//! assert_eq!(zedmeehash::hash64_default(b"blablabla"), 0xB047CF62AFF2384D);
//! ```
//!
//! You may also generate a table from your own seeds and reuse it
//! across as many calls as you like:
//!
//! ```
//! use zedmeehash::{hash32, Table32};
//!
//! let table = Table32::new([0x01234567, 0x89abcdef, 0xdeadbeef, 0xcafebabe]);
//! let h1 = hash32(b"Hello, World!\n", 0, &table);
//! let h2 = hash32(b"Hello, World!\n", 0, &table);
//! assert_eq!(h1, h2);
//! // The empty input returns the seed as is.
//! assert_eq!(hash32(b"", 0x5eed, &table), 0x5eed);
//! ```
//!
//! # Properties
//!
//! *   The hash is **not** cryptographically secure.  Do not use it where
//!     an adversary may choose the input.
//! *   The hash is **not** a streaming hash.  The byte at each position is
//!     mixed with its distance to the end of the buffer, so the whole
//!     buffer has to be available on a single call.
//! *   Tables are immutable values after generation and can be shared
//!     between threads freely.
//!
//! # Crate Features
//!
//! *   `std` (default)
//!     Enables [`std::error::Error`] implementations and
//!     [`expected_collisions32()`] / [`expected_collisions64()`].
//! *   `alloc` (implied by `std`)
//! *   `log`
//!     Emits trace records through the [`log`](https://docs.rs/log)
//!     facade when tables are generated at runtime.
//! *   `nightly` / `unstable`
//!     Enables features only available on the Nightly Rust.

// no_std
#![cfg_attr(not(any(test, doc, feature = "std")), no_std)]
// Regular nightly features
#![cfg_attr(feature = "unstable", feature(doc_cfg))]
#![cfg_attr(feature = "unstable", feature(doc_auto_cfg))]
// In the code maintenance mode, disallow all warnings.
#![cfg_attr(feature = "maint-code", deny(warnings))]
// No unsafe code.
#![forbid(unsafe_code)]
// Non-test code requires documents
#![cfg_attr(not(test), warn(missing_docs))]
#![cfg_attr(not(test), warn(clippy::missing_docs_in_private_items))]
// Unless in the maintenance mode, allow unknown lints.
#![cfg_attr(not(feature = "maint-lints"), allow(unknown_lints))]
// Unless in the maintenance mode, allow old lint names.
#![cfg_attr(not(feature = "maint-lints"), allow(renamed_and_removed_lints))]
// Tests: constant (and/or obvious) assertions should be allowed.
#![cfg_attr(test, allow(clippy::assertions_on_constants))]
// Tests: obvious x << 0 like operations should be allowed.
#![cfg_attr(test, allow(clippy::erasing_op))]

// alloc is required when the "alloc" feature is enabled or testing (including doctests).
#[cfg(any(feature = "alloc", test, doc))]
extern crate alloc;

mod collisions;
mod default_table;
mod hash;
mod hasher;
mod lfsr;
mod macros;
mod table;
mod test_utils;

#[cfg(feature = "std")]
pub use collisions::{expected_collisions32, expected_collisions64};
pub use default_table::{
    hash32_default, hash32_with_seed, hash64_default, hash64_with_seed, init_default_table32,
    init_default_table64, DEFAULT_SEED32, DEFAULT_SEED64, DEFAULT_TABLE32, DEFAULT_TABLE64,
    DEFAULT_TABLE_SEEDS32, DEFAULT_TABLE_SEEDS64,
};
pub use hash::{hash32, hash64};
pub use hasher::{Hasher32, Hasher64};
pub use table::{generate_table32, generate_table64, Table32, Table64, TableSizeError, TABLE_SIZE};

/// Module containing the pseudo-random generators behind the tables.
pub mod internal_generators {
    pub use super::lfsr::{Lfsr113, Lfsr258};
}

/// Constant assertions related to the base requirements.
#[doc(hidden)]
mod const_asserts {
    use super::*;
    use crate::internal_generators::{Lfsr113, Lfsr258};
    use static_assertions::{assert_impl_all, const_assert, const_assert_eq};

    // We expect that usize is at least 16 bits in width
    // (so that a table index always fits).
    const_assert!(usize::BITS >= 16);

    // Every byte value must be a valid table index and vice versa.
    const_assert_eq!(TABLE_SIZE, u8::MAX as usize + 1);

    // Generators have one register per seed.
    const_assert_eq!(Lfsr113::REGISTERS, Table32::SEEDS);
    const_assert_eq!(Lfsr258::REGISTERS, Table64::SEEDS);

    // Tables (and so the default tables) are freely shareable.
    assert_impl_all!(Table32: Send, Sync);
    assert_impl_all!(Table64: Send, Sync);
}

mod tests;
