// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! The default tables and the hash functions using them.
//!
//! The default tables are generated on the compilation and stored in
//! immutable statics.  They cannot be observed uninitialized and there is
//! nothing to synchronize between threads.

use crate::hash::{hash32, hash64};
use crate::table::{Table32, Table64};

/// The default seed for [`hash32_default()`].
pub const DEFAULT_SEED32: u32 = 0;

/// The default seed for [`hash64_default()`].
pub const DEFAULT_SEED64: u64 = 0;

/// The seeds to generate [`DEFAULT_TABLE32`].
pub const DEFAULT_TABLE_SEEDS32: [u32; 4] = [0xB8F09159, 0x69C2A8E9, 0x40B732C7, 0xAE597B8B];

/// The seeds to generate [`DEFAULT_TABLE64`].
pub const DEFAULT_TABLE_SEEDS64: [u64; 5] = [
    0x3964D44B4DE22DC3,
    0xF509942DD52B6A13,
    0x1E5499BE8734977F,
    0x759712F4EAA664EE,
    0xCA2E28643E732272,
];

/// The default 32-bit table.
pub static DEFAULT_TABLE32: Table32 = Table32::new(DEFAULT_TABLE_SEEDS32);

/// The default 64-bit table.
pub static DEFAULT_TABLE64: Table64 = Table64::new(DEFAULT_TABLE_SEEDS64);

/// Returns the default 32-bit table.
///
/// The table is generated on the compilation so calling this function
/// any number of times (from any thread) always returns the same object.
///
/// # Example
///
/// ```
/// let table = zedmeehash::init_default_table32();
/// assert_eq!(zedmeehash::hash32(b"blablabla", 0, table), 0x65218EDA);
/// assert!(core::ptr::eq(table, zedmeehash::init_default_table32()));
/// ```
#[inline]
pub fn init_default_table32() -> &'static Table32 {
    &DEFAULT_TABLE32
}

/// Returns the default 64-bit table.
///
/// See [`init_default_table32()`] for details.
#[inline]
pub fn init_default_table64() -> &'static Table64 {
    &DEFAULT_TABLE64
}

/// Computes the 32-bit hash with the default table and [`DEFAULT_SEED32`].
///
/// # Example
///
/// ```
/// assert_eq!(zedmeehash::hash32_default(b"123456789"), 0x7ECE0FC4);
/// ```
#[inline]
pub fn hash32_default(data: &[u8]) -> u32 {
    hash32(data, DEFAULT_SEED32, &DEFAULT_TABLE32)
}

/// Computes the 64-bit hash with the default table and [`DEFAULT_SEED64`].
///
/// # Example
///
/// ```
/// assert_eq!(zedmeehash::hash64_default(b"123456789"), 0xB29B51359389E4CD);
/// ```
#[inline]
pub fn hash64_default(data: &[u8]) -> u64 {
    hash64(data, DEFAULT_SEED64, &DEFAULT_TABLE64)
}

/// Computes the 32-bit hash with the default table and the given seed.
#[inline]
pub fn hash32_with_seed(data: &[u8], seed: u32) -> u32 {
    hash32(data, seed, &DEFAULT_TABLE32)
}

/// Computes the 64-bit hash with the default table and the given seed.
#[inline]
pub fn hash64_with_seed(data: &[u8], seed: u64) -> u64 {
    hash64(data, seed, &DEFAULT_TABLE64)
}
