// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! The hash functions.
//!
//! Starting from the seed, each byte is processed from the *last* one to
//! the first one.  Let `r` be the number of bytes not processed yet
//! (including the current one) minus one (the index of the current byte):
//!
//! ```text
//! h = table[(r + data[r]) mod 256] ^ (h * 5)
//! ```
//!
//! All arithmetic wraps around at the width of the hash.  Since the
//! index depends on the distance from the *end* of the buffer, this is
//! not a streaming hash.

use crate::table::{Table32, Table64};

/// Template to generate the hash functions.
#[doc(alias = "hash_fn")]
macro_rules! hash_fn_impl {
    ($(#[$attr: meta])* $name: ident, $word: ty, $table: ty) => {
        $(#[$attr])*
        #[inline]
        pub fn $name(data: &[u8], seed: $word, table: &$table) -> $word {
            data.iter()
                .enumerate()
                .rev()
                .fold(seed, |h, (r, &ch)| {
                    // Only the lowest 8 bits of `r` matter.
                    table.get((r as u8).wrapping_add(ch)) ^ (h << 2).wrapping_add(h)
                })
        }
    };
}

hash_fn_impl! {
    /// Computes the 32-bit hash of `data` using the given seed and table.
    ///
    /// If `data` is empty, this function returns `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use zedmeehash::{hash32, init_default_table32, DEFAULT_SEED32};
    ///
    /// let table = init_default_table32();
    /// assert_eq!(hash32(b"123456789", DEFAULT_SEED32, table), 0x7ECE0FC4);
    /// assert_eq!(hash32(b"", 0xDEADBEEF, table), 0xDEADBEEF);
    /// ```
    hash32, u32, Table32
}

hash_fn_impl! {
    /// Computes the 64-bit hash of `data` using the given seed and table.
    ///
    /// If `data` is empty, this function returns `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use zedmeehash::{hash64, init_default_table64, DEFAULT_SEED64};
    ///
    /// let table = init_default_table64();
    /// assert_eq!(hash64(b"123456789", DEFAULT_SEED64, table), 0xB29B51359389E4CD);
    /// assert_eq!(hash64(b"", 0xDEADBEEF, table), 0xDEADBEEF);
    /// ```
    hash64, u64, Table64
}
