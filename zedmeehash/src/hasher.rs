// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! Hashers bound to a table.

use crate::default_table::{DEFAULT_SEED32, DEFAULT_SEED64, DEFAULT_TABLE32, DEFAULT_TABLE64};
use crate::hash::{hash32, hash64};
use crate::table::{Table32, Table64};

/// Template to implement the hashers.
#[doc(alias = "hasher")]
macro_rules! hasher_impl {
    ($name: ident, $word: ty, $table: ty, $hash: ident, $default_seed: expr, $default_table: expr) => {
        impl<'t> $name<'t> {
            /// Creates a new hasher with the given table and the default seed.
            pub const fn new(table: &'t $table) -> Self {
                Self { table, seed: $default_seed }
            }

            /// Returns a hasher with the same table and the given seed.
            pub const fn with_seed(self, seed: $word) -> Self {
                Self { table: self.table, seed }
            }

            /// Returns the seed.
            #[inline]
            pub fn seed(&self) -> $word {
                self.seed
            }

            /// Returns the table.
            #[inline]
            pub fn table(&self) -> &'t $table {
                self.table
            }

            /// Computes the hash of `data`.
            ///
            /// Each call is independent from the previous ones.
            #[inline]
            pub fn hash(&self, data: &[u8]) -> $word {
                $hash(data, self.seed, self.table)
            }
        }

        impl Default for $name<'static> {
            /// Creates a hasher with the default table and the default seed.
            fn default() -> Self {
                Self::new(&$default_table)
            }
        }
    };
}

/// A 32-bit hasher holding a table reference and a seed.
///
/// # Example
///
/// ```
/// use zedmeehash::{Hasher32, Table32};
///
/// let table = Table32::new([1, 2, 3, 4]);
/// let hasher = Hasher32::new(&table).with_seed(0x12345678);
/// assert_eq!(hasher.hash(b"abc"), zedmeehash::hash32(b"abc", 0x12345678, &table));
///
/// assert_eq!(Hasher32::default().hash(b"blablabla"), 0x65218EDA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hasher32<'t> {
    /// The table.
    table: &'t Table32,
    /// The seed.
    seed: u32,
}

/// A 64-bit hasher holding a table reference and a seed.
///
/// See [`Hasher32`] for an example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hasher64<'t> {
    /// The table.
    table: &'t Table64,
    /// The seed.
    seed: u64,
}

hasher_impl!(Hasher32, u32, Table32, hash32, DEFAULT_SEED32, DEFAULT_TABLE32);
hasher_impl!(Hasher64, u64, Table64, hash64, DEFAULT_SEED64, DEFAULT_TABLE64);

mod tests;
