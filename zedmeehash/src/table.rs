// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! Substitution tables used by the hash functions.

use core::ops::Index;

use crate::internal_generators::{Lfsr113, Lfsr258};
use crate::macros::{impl_error, trace_log};

/// The number of entries in a table.
///
/// The index of a table is always computed modulo this value.
pub const TABLE_SIZE: usize = 256;

/// The error type for converting a slice into a table.
///
/// It holds the length of the rejected slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSizeError(pub(crate) usize);

impl TableSizeError {
    /// Returns the length of the slice which could not be converted.
    pub fn slice_len(&self) -> usize {
        self.0
    }
}

impl core::fmt::Display for TableSizeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "a table must have exactly {} entries (got {})",
            TABLE_SIZE, self.0
        )
    }
}

impl_error! { TableSizeError {} }

/// Template to implement everything common between [`Table32`] and [`Table64`].
#[doc(alias = "table")]
macro_rules! table_impl {
    ($name: ident, $word: ty, $lfsr: ty, $seeds: expr) => {
        impl $name {
            /// The number of seeds to generate a table.
            pub const SEEDS: usize = $seeds;

            /// Generates a table from the seeds.
            ///
            /// This is a pure function: the same seeds always generate
            /// the same table.  Any seed value is accepted (seeds lower than
            /// the generator's floors are corrected, not rejected).
            ///
            /// Since this is a `const fn`, a table can be generated
            /// on the compilation.
            pub const fn new(seeds: [$word; $seeds]) -> Self {
                Self::from_generator(<$lfsr>::new(seeds))
            }

            /// Takes the next [`TABLE_SIZE`] outputs of the generator.
            pub(crate) const fn from_generator(generator: $lfsr) -> Self {
                let mut generator = generator;
                let mut table = [0; TABLE_SIZE];
                let mut i = 0;
                while i < TABLE_SIZE {
                    generator = generator.step();
                    table[i] = generator.output();
                    i += 1;
                }
                Self(table)
            }

            /// Wraps raw table entries.
            pub const fn from_array(table: [$word; TABLE_SIZE]) -> Self {
                Self(table)
            }

            /// Returns the raw table entries.
            #[inline]
            pub const fn as_array(&self) -> &[$word; TABLE_SIZE] {
                &self.0
            }

            /// Unwraps the raw table entries.
            pub fn into_inner(self) -> [$word; TABLE_SIZE] {
                self.0
            }

            /// Returns the entry at the given index.
            ///
            /// Every [`u8`] is a valid index.
            #[inline(always)]
            pub const fn get(&self, index: u8) -> $word {
                self.0[index as usize]
            }

            /// Returns an iterator over the entries.
            pub fn iter(&self) -> core::slice::Iter<'_, $word> {
                self.0.iter()
            }
        }

        impl Index<u8> for $name {
            type Output = $word;

            #[inline(always)]
            fn index(&self, index: u8) -> &$word {
                &self.0[index as usize]
            }
        }

        impl AsRef<[$word]> for $name {
            fn as_ref(&self) -> &[$word] {
                &self.0
            }
        }

        impl From<[$word; TABLE_SIZE]> for $name {
            fn from(table: [$word; TABLE_SIZE]) -> Self {
                Self(table)
            }
        }

        impl From<$name> for [$word; TABLE_SIZE] {
            fn from(table: $name) -> Self {
                table.0
            }
        }

        impl TryFrom<&[$word]> for $name {
            type Error = TableSizeError;

            /// Copies the entries from a slice of exactly [`TABLE_SIZE`] elements.
            fn try_from(value: &[$word]) -> Result<Self, Self::Error> {
                <[$word; TABLE_SIZE]>::try_from(value)
                    .map(Self)
                    .map_err(|_| TableSizeError(value.len()))
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $word;
            type IntoIter = core::slice::Iter<'a, $word>;

            fn into_iter(self) -> Self::IntoIter {
                self.iter()
            }
        }
    };
}

// grcov-excl-br-start:STRUCT_MEMBER

/// A table of 256 32-bit words for [`hash32()`](crate::hash32()).
///
/// It is generated from four seeds by LFSR113
/// (see [`Lfsr113`](crate::internal_generators::Lfsr113)).
///
/// # Example
///
/// ```
/// use zedmeehash::Table32;
///
/// let table = Table32::new([0xB8F09159, 0x69C2A8E9, 0x40B732C7, 0xAE597B8B]);
/// assert_eq!(table[0], 0x968A2902);
/// assert_eq!(&table, zedmeehash::init_default_table32());
///
/// // A table can be also made from raw entries.
/// let entries: Vec<u32> = (0..256).collect();
/// let table = Table32::try_from(entries.as_slice()).unwrap();
/// assert_eq!(table.get(0xff), 0xff);
/// assert!(Table32::try_from(&entries[1..]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table32([u32; TABLE_SIZE]);

/// A table of 256 64-bit words for [`hash64()`](crate::hash64()).
///
/// It is generated from five seeds by LFSR258
/// (see [`Lfsr258`](crate::internal_generators::Lfsr258)).
///
/// # Example
///
/// ```
/// use zedmeehash::Table64;
///
/// let table = Table64::new([
///     0x3964D44B4DE22DC3, 0xF509942DD52B6A13, 0x1E5499BE8734977F,
///     0x759712F4EAA664EE, 0xCA2E28643E732272,
/// ]);
/// assert_eq!(table[0], 0xB6D80CADF591350B);
/// assert_eq!(&table, zedmeehash::init_default_table64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table64([u64; TABLE_SIZE]);

// grcov-excl-br-stop

table_impl!(Table32, u32, Lfsr113, 4);
table_impl!(Table64, u64, Lfsr258, 5);

/// Generates a 32-bit table from four seeds.
///
/// This is the same as [`Table32::new()`] except that it is not `const` and
/// leaves a trace record (with the `log` feature) when a seed is corrected.
pub fn generate_table32(seed1: u32, seed2: u32, seed3: u32, seed4: u32) -> Table32 {
    let seeds = [seed1, seed2, seed3, seed4];
    let generator = Lfsr113::new(seeds);
    if generator.seeds() != seeds {
        trace_log!(
            "LFSR113 seeds raised to their floors: {:08x?} -> {:08x?}",
            seeds,
            generator.seeds()
        );
    }
    Table32::from_generator(generator)
}

/// Generates a 64-bit table from five seeds.
///
/// This is the same as [`Table64::new()`] except that it is not `const` and
/// leaves a trace record (with the `log` feature) when a seed is corrected.
pub fn generate_table64(seed1: u64, seed2: u64, seed3: u64, seed4: u64, seed5: u64) -> Table64 {
    let seeds = [seed1, seed2, seed3, seed4, seed5];
    let generator = Lfsr258::new(seeds);
    if generator.seeds() != seeds {
        trace_log!(
            "LFSR258 seeds raised to their floors: {:016x?} -> {:016x?}",
            seeds,
            generator.seeds()
        );
    }
    Table64::from_generator(generator)
}
