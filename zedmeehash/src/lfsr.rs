// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! Combined Tausworthe (LFSR) generators by Pierre L'Ecuyer.
//!
//! These generators only expand table seeds.  Their outputs are part of the
//! hash definition: changing any constant below changes every digest.

/// Implements methods shared by all combined LFSR generators.
///
/// The type must provide `SEED_FLOORS` (lower bound of each register) and
/// `PARAMS` (`(q, s, mask, r)` for each register, in order) and be a
/// struct with a single register array `z`.
#[doc(alias = "combined_lfsr")]
macro_rules! combined_lfsr_impl {
    ($name: ident, $word: ty, $registers: expr) => {
        impl $name {
            /// The number of component registers (and seeds).
            pub const REGISTERS: usize = $registers;

            /// Creates a new generator from the seeds.
            ///
            /// Each seed lower than its floor (a power of two) gets the floor
            /// bit set.  Otherwise, a component would be stuck at zero or
            /// run into a short cycle.
            pub const fn new(seeds: [$word; $registers]) -> Self {
                let mut z = seeds;
                let mut i = 0;
                while i < $registers {
                    if z[i] < Self::SEED_FLOORS[i] {
                        z[i] |= Self::SEED_FLOORS[i];
                    }
                    i += 1;
                }
                Self { z }
            }

            /// Returns the current (normalized) register values.
            ///
            /// Right after [`new()`](Self::new()), they are the seeds
            /// after the floor correction.
            #[inline]
            pub const fn seeds(&self) -> [$word; $registers] {
                self.z
            }

            /// Advances all component registers by one step.
            #[inline]
            pub const fn step(self) -> Self {
                let mut z = self.z;
                let mut i = 0;
                while i < $registers {
                    let (q, s, mask, r) = Self::PARAMS[i];
                    let b = ((z[i] << q) ^ z[i]) >> s;
                    z[i] = ((z[i] & mask) << r) ^ b;
                    i += 1;
                }
                Self { z }
            }

            /// Returns the output corresponding to the current state
            /// (exclusive-or of all registers).
            #[inline]
            pub const fn output(&self) -> $word {
                let mut x = 0;
                let mut i = 0;
                while i < $registers {
                    x ^= self.z[i];
                    i += 1;
                }
                x
            }
        }

        impl Iterator for $name {
            type Item = $word;

            /// Advances the generator and returns the new output.
            ///
            /// This iterator never ends.
            #[inline]
            fn next(&mut self) -> Option<$word> {
                *self = self.step();
                Some(self.output())
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                (usize::MAX, None)
            }
        }
    };
}

// grcov-excl-br-start:STRUCT_MEMBER

/// LFSR113: a combined generator with four 32-bit components.
///
/// The combined period is approximately 2<sup>113</sup>.
/// [`Table32`](crate::Table32) is the first 256 outputs of this generator.
///
/// # Example
///
/// ```
/// use zedmeehash::internal_generators::Lfsr113;
/// use zedmeehash::Table32;
///
/// let seeds = [1, 2, 3, 4];
/// let table = Table32::new(seeds);
/// assert!(Lfsr113::new(seeds).take(256).eq(table.iter().copied()));
/// // Seeds below the floors are corrected.
/// assert_eq!(Lfsr113::new(seeds).seeds(), [3, 10, 19, 132]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lfsr113 {
    /// Component registers.
    z: [u32; 4],
}

/// LFSR258: a combined generator with five 64-bit components.
///
/// The combined period is approximately 2<sup>258</sup>.
/// [`Table64`](crate::Table64) is the first 256 outputs of this generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lfsr258 {
    /// Component registers.
    z: [u64; 5],
}

// grcov-excl-br-stop

impl Lfsr113 {
    /// Lower bounds of the registers.
    pub const SEED_FLOORS: [u32; 4] = [2, 8, 16, 128];

    /// Parameters `(q, s, mask, r)` of each component.
    ///
    /// `mask` clears the lowest bits not part of the component state
    /// (`!(floor - 1)`).
    #[rustfmt::skip]
    pub(crate) const PARAMS: [(u32, u32, u32, u32); 4] = [
        ( 6, 13, 0xFFFF_FFFE, 18),
        ( 2, 27, 0xFFFF_FFF8,  2),
        (13, 21, 0xFFFF_FFF0,  7),
        ( 3, 12, 0xFFFF_FF80, 13),
    ];
}

impl Lfsr258 {
    /// Lower bounds of the registers.
    pub const SEED_FLOORS: [u64; 5] = [2, 512, 4096, 131072, 8388608];

    /// Parameters `(q, s, mask, r)` of each component.
    ///
    /// `mask` clears the lowest bits not part of the component state
    /// (`!(floor - 1)`).
    #[rustfmt::skip]
    pub(crate) const PARAMS: [(u64, u64, u64, u64); 5] = [
        ( 1, 53, 0xFFFF_FFFF_FFFF_FFFE, 10),
        (24, 50, 0xFFFF_FFFF_FFFF_FE00,  5),
        ( 3, 23, 0xFFFF_FFFF_FFFF_F000, 29),
        ( 5, 24, 0xFFFF_FFFF_FFFE_0000, 23),
        ( 3, 33, 0xFFFF_FFFF_FF80_0000,  8),
    ];
}

combined_lfsr_impl!(Lfsr113, u32, 4);
combined_lfsr_impl!(Lfsr258, u64, 5);
