// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! Expected number of collisions of an ideal hash function.

#![cfg(feature = "std")]

/// The number of distinct 32-bit digests (2<sup>32</sup>).
const DIGESTS32: f64 = 4294967296.0;

/// The number of distinct 64-bit digests (2<sup>64</sup>).
const DIGESTS64: f64 = 18446744073709551616.0;

/// Upper bound of `n / m` to use the series.
///
/// Below this ratio, each term is at most a thousandth of the previous one.
const SERIES_MAX_RATIO: f64 = 1e-3;

/// Computes the expected collisions by the series
/// `sum_{k>=2} (-1)^k * C(n, k) * m^(1-k)`.
///
/// This is precise when `n` is small compared to `m`, where the closed
/// form would cancel out almost all significant digits.
fn series(n: f64, m: f64) -> f64 {
    // k = 2
    let mut term = n * (n - 1.0) / (2.0 * m);
    let mut sum = 0.0;
    let mut k = 2.0;
    loop {
        sum += term;
        let next = -term * (n - k) / ((k + 1.0) * m);
        if next == 0.0 || next.abs() <= sum.abs() * f64::EPSILON {
            return sum;
        }
        term = next;
        k += 1.0;
    }
}

/// Computes the expected collisions by the closed form
/// `n - m * (1 - (1 - 1/m)^n)`.
fn closed_form(n: f64, m: f64) -> f64 {
    n + m * (n * (-1.0 / m).ln_1p()).exp_m1()
}

/// Computes the expected collisions among `n` values hashed to `m` digests.
fn expected_collisions(n: u64, m: f64) -> f64 {
    if n < 2 {
        return 0.0;
    }
    let n = n as f64;
    if n <= m * SERIES_MAX_RATIO {
        series(n, m)
    } else {
        closed_form(n, m)
    }
}

/// Returns the expected number of collisions when `n` distinct values
/// are hashed by an ideal 32-bit hash function.
///
/// That is, `n` minus the expected number of distinct digests:
/// `n - m * (1 - ((m - 1) / m)^n)` where `m` = 2<sup>32</sup>.
///
/// This is useful as a baseline when measuring [`hash32()`](crate::hash32())
/// on an actual data set.
///
/// # Example
///
/// ```
/// use zedmeehash::expected_collisions32;
///
/// assert_eq!(expected_collisions32(1), 0.0);
/// // Birthday bound: 2^16 values give about a half collision.
/// assert!((expected_collisions32(1 << 16) - 0.5).abs() < 1e-4);
/// ```
pub fn expected_collisions32(n: u64) -> f64 {
    expected_collisions(n, DIGESTS32)
}

/// Returns the expected number of collisions when `n` distinct values
/// are hashed by an ideal 64-bit hash function.
///
/// See [`expected_collisions32()`] for details.
pub fn expected_collisions64(n: u64) -> f64 {
    expected_collisions(n, DIGESTS64)
}
