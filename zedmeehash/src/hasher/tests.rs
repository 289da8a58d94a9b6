// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! Tests: [`crate::hasher`].

#![cfg(test)]

use crate::default_table::{DEFAULT_TABLE32, DEFAULT_TABLE64};
use crate::hash::{hash32, hash64};
use crate::table::{Table32, Table64};
use crate::test_utils::{assert_same_object, cover_auto_debug, test_auto_clone, test_for_each_type};

use super::{Hasher32, Hasher64};

#[test]
fn basic_impls() {
    macro_rules! test {
        ($ty: ty) => {
            let hasher = <$ty>::default();
            test_auto_clone(&hasher);
            cover_auto_debug(&hasher);
            assert_eq!(hasher.seed(), 0);
        };
    }
    test_for_each_type!(test, [Hasher32, Hasher64]);
}

#[test]
fn default_binds_default_table() {
    assert_same_object!(Hasher32::default().table(), &DEFAULT_TABLE32);
    assert_same_object!(Hasher64::default().table(), &DEFAULT_TABLE64);
    assert_eq!(Hasher32::default(), Hasher32::new(&DEFAULT_TABLE32));
    assert_eq!(Hasher64::default(), Hasher64::new(&DEFAULT_TABLE64));
    assert_eq!(Hasher32::default().hash(b"123456789"), 0x7ECE0FC4);
    assert_eq!(Hasher64::default().hash(b"123456789"), 0xB29B51359389E4CD);
}

#[test]
fn with_seed() {
    let table32 = Table32::new([1, 2, 3, 4]);
    let table64 = Table64::new([1, 2, 3, 4, 5]);
    let hasher32 = Hasher32::new(&table32).with_seed(0xDEADBEEF);
    let hasher64 = Hasher64::new(&table64).with_seed(0xDEADBEEF);
    assert_eq!(hasher32.seed(), 0xDEADBEEF);
    assert_eq!(hasher64.seed(), 0xDEADBEEF);
    assert_same_object!(hasher32.table(), &table32);
    assert_same_object!(hasher64.table(), &table64);
    assert_eq!(hasher32.hash(b""), 0xDEADBEEF);
    assert_eq!(hasher64.hash(b""), 0xDEADBEEF);
    assert_ne!(hasher32, hasher32.with_seed(0));
    assert_eq!(hasher32.with_seed(0), Hasher32::new(&table32));
    assert_eq!(Hasher32::default().with_seed(0x12345678).hash(b"blablabla"), 0x5B794252);
    assert_eq!(
        Hasher64::default().with_seed(0x12345678).hash(b"blablabla"),
        0xB0C26AA8B19D55A5
    );
}

#[test]
fn hash_has_no_state() {
    let table32 = Table32::new([1, 2, 3, 4]);
    let table64 = Table64::new([1, 2, 3, 4, 5]);
    let hasher32 = Hasher32::new(&table32);
    let hasher64 = Hasher64::new(&table64);
    for data in [&b"blablabla"[..], b"123456789", b"", b"blablabla"] {
        assert_eq!(hasher32.hash(data), hash32(data, 0, &table32));
        assert_eq!(hasher64.hash(data), hash64(data, 0, &table64));
    }
    assert_eq!(hasher32.hash(b"blablabla"), 0xA58EF4EA);
    assert_eq!(hasher64.hash(b"blablabla"), 0x80E887A520B338E3);
}

#[test]
fn const_construction() {
    static TABLE: Table32 = Table32::new([5, 6, 7, 8]);
    static HASHER: Hasher32<'static> = Hasher32::new(&TABLE).with_seed(1);
    assert_eq!(HASHER.seed(), 1);
    assert_same_object!(HASHER.table(), &TABLE);
}
