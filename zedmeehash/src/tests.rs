// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

//! Tests: [`crate`].

#![cfg(test)]

#[cfg(not(zedmeehash_tests_without_debug_assertions))]
#[test]
fn test_prerequisites() {
    assert!(cfg!(debug_assertions), "\
        The tests in this crate require debug assertions to be enabled (by default).  \
        To test this crate without debug assertions, add rustc flags \"--cfg zedmeehash_tests_without_debug_assertions\".\
    ");
}

#[test]
fn public_api_workflow() {
    use crate::{generate_table32, generate_table64, hash32, hash64, Hasher32, Hasher64};

    let table32 = generate_table32(0xB8F09159, 0x69C2A8E9, 0x40B732C7, 0xAE597B8B);
    let table64 = generate_table64(
        0x3964D44B4DE22DC3,
        0xF509942DD52B6A13,
        0x1E5499BE8734977F,
        0x759712F4EAA664EE,
        0xCA2E28643E732272,
    );
    assert_eq!(&table32, crate::init_default_table32());
    assert_eq!(&table64, crate::init_default_table64());

    assert_eq!(hash32(b"blablabla", 0, &table32), 0x65218EDA);
    assert_eq!(hash64(b"blablabla", 0, &table64), 0xB047CF62AFF2384D);
    assert_eq!(crate::hash32_default(b"123456789"), 0x7ECE0FC4);
    assert_eq!(crate::hash64_default(b"123456789"), 0xB29B51359389E4CD);
    assert_eq!(Hasher32::new(&table32).hash(b"AAAAAAAAAAAAAAAAAAAA"), 0x5D7881E5);
    assert_eq!(Hasher64::new(&table64).hash(b"AAAAAAAAAAAAAAAAAAAA"), 0x523F45DE501D5B9B);
}

#[test]
fn shared_table_across_threads() {
    use std::sync::Arc;
    use std::thread;
    use std::vec::Vec;

    use crate::{hash32, Table32};

    let table = Arc::new(Table32::new([7, 11, 13, 17]));
    let expected = hash32(b"shared", 0, &table);
    let handles: Vec<_> = (0..4u32)
        .map(|seed| {
            let table = Arc::clone(&table);
            thread::spawn(move || (hash32(b"shared", 0, &table), hash32(b"shared", seed, &table)))
        })
        .collect();
    for (seed, handle) in handles.into_iter().enumerate() {
        let (digest, seeded) = handle.join().unwrap();
        assert_eq!(digest, expected);
        assert_eq!(seeded, hash32(b"shared", seed as u32, &table));
    }
}
