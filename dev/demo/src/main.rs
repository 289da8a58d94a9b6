// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021

use std::env;

use log::info;
use zedmeehash::{hash32_default, hash64_default, init_default_table32, init_default_table64};

fn zedmee(s: &str) {
    println!("zedmeehash32(\"{}\") = {:08X}", s, hash32_default(s.as_bytes()));
    println!("zedmeehash64(\"{}\") = {:016X}", s, hash64_default(s.as_bytes()));
}

fn main() {
    env_logger::init();

    let table32 = init_default_table32();
    let table64 = init_default_table64();
    info!("default tables: {:08X}.. / {:016X}..", table32[0], table64[0]);

    // Reference digests
    zedmee("blablabla");
    zedmee("123456789");
    zedmee("AAAAAAAAAAAAAAAAAAAA");

    for arg in env::args().skip(1) {
        zedmee(&arg);
    }

    // Runtime generation leaves a trace record when a seed is corrected.
    let table = zedmeehash::generate_table32(0, 0, 0, 0);
    info!("table from zero seeds: {:08X}..", table[0]);
    for n in [1u64 << 16, 1 << 24, 1 << 32] {
        info!(
            "expected collisions among {} values: {:.6} (32-bit), {:.6e} (64-bit)",
            n,
            zedmeehash::expected_collisions32(n),
            zedmeehash::expected_collisions64(n)
        );
    }
}
