// SPDX-License-Identifier: Unlicense
// SPDX-FileCopyrightText: Authored by Matteo Zapparoli in 2021
// grcov-excl-br-start

//! Utilities shared by the unit tests.

#![cfg(any(test, doc))]


/// Testing function for [`Eq`] + [`Clone`].
///
/// It also requires [`core::fmt::Debug`] for assertion.
pub(crate) fn test_auto_clone<T: Clone + Eq + core::fmt::Debug>(orig_value: &T) {
    let mut cloned: T = orig_value.clone();
    assert_eq!(*orig_value, cloned);
    cloned.clone_from(orig_value);
    assert_eq!(*orig_value, cloned);
}

/// Testing function for [`Debug`](core::fmt::Debug) (for coverage).
pub(crate) fn cover_auto_debug<T: core::fmt::Debug>(value: &T) {
    let _ = format!("{:?}", value);
}

/// Runs a test macro once for each type in the list.
#[doc(alias = "test_for_each_type")]
macro_rules! test_for_each_type_impl {
    ($test: ident, []) => {};
    ($test: ident, [$ty: ty]) => {
        loop {
            $test!($ty);
            break;
        }
    };
    ($test: ident, [$ty: ty, $($rest: ty),+]) => {
        $crate::test_utils::test_for_each_type!($test, [$ty]);
        $crate::test_utils::test_for_each_type!($test, [$($rest),+]);
    };
    ($test: ident, [$ty: ty,]) => {
        $crate::test_utils::test_for_each_type!($test, [$ty]);
    };
}

/// Asserts that two references point to the same object.
///
/// Equal values are not enough: default tables must not be copied
/// on each initialization.
#[doc(alias = "assert_same_object")]
macro_rules! assert_same_object_impl {
    ($a: expr, $b: expr) => {
        assert!(core::ptr::eq($a, $b), "{} and {} are different objects", stringify!($a), stringify!($b))
    };
}

pub(crate) use assert_same_object_impl as assert_same_object;
pub(crate) use test_for_each_type_impl as test_for_each_type;
