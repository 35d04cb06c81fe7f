// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Arbitrary` implementation for [`CompositeHashMap`].

use crate::CompositeHashMap;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use proptest::{
    arbitrary::{any_with, Arbitrary},
    collection::{vec, SizeRange, VecStrategy},
    strategy::{Map, Strategy},
};

/// Generates maps from a list of arbitrary `(key1, key2, value)` triples.
/// Triples whose key pair was already generated are dropped.
impl<K1, K2, V, S> Arbitrary for CompositeHashMap<K1, K2, V, S>
where
    K1: Arbitrary + Eq + Hash,
    K2: Arbitrary + Eq + Hash,
    V: Arbitrary,
    S: Clone + BuildHasher + Default,
{
    type Parameters =
        (SizeRange, K1::Parameters, K2::Parameters, V::Parameters);
    type Strategy = Map<
        VecStrategy<(K1::Strategy, K2::Strategy, V::Strategy)>,
        fn(Vec<(K1, K2, V)>) -> Self,
    >;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (size, key1_args, key2_args, value_args) = args;
        vec(
            (
                any_with::<K1>(key1_args),
                any_with::<K2>(key2_args),
                any_with::<V>(value_args),
            ),
            size,
        )
        .prop_map(from_generated_entries::<K1, K2, V, S> as fn(_) -> _)
    }
}

fn from_generated_entries<K1, K2, V, S>(
    entries: Vec<(K1, K2, V)>,
) -> CompositeHashMap<K1, K2, V, S>
where
    K1: Eq + Hash,
    K2: Eq + Hash,
    S: Clone + BuildHasher + Default,
{
    let mut map = CompositeHashMap::with_hasher(S::default());
    for (key1, key2, value) in entries {
        let _ = map.put(key1, key2, value);
    }
    map
}
