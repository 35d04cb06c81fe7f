// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `Arbitrary` implementation for [`CheckedHashMap`].

use crate::CheckedHashMap;
use alloc::vec::Vec;
use core::hash::{BuildHasher, Hash};
use proptest::{
    arbitrary::{any_with, Arbitrary},
    collection::{vec, SizeRange, VecStrategy},
    strategy::{Map, Strategy},
};

/// Generates maps from a list of arbitrary entries. When a key is generated
/// more than once, the first entry wins and later ones are dropped, so the
/// resulting map may be smaller than the requested size.
impl<K, V, S> Arbitrary for CheckedHashMap<K, V, S>
where
    K: Arbitrary + Eq + Hash,
    V: Arbitrary,
    S: BuildHasher + Default,
{
    type Parameters = (SizeRange, K::Parameters, V::Parameters);
    type Strategy =
        Map<VecStrategy<(K::Strategy, V::Strategy)>, fn(Vec<(K, V)>) -> Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (size, key_args, value_args) = args;
        vec((any_with::<K>(key_args), any_with::<V>(value_args)), size)
            .prop_map(from_generated_entries::<K, V, S> as fn(_) -> _)
    }
}

fn from_generated_entries<K, V, S>(
    entries: Vec<(K, V)>,
) -> CheckedHashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher + Default,
{
    let mut map =
        CheckedHashMap::with_capacity_and_hasher(entries.len(), S::default());
    for (key, value) in entries {
        // Duplicate keys are expected in generated input.
        let _ = map.put(key, value);
    }
    map
}
