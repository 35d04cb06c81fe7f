// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use proptest::{prelude::*, sample::SizeRange};
use strictmap::{CheckedHashMap, CompositeHashMap};
use test_strategy::Arbitrary;

#[cfg(feature = "default-hasher")]
pub type HashBuilder = strictmap::DefaultHashBuilder;

#[cfg(not(feature = "default-hasher"))]
pub type HashBuilder = std::hash::RandomState;

pub type TestCheckedMap = CheckedHashMap<u8, String, HashBuilder>;
pub type TestCompositeMap = CompositeHashMap<u8, char, String, HashBuilder>;

pub fn new_checked_map() -> TestCheckedMap {
    CheckedHashMap::with_hasher(HashBuilder::default())
}

pub fn new_composite_map() -> TestCompositeMap {
    CompositeHashMap::with_hasher(HashBuilder::default())
}

/// One `(key1, key2, value)` triple for a [`TestCompositeMap`].
///
/// Keys are drawn from small ranges so that generated operations collide
/// often, at both levels.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Arbitrary)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TestEntry {
    #[strategy(0..16u8)]
    pub key1: u8,
    #[strategy(prop::char::range('a', 'h'))]
    pub key2: char,
    #[strategy("[a-z]{0,3}")]
    pub value: String,
}

impl TestEntry {
    pub fn new(key1: u8, key2: char, value: impl Into<String>) -> Self {
        Self { key1, key2, value: value.into() }
    }

    pub fn into_triple(self) -> (u8, char, String) {
        (self.key1, self.key2, self.value)
    }
}

/// Asserts that every way of iterating over `map` yields exactly `expected`,
/// which must be sorted.
pub fn assert_iter_eq(mut map: TestCompositeMap, expected: Vec<TestEntry>) {
    let mut iter = map
        .iter()
        .map(|(k1, k2, v)| TestEntry::new(*k1, *k2, v.clone()))
        .collect::<Vec<_>>();
    iter.sort();
    assert_eq!(iter, expected, ".iter() entries match naive ones");
    assert_eq!(map.iter().len(), expected.len(), ".iter() reports its length");

    let mut iter_mut = map
        .iter_mut()
        .map(|(k1, k2, v)| TestEntry::new(*k1, *k2, v.clone()))
        .collect::<Vec<_>>();
    iter_mut.sort();
    assert_eq!(iter_mut, expected, ".iter_mut() entries match naive ones");

    let mut entries = map
        .entries()
        .into_iter()
        .map(|entry| {
            let (key1, key2, value) = entry.into_parts();
            TestEntry::new(key1, key2, value)
        })
        .collect::<Vec<_>>();
    entries.sort();
    assert_eq!(entries, expected, ".entries() match naive ones");

    let mut into_iter = map
        .into_iter()
        .map(|(k1, k2, v)| TestEntry::new(k1, k2, v))
        .collect::<Vec<_>>();
    into_iter.sort();
    assert_eq!(into_iter, expected, ".into_iter() entries match naive ones");
}

/// Returns a pair of permutations of a set of entries with distinct key
/// pairs.
pub fn test_entry_permutation_strategy(
    size: impl Into<SizeRange>,
) -> impl Strategy<Value = (Vec<TestEntry>, Vec<TestEntry>)> {
    prop::collection::vec(any::<TestEntry>(), size.into()).prop_perturb(
        |entries, mut rng| {
            // Generated entries often share a key pair. Deduplicate them the
            // same way the map does, keeping the first occurrence.
            let mut map = new_composite_map();
            for entry in entries {
                _ = map.put(entry.key1, entry.key2, entry.value);
            }
            let set: Vec<_> = map
                .into_iter()
                .map(|(k1, k2, v)| TestEntry::new(k1, k2, v))
                .collect();

            // Fisher-Yates shuffle, high to low.
            let mut shuffled = set.clone();
            for i in (1..shuffled.len()).rev() {
                let j = rng.random_range(0..=i);
                shuffled.swap(i, j);
            }

            (set, shuffled)
        },
    )
}
