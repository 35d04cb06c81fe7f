// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use proptest::prelude::*;
use std::hash::BuildHasher;
use strictmap::{composite_hash_map, errors::PairKey, CompositeHashMap};
use strictmap_test_utils::{
    eq_props::{assert_eq_props, assert_ne_props},
    naive_map::NaiveMap,
    test_entry::{
        assert_iter_eq, new_composite_map, test_entry_permutation_strategy,
        HashBuilder, TestEntry,
    },
};
use test_strategy::{proptest, Arbitrary};

type StrMap = CompositeHashMap<&'static str, &'static str, i32, HashBuilder>;

fn str_map() -> StrMap {
    CompositeHashMap::with_hasher(HashBuilder::default())
}

#[test]
fn test_put_and_get() {
    let mut map = str_map();
    map.put("a", "x", 1).unwrap();
    map.put("a", "y", 2).unwrap();
    map.put("b", "x", 3).unwrap();

    assert_eq!(map.len(), 3);
    assert!(!map.is_empty());
    assert!(map.contains_key1("a"));
    assert!(!map.contains_key1("x"));
    assert!(map.contains_key2("x"));
    assert!(map.contains_key2("y"));
    assert!(!map.contains_key2("z"));
    assert!(map.contains_keys("b", "x"));
    assert!(!map.contains_keys("b", "y"));
    assert!(map.contains_value(&3));
    assert!(!map.contains_value(&4));
    assert_eq!(map.get("a", "y"), Ok(&2));

    // The pair already exists: the rejected value comes back, and the
    // existing value is untouched.
    let error = map.put("a", "x", 9).unwrap_err();
    assert_eq!(error.key(), &PairKey::Key2 { key1: "a", key2: "x" });
    assert_eq!(*error.new_value(), 9);
    assert_eq!(*error.existing(), &1);
    assert_eq!(map.get("a", "x"), Ok(&1));

    // Neither level present.
    let error = map.get("c", "x").unwrap_err();
    assert_eq!(error.key(), &PairKey::Key1("c"));

    // The first key is present, but not paired with the second.
    let error = map.get("b", "y").unwrap_err();
    assert_eq!(error.key(), &PairKey::Key2 { key1: "b", key2: "y" });
    assert_eq!(error.key().key2(), Some(&"y"));

    map.validate().expect("map is valid");
}

#[test]
fn test_failed_put_is_idempotent() {
    let mut map = str_map();
    map.put("a", "x", 1).unwrap();
    let before = map.clone();

    for _ in 0..3 {
        let (key, new_value, existing) =
            map.put("a", "x", 2).unwrap_err().into_owned().into_parts();
        assert_eq!(key, PairKey::Key2 { key1: "a", key2: "x" });
        assert_eq!(new_value, 2);
        assert_eq!(existing, 1);
    }
    assert_eq!(map, before);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_get_mut_and_replace() {
    let mut map = str_map();
    map.put("a", "x", 1).unwrap();

    assert_eq!(map.replace("a", "x", 2), Ok(1));
    assert_eq!(map.get("a", "x"), Ok(&2));

    *map.get_mut("a", "x").unwrap() += 10;
    assert_eq!(map.get("a", "x"), Ok(&12));

    // Replacing an absent pair fails without inserting anything.
    let error = map.replace("a", "y", 3).unwrap_err();
    assert_eq!(error.key(), &PairKey::Key2 { key1: "a", key2: "y" });
    let error = map.get_mut("b", "x").unwrap_err();
    assert_eq!(error.into_key(), PairKey::Key1("b"));
    assert_eq!(map.len(), 1);

    assert_eq!(map.replace_if("a", "x", &0, 5), Ok(false));
    assert_eq!(map.get("a", "x"), Ok(&12));
    assert_eq!(map.replace_if("a", "x", &12, 5), Ok(true));
    assert_eq!(map.get("a", "x"), Ok(&5));
    assert!(map.replace_if("z", "x", &5, 6).is_err());
}

#[test]
fn test_remove() {
    let mut map = str_map();
    map.put("a", "x", 1).unwrap();
    map.put("a", "y", 2).unwrap();
    map.put("b", "x", 3).unwrap();

    assert_eq!(map.remove("a", "x"), Ok(1));
    assert_eq!(map.len(), 2);
    assert!(map.contains_key1("a"));
    assert_eq!(
        map.remove("a", "x").unwrap_err().into_key(),
        PairKey::Key2 { key1: "a", key2: "x" }
    );

    // Removing the last entry under a first key removes the first key too.
    assert_eq!(map.remove("b", "x"), Ok(3));
    assert!(!map.contains_key1("b"));
    assert_eq!(
        map.remove("b", "x").unwrap_err().into_key(),
        PairKey::Key1("b")
    );
    map.validate().expect("map is valid");

    // The pair can be inserted again once removed.
    map.put("b", "x", 4).unwrap();
    assert_eq!(map.get("b", "x"), Ok(&4));

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.get("a", "y").is_err());
}

#[test]
fn test_key1_groups() {
    let mut map = str_map();
    map.put("a", "x", 1).unwrap();
    map.put("a", "y", 2).unwrap();
    map.put("b", "x", 3).unwrap();

    let mut keys1 = map.keys1().copied().collect::<Vec<_>>();
    keys1.sort();
    assert_eq!(keys1, ["a", "b"]);

    assert_eq!(map.len_key1("a"), Ok(2));
    assert_eq!(map.len_key1("b"), Ok(1));
    assert_eq!(map.len_key1("c").unwrap_err().into_key(), "c");

    let group = map.iter_key1("a").unwrap();
    assert_eq!(group.len(), 2);
    let mut group = group.map(|(k2, v)| (*k2, *v)).collect::<Vec<_>>();
    group.sort();
    assert_eq!(group, [("x", 1), ("y", 2)]);
    assert!(map.iter_key1("c").is_err());

    let removed = map.remove_key1("b").unwrap();
    assert_eq!(removed, [("x", 3)]);
    assert_eq!(map.len(), 2);
    assert!(map.contains_key2("x"));
    assert!(map.remove_key1("b").is_err());
    map.validate().expect("map is valid");
}

#[test]
fn test_snapshots_are_independent() {
    let mut map = str_map();
    map.put("a", "x", 1).unwrap();
    map.put("a", "y", 1).unwrap();
    map.put("b", "x", 3).unwrap();

    let mut entries = map.entries();
    entries.sort_by_key(|e| (*e.key1(), *e.key2()));
    assert_eq!(entries.len(), 3);
    assert_eq!(
        (*entries[0].key1(), *entries[0].key2(), *entries[0].value()),
        ("a", "x", 1)
    );

    // Equal values under different pairs are all reported.
    let mut values = map.values();
    values.sort();
    assert_eq!(values, [1, 1, 3]);

    // Changing a snapshot entry leaves the map alone...
    assert_eq!(entries[0].set_value(100), 1);
    assert_eq!(map.get("a", "x"), Ok(&1));

    // ...and changing the map leaves the snapshot alone.
    map.remove("a", "x").unwrap();
    map.replace("b", "x", 30).unwrap();
    assert_eq!(entries.len(), 3);
    assert_eq!(*entries[2].value(), 3);
    assert_eq!(values, [1, 1, 3]);

    let mut seen = Vec::new();
    map.for_each(|entry| seen.push(entry.into_parts()));
    seen.sort();
    assert_eq!(seen, [("a", "y", 1), ("b", "x", 30)]);

    // Live mutation goes through iter_mut.
    for (_, _, value) in &mut map {
        *value *= 2;
    }
    assert_eq!(map.get("a", "y"), Ok(&2));
    assert_eq!(map.get("b", "x"), Ok(&60));
}

#[test]
fn test_put_all_commits_prefix() {
    let mut map = str_map();
    map.put("a", "x", 0).unwrap();

    let error = map
        .put_all([("b", "x", 1), ("a", "x", 2), ("c", "x", 3)])
        .unwrap_err();
    assert_eq!(error.key(), &PairKey::Key2 { key1: "a", key2: "x" });
    assert_eq!(*error.existing(), &0);

    // Entries before the collision were committed; entries after it were
    // never reached.
    assert_eq!(map.get("a", "x"), Ok(&0));
    assert_eq!(map.get("b", "x"), Ok(&1));
    assert!(!map.contains_key1("c"));
    assert_eq!(map.len(), 2);

    let error =
        StrMap::from_entries([("a", "x", 1), ("a", "x", 2)]).unwrap_err();
    assert_eq!(
        error.into_parts(),
        (PairKey::Key2 { key1: "a", key2: "x" }, 2, 1)
    );

    let map = StrMap::from_entries([("a", "x", 1), ("a", "y", 2)]).unwrap();
    assert_eq!(map.len(), 2);
}

#[test]
fn test_debug() {
    let mut map = str_map();
    assert_eq!(format!("{map:?}"), "{}");
    map.put("a", "x", 1).unwrap();
    assert_eq!(format!("{map:?}"), r#"{("a", "x"): 1}"#);
}

#[test]
fn test_macro() {
    let map = composite_hash_map! {
        HashBuilder::default();
        ("a", "x") => 1,
        ("a", "y") => 2,
        ("b", "x") => 3,
    };
    assert_eq!(map.len(), 3);
    assert_eq!(map.len_key1("a"), Ok(2));
    assert_eq!(map.get("b", "x"), Ok(&3));

    let empty: StrMap = composite_hash_map! { HashBuilder::default(); };
    assert!(empty.is_empty());
}

#[test]
#[should_panic(expected = "already exists")]
fn test_macro_panics_on_duplicate_pair() {
    let _ = composite_hash_map! {
        HashBuilder::default();
        ("a", "x") => 1,
        ("a", "x") => 2,
    };
}

#[test]
fn test_capacity_constructors() {
    let mut map: StrMap =
        CompositeHashMap::with_capacity_and_hasher(32, HashBuilder::default());
    assert!(map.is_empty());

    // Presence checks are unaffected by the preallocated capacity.
    map.put("a", "x", 1).unwrap();
    map.put("a", "y", 2).unwrap();
    assert!(map.put("a", "x", 3).is_err());
    assert_eq!(map.get("a", "y"), Ok(&2));
    assert_eq!(map.get("b", "x").unwrap_err().key(), &PairKey::Key1("b"));
    assert_eq!(
        map,
        composite_hash_map! {
            HashBuilder::default();
            ("a", "y") => 2,
            ("a", "x") => 1,
        }
    );

    // A cloned hasher hashes keys the same way as the map's own.
    let other: StrMap = CompositeHashMap::with_hasher(map.hasher().clone());
    assert_eq!(map.hasher().hash_one("a"), other.hasher().hash_one("a"));
}

#[cfg(feature = "default-hasher")]
#[test]
fn test_default_hasher_constructors() {
    let mut map = CompositeHashMap::with_capacity(8);
    map.put("a", "x", 1).unwrap();
    map.put("b", "x", 2).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.len_key1("a"), Ok(1));

    assert_eq!(map, composite_hash_map! { ("b", "x") => 2, ("a", "x") => 1 });

    let mut fresh: CompositeHashMap<&str, &str, i32> =
        CompositeHashMap::new();
    assert!(fresh.get("a", "x").is_err());
    fresh.put("b", "x", 2).unwrap();
    fresh.put("a", "x", 1).unwrap();
    assert_eq!(map, fresh);
}

#[derive(Debug, Arbitrary)]
struct KeyPair {
    #[strategy(0..16u8)]
    key1: u8,
    #[strategy(prop::char::range('a', 'h'))]
    key2: char,
}

#[derive(Debug, Arbitrary)]
enum Operation {
    // Make puts a bit more common to try and fill up the map.
    #[weight(3)]
    Put(TestEntry),
    PutAll(
        #[strategy(prop::collection::vec(any::<TestEntry>(), 0..4))]
        Vec<TestEntry>,
    ),
    Get(KeyPair),
    #[weight(2)]
    Replace(TestEntry),
    Remove(KeyPair),
    RemoveKey1(#[strategy(0..16u8)] u8),
    LenKey1(#[strategy(0..16u8)] u8),
    ContainsKey2(#[strategy(prop::char::range('a', 'h'))] char),
    ContainsValue(#[strategy("[a-z]{0,3}")] String),
}

#[proptest(cases = 16)]
fn proptest_ops(
    #[strategy(prop::collection::vec(any::<Operation>(), 0..512))] ops: Vec<
        Operation,
    >,
) {
    let mut map = new_composite_map();
    let mut naive_map = NaiveMap::new();

    for op in ops {
        match op {
            Operation::Put(entry) => {
                let map_res = map
                    .put(entry.key1, entry.key2, entry.value.clone())
                    .map_err(|error| error.into_owned().into_parts());
                let naive_res =
                    naive_map.put(entry).map_err(|error| error.into_parts());

                assert_eq!(map_res, naive_res, "put results match");
            }
            Operation::PutAll(entries) => {
                let map_res = map
                    .put_all(
                        entries.iter().cloned().map(TestEntry::into_triple),
                    )
                    .map_err(|error| error.into_owned().into_parts());
                let naive_res = entries
                    .into_iter()
                    .try_for_each(|entry| naive_map.put(entry))
                    .map_err(|error| error.into_parts());

                assert_eq!(map_res, naive_res, "put_all results match");
            }
            Operation::Get(keys) => {
                let map_res = map
                    .get(&keys.key1, &keys.key2)
                    .map_err(|error| error.into_owned());
                let naive_res = naive_map.get(keys.key1, keys.key2);

                assert_eq!(map_res, naive_res, "get results match");
            }
            Operation::Replace(entry) => {
                let map_res = map
                    .replace(&entry.key1, &entry.key2, entry.value.clone())
                    .map_err(|error| error.into_owned());
                let naive_res =
                    naive_map.replace(entry.key1, entry.key2, entry.value);

                assert_eq!(map_res, naive_res, "replace results match");
            }
            Operation::Remove(keys) => {
                let map_res = map
                    .remove(&keys.key1, &keys.key2)
                    .map_err(|error| error.into_owned());
                let naive_res = naive_map.remove(keys.key1, keys.key2);

                assert_eq!(map_res, naive_res, "remove results match");
            }
            Operation::RemoveKey1(key1) => {
                let map_res = map
                    .remove_key1(&key1)
                    .map(|mut removed| {
                        removed.sort();
                        removed
                    })
                    .map_err(|error| error.into_owned());
                let naive_res = naive_map.remove_key1(key1);

                assert_eq!(map_res, naive_res, "remove_key1 results match");
            }
            Operation::LenKey1(key1) => {
                let map_res =
                    map.len_key1(&key1).map_err(|error| error.into_owned());
                let naive_res = naive_map.len_key1(key1);

                assert_eq!(map_res, naive_res, "len_key1 results match");
                assert_eq!(
                    map.contains_key1(&key1),
                    naive_map.contains_key1(key1)
                );
            }
            Operation::ContainsKey2(key2) => {
                assert_eq!(
                    map.contains_key2(&key2),
                    naive_map.contains_key2(key2),
                    "contains_key2 results match"
                );
            }
            Operation::ContainsValue(value) => {
                assert_eq!(
                    map.contains_value(&value),
                    naive_map.contains_value(&value),
                    "contains_value results match"
                );
            }
        }

        map.validate().expect("map should be valid");
        assert_eq!(map.len(), naive_map.len(), "lengths match");
        assert_eq!(map.is_empty(), naive_map.is_empty());

        // Check that the iterators work correctly.
        assert_iter_eq(map.clone(), naive_map.sorted_entries());
    }
}

#[proptest(cases = 64)]
fn proptest_permutation_eq(
    #[strategy(test_entry_permutation_strategy(0..256))] entries: (
        Vec<TestEntry>,
        Vec<TestEntry>,
    ),
) {
    let (entries1, entries2) = entries;
    let mut map1 = new_composite_map();
    let mut map2 = new_composite_map();

    for entry in entries1 {
        map1.put(entry.key1, entry.key2, entry.value).unwrap();
    }
    for entry in entries2 {
        map2.put(entry.key1, entry.key2, entry.value).unwrap();
    }

    assert_eq_props(map1, map2);
}

// Equality over the nested layout must distinguish entries that differ in
// only one component.
#[test]
fn test_permutation_eq_examples() {
    let mut map1 = new_composite_map();
    let mut map2 = new_composite_map();

    // Two empty maps are equal.
    assert_eq!(map1, map2);

    map1.put(0, 'a', "v".to_string()).unwrap();
    assert_ne_props(&map1, &map2);
    map2.put(0, 'a', "v".to_string()).unwrap();
    assert_eq_props(&map1, &map2);

    {
        // Same key2 and value, different key1.
        let mut map1 = map1.clone();
        map1.put(1, 'b', "v".to_string()).unwrap();
        let mut map2 = map2.clone();
        map2.put(2, 'b', "v".to_string()).unwrap();
        assert_ne_props(&map1, &map2);
    }

    {
        // Same key1 and value, different key2.
        let mut map1 = map1.clone();
        map1.put(1, 'b', "v".to_string()).unwrap();
        let mut map2 = map2.clone();
        map2.put(1, 'c', "v".to_string()).unwrap();
        assert_ne_props(&map1, &map2);
    }

    {
        // Same keys, different value.
        let mut map1 = map1.clone();
        map1.put(1, 'b', "w".to_string()).unwrap();
        let mut map2 = map2.clone();
        map2.put(1, 'b', "x".to_string()).unwrap();
        assert_ne_props(&map1, &map2);
    }

    {
        // Same entries, reached through a removal.
        let mut map1 = map1.clone();
        map1.put(1, 'b', "w".to_string()).unwrap();
        map1.remove(&1u8, &'b').unwrap();
        assert_eq_props(&map1, &map2);
    }
}

#[cfg(feature = "proptest")]
mod arbitrary_tests {
    use strictmap::CompositeHashMap;
    use strictmap_test_utils::test_entry::HashBuilder;
    use test_strategy::proptest;

    #[proptest]
    fn proptest_arbitrary_is_valid(
        map: CompositeHashMap<u8, u8, u8, HashBuilder>,
    ) {
        map.validate().expect("generated map is valid");
        assert_eq!(map.iter().count(), map.len());
    }
}

#[cfg(feature = "serde")]
mod serde_tests {
    use strictmap_test_utils::{
        serde_utils::assert_composite_serialize_roundtrip,
        test_entry::TestEntry,
    };
    use test_strategy::proptest;

    #[proptest]
    fn proptest_serialize_roundtrip(
        #[strategy(proptest::collection::vec(
            proptest::arbitrary::any::<TestEntry>(),
            0..32,
        ))]
        values: Vec<TestEntry>,
    ) {
        assert_composite_serialize_roundtrip(values);
    }
}
