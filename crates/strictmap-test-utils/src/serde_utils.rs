// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde-related test utilities.

use crate::test_entry::{
    new_checked_map, new_composite_map, TestCheckedMap, TestCompositeMap,
    TestEntry,
};
use std::{collections::BTreeMap, fmt::Display};

pub fn assert_checked_serialize_roundtrip(entries: Vec<(u8, String)>) {
    let mut map = new_checked_map();
    let mut first_error = None;
    for (key, value) in entries.clone() {
        // Duplicates are likely here. Keep the first error around to check
        // that deserialization reports the same one.
        if let Err(error) = map.put(key, value) {
            if first_error.is_none() {
                first_error = Some(error.into_owned());
            }
        }
    }

    let serialized = serde_json::to_string(&map).unwrap();
    let deserialized: TestCheckedMap =
        serde_json::from_str(&serialized).unwrap();
    assert_eq!(map, deserialized, "checked map roundtrips");

    // The serialized form is an ordinary JSON object.
    let as_btree_map: BTreeMap<u8, String> =
        serde_json::from_str(&serialized).unwrap();
    let mut map_entries =
        map.iter().map(|(k, v)| (*k, v.clone())).collect::<Vec<_>>();
    map_entries.sort();
    assert_eq!(
        map_entries,
        as_btree_map.into_iter().collect::<Vec<_>>(),
        "serialized form is a map"
    );

    // Write the raw entries, duplicates included, as a JSON object.
    let members = entries
        .iter()
        .map(|(key, value)| {
            format!("\"{key}\":{}", serde_json::to_string(value).unwrap())
        })
        .collect::<Vec<_>>();
    let raw = format!("{{{}}}", members.join(","));
    let res: Result<TestCheckedMap, _> = serde_json::from_str(&raw);
    assert_first_error_matches(first_error, res);
}

pub fn assert_composite_serialize_roundtrip(entries: Vec<TestEntry>) {
    let mut map = new_composite_map();
    let mut first_error = None;
    for entry in entries.clone() {
        if let Err(error) = map.put(entry.key1, entry.key2, entry.value) {
            if first_error.is_none() {
                first_error = Some(error.into_owned());
            }
        }
    }

    let serialized = serde_json::to_string(&map).unwrap();
    let deserialized: TestCompositeMap =
        serde_json::from_str(&serialized).unwrap();
    deserialized.validate().expect("deserialized map is valid");
    assert_eq!(map, deserialized, "composite map roundtrips");

    // A composite map serializes the same way as a list of triples, so the
    // raw entries (duplicates included) can be fed straight back in.
    let triples = entries
        .into_iter()
        .map(TestEntry::into_triple)
        .collect::<Vec<_>>();
    let raw = serde_json::to_string(&triples).unwrap();
    let res: Result<TestCompositeMap, _> = serde_json::from_str(&raw);
    assert_first_error_matches(first_error, res);
}

fn assert_first_error_matches<M, E: Display>(
    first_error: Option<E>,
    res: Result<M, serde_json::Error>,
) {
    match (first_error, res) {
        (None, Ok(_)) => {}
        (Some(first_error), Ok(_)) => {
            panic!(
                "expected error ({first_error}), but deserialization succeeded"
            )
        }
        (None, Err(error)) => {
            panic!(
                "unexpected error: {error}, deserialization should have succeeded"
            )
        }
        (Some(first_error), Err(error)) => {
            // The deserialization error wraps the map's error message, with a
            // position appended.
            let expected = first_error.to_string();
            let actual = error.to_string();
            let Some((actual_prefix, _)) = actual.rsplit_once(" at line ")
            else {
                panic!(
                    "error does not contain line number at the end: {actual}"
                );
            };
            assert_eq!(actual_prefix, expected, "error matches");
        }
    }
}
