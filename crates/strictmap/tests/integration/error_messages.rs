// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt::Write;
use strictmap::{CheckedHashMap, CompositeHashMap};
use strictmap_test_utils::test_entry::HashBuilder;

// Any change to user-facing error or Debug output shows up as a diff here.
// Run with EXPECTORATE=overwrite to accept it.
#[test]
fn error_messages() {
    let mut out = String::new();

    let mut checked = CheckedHashMap::with_hasher(HashBuilder::default());
    checked.put("http", 80).unwrap();
    writeln!(out, "checked map: {checked:?}").unwrap();

    let error = checked.put("http", 8080).unwrap_err();
    writeln!(out, "checked put: {error}").unwrap();
    writeln!(out, "checked put (debug): {error:?}").unwrap();

    let error = checked.get("https").unwrap_err();
    writeln!(out, "checked get: {error}").unwrap();
    writeln!(out, "checked get (debug): {error:?}").unwrap();

    let mut composite = CompositeHashMap::with_hasher(HashBuilder::default());
    composite.put("a", "x", 1).unwrap();
    writeln!(out, "composite map: {composite:?}").unwrap();

    let error = composite.put("a", "x", 2).unwrap_err();
    writeln!(out, "composite put: {error}").unwrap();

    let error = composite.get("c", "x").unwrap_err();
    writeln!(out, "composite get, missing key1: {error}").unwrap();

    let error = composite.get("a", "z").unwrap_err();
    writeln!(out, "composite get, missing key2: {error}").unwrap();
    writeln!(out, "composite get, missing key2 (debug): {error:?}").unwrap();

    let error = composite.remove_key1("b").unwrap_err();
    writeln!(out, "composite remove_key1: {error}").unwrap();

    expectorate::assert_contents("tests/output/error_messages.txt", &out);
}
