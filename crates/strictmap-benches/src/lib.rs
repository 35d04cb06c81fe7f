// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Fixtures shared by the benchmarks.

use strictmap::{CheckedHashMap, CompositeHashMap};

/// Number of second keys stored under each first key in composite fixtures.
pub const GROUP_SIZE: u32 = 8;

pub fn checked_map(size: usize) -> CheckedHashMap<u32, String> {
    let mut map = CheckedHashMap::with_capacity(size);
    for i in 0..size as u32 {
        map.put(i, format!("data{i}")).unwrap();
    }
    map
}

/// Builds a composite map with `size` entries, spread over first keys in
/// groups of [`GROUP_SIZE`].
pub fn composite_map(size: usize) -> CompositeHashMap<u32, u32, String> {
    let mut map = CompositeHashMap::new();
    for i in 0..size as u32 {
        map.put(i / GROUP_SIZE, i % GROUP_SIZE, format!("data{i}")).unwrap();
    }
    map
}
