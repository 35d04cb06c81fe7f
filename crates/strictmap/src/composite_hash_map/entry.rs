// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::mem;

/// A detached copy of one `(key1, key2) → value` association in a
/// [`CompositeHashMap`].
///
/// Produced by [`CompositeHashMap::entries`] and passed to the callback of
/// [`CompositeHashMap::for_each`]. Like the single-key [`Entry`], this is a
/// snapshot: [`set_value`](Self::set_value) does not write through to the map.
///
/// Two entries are equal if both keys and the value are equal.
///
/// [`CompositeHashMap`]: crate::CompositeHashMap
/// [`CompositeHashMap::entries`]: crate::CompositeHashMap::entries
/// [`CompositeHashMap::for_each`]: crate::CompositeHashMap::for_each
/// [`Entry`]: crate::checked_hash_map::Entry
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry<K1, K2, V> {
    key1: K1,
    key2: K2,
    value: V,
}

impl<K1, K2, V> Entry<K1, K2, V> {
    /// Creates a new entry.
    #[inline]
    pub fn new(key1: K1, key2: K2, value: V) -> Self {
        Self { key1, key2, value }
    }

    /// Returns the first key.
    #[inline]
    pub fn key1(&self) -> &K1 {
        &self.key1
    }

    /// Returns the second key.
    #[inline]
    pub fn key2(&self) -> &K2 {
        &self.key2
    }

    /// Returns the value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Replaces the value held by this entry, returning the previous one.
    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        mem::replace(&mut self.value, value)
    }

    /// Converts self into a `(key1, key2, value)` tuple.
    #[inline]
    pub fn into_parts(self) -> (K1, K2, V) {
        (self.key1, self.key2, self.value)
    }
}
