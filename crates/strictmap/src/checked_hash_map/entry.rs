// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::mem;

/// A detached copy of one key-value association in a [`CheckedHashMap`].
///
/// Produced by [`CheckedHashMap::entries`]. An `Entry` is a snapshot: calling
/// [`set_value`](Self::set_value) changes only the entry, never the map it was
/// copied from. To change values in place, use [`CheckedHashMap::get_mut`] or
/// [`CheckedHashMap::iter_mut`].
///
/// [`CheckedHashMap`]: crate::CheckedHashMap
/// [`CheckedHashMap::entries`]: crate::CheckedHashMap::entries
/// [`CheckedHashMap::get_mut`]: crate::CheckedHashMap::get_mut
/// [`CheckedHashMap::iter_mut`]: crate::CheckedHashMap::iter_mut
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a new entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
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

    /// Converts self into a `(key, value)` tuple.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}
