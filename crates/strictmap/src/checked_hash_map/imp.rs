// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Entry, IntoIter, Iter, IterMut, Keys, Values};
use crate::{
    errors::{KeyAlreadyExists, KeyDoesNotExist},
    DefaultHashBuilder,
};
use alloc::vec::Vec;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    mem,
};
use derive_where::derive_where;
use equivalent::Equivalent;
use hashbrown::HashMap;

/// A hash map that checks key presence on every keyed operation.
///
/// * [`put`](Self::put) requires the key to be absent.
/// * [`get`](Self::get), [`get_mut`](Self::get_mut),
///   [`remove`](Self::remove) and [`replace`](Self::replace) require the key
///   to be present.
///
/// Violations are reported as [`KeyAlreadyExists`] and [`KeyDoesNotExist`]
/// errors respectively, and leave the map unchanged. Operations that don't
/// target a specific key (`len`, `contains_key`, iteration, `clear`) never
/// fail.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use strictmap::CheckedHashMap;
///
/// let mut ports = CheckedHashMap::new();
/// ports.put("http".to_string(), 80).unwrap();
/// ports.put("https".to_string(), 443).unwrap();
///
/// // Registering the same name twice is an error, and keeps the old value.
/// let error = ports.put("http".to_string(), 8080).unwrap_err();
/// assert_eq!(error.key(), "http");
/// assert_eq!(*error.new_value(), 8080);
/// assert_eq!(ports.get("http"), Ok(&80));
///
/// // So is replacing or removing something that was never registered.
/// assert!(ports.replace("gopher", 70).is_err());
/// assert_eq!(ports.remove("https"), Ok(443));
/// assert!(ports.remove("https").is_err());
/// # }
/// ```
#[derive_where(Default; S: Default)]
#[derive(Clone)]
pub struct CheckedHashMap<K, V, S = DefaultHashBuilder> {
    map: HashMap<K, V, S>,
}

#[cfg(feature = "default-hasher")]
impl<K, V> CheckedHashMap<K, V> {
    /// Creates a new, empty `CheckedHashMap`.
    #[inline]
    pub fn new() -> Self {
        Self { map: HashMap::with_hasher(DefaultHashBuilder::default()) }
    }

    /// Creates a new `CheckedHashMap` with at least the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(
                capacity,
                DefaultHashBuilder::default(),
            ),
        }
    }
}

impl<K, V, S> CheckedHashMap<K, V, S> {
    /// Creates a new, empty `CheckedHashMap` that uses the given hasher.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self { map: HashMap::with_hasher(hasher) }
    }

    /// Creates a new `CheckedHashMap` with at least the given capacity, using
    /// the given hasher.
    ///
    /// The capacity is only a hint for the backing table and has no effect on
    /// the map's behavior.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self { map: HashMap::with_capacity_and_hasher(capacity, hasher) }
    }

    /// Returns the hasher used by the map.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// Returns the currently allocated capacity of the map.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.map.capacity()
    }

    /// Returns true if the map is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns the number of entries in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Iterates over the entries in the map, in arbitrary order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.map.iter())
    }

    /// Iterates over the entries in the map, allowing values to be mutated in
    /// place.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.map.iter_mut())
    }

    /// Iterates over the keys in the map, in arbitrary order.
    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.map.keys())
    }

    /// Iterates over the values in the map, in arbitrary order.
    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.map.values())
    }

    /// Returns a snapshot of the map's entries.
    ///
    /// The returned entries are copies: they stay valid and unchanged however
    /// the map is modified afterwards, and modifying them doesn't affect the
    /// map.
    pub fn entries(&self) -> Vec<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.map
            .iter()
            .map(|(key, value)| Entry::new(key.clone(), value.clone()))
            .collect()
    }

    /// Removes all entries from the map.
    ///
    /// No existence checks are performed.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl<K: Eq + Hash, V, S: BuildHasher> CheckedHashMap<K, V, S> {
    /// Builds a map from the given entries, failing on the first key that
    /// appears more than once.
    pub fn from_entries<I>(entries: I) -> Result<Self, KeyAlreadyExists<K, V>>
    where
        I: IntoIterator<Item = (K, V)>,
        V: Clone,
        S: Default,
    {
        let mut map = Self::with_hasher(S::default());
        map.put_all(entries).map_err(KeyAlreadyExists::into_owned)?;
        Ok(map)
    }

    /// Returns true if the map contains the given key.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.contains_key(key)
    }

    /// Returns true if any key in the map is associated with the given value.
    ///
    /// This scans every entry.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.map.values().any(|v| v == value)
    }

    /// Returns the value associated with `key`.
    ///
    /// Fails with [`KeyDoesNotExist`] if the key is absent.
    #[inline]
    pub fn get<'k, Q>(&self, key: &'k Q) -> Result<&V, KeyDoesNotExist<&'k Q>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.get(key).ok_or_else(|| KeyDoesNotExist::__internal_new(key))
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// Fails with [`KeyDoesNotExist`] if the key is absent.
    #[inline]
    pub fn get_mut<'k, Q>(
        &mut self,
        key: &'k Q,
    ) -> Result<&mut V, KeyDoesNotExist<&'k Q>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map
            .get_mut(key)
            .ok_or_else(|| KeyDoesNotExist::__internal_new(key))
    }

    /// Inserts a new entry into the map.
    ///
    /// Fails with [`KeyAlreadyExists`] if the key is already present; the
    /// error hands back the key and the rejected value, and borrows the value
    /// already stored. The map is not modified in that case.
    pub fn put(
        &mut self,
        key: K,
        value: V,
    ) -> Result<(), KeyAlreadyExists<K, V, &V>> {
        // A borrow returned from `get` would stay live across the insert
        // below, so check first and index only on the failure path.
        if self.map.contains_key(&key) {
            let existing = &self.map[&key];
            return Err(KeyAlreadyExists::__internal_new(key, value, existing));
        }

        self.map.insert(key, value);
        Ok(())
    }

    /// Inserts every entry from `entries`, in iteration order.
    ///
    /// The existence check is applied to each entry in turn. On the first
    /// key that is already present, insertion stops and that key's error is
    /// returned: entries inserted before it stay in the map, and entries after
    /// it are not consumed.
    pub fn put_all<I>(
        &mut self,
        entries: I,
    ) -> Result<(), KeyAlreadyExists<K, V, &V>>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            if self.map.contains_key(&key) {
                let existing = &self.map[&key];
                return Err(KeyAlreadyExists::__internal_new(
                    key, value, existing,
                ));
            }
            self.map.insert(key, value);
        }

        Ok(())
    }

    /// Removes `key` from the map, returning its value.
    ///
    /// Fails with [`KeyDoesNotExist`] if the key is absent.
    #[inline]
    pub fn remove<'k, Q>(
        &mut self,
        key: &'k Q,
    ) -> Result<V, KeyDoesNotExist<&'k Q>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.remove(key).ok_or_else(|| KeyDoesNotExist::__internal_new(key))
    }

    /// Removes `key` from the map, returning the stored key and its value.
    ///
    /// Fails with [`KeyDoesNotExist`] if the key is absent.
    pub fn remove_entry<'k, Q>(
        &mut self,
        key: &'k Q,
    ) -> Result<(K, V), KeyDoesNotExist<&'k Q>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map
            .remove_entry(key)
            .ok_or_else(|| KeyDoesNotExist::__internal_new(key))
    }

    /// Replaces the value associated with `key`, returning the previous value.
    ///
    /// Fails with [`KeyDoesNotExist`] if the key is absent, in which case the
    /// map is not modified.
    pub fn replace<'k, Q>(
        &mut self,
        key: &'k Q,
        value: V,
    ) -> Result<V, KeyDoesNotExist<&'k Q>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        let slot = self.get_mut(key)?;
        Ok(mem::replace(slot, value))
    }

    /// Replaces the value associated with `key` only if it currently equals
    /// `expected`.
    ///
    /// Returns `Ok(true)` if the value was replaced and `Ok(false)` if the
    /// current value differs. Fails with [`KeyDoesNotExist`] if the key is
    /// absent.
    pub fn replace_if<'k, Q>(
        &mut self,
        key: &'k Q,
        expected: &V,
        value: V,
    ) -> Result<bool, KeyDoesNotExist<&'k Q>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
        V: PartialEq,
    {
        let slot = self.get_mut(key)?;
        if *slot == *expected {
            *slot = value;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl<K, V, S> fmt::Debug for CheckedHashMap<K, V, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K, V, S> PartialEq for CheckedHashMap<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        // Two maps are equal if they hold the same associations, regardless
        // of the order in which they were inserted.
        self.map == other.map
    }
}

impl<K, V, S> Eq for CheckedHashMap<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<'a, K, V, S> IntoIterator for &'a CheckedHashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a mut CheckedHashMap<K, V, S> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K, V, S> IntoIterator for CheckedHashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.map.into_iter())
    }
}
