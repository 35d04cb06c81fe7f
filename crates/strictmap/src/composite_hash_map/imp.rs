// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::{Entry, GroupIter, IntoIter, Iter, IterMut, Keys1};
use crate::{
    errors::{KeyAlreadyExists, KeyDoesNotExist, PairKey},
    internal::ValidationError,
    DefaultHashBuilder,
};
use alloc::{format, vec::Vec};
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    mem,
};
use derive_where::derive_where;
use equivalent::Equivalent;
use hashbrown::HashMap;

/// A hash map where each value is identified by a pair of keys, with key
/// presence checked on every keyed operation.
///
/// Conceptually this is a map from `(K1, K2)` to `V`. Entries are grouped by
/// their first key, which makes it cheap to look at or remove every entry
/// sharing a `key1` ([`iter_key1`](Self::iter_key1),
/// [`remove_key1`](Self::remove_key1)).
///
/// Keyed operations report which level a check failed at through
/// [`PairKey`]: `PairKey::Key1` if no entry has the given first key, and
/// `PairKey::Key2` if the first key exists but not in combination with the
/// second.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use strictmap::{errors::PairKey, CompositeHashMap};
///
/// // Seat assignments, keyed by flight and then by seat.
/// let mut seats = CompositeHashMap::new();
/// seats.put("UA12", "3A", "alice").unwrap();
/// seats.put("UA12", "3B", "bob").unwrap();
/// seats.put("LH400", "3A", "carol").unwrap();
/// assert_eq!(seats.len(), 3);
///
/// // A seat can only be assigned once.
/// let error = seats.put("UA12", "3A", "dave").unwrap_err();
/// assert_eq!(*error.existing(), &"alice");
///
/// // Lookups name the level that was missing.
/// let error = seats.get("AF1", "3A").unwrap_err();
/// assert_eq!(error.key(), &PairKey::Key1("AF1"));
/// let error = seats.get("UA12", "9C").unwrap_err();
/// assert_eq!(error.key(), &PairKey::Key2 { key1: "UA12", key2: "9C" });
///
/// // Cancelling a flight removes all of its seats at once.
/// let mut cancelled = seats.remove_key1("UA12").unwrap();
/// cancelled.sort();
/// assert_eq!(cancelled, [("3A", "alice"), ("3B", "bob")]);
/// assert_eq!(seats.len(), 1);
/// # }
/// ```
#[derive_where(Default; S: Default)]
#[derive(Clone)]
pub struct CompositeHashMap<K1, K2, V, S = DefaultHashBuilder> {
    // Invariant: no inner map is empty.
    map: HashMap<K1, HashMap<K2, V, S>, S>,
}

#[cfg(feature = "default-hasher")]
impl<K1, K2, V> CompositeHashMap<K1, K2, V> {
    /// Creates a new, empty `CompositeHashMap`.
    #[inline]
    pub fn new() -> Self {
        Self { map: HashMap::with_hasher(DefaultHashBuilder::default()) }
    }

    /// Creates a new `CompositeHashMap` with room for at least `capacity`
    /// distinct first keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(
                capacity,
                DefaultHashBuilder::default(),
            ),
        }
    }
}

impl<K1, K2, V, S> CompositeHashMap<K1, K2, V, S> {
    /// Creates a new, empty `CompositeHashMap` that uses the given hasher.
    ///
    /// Inner maps are created with clones of this hasher.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self { map: HashMap::with_hasher(hasher) }
    }

    /// Creates a new `CompositeHashMap` with room for at least `capacity`
    /// distinct first keys, using the given hasher.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self { map: HashMap::with_capacity_and_hasher(capacity, hasher) }
    }

    /// Returns the hasher used by the map.
    #[inline]
    pub fn hasher(&self) -> &S {
        self.map.hasher()
    }

    /// Returns true if the map contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        // Inner maps are never empty, so this is equivalent to len() == 0.
        self.map.is_empty()
    }

    /// Returns the number of entries in the map, summed over all first keys.
    ///
    /// This is linear in the number of distinct first keys.
    pub fn len(&self) -> usize {
        self.map.values().map(HashMap::len).sum()
    }

    /// Iterates over the distinct first keys in the map.
    #[inline]
    pub fn keys1(&self) -> Keys1<'_, K1, K2, V, S> {
        Keys1::new(self.map.keys())
    }

    /// Iterates over the entries in the map as `(key1, key2, value)` triples.
    ///
    /// Entries sharing a first key are yielded together.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K1, K2, V, S> {
        Iter::new(self.map.iter(), self.len())
    }

    /// Iterates over the entries in the map, allowing values to be mutated in
    /// place.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K1, K2, V, S> {
        let len = self.len();
        IterMut::new(self.map.iter_mut(), len)
    }

    /// Returns a snapshot of the map's entries, one per `(key1, key2)` pair.
    ///
    /// The snapshot is independent of the map: later changes to the map are
    /// not reflected in it, and changing the returned entries doesn't affect
    /// the map. Use [`iter_mut`](Self::iter_mut) or
    /// [`get_mut`](Self::get_mut) to modify values in place.
    pub fn entries(&self) -> Vec<Entry<K1, K2, V>>
    where
        K1: Clone,
        K2: Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key1, key2, value)| {
                Entry::new(key1.clone(), key2.clone(), value.clone())
            })
            .collect()
    }

    /// Returns a snapshot of the map's values, one per entry.
    ///
    /// Equal values stored under different key pairs all appear.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, _, value)| value.clone()).collect()
    }

    /// Calls `f` on every entry of a snapshot of the map.
    ///
    /// The snapshot is taken before `f` is first called.
    pub fn for_each<F>(&self, f: F)
    where
        K1: Clone,
        K2: Clone,
        V: Clone,
        F: FnMut(Entry<K1, K2, V>),
    {
        self.entries().into_iter().for_each(f);
    }

    /// Removes all entries from the map.
    ///
    /// No existence checks are performed.
    #[inline]
    pub fn clear(&mut self) {
        self.map.clear();
    }

    /// Checks the structural invariants of the map.
    #[doc(hidden)]
    pub fn validate(&self) -> Result<(), ValidationError>
    where
        K1: fmt::Debug,
    {
        for (key1, inner) in &self.map {
            if inner.is_empty() {
                return Err(ValidationError::EmptyInnerMap {
                    key1: format!("{key1:?}"),
                });
            }
        }

        let len = self.len();
        let yielded = self.iter().count();
        if yielded != len {
            return Err(ValidationError::general(format!(
                "iter() yielded {yielded} entries, but len() is {len}"
            )));
        }

        Ok(())
    }
}

impl<K1, K2, V, S> CompositeHashMap<K1, K2, V, S>
where
    K1: Eq + Hash,
    K2: Eq + Hash,
    S: BuildHasher,
{
    /// Builds a map from the given `(key1, key2, value)` triples, failing on
    /// the first key pair that appears more than once.
    pub fn from_entries<I>(
        entries: I,
    ) -> Result<Self, KeyAlreadyExists<PairKey<K1, K2>, V>>
    where
        I: IntoIterator<Item = (K1, K2, V)>,
        V: Clone,
        S: Clone + Default,
    {
        let mut map = Self::with_hasher(S::default());
        map.put_all(entries).map_err(KeyAlreadyExists::into_owned)?;
        Ok(map)
    }

    /// Returns true if any entry has the given first key.
    #[inline]
    pub fn contains_key1<Q1>(&self, key1: &Q1) -> bool
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
    {
        self.map.contains_key(key1)
    }

    /// Returns true if any entry has the given second key, under any first
    /// key.
    ///
    /// This looks up `key2` in every inner map.
    pub fn contains_key2<Q2>(&self, key2: &Q2) -> bool
    where
        Q2: ?Sized + Hash + Equivalent<K2>,
    {
        self.map.values().any(|inner| inner.contains_key(key2))
    }

    /// Returns true if the map holds an entry for the pair `(key1, key2)`.
    #[inline]
    pub fn contains_keys<Q1, Q2>(&self, key1: &Q1, key2: &Q2) -> bool
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
        Q2: ?Sized + Hash + Equivalent<K2>,
    {
        self.map.get(key1).is_some_and(|inner| inner.contains_key(key2))
    }

    /// Returns true if any entry holds the given value.
    ///
    /// This scans every entry.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.map.values().any(|inner| inner.values().any(|v| v == value))
    }

    /// Returns the value associated with the pair `(key1, key2)`.
    ///
    /// Fails with [`KeyDoesNotExist`] naming [`PairKey::Key1`] if no entry
    /// has `key1`, or [`PairKey::Key2`] if `key1` is present but not paired
    /// with `key2`.
    pub fn get<'k, Q1, Q2>(
        &self,
        key1: &'k Q1,
        key2: &'k Q2,
    ) -> Result<&V, KeyDoesNotExist<PairKey<&'k Q1, &'k Q2>>>
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
        Q2: ?Sized + Hash + Equivalent<K2>,
    {
        let inner = self.map.get(key1).ok_or_else(|| {
            KeyDoesNotExist::__internal_new(PairKey::Key1(key1))
        })?;
        inner.get(key2).ok_or_else(|| {
            KeyDoesNotExist::__internal_new(PairKey::Key2 { key1, key2 })
        })
    }

    /// Returns a mutable reference to the value associated with the pair
    /// `(key1, key2)`.
    ///
    /// Fails in the same way as [`get`](Self::get).
    pub fn get_mut<'k, Q1, Q2>(
        &mut self,
        key1: &'k Q1,
        key2: &'k Q2,
    ) -> Result<&mut V, KeyDoesNotExist<PairKey<&'k Q1, &'k Q2>>>
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
        Q2: ?Sized + Hash + Equivalent<K2>,
    {
        let inner = self.map.get_mut(key1).ok_or_else(|| {
            KeyDoesNotExist::__internal_new(PairKey::Key1(key1))
        })?;
        inner.get_mut(key2).ok_or_else(|| {
            KeyDoesNotExist::__internal_new(PairKey::Key2 { key1, key2 })
        })
    }

    /// Inserts a new entry for the pair `(key1, key2)`.
    ///
    /// If no entry has `key1` yet, a group is created for it. Fails with
    /// [`KeyAlreadyExists`] if the pair is already present, handing back both
    /// keys and the rejected value; the map is not modified in that case.
    pub fn put(
        &mut self,
        key1: K1,
        key2: K2,
        value: V,
    ) -> Result<(), KeyAlreadyExists<PairKey<K1, K2>, V, &V>>
    where
        S: Clone,
    {
        // See `CheckedHashMap::put`: a borrow from `get` can't be returned
        // here without outliving the insert.
        if self.contains_keys(&key1, &key2) {
            let existing = &self.map[&key1][&key2];
            return Err(KeyAlreadyExists::__internal_new(
                PairKey::Key2 { key1, key2 },
                value,
                existing,
            ));
        }

        self.insert_absent(key1, key2, value);
        Ok(())
    }

    /// Inserts every `(key1, key2, value)` triple from `entries`, in
    /// iteration order.
    ///
    /// On the first pair that is already present, insertion stops and that
    /// pair's error is returned. Entries inserted before it stay in the map.
    pub fn put_all<I>(
        &mut self,
        entries: I,
    ) -> Result<(), KeyAlreadyExists<PairKey<K1, K2>, V, &V>>
    where
        I: IntoIterator<Item = (K1, K2, V)>,
        S: Clone,
    {
        for (key1, key2, value) in entries {
            if self.contains_keys(&key1, &key2) {
                let existing = &self.map[&key1][&key2];
                return Err(KeyAlreadyExists::__internal_new(
                    PairKey::Key2 { key1, key2 },
                    value,
                    existing,
                ));
            }
            self.insert_absent(key1, key2, value);
        }

        Ok(())
    }

    // The caller must have checked that the pair is absent.
    fn insert_absent(&mut self, key1: K1, key2: K2, value: V)
    where
        S: Clone,
    {
        match self.map.get_mut(&key1) {
            Some(inner) => {
                inner.insert(key2, value);
            }
            None => {
                let mut inner = HashMap::with_hasher(self.map.hasher().clone());
                inner.insert(key2, value);
                self.map.insert(key1, inner);
            }
        }
    }

    /// Replaces the value associated with the pair `(key1, key2)`, returning
    /// the previous value.
    ///
    /// Fails in the same way as [`get`](Self::get), in which case the map is
    /// not modified.
    pub fn replace<'k, Q1, Q2>(
        &mut self,
        key1: &'k Q1,
        key2: &'k Q2,
        value: V,
    ) -> Result<V, KeyDoesNotExist<PairKey<&'k Q1, &'k Q2>>>
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
        Q2: ?Sized + Hash + Equivalent<K2>,
    {
        let slot = self.get_mut(key1, key2)?;
        Ok(mem::replace(slot, value))
    }

    /// Replaces the value associated with `(key1, key2)` only if it currently
    /// equals `expected`.
    ///
    /// Returns `Ok(true)` if the value was replaced and `Ok(false)` if the
    /// current value differs. Fails in the same way as [`get`](Self::get).
    pub fn replace_if<'k, Q1, Q2>(
        &mut self,
        key1: &'k Q1,
        key2: &'k Q2,
        expected: &V,
        value: V,
    ) -> Result<bool, KeyDoesNotExist<PairKey<&'k Q1, &'k Q2>>>
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
        Q2: ?Sized + Hash + Equivalent<K2>,
        V: PartialEq,
    {
        let slot = self.get_mut(key1, key2)?;
        if *slot == *expected {
            *slot = value;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Removes the entry for the pair `(key1, key2)`, returning its value.
    ///
    /// If this was the last entry under `key1`, `key1` is removed as well.
    /// Fails in the same way as [`get`](Self::get).
    pub fn remove<'k, Q1, Q2>(
        &mut self,
        key1: &'k Q1,
        key2: &'k Q2,
    ) -> Result<V, KeyDoesNotExist<PairKey<&'k Q1, &'k Q2>>>
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
        Q2: ?Sized + Hash + Equivalent<K2>,
    {
        let inner = self.map.get_mut(key1).ok_or_else(|| {
            KeyDoesNotExist::__internal_new(PairKey::Key1(key1))
        })?;
        let value = inner.remove(key2).ok_or_else(|| {
            KeyDoesNotExist::__internal_new(PairKey::Key2 { key1, key2 })
        })?;
        if inner.is_empty() {
            self.map.remove(key1);
        }
        Ok(value)
    }

    /// Removes every entry whose first key is `key1`, returning the removed
    /// `(key2, value)` pairs in arbitrary order.
    ///
    /// Fails with [`KeyDoesNotExist`] if no entry has `key1`.
    pub fn remove_key1<'k, Q1>(
        &mut self,
        key1: &'k Q1,
    ) -> Result<Vec<(K2, V)>, KeyDoesNotExist<&'k Q1>>
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
    {
        let inner = self
            .map
            .remove(key1)
            .ok_or_else(|| KeyDoesNotExist::__internal_new(key1))?;
        Ok(inner.into_iter().collect())
    }

    /// Iterates over the `(key2, value)` pairs stored under `key1`.
    ///
    /// Fails with [`KeyDoesNotExist`] if no entry has `key1`.
    pub fn iter_key1<'k, Q1>(
        &self,
        key1: &'k Q1,
    ) -> Result<GroupIter<'_, K2, V>, KeyDoesNotExist<&'k Q1>>
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
    {
        self.map
            .get(key1)
            .map(|inner| GroupIter::new(inner.iter()))
            .ok_or_else(|| KeyDoesNotExist::__internal_new(key1))
    }

    /// Returns the number of entries stored under `key1`.
    ///
    /// Fails with [`KeyDoesNotExist`] if no entry has `key1`; otherwise the
    /// count is at least 1.
    pub fn len_key1<'k, Q1>(
        &self,
        key1: &'k Q1,
    ) -> Result<usize, KeyDoesNotExist<&'k Q1>>
    where
        Q1: ?Sized + Hash + Equivalent<K1>,
    {
        self.map
            .get(key1)
            .map(HashMap::len)
            .ok_or_else(|| KeyDoesNotExist::__internal_new(key1))
    }
}

impl<K1, K2, V, S> fmt::Debug for CompositeHashMap<K1, K2, V, S>
where
    K1: fmt::Debug,
    K2: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter().map(|(key1, key2, value)| ((key1, key2), value)),
            )
            .finish()
    }
}

impl<K1, K2, V, S> PartialEq for CompositeHashMap<K1, K2, V, S>
where
    K1: Eq + Hash,
    K2: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        // Empty inner maps never exist, so comparing the nested maps is the
        // same as comparing the sets of (key1, key2, value) triples.
        self.map == other.map
    }
}

impl<K1, K2, V, S> Eq for CompositeHashMap<K1, K2, V, S>
where
    K1: Eq + Hash,
    K2: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<'a, K1, K2, V, S> IntoIterator for &'a CompositeHashMap<K1, K2, V, S> {
    type Item = (&'a K1, &'a K2, &'a V);
    type IntoIter = Iter<'a, K1, K2, V, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K1, K2, V, S> IntoIterator for &'a mut CompositeHashMap<K1, K2, V, S> {
    type Item = (&'a K1, &'a K2, &'a mut V);
    type IntoIter = IterMut<'a, K1, K2, V, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K1: Clone, K2, V, S> IntoIterator for CompositeHashMap<K1, K2, V, S> {
    type Item = (K1, K2, V);
    type IntoIter = IntoIter<K1, K2, V, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        let len = self.len();
        IntoIter::new(self.map.into_iter(), len)
    }
}
