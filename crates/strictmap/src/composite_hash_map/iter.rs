// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::{fmt, iter::FusedIterator};
use derive_where::derive_where;
use hashbrown::{hash_map, HashMap};

/// An iterator over the entries of a [`CompositeHashMap`] by shared
/// reference.
///
/// Entries sharing a `key1` are yielded consecutively; otherwise the order is
/// arbitrary.
///
/// Created by [`CompositeHashMap::iter`].
///
/// [`CompositeHashMap`]: crate::CompositeHashMap
/// [`CompositeHashMap::iter`]: crate::CompositeHashMap::iter
#[derive_where(Clone)]
#[derive_where(Debug; K1: fmt::Debug, K2: fmt::Debug, V: fmt::Debug)]
pub struct Iter<'a, K1, K2, V, S> {
    outer: hash_map::Iter<'a, K1, HashMap<K2, V, S>>,
    inner: Option<(&'a K1, hash_map::Iter<'a, K2, V>)>,
    // Entries not yet yielded, across all inner maps.
    remaining: usize,
}

impl<'a, K1, K2, V, S> Iter<'a, K1, K2, V, S> {
    pub(super) fn new(
        outer: hash_map::Iter<'a, K1, HashMap<K2, V, S>>,
        len: usize,
    ) -> Self {
        Self { outer, inner: None, remaining: len }
    }
}

impl<'a, K1, K2, V, S> Iterator for Iter<'a, K1, K2, V, S> {
    type Item = (&'a K1, &'a K2, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key1, inner)) = &mut self.inner {
                if let Some((key2, value)) = inner.next() {
                    self.remaining -= 1;
                    return Some((*key1, key2, value));
                }
            }
            let (key1, inner) = self.outer.next()?;
            self.inner = Some((key1, inner.iter()));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K1, K2, V, S> ExactSizeIterator for Iter<'_, K1, K2, V, S> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

// Both levels are hash_map iterators, which are fused, so Iter is as well.
impl<K1, K2, V, S> FusedIterator for Iter<'_, K1, K2, V, S> {}

/// An iterator over the entries of a [`CompositeHashMap`] by mutable
/// reference to the values.
///
/// Created by [`CompositeHashMap::iter_mut`].
///
/// [`CompositeHashMap`]: crate::CompositeHashMap
/// [`CompositeHashMap::iter_mut`]: crate::CompositeHashMap::iter_mut
#[derive_where(Debug; K1: fmt::Debug, K2: fmt::Debug, V: fmt::Debug)]
pub struct IterMut<'a, K1, K2, V, S> {
    outer: hash_map::IterMut<'a, K1, HashMap<K2, V, S>>,
    inner: Option<(&'a K1, hash_map::IterMut<'a, K2, V>)>,
    remaining: usize,
}

impl<'a, K1, K2, V, S> IterMut<'a, K1, K2, V, S> {
    pub(super) fn new(
        outer: hash_map::IterMut<'a, K1, HashMap<K2, V, S>>,
        len: usize,
    ) -> Self {
        Self { outer, inner: None, remaining: len }
    }
}

impl<'a, K1, K2, V, S> Iterator for IterMut<'a, K1, K2, V, S> {
    type Item = (&'a K1, &'a K2, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key1, inner)) = &mut self.inner {
                if let Some((key2, value)) = inner.next() {
                    self.remaining -= 1;
                    return Some((*key1, key2, value));
                }
            }
            let (key1, inner) = self.outer.next()?;
            self.inner = Some((key1, inner.iter_mut()));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K1, K2, V, S> ExactSizeIterator for IterMut<'_, K1, K2, V, S> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K1, K2, V, S> FusedIterator for IterMut<'_, K1, K2, V, S> {}

/// An iterator over the entries of a [`CompositeHashMap`] by ownership.
///
/// Each `key1` is cloned once per entry stored under it.
///
/// Created by [`CompositeHashMap::into_iter`].
///
/// [`CompositeHashMap`]: crate::CompositeHashMap
/// [`CompositeHashMap::into_iter`]: crate::CompositeHashMap::into_iter
#[derive_where(Debug; K1: fmt::Debug, K2: fmt::Debug, V: fmt::Debug)]
pub struct IntoIter<K1, K2, V, S> {
    outer: hash_map::IntoIter<K1, HashMap<K2, V, S>>,
    inner: Option<(K1, hash_map::IntoIter<K2, V>)>,
    remaining: usize,
}

impl<K1, K2, V, S> IntoIter<K1, K2, V, S> {
    pub(super) fn new(
        outer: hash_map::IntoIter<K1, HashMap<K2, V, S>>,
        len: usize,
    ) -> Self {
        Self { outer, inner: None, remaining: len }
    }
}

impl<K1: Clone, K2, V, S> Iterator for IntoIter<K1, K2, V, S> {
    type Item = (K1, K2, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key1, inner)) = &mut self.inner {
                if let Some((key2, value)) = inner.next() {
                    self.remaining -= 1;
                    return Some((key1.clone(), key2, value));
                }
            }
            let (key1, inner) = self.outer.next()?;
            self.inner = Some((key1, inner.into_iter()));
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K1: Clone, K2, V, S> ExactSizeIterator for IntoIter<K1, K2, V, S> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K1: Clone, K2, V, S> FusedIterator for IntoIter<K1, K2, V, S> {}

/// An iterator over the distinct first keys of a [`CompositeHashMap`].
///
/// Created by [`CompositeHashMap::keys1`].
///
/// [`CompositeHashMap`]: crate::CompositeHashMap
/// [`CompositeHashMap::keys1`]: crate::CompositeHashMap::keys1
#[derive_where(Clone)]
#[derive_where(Debug; K1: fmt::Debug, K2: fmt::Debug, V: fmt::Debug)]
pub struct Keys1<'a, K1, K2, V, S> {
    inner: hash_map::Keys<'a, K1, HashMap<K2, V, S>>,
}

impl<'a, K1, K2, V, S> Keys1<'a, K1, K2, V, S> {
    pub(super) fn new(
        inner: hash_map::Keys<'a, K1, HashMap<K2, V, S>>,
    ) -> Self {
        Self { inner }
    }
}

impl<'a, K1, K2, V, S> Iterator for Keys1<'a, K1, K2, V, S> {
    type Item = &'a K1;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K1, K2, V, S> ExactSizeIterator for Keys1<'_, K1, K2, V, S> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K1, K2, V, S> FusedIterator for Keys1<'_, K1, K2, V, S> {}

/// An iterator over the `(key2, value)` entries stored under one `key1`.
///
/// Created by [`CompositeHashMap::iter_key1`].
///
/// [`CompositeHashMap::iter_key1`]: crate::CompositeHashMap::iter_key1
#[derive_where(Clone)]
#[derive_where(Debug; K2: fmt::Debug, V: fmt::Debug)]
pub struct GroupIter<'a, K2, V> {
    inner: hash_map::Iter<'a, K2, V>,
}

impl<'a, K2, V> GroupIter<'a, K2, V> {
    pub(super) fn new(inner: hash_map::Iter<'a, K2, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K2, V> Iterator for GroupIter<'a, K2, V> {
    type Item = (&'a K2, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K2, V> ExactSizeIterator for GroupIter<'_, K2, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K2, V> FusedIterator for GroupIter<'_, K2, V> {}
