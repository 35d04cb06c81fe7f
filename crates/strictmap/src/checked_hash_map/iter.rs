// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use core::iter::FusedIterator;
use derive_where::derive_where;
use hashbrown::hash_map;

/// An iterator over the entries of a [`CheckedHashMap`] by shared reference.
///
/// Created by [`CheckedHashMap::iter`].
///
/// [`CheckedHashMap`]: crate::CheckedHashMap
/// [`CheckedHashMap::iter`]: crate::CheckedHashMap::iter
#[derive_where(Clone)]
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: hash_map::Iter<'a, K, V>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(inner: hash_map::Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

// hash_map::Iter is a FusedIterator, so Iter is as well.
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the entries of a [`CheckedHashMap`] by mutable reference
/// to the values.
///
/// Keys are never handed out mutably, since changing a key in place would
/// bypass the existence checks.
///
/// Created by [`CheckedHashMap::iter_mut`].
///
/// [`CheckedHashMap`]: crate::CheckedHashMap
/// [`CheckedHashMap::iter_mut`]: crate::CheckedHashMap::iter_mut
#[derive(Debug)]
pub struct IterMut<'a, K, V> {
    inner: hash_map::IterMut<'a, K, V>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(super) fn new(inner: hash_map::IterMut<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An iterator over the entries of a [`CheckedHashMap`] by ownership.
///
/// Created by [`CheckedHashMap::into_iter`].
///
/// [`CheckedHashMap`]: crate::CheckedHashMap
/// [`CheckedHashMap::into_iter`]: crate::CheckedHashMap::into_iter
#[derive(Debug)]
pub struct IntoIter<K, V> {
    inner: hash_map::IntoIter<K, V>,
}

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(inner: hash_map::IntoIter<K, V>) -> Self {
        Self { inner }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for IntoIter<K, V> {}

/// An iterator over the keys of a [`CheckedHashMap`].
///
/// Created by [`CheckedHashMap::keys`].
///
/// [`CheckedHashMap`]: crate::CheckedHashMap
/// [`CheckedHashMap::keys`]: crate::CheckedHashMap::keys
#[derive_where(Clone)]
#[derive(Debug)]
pub struct Keys<'a, K, V> {
    inner: hash_map::Keys<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(super) fn new(inner: hash_map::Keys<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`CheckedHashMap`].
///
/// Created by [`CheckedHashMap::values`].
///
/// [`CheckedHashMap`]: crate::CheckedHashMap
/// [`CheckedHashMap::values`]: crate::CheckedHashMap::values
#[derive_where(Clone)]
#[derive(Debug)]
pub struct Values<'a, K, V> {
    inner: hash_map::Values<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(super) fn new(inner: hash_map::Values<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Values<'_, K, V> {}
