// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for this crate.
//!
//! These types are shared across all map implementations in this crate. Every
//! failure is a violated precondition on key presence:
//!
//! * [`KeyAlreadyExists`] is returned when an insert targets a key that is
//!   already present.
//! * [`KeyDoesNotExist`] is returned when a lookup, removal or replacement
//!   targets a key that is absent.
//!
//! [`MapArgumentError`] unifies the two for callers that want a single error
//! type.

use alloc::borrow::ToOwned;
use core::fmt;

/// Identifies which level of a [`CompositeHashMap`] a key check failed at.
///
/// [`CompositeHashMap`]: crate::CompositeHashMap
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum PairKey<K1, K2> {
    /// The first key, checked against the outer map.
    Key1(K1),

    /// The second key, checked against the inner map belonging to `key1`.
    Key2 {
        /// The first key, identifying the inner map that was consulted.
        key1: K1,
        /// The second key.
        key2: K2,
    },
}

impl<K1, K2> PairKey<K1, K2> {
    /// Returns the first key.
    ///
    /// This is always available: either the first key was the one that
    /// failed, or it names the inner map the second key was checked against.
    #[inline]
    pub fn key1(&self) -> &K1 {
        match self {
            PairKey::Key1(key1) | PairKey::Key2 { key1, .. } => key1,
        }
    }

    /// Returns the second key, if the check failed at the inner level.
    #[inline]
    pub fn key2(&self) -> Option<&K2> {
        match self {
            PairKey::Key1(_) => None,
            PairKey::Key2 { key2, .. } => Some(key2),
        }
    }

    /// Returns true if the check failed against the outer map.
    #[inline]
    pub fn is_key1(&self) -> bool {
        matches!(self, PairKey::Key1(_))
    }
}

impl<Q1, Q2> PairKey<&Q1, &Q2>
where
    Q1: ?Sized + ToOwned,
    Q2: ?Sized + ToOwned,
{
    /// Converts borrowed keys into their owned forms.
    pub fn into_owned(self) -> PairKey<Q1::Owned, Q2::Owned> {
        match self {
            PairKey::Key1(key1) => PairKey::Key1(key1.to_owned()),
            PairKey::Key2 { key1, key2 } => PairKey::Key2 {
                key1: key1.to_owned(),
                key2: key2.to_owned(),
            },
        }
    }
}

/// An insert targeted a key that is already present.
///
/// The rejected value is handed back to the caller along with the key, so
/// nothing is lost on failure. The value already stored in the map is
/// available through [`existing`](Self::existing); by default it is borrowed
/// from the map, and [`into_owned`](KeyAlreadyExists::into_owned) clones it
/// out.
#[derive(Debug)]
pub struct KeyAlreadyExists<K, V, E = V> {
    key: K,
    new_value: V,
    existing: E,
}

impl<K, V, E> KeyAlreadyExists<K, V, E> {
    /// Creates a new `KeyAlreadyExists` error.
    #[doc(hidden)]
    pub fn __internal_new(key: K, new_value: V, existing: E) -> Self {
        KeyAlreadyExists { key, new_value, existing }
    }

    /// Returns the key that collided.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value that was attempted to be inserted.
    #[inline]
    pub fn new_value(&self) -> &V {
        &self.new_value
    }

    /// Returns the value already associated with the key.
    #[inline]
    pub fn existing(&self) -> &E {
        &self.existing
    }

    /// Converts self into its constituent parts: the key, the rejected value
    /// and the existing value.
    pub fn into_parts(self) -> (K, V, E) {
        (self.key, self.new_value, self.existing)
    }
}

impl<K, V: Clone> KeyAlreadyExists<K, V, &V> {
    /// Converts self to an owned `KeyAlreadyExists` by cloning the existing
    /// value.
    ///
    /// If `K` and `V` are `'static`, the owned form is suitable for conversion
    /// to `Box<dyn std::error::Error>`, `anyhow::Error`, and so on.
    pub fn into_owned(self) -> KeyAlreadyExists<K, V> {
        KeyAlreadyExists {
            key: self.key,
            new_value: self.new_value,
            existing: self.existing.clone(),
        }
    }
}

impl<K: fmt::Debug, V, E: fmt::Debug> fmt::Display
    for KeyAlreadyExists<K, V, E>
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "key {:?} already exists with value {:?}",
            self.key, self.existing
        )
    }
}

impl<K: fmt::Debug, V: fmt::Debug, E: fmt::Debug> core::error::Error
    for KeyAlreadyExists<K, V, E>
{
}

/// A lookup, removal or replacement targeted a key that is absent.
///
/// For single-key maps, `K` is the key as passed in by the caller. For
/// composite maps, `K` is a [`PairKey`] naming the first level at which the
/// lookup missed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyDoesNotExist<K> {
    key: K,
}

impl<K> KeyDoesNotExist<K> {
    /// Creates a new `KeyDoesNotExist` error.
    #[doc(hidden)]
    pub fn __internal_new(key: K) -> Self {
        KeyDoesNotExist { key }
    }

    /// Returns the key that was not found.
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Consumes self, returning the key that was not found.
    #[inline]
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<Q: ?Sized + ToOwned> KeyDoesNotExist<&Q> {
    /// Converts self to an owned `KeyDoesNotExist`, so that it no longer
    /// borrows from the caller's key.
    pub fn into_owned(self) -> KeyDoesNotExist<Q::Owned> {
        KeyDoesNotExist { key: self.key.to_owned() }
    }
}

impl<Q1, Q2> KeyDoesNotExist<PairKey<&Q1, &Q2>>
where
    Q1: ?Sized + ToOwned,
    Q2: ?Sized + ToOwned,
{
    /// Converts self to an owned `KeyDoesNotExist`, so that it no longer
    /// borrows from the caller's keys.
    pub fn into_owned(
        self,
    ) -> KeyDoesNotExist<PairKey<Q1::Owned, Q2::Owned>> {
        KeyDoesNotExist { key: self.key.into_owned() }
    }
}

impl<K: fmt::Debug> fmt::Display for KeyDoesNotExist<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "key {:?} does not exist", self.key)
    }
}

impl<K: fmt::Debug> core::error::Error for KeyDoesNotExist<K> {}

/// An argument passed to a map violated its existence contract.
///
/// Maps return the specific error types directly; this enum exists so that
/// code driving several operations can propagate either kind with `?`.
#[derive(Debug)]
pub enum MapArgumentError<K, V, E = V> {
    /// See [`KeyAlreadyExists`].
    AlreadyExists(KeyAlreadyExists<K, V, E>),

    /// See [`KeyDoesNotExist`].
    DoesNotExist(KeyDoesNotExist<K>),
}

impl<K, V, E> MapArgumentError<K, V, E> {
    /// Returns the key that violated the contract.
    pub fn key(&self) -> &K {
        match self {
            MapArgumentError::AlreadyExists(error) => error.key(),
            MapArgumentError::DoesNotExist(error) => error.key(),
        }
    }
}

impl<K, V, E> From<KeyAlreadyExists<K, V, E>> for MapArgumentError<K, V, E> {
    fn from(error: KeyAlreadyExists<K, V, E>) -> Self {
        MapArgumentError::AlreadyExists(error)
    }
}

impl<K, V, E> From<KeyDoesNotExist<K>> for MapArgumentError<K, V, E> {
    fn from(error: KeyDoesNotExist<K>) -> Self {
        MapArgumentError::DoesNotExist(error)
    }
}

impl<K: fmt::Debug, V, E: fmt::Debug> fmt::Display
    for MapArgumentError<K, V, E>
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MapArgumentError::AlreadyExists(error) => error.fmt(f),
            MapArgumentError::DoesNotExist(error) => error.fmt(f),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, E: fmt::Debug> core::error::Error
    for MapArgumentError<K, V, E>
{
}
