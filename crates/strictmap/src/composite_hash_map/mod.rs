// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A hash map addressed by two independent keys.
//!
//! A [`CompositeHashMap`] associates each `(key1, key2)` pair with one value.
//! It is stored as an outer map from `key1` to inner maps from `key2` to the
//! value, so lookups by the full pair are two hash lookups, and all entries
//! sharing a `key1` can be visited or removed together. Lookups by `key2`
//! alone, or by value, scan every inner map.

mod entry;
pub(crate) mod imp;
mod iter;
#[cfg(feature = "proptest")]
mod proptest_impls;
#[cfg(feature = "serde")]
mod serde_impls;

pub use entry::Entry;
pub use imp::CompositeHashMap;
pub use iter::{GroupIter, IntoIter, Iter, IterMut, Keys1};
