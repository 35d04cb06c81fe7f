// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A hash map where inserts require absence and lookups require presence.

mod entry;
pub(crate) mod imp;
mod iter;
#[cfg(feature = "proptest")]
mod proptest_impls;
#[cfg(feature = "serde")]
mod serde_impls;

pub use entry::Entry;
pub use imp::CheckedHashMap;
pub use iter::{IntoIter, Iter, IterMut, Keys, Values};
