// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hash maps that check key presence instead of silently overwriting.
//!
//! # Motivation
//!
//! A typical map treats insertion of an existing key as an update, and lookup
//! of a missing key as an ordinary `None`:
//!
//! ```
//! use std::collections::HashMap;
//!
//! let mut handlers: HashMap<&str, u32> = HashMap::new();
//! handlers.insert("on_click", 1);
//!
//! // Registered twice by accident: the first handler is silently lost.
//! handlers.insert("on_click", 2);
//! ```
//!
//! In many programs, though, a duplicate registration or a lookup with a stale
//! key is a logic error, and it's best caught at the point where it happens.
//! The maps in this crate make key presence an explicit contract:
//!
//! * inserting with [`put`](CheckedHashMap::put) requires the key to be
//!   absent, and fails with [`KeyAlreadyExists`](errors::KeyAlreadyExists)
//!   otherwise;
//! * [`get`](CheckedHashMap::get), [`remove`](CheckedHashMap::remove) and
//!   [`replace`](CheckedHashMap::replace) require the key to be present, and
//!   fail with [`KeyDoesNotExist`](errors::KeyDoesNotExist) otherwise.
//!
//! ```
//! # #[cfg(feature = "default-hasher")] {
//! use strictmap::CheckedHashMap;
//!
//! let mut handlers = CheckedHashMap::new();
//! handlers.put("on_click", 1).unwrap();
//!
//! let error = handlers.put("on_click", 2).unwrap_err();
//! assert_eq!(*error.existing(), &1);
//! assert_eq!(handlers.get("on_click"), Ok(&1));
//! assert!(handlers.get("on_hover").is_err());
//! # }
//! ```
//!
//! # Maps
//!
//! * [`CheckedHashMap`]: a single key per value.
//! * [`CompositeHashMap`]: two independent keys that together identify a
//!   value, stored as a map of maps so that entries can also be accessed in
//!   groups sharing the first key.
//!
//! # Features
//!
//! * `std` (enabled by default): link against the standard library. Without
//!   it, this crate is `no_std` and requires `alloc`.
//! * `default-hasher` (enabled by default): use [`foldhash`] as the default
//!   hasher, and enable `new` and `with_capacity` constructors.
//! * `serde`: implement `Serialize` and `Deserialize` for both maps.
//!   Deserialization rejects duplicate keys.
//! * `proptest`: implement `proptest::arbitrary::Arbitrary` for both maps.
//!
//! [`foldhash`]: https://docs.rs/foldhash

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]

extern crate alloc;

pub mod checked_hash_map;
pub mod composite_hash_map;
pub mod errors;
#[doc(hidden)]
pub mod internal;
mod macros;
mod support;

pub use checked_hash_map::CheckedHashMap;
pub use composite_hash_map::CompositeHashMap;
pub use support::hash_builder::DefaultHashBuilder;
