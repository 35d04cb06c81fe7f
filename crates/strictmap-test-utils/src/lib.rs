// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shared fixtures for testing `strictmap`.

pub mod eq_props;
pub mod naive_map;
#[cfg(feature = "serde")]
pub mod serde_utils;
pub mod test_entry;

/// Re-exports the `serde_json` crate if the `serde` feature is enabled --
/// used by doctests.
#[cfg(feature = "serde")]
pub use serde_json;
