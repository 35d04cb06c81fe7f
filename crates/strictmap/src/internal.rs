// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Internal consistency checks, exposed for tests.

use alloc::string::String;
use core::fmt;

/// A structural invariant of a map did not hold.
#[derive(Debug)]
pub enum ValidationError {
    /// An outer key of a composite map maps to an empty inner map.
    EmptyInnerMap {
        /// The `Debug` rendering of the outer key.
        key1: String,
    },
    /// Any other violated invariant.
    General(String),
}

impl ValidationError {
    pub(crate) fn general(msg: impl Into<String>) -> Self {
        ValidationError::General(msg.into())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInnerMap { key1 } => {
                write!(f, "outer key {key1} maps to an empty inner map")
            }
            Self::General(msg) => msg.fmt(f),
        }
    }
}

impl core::error::Error for ValidationError {}
