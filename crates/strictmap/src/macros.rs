// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Macros for this crate.

/// Creates a [`CheckedHashMap`](crate::CheckedHashMap) from a list of
/// key-value pairs.
///
/// An optional hasher may be given first, followed by a semicolon.
///
/// # Panics
///
/// Panics if a key appears more than once.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use strictmap::checked_hash_map;
///
/// let map = checked_hash_map! {
///     "alpha" => 1,
///     "beta" => 2,
/// };
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get("beta"), Ok(&2));
/// # }
/// ```
#[macro_export]
macro_rules! checked_hash_map {
    ($hasher:expr; $($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::CheckedHashMap::with_hasher($hasher);
        $(
            if let Err(error) = map.put($key, $value) {
                panic!("checked_hash_map!: {}", error);
            }
        )*
        map
    }};
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::CheckedHashMap::new();
        $(
            if let Err(error) = map.put($key, $value) {
                panic!("checked_hash_map!: {}", error);
            }
        )*
        map
    }};
}

/// Creates a [`CompositeHashMap`](crate::CompositeHashMap) from a list of
/// `(key1, key2) => value` entries.
///
/// An optional hasher may be given first, followed by a semicolon.
///
/// # Panics
///
/// Panics if a key pair appears more than once.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use strictmap::composite_hash_map;
///
/// let map = composite_hash_map! {
///     ("a", "x") => 1,
///     ("a", "y") => 2,
///     ("b", "x") => 3,
/// };
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get("a", "y"), Ok(&2));
/// # }
/// ```
#[macro_export]
macro_rules! composite_hash_map {
    ($hasher:expr; $(($key1:expr, $key2:expr) => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::CompositeHashMap::with_hasher($hasher);
        $(
            if let Err(error) = map.put($key1, $key2, $value) {
                panic!("composite_hash_map!: {}", error);
            }
        )*
        map
    }};
    ($(($key1:expr, $key2:expr) => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::CompositeHashMap::new();
        $(
            if let Err(error) = map.put($key1, $key2, $value) {
                panic!("composite_hash_map!: {}", error);
            }
        )*
        map
    }};
}
