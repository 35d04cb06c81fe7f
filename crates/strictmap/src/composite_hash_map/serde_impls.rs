// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::CompositeHashMap;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};
use serde_core::{
    de::{SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A `CompositeHashMap` serializes as a sequence of `(key1, key2, value)`
/// triples, in arbitrary order.
///
/// Composite keys can't be represented as keys of a JSON object, so a
/// sequence is used for all formats.
impl<K1, K2, V, S> Serialize for CompositeHashMap<K1, K2, V, S>
where
    K1: Serialize,
    K2: Serialize,
    V: Serialize,
{
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// The `Deserialize` impl for `CompositeHashMap` inserts every triple through
/// [`CompositeHashMap::put`], producing an error if a key pair appears more
/// than once.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use strictmap::CompositeHashMap;
/// # use strictmap_test_utils::serde_json;
///
/// let map: CompositeHashMap<String, String, u32> = serde_json::from_str(
///     r#"[["a", "x", 1], ["a", "y", 2], ["b", "x", 3]]"#,
/// )
/// .unwrap();
/// assert_eq!(map.len(), 3);
/// assert_eq!(map.get("a", "y"), Ok(&2));
///
/// let error = serde_json::from_str::<CompositeHashMap<String, String, u32>>(
///     r#"[["a", "x", 1], ["a", "x", 2]]"#,
/// )
/// .unwrap_err();
/// assert!(error.to_string().contains("already exists"));
/// # }
/// ```
impl<'de, K1, K2, V, S> Deserialize<'de> for CompositeHashMap<K1, K2, V, S>
where
    K1: Deserialize<'de> + Eq + Hash + fmt::Debug,
    K2: Deserialize<'de> + Eq + Hash + fmt::Debug,
    V: Deserialize<'de> + fmt::Debug,
    S: Clone + BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor { _marker: PhantomData })
    }
}

struct SeqVisitor<K1, K2, V, S> {
    _marker: PhantomData<fn() -> CompositeHashMap<K1, K2, V, S>>,
}

impl<'de, K1, K2, V, S> Visitor<'de> for SeqVisitor<K1, K2, V, S>
where
    K1: Deserialize<'de> + Eq + Hash + fmt::Debug,
    K2: Deserialize<'de> + Eq + Hash + fmt::Debug,
    V: Deserialize<'de> + fmt::Debug,
    S: Clone + BuildHasher + Default,
{
    type Value = CompositeHashMap<K1, K2, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of (key1, key2, value) triples")
    }

    fn visit_seq<Access>(
        self,
        mut access: Access,
    ) -> Result<Self::Value, Access::Error>
    where
        Access: SeqAccess<'de>,
    {
        // The size hint counts entries, not distinct first keys, so it's
        // only used as an upper bound on the outer map's capacity.
        let mut map = match access.size_hint() {
            Some(size) => {
                CompositeHashMap::with_capacity_and_hasher(size, S::default())
            }
            None => CompositeHashMap::with_hasher(S::default()),
        };

        while let Some((key1, key2, value)) =
            access.next_element::<(K1, K2, V)>()?
        {
            map.put(key1, key2, value).map_err(serde_core::de::Error::custom)?;
        }

        Ok(map)
    }
}
