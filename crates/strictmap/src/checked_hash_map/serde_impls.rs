// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::CheckedHashMap;
use core::{
    fmt,
    hash::{BuildHasher, Hash},
    marker::PhantomData,
};
use serde_core::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// A `CheckedHashMap` serializes as a map, in arbitrary order.
impl<K, V, S> Serialize for CheckedHashMap<K, V, S>
where
    K: Serialize,
    V: Serialize,
{
    fn serialize<Ser: Serializer>(
        &self,
        serializer: Ser,
    ) -> Result<Ser::Ok, Ser::Error> {
        serializer.collect_map(self.iter())
    }
}

/// The `Deserialize` impl for `CheckedHashMap` inserts every entry through
/// [`CheckedHashMap::put`], producing an error if a key appears more than
/// once.
///
/// The `fmt::Debug` bounds ensure better error reporting.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "default-hasher")] {
/// use strictmap::CheckedHashMap;
/// # use strictmap_test_utils::serde_json;
///
/// let map: CheckedHashMap<String, u32> =
///     serde_json::from_str(r#"{"a": 1, "b": 2}"#).unwrap();
/// assert_eq!(map.get("b"), Ok(&2));
///
/// // A JSON object with a repeated key is rejected.
/// let error = serde_json::from_str::<CheckedHashMap<String, u32>>(
///     r#"{"a": 1, "a": 2}"#,
/// )
/// .unwrap_err();
/// assert!(error.to_string().contains("already exists"));
/// # }
/// ```
impl<'de, K, V, S> Deserialize<'de> for CheckedHashMap<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash + fmt::Debug,
    V: Deserialize<'de> + fmt::Debug,
    S: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        deserializer.deserialize_map(MapVisitor { _marker: PhantomData })
    }
}

struct MapVisitor<K, V, S> {
    _marker: PhantomData<fn() -> CheckedHashMap<K, V, S>>,
}

impl<'de, K, V, S> Visitor<'de> for MapVisitor<K, V, S>
where
    K: Deserialize<'de> + Eq + Hash + fmt::Debug,
    V: Deserialize<'de> + fmt::Debug,
    S: BuildHasher + Default,
{
    type Value = CheckedHashMap<K, V, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<Access>(
        self,
        mut access: Access,
    ) -> Result<Self::Value, Access::Error>
    where
        Access: MapAccess<'de>,
    {
        let mut map = match access.size_hint() {
            Some(size) => {
                CheckedHashMap::with_capacity_and_hasher(size, S::default())
            }
            None => CheckedHashMap::with_hasher(S::default()),
        };

        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value).map_err(serde_core::de::Error::custom)?;
        }

        Ok(map)
    }
}
