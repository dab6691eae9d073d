#![cfg(feature = "serde")]
//! `serde` support, enabled by the `serde` feature.
//!
//! A map serializes as a plain map in storage order. Deserializing replays each entry through
//! [`insert`](crate::OrderedSlotMap::insert), so a later duplicate key overwrites an earlier one.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::OrderedSlotMap;

impl<K: Serialize, V: Serialize> Serialize for OrderedSlotMap<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

impl<'de, K, V> Deserialize<'de> for OrderedSlotMap<K, V>
where
    K: Deserialize<'de> + Eq,
    V: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SlotMapVisitor(PhantomData))
    }
}

struct SlotMapVisitor<K, V>(PhantomData<fn() -> OrderedSlotMap<K, V>>);

impl<'de, K, V> Visitor<'de> for SlotMapVisitor<K, V>
where
    K: Deserialize<'de> + Eq,
    V: Deserialize<'de>,
{
    type Value = OrderedSlotMap<K, V>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedSlotMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use crate::OrderedSlotMap;

    #[test]
    fn test_serialize_in_storage_order() {
        let mut map: OrderedSlotMap<String, i32> = OrderedSlotMap::new();
        map.set("x".to_string(), 1).unwrap();
        map.set("y".to_string(), 2).unwrap();
        map.set("z".to_string(), 3).unwrap();
        map.remove(&"x".to_string());

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"z":3,"y":2}"#);
    }

    #[test]
    fn test_deserialize_replays_entries() {
        let map: OrderedSlotMap<String, i32> =
            serde_json::from_str(r#"{"a":1,"b":2,"a":3}"#).unwrap();
        assert_eq!(map.size(), 2);
        assert_eq!(map.to_string(), "{a:3, b:2}");
    }

    #[test]
    fn test_deserialize_rejects_non_map() {
        let result: Result<OrderedSlotMap<String, i32>, _> = serde_json::from_str("[1, 2]");
        assert!(result.is_err());
    }
}
