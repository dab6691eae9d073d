use std::collections::HashMap;

use ordered_slot_map::OrderedSlotMap;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Set(u8, i32),
    Remove(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<u8>(), any::<i32>()).prop_map(|(k, v)| Op::Set(k, v)),
        1 => any::<u8>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn set_then_get_round_trips(key in any::<u16>(), value in any::<i64>()) {
        let mut map: OrderedSlotMap<u16, i64> = OrderedSlotMap::new();
        map.set(key, value).unwrap();
        prop_assert_eq!(map.get(&key), Ok(&value));
    }

    #[test]
    fn second_set_overwrites_without_growing(key in any::<u8>(), v1 in any::<i32>(), v2 in any::<i32>()) {
        let mut map: OrderedSlotMap<u8, i32> = OrderedSlotMap::new();
        map.set(key, v1).unwrap();
        let size = map.size();
        map.set(key, v2).unwrap();
        prop_assert_eq!(map.size(), size);
        prop_assert_eq!(map.get(&key), Ok(&v2));
    }

    #[test]
    fn behaves_like_a_hash_map(ops in prop::collection::vec(op(), 0..200)) {
        let mut map: OrderedSlotMap<u8, i32> = OrderedSlotMap::new();
        let mut model = HashMap::new();

        for op in ops {
            match op {
                Op::Set(k, v) => {
                    map.set(k, v).unwrap();
                    model.insert(k, v);
                }
                Op::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), model.remove(&k));
                }
            }
        }

        prop_assert_eq!(map.size(), model.len());
        prop_assert!(map.capacity() >= map.size());
        prop_assert!(map.capacity().is_power_of_two());
        for (k, v) in &model {
            prop_assert_eq!(map.get(k), Ok(v));
        }
        for (k, _) in map.iter() {
            prop_assert!(model.contains_key(k));
        }
    }

    #[test]
    fn clone_renders_identically(entries in prop::collection::vec((any::<u8>(), any::<i16>()), 0..64)) {
        let map: OrderedSlotMap<u8, i16> = entries.into_iter().collect();
        let cloned = map.clone();
        prop_assert_eq!(map.to_string(), cloned.to_string());
        prop_assert_eq!(&map, &cloned);
    }

    #[test]
    fn absent_keys_are_absent(keys in prop::collection::hash_set(0u8..100, 0..50), probe in 100u8..=255) {
        let mut map: OrderedSlotMap<u8, ()> = OrderedSlotMap::new();
        for k in keys {
            map.set(k, ()).unwrap();
        }
        let size = map.size();

        prop_assert!(map.get(&probe).is_err());
        prop_assert!(!map.has_key(&probe));
        prop_assert_eq!(map.remove(&probe), None);
        prop_assert_eq!(map.size(), size);
    }
}
