//! # Ordered Slot Map
//!
//! An associative array backed by a plain, linearly scanned slot buffer instead of a hash
//! table.
//!
//! `OrderedSlotMap<K, V>` only needs `K: Eq`. Keys are never hashed or ordered; every lookup
//! walks the live entries from the front. That makes every keyed operation $O(N)$, which is the
//! whole trade: no hasher, no tree, no per-entry bookkeeping, just a contiguous run of slots.
//!
//! ## Key Features
//!
//! * **Dense Storage:** Live entries always occupy slots `[0, size)`. Nothing past `size` is
//!   ever read.
//! * **Doubling Growth:** Starts with 16 slots and doubles when a new key would not fit.
//!   Capacity never shrinks.
//! * **Swap-Compaction:** Removal moves the last live entry into the gap. Removal is $O(1)$
//!   after the search, at the cost of reordering.
//! * **Null Keys:** The nullable surface is expressed with `Option`. `set(None, v)` fails with
//!   [`NullKeyError`]; `get(None)` fails with [`KeyNotFoundError`]; `has_key(None)` and
//!   `remove(None)` treat the null key as absent.
//!
//! ## Cargo Features
//!
//! * `serde`: `Serialize`/`Deserialize` as a map, in storage order.
//!
//! ## Example
//!
//! ```rust
//! use ordered_slot_map::OrderedSlotMap;
//!
//! let mut map: OrderedSlotMap<&str, i32> = OrderedSlotMap::new();
//! map.set("x", 1).unwrap();
//! map.set("y", 2).unwrap();
//! map.set("z", 3).unwrap();
//! assert_eq!(map.to_string(), "{x:1, y:2, z:3}");
//!
//! // "z" is moved into the slot "x" used to occupy.
//! map.remove(&"x");
//! assert_eq!(map.to_string(), "{z:3, y:2}");
//! assert_eq!(map.size(), 2);
//!
//! let err = map.get(&"x").unwrap_err();
//! assert_eq!(err.to_string(), "Key 'x' is missing");
//! ```

// --- Module Declarations ---

pub mod error;
pub mod iter;
pub mod map;
mod serde_impl;

// --- Re-exports ---

pub use error::{Error, KeyNotFoundError, NullKeyError, Result};
pub use map::OrderedSlotMap;
