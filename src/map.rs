use core::fmt;
use core::mem;
use core::ops::Index;

use tracing::{debug, trace};

use crate::error::{KeyNotFoundError, NullKeyError};
use crate::iter::{IntoIter, Iter, IterMut, Keys, Values};

/// An associative array backed by a linearly scanned slot buffer.
///
/// # Architecture & Pseudocode
/// Entries live in a `Vec<Option<(K, V)>>` whose length is the map's capacity. A separate
/// `size` counter marks the live region: slots `[0, size)` always hold an entry, slots
/// `[size, capacity)` are always empty. Lookups compare keys one by one, so every keyed
/// operation is $O(N)$. There is no hashing and no ordering requirement on `K`, only `Eq`.
///
/// ## Set Algorithm
/// ```text
/// 1. If key is null, return Err(NullKeyError).
/// 2. Scan slots [0, size) for an equal key.
/// 3. If found at `idx`, overwrite the value in place.
/// 4. Else:
///    a. If size == capacity, double capacity (existing slots keep their indices).
///    b. Write (key, value) into slot `size`, then size += 1.
/// ```
///
/// ## Remove Algorithm (Swap-Compaction)
/// ```text
/// 1. Scan slots [0, size) for an equal key. If absent, do nothing.
/// 2. If found at `idx`:
///    a. If idx == size - 1, empty that slot.
///    b. Else move the entry at size - 1 into `idx` and empty slot size - 1.
///    c. size -= 1.
/// ```
/// Removal is $O(1)$ after the search but reorders entries: the last live entry takes the
/// removed entry's position. Callers must not rely on insertion order or stable indices.
///
/// # Null Keys
/// Rust has no null references, so the nullable surface uses `Option`. [`set`](Self::set)
/// accepts anything convertible into `Option<K>` and [`get`](Self::get),
/// [`has_key`](Self::has_key) and [`remove`](Self::remove) accept anything convertible into
/// `Option<&K>`. Passing a plain key converts to `Some`; passing `None` is the null key.
pub struct OrderedSlotMap<K, V> {
    slots: Vec<Option<(K, V)>>,
    size: usize,
}

// --- 1. Core Implementation ---

impl<K, V> OrderedSlotMap<K, V> {
    /// Capacity of a freshly constructed map.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Creates an empty map with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) empty slots.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty map with room for `capacity` entries before the first doubling.
    ///
    /// A requested capacity of zero is raised to one so that doubling always makes progress.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity.max(1), || None);
        Self { slots, size: 0 }
    }

    /// Returns the number of live entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Same as [`size`](Self::size).
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the number of slots, live or empty. Only ever grows, by doubling.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every entry. The slot buffer keeps its capacity.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.size] {
            *slot = None;
        }
        self.size = 0;
    }

    /// Iterates over `(key, value)` pairs in current storage order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.slots[..self.size])
    }

    /// Iterates over `(key, &mut value)` pairs in current storage order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(&mut self.slots[..self.size])
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Doubles the slot buffer. Live entries keep their indices; the new half is empty.
    fn expand(&mut self) {
        let old_capacity = self.slots.len();
        let new_capacity = old_capacity * 2;
        trace!(old_capacity, new_capacity, "expanding slot buffer");
        self.slots.resize_with(new_capacity, || None);
    }
}

impl<K: Eq, V> OrderedSlotMap<K, V> {
    /// Associates `value` with `key`.
    ///
    /// An existing key has its value overwritten in place. A new key is appended at the end of
    /// the live region, doubling capacity first if every slot is taken.
    ///
    /// # Errors
    /// Returns [`NullKeyError`] if `key` is `None`. The map is not modified.
    ///
    /// # Example
    /// ```rust
    /// use ordered_slot_map::OrderedSlotMap;
    ///
    /// let mut map: OrderedSlotMap<&str, i32> = OrderedSlotMap::new();
    /// map.set("x", 1).unwrap();
    /// map.set("x", 2).unwrap();
    /// assert_eq!(map.get(&"x"), Ok(&2));
    /// assert!(map.set(None, 3).is_err());
    /// ```
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> Result<(), NullKeyError> {
        let Some(key) = key.into() else {
            debug!("rejected null key");
            return Err(NullKeyError);
        };
        self.insert(key, value);
        Ok(())
    }

    /// Non-nullable form of [`set`](Self::set), returning the previous value if the key was
    /// already present.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(idx) = self.find(Some(&key)) {
            return self.slots[idx]
                .as_mut()
                .map(|(_, stored)| mem::replace(stored, value));
        }

        if self.size == self.slots.len() {
            self.expand();
        }
        self.slots[self.size] = Some((key, value));
        self.size += 1;
        None
    }

    /// Returns the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`KeyNotFoundError`] if `key` is `None` or not present. The error carries the
    /// key's `Display` form for diagnostics, which is why `K: Display` is required here. Maps
    /// keyed by a type without `Display` can use [`has_key`](Self::has_key) followed by
    /// indexing (`map[&key]`), which only needs `K: Eq`.
    pub fn get<'q>(&self, key: impl Into<Option<&'q K>>) -> Result<&V, KeyNotFoundError>
    where
        K: fmt::Display + 'q,
    {
        let key = key.into();
        self.find(key)
            .and_then(|idx| self.slots[idx].as_ref())
            .map(|(_, value)| value)
            .ok_or_else(|| KeyNotFoundError::new(key))
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    /// Same as [`get`](Self::get).
    pub fn get_mut<'q>(&mut self, key: impl Into<Option<&'q K>>) -> Result<&mut V, KeyNotFoundError>
    where
        K: fmt::Display + 'q,
    {
        let key = key.into();
        self.find(key)
            .and_then(|idx| self.slots[idx].as_mut())
            .map(|(_, value)| value)
            .ok_or_else(|| KeyNotFoundError::new(key))
    }

    /// Returns `true` if `key` is present. The null key is never present.
    pub fn has_key<'q>(&self, key: impl Into<Option<&'q K>>) -> bool
    where
        K: 'q,
    {
        self.find(key.into()).is_some()
    }

    /// Removes `key` using swap-compaction and returns its value.
    ///
    /// If `key` sits anywhere but the last live slot, the last live entry is moved into its
    /// place. Removing a null or absent key does nothing and returns `None`.
    pub fn remove<'q>(&mut self, key: impl Into<Option<&'q K>>) -> Option<V>
    where
        K: 'q,
    {
        let idx = self.find(key.into())?;
        let last = self.size - 1;
        let removed = if idx == last {
            self.slots[idx].take()
        } else {
            trace!(from = last, to = idx, "compacting removed slot");
            let moved = self.slots[last].take();
            mem::replace(&mut self.slots[idx], moved)
        };
        self.size = last;
        removed.map(|(_, value)| value)
    }

    /// Index of the first live slot whose key equals `key`.
    ///
    /// Only `[0, size)` is scanned; slots past the live region are never inspected.
    fn find(&self, key: Option<&K>) -> Option<usize> {
        let key = key?;
        self.slots[..self.size]
            .iter()
            .position(|slot| matches!(slot, Some((stored, _)) if stored == key))
    }
}

// --- 2. Trait Implementations ---

impl<K, V> Default for OrderedSlotMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Replays every live entry into a fresh map in storage order.
///
/// The clone starts from the default capacity and grows as needed, so it may be smaller
/// than the original but always holds the same entries in the same order.
impl<K: Eq + Clone, V: Clone> Clone for OrderedSlotMap<K, V> {
    fn clone(&self) -> Self {
        let mut cloned = Self::new();
        for (key, value) in self.iter() {
            cloned.insert(key.clone(), value.clone());
        }
        cloned
    }
}

/// Renders `{k0:v0, k1:v1, ...}` in storage order. An empty map renders `{}`.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for OrderedSlotMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}:{value}")?;
        }
        f.write_str("}")
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedSlotMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Two maps are equal when they hold the same key/value pairs, regardless of storage order.
impl<K: Eq, V: PartialEq> PartialEq for OrderedSlotMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.iter().all(|(key, value)| {
                other
                    .find(Some(key))
                    .and_then(|idx| other.slots[idx].as_ref())
                    .is_some_and(|(_, theirs)| theirs == value)
            })
    }
}

impl<K: Eq, V: Eq> Eq for OrderedSlotMap<K, V> {}

/// Allows read access using `map[&key]`.
///
/// # Panics
/// Panics if the key is not present in the map.
impl<K: Eq, V> Index<&K> for OrderedSlotMap<K, V> {
    type Output = V;

    fn index(&self, key: &K) -> &Self::Output {
        self.find(Some(key))
            .and_then(|idx| self.slots[idx].as_ref())
            .map(|(_, value)| value)
            .expect("no entry found for key")
    }
}

/// Later duplicates overwrite earlier ones, exactly as repeated [`set`](OrderedSlotMap::set)
/// calls would.
impl<K: Eq, V> FromIterator<(K, V)> for OrderedSlotMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Eq, V> Extend<(K, V)> for OrderedSlotMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> IntoIterator for OrderedSlotMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.slots.truncate(self.size);
        IntoIter::new(self.slots)
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedSlotMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut OrderedSlotMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// --- 3. Test Suite ---
