//! Iterators over [`OrderedSlotMap`](crate::OrderedSlotMap).
//!
//! Every iterator walks the live region `[0, size)` in storage order. That order is insertion
//! order only until the first removal; swap-compaction moves the last entry into the gap.

use core::iter::FusedIterator;
use core::slice;
use std::vec;

/// Borrowing iterator returned by [`OrderedSlotMap::iter`](crate::OrderedSlotMap::iter).
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Option<(K, V)>>,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(live: &'a [Option<(K, V)>]) -> Self {
        Self { inner: live.iter() }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find_map(|slot| slot.as_ref().map(|(key, value)| (key, value)))
    }

    // Every slot in the live region is occupied, so the slice length is exact.
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Mutable iterator returned by [`OrderedSlotMap::iter_mut`](crate::OrderedSlotMap::iter_mut).
///
/// Keys stay shared; only values can be modified.
pub struct IterMut<'a, K, V> {
    inner: slice::IterMut<'a, Option<(K, V)>>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(crate) fn new(live: &'a mut [Option<(K, V)>]) -> Self {
        Self {
            inner: live.iter_mut(),
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .find_map(|slot| slot.as_mut().map(|(key, value)| (&*key, value)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// Owning iterator, created by `into_iter` on the map.
pub struct IntoIter<K, V> {
    inner: vec::IntoIter<Option<(K, V)>>,
}

impl<K, V> IntoIter<K, V> {
    /// `live` must already be truncated to the live region.
    pub(crate) fn new(live: Vec<Option<(K, V)>>) -> Self {
        Self {
            inner: live.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find_map(|slot| slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

/// Key iterator returned by [`OrderedSlotMap::keys`](crate::OrderedSlotMap::keys).
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// Value iterator returned by [`OrderedSlotMap::values`](crate::OrderedSlotMap::values).
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Values<'a, K, V> {
    pub(crate) fn new(inner: Iter<'a, K, V>) -> Self {
        Self { inner }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}
