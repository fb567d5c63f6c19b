//! GrowableArray: a resizable, index-addressable sequence.
//!
//! GrowableArray provides a contiguous vector type that:
//! - Appends in amortized O(1), doubling its backing storage when full
//! - Inserts and removes at arbitrary positions in O(n), shifting the tail
//! - Never shrinks: `clear` keeps the allocation around for reuse
//! - Reports bad indices as [`OutOfRange`] instead of panicking
//!
//! ```
//! use traversal_growable_array::GrowableArray;
//!
//! let mut array = GrowableArray::new();
//! array.push(1);
//! array.push(3);
//! array.insert(1, 2).unwrap();
//! assert_eq!(array.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! assert!(array.remove_at(3).is_err());
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

use alloc::{boxed::Box, vec::Vec};
use core::{
    fmt,
    iter::{self, FusedIterator},
    ops::{Index, IndexMut},
    slice,
};

/// Capacity used by [`GrowableArray::new`] and [`ArrayOptions::default`].
pub const DEFAULT_CAPACITY: usize = 10;

/// An index or range fell outside the valid bounds of a sequence.
///
/// Always reported before anything is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum OutOfRange {
    #[error("index {index} out of range for length {len}")]
    Index { index: usize, len: usize },

    #[error("range of {count} starting at {start} out of range for length {len}")]
    Range {
        start: usize,
        count: usize,
        len: usize,
    },
}

/// Construction options for [`GrowableArray`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayOptions {
    /// Number of slots allocated up front.
    pub initial_capacity: usize,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
        }
    }
}

// Slots `[0, len)` are always `Some`, slots `[len, capacity)` are always `None`.
#[derive(Clone)]
pub struct GrowableArray<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
static_assertions::assert_eq_size!(GrowableArray<u64>, [usize; 3]);

fn allocate<T>(capacity: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> GrowableArray<T> {
    pub fn new() -> Self {
        Self::with_options(ArrayOptions::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_options(ArrayOptions {
            initial_capacity: capacity,
        })
    }

    pub fn with_options(options: ArrayOptions) -> Self {
        Self {
            slots: allocate(options.initial_capacity),
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Informational only: the number of slots currently allocated.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline(always)]
    fn check_index(&self, index: usize) -> Result<(), OutOfRange> {
        if index < self.len {
            Ok(())
        } else {
            Err(OutOfRange::Index {
                index,
                len: self.len,
            })
        }
    }

    pub fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        self.check_index(index)?;
        self.slots[index].as_ref().ok_or(OutOfRange::Index {
            index,
            len: self.len,
        })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        self.check_index(index)?;
        let len = self.len;
        self.slots[index]
            .as_mut()
            .ok_or(OutOfRange::Index { index, len })
    }

    /// Overwrites the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, OutOfRange> {
        self.get_mut(index).map(|slot| core::mem::replace(slot, value))
    }

    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.reserve_one_unchecked();
        }
        self.slots[self.len] = Some(value);
        self.len += 1;
    }

    #[cold]
    fn reserve_one_unchecked(&mut self) {
        debug_assert_eq!(self.len, self.capacity());
        let new_cap = (self.capacity() * 2).max(1);
        self.grow(new_cap);
    }

    fn grow(&mut self, new_cap: usize) {
        assert!(new_cap >= self.len);
        tracing::debug!(from = self.capacity(), to = new_cap, "growing array storage");

        let mut slots = allocate(new_cap);
        for (new, old) in slots.iter_mut().zip(self.slots.iter_mut().take(self.len)) {
            *new = old.take();
        }
        self.slots = slots;
    }

    /// Inserts `value` at `index`, shifting everything at or after it one
    /// slot to the right. `index == len` appends.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        if index > self.len {
            return Err(OutOfRange::Index {
                index,
                len: self.len,
            });
        }
        self.push(value);
        self.slots[index..self.len].rotate_right(1);
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting the tail left.
    pub fn remove_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        self.check_index(index)?;
        let removed = self.slots[index].take();
        self.slots[index..self.len].rotate_left(1);
        self.len -= 1;
        removed.ok_or(OutOfRange::Index {
            index,
            len: self.len + 1,
        })
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes the first occurrence of `value`. Returns whether one was found.
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Drops every element. Capacity is left untouched.
    pub fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.len].iter(),
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.slots[..self.len].iter_mut(),
        }
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

/// # Panics
///
/// Panics if `index >= len`. Use [`GrowableArray::get`] for a checked lookup.
impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

/// # Panics
///
/// Panics if `index >= len`. Use [`GrowableArray::get_mut`] for a checked
/// lookup.
impl<T> IndexMut<usize> for GrowableArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut array = Self::with_capacity(lower.max(DEFAULT_CAPACITY));
        array.extend(iter);
        array
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`GrowableArray`], in index order.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over a [`GrowableArray`], in index order.
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<&'a mut T> {
        self.inner.next().and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`GrowableArray`].
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: iter::Take<alloc::vec::IntoIter<Option<T>>>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next().flatten()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let len = self.len;
        IntoIter {
            inner: Vec::from(self.slots).into_iter().take(len),
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}
