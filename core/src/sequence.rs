//! The sequence capability.
//!
//! A [`Sequence`] is an ordered, 0-indexed container with no gaps: index `i`
//! always names the `i`-th element. Cursors, traversable wrappers and the
//! range helpers are written against this trait only, so any backend that
//! implements it can be dropped in.

use alloc::{collections::VecDeque, vec::Vec};
use core::iter::FusedIterator;

use traversal_growable_array::{GrowableArray, OutOfRange};

pub trait Sequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Fails with [`OutOfRange`] when `index >= len`.
    fn get(&self, index: usize) -> Result<&Self::Item, OutOfRange>;

    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Item, OutOfRange>;

    /// Overwrites the element at `index`, returning the previous value.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item, OutOfRange> {
        self.get_mut(index)
            .map(|slot| core::mem::replace(slot, value))
    }

    /// Appends to the end.
    fn push(&mut self, value: Self::Item);

    /// Valid for `index <= len`; everything at or after `index` shifts right.
    fn insert(&mut self, index: usize, value: Self::Item) -> Result<(), OutOfRange>;

    /// Valid for `index < len`; everything after `index` shifts left.
    fn remove_at(&mut self, index: usize) -> Result<Self::Item, OutOfRange>;

    fn clear(&mut self);

    fn index_of(&self, value: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        (0..self.len()).find(|&index| self.get(index).is_ok_and(|item| item == value))
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes the first occurrence of `value`. Returns whether one was found.
    fn remove(&mut self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Iterates the elements in index order.
    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }
}

/// Index-driven iterator usable with any [`Sequence`].
#[derive(Debug)]
pub struct Iter<'a, S: ?Sized> {
    sequence: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: Sequence + ?Sized> Iter<'a, S> {
    pub fn new(sequence: &'a S) -> Self {
        Self {
            sequence,
            front: 0,
            back: sequence.len(),
        }
    }
}

impl<S: ?Sized> Clone for Iter<'_, S> {
    fn clone(&self) -> Self {
        Self {
            sequence: self.sequence,
            front: self.front,
            back: self.back,
        }
    }
}

impl<'a, S: Sequence + ?Sized> Iterator for Iter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.sequence.get(self.front).ok()?;
        self.front += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Sequence + ?Sized> DoubleEndedIterator for Iter<'_, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.sequence.get(self.back - 1).ok()?;
        self.back -= 1;
        Some(item)
    }
}

impl<S: Sequence + ?Sized> ExactSizeIterator for Iter<'_, S> {}
impl<S: Sequence + ?Sized> FusedIterator for Iter<'_, S> {}

// =============================================================================
// Backends
// =============================================================================

fn check_index(index: usize, len: usize) -> Result<(), OutOfRange> {
    if index < len {
        Ok(())
    } else {
        Err(OutOfRange::Index { index, len })
    }
}

fn check_insert(index: usize, len: usize) -> Result<(), OutOfRange> {
    if index <= len {
        Ok(())
    } else {
        Err(OutOfRange::Index { index, len })
    }
}

impl<T> Sequence for GrowableArray<T> {
    type Item = T;

    fn len(&self) -> usize {
        GrowableArray::len(self)
    }

    fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        GrowableArray::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        GrowableArray::get_mut(self, index)
    }

    fn push(&mut self, value: T) {
        GrowableArray::push(self, value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        GrowableArray::insert(self, index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        GrowableArray::remove_at(self, index)
    }

    fn clear(&mut self) {
        GrowableArray::clear(self);
    }
}

impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = self.as_slice().len();
        self.as_slice()
            .get(index)
            .ok_or(OutOfRange::Index { index, len })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = self.as_slice().len();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(OutOfRange::Index { index, len })
    }

    fn push(&mut self, value: T) {
        Vec::push(self, value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        check_insert(index, Vec::len(self))?;
        Vec::insert(self, index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        check_index(index, Vec::len(self))?;
        Ok(Vec::remove(self, index))
    }

    fn clear(&mut self) {
        Vec::clear(self);
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Result<&T, OutOfRange> {
        let len = VecDeque::len(self);
        VecDeque::get(self, index).ok_or(OutOfRange::Index { index, len })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        let len = VecDeque::len(self);
        VecDeque::get_mut(self, index).ok_or(OutOfRange::Index { index, len })
    }

    fn push(&mut self, value: T) {
        self.push_back(value);
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), OutOfRange> {
        check_insert(index, VecDeque::len(self))?;
        VecDeque::insert(self, index, value);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, OutOfRange> {
        let len = VecDeque::len(self);
        VecDeque::remove(self, index).ok_or(OutOfRange::Index { index, len })
    }

    fn clear(&mut self) {
        VecDeque::clear(self);
    }
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
