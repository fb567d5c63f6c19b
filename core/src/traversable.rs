//! The traversable capability and its sequence-backed implementation.

use crate::{Cursor, Error, Sequence, Traverser, sequence::Iter};
use traversal_growable_array::{ArrayOptions, GrowableArray, OutOfRange};

/// Something that can mint cursors over its own elements.
///
/// Cursors borrow `self` mutably, so only one exists at a time and none can
/// outlive the sequence it walks.
pub trait Traversable {
    type Item;

    type Cursor<'a>: Cursor<Item = Self::Item>
    where
        Self: 'a;

    /// On the first element, or at the end when empty.
    fn cursor(&mut self) -> Self::Cursor<'_>;

    fn start_cursor(&mut self) -> Self::Cursor<'_>;

    fn end_cursor(&mut self) -> Self::Cursor<'_>;

    /// Fails with [`InvalidPosition::EmptySequence`](crate::InvalidPosition::EmptySequence)
    /// when there is no first element.
    fn first_element_cursor(&mut self) -> Result<Self::Cursor<'_>, Error>;

    /// Fails with [`InvalidPosition::EmptySequence`](crate::InvalidPosition::EmptySequence)
    /// when there is no last element.
    fn last_element_cursor(&mut self) -> Result<Self::Cursor<'_>, Error>;
}

/// Owns a [`Sequence`] and hands out [`Traverser`]s over it.
///
/// Also a [`Sequence`] itself, forwarding every call to the owned backend.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraversableSequence<S> {
    inner: S,
}

/// A [`TraversableSequence`] backed by a [`GrowableArray`].
pub type TraversableArray<T> = TraversableSequence<GrowableArray<T>>;

impl<S: Sequence + Default> TraversableSequence<S> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> TraversableArray<T> {
    pub fn with_options(options: ArrayOptions) -> Self {
        Self {
            inner: GrowableArray::with_options(options),
        }
    }
}

impl<S> TraversableSequence<S> {
    pub fn as_inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S> From<S> for TraversableSequence<S> {
    fn from(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Sequence> Traversable for TraversableSequence<S> {
    type Item = S::Item;

    type Cursor<'a>
        = Traverser<'a, S>
    where
        Self: 'a;

    fn cursor(&mut self) -> Traverser<'_, S> {
        Traverser::new(&mut self.inner)
    }

    fn start_cursor(&mut self) -> Traverser<'_, S> {
        Traverser::start(&mut self.inner)
    }

    fn end_cursor(&mut self) -> Traverser<'_, S> {
        Traverser::end(&mut self.inner)
    }

    fn first_element_cursor(&mut self) -> Result<Traverser<'_, S>, Error> {
        Traverser::first(&mut self.inner)
    }

    fn last_element_cursor(&mut self) -> Result<Traverser<'_, S>, Error> {
        Traverser::last(&mut self.inner)
    }
}

impl<S: Sequence> Sequence for TraversableSequence<S> {
    type Item = S::Item;

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, index: usize) -> Result<&S::Item, OutOfRange> {
        self.inner.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut S::Item, OutOfRange> {
        self.inner.get_mut(index)
    }

    fn set(&mut self, index: usize, value: S::Item) -> Result<S::Item, OutOfRange> {
        self.inner.set(index, value)
    }

    fn push(&mut self, value: S::Item) {
        self.inner.push(value);
    }

    fn insert(&mut self, index: usize, value: S::Item) -> Result<(), OutOfRange> {
        self.inner.insert(index, value)
    }

    fn remove_at(&mut self, index: usize) -> Result<S::Item, OutOfRange> {
        self.inner.remove_at(index)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }
}

impl<S: Sequence> Extend<S::Item> for TraversableSequence<S> {
    fn extend<I: IntoIterator<Item = S::Item>>(&mut self, iter: I) {
        for item in iter {
            self.inner.push(item);
        }
    }
}

impl<S: Sequence + Default> FromIterator<S::Item> for TraversableSequence<S> {
    fn from_iter<I: IntoIterator<Item = S::Item>>(iter: I) -> Self {
        let mut sequence = Self::default();
        sequence.extend(iter);
        sequence
    }
}

impl<'a, S: Sequence> IntoIterator for &'a TraversableSequence<S> {
    type Item = &'a S::Item;
    type IntoIter = Iter<'a, S>;

    fn into_iter(self) -> Iter<'a, S> {
        Iter::new(&self.inner)
    }
}

#[cfg(test)]
#[path = "traversable_test.rs"]
mod traversable_test;
