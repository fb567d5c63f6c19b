//! Cursors: positions inside a sequence that survive edits made through them.
//!
//! # States
//!
//! A cursor is always in exactly one of five states:
//!
//! ```text
//!   START      before the first element             at_start
//!   ELEMENT    on the element at some index         on_index, on_element
//!   GHOST      just removed the element it was on   on_element (read-only)
//!   BOUNDARY   just inserted next to its position   (nothing readable)
//!   END        after the last element               at_end
//! ```
//!
//! On an empty sequence START and END coincide: both `at_start` and `at_end`
//! report `true`, and moving in either direction keeps the cursor there.
//!
//! Moving out of GHOST or BOUNDARY lands on the neighbouring element in the
//! requested direction (or START/END if there is none), so a removal followed
//! by [`Cursor::to_next`] visits the element that shifted into the gap, and an
//! insertion followed by a move returns to the element the cursor was on.
//! Moving past START or END is an error.

use core::fmt;

use crate::{Error, InvalidPosition, Sequence};

/// The cursor capability.
pub trait Cursor {
    type Item;

    fn at_start(&self) -> bool;

    fn at_end(&self) -> bool;

    /// True when [`element`](Cursor::element) can be read.
    fn on_element(&self) -> bool;

    /// True when the cursor sits on a live index of the sequence.
    fn on_index(&self) -> bool;

    fn element(&self) -> Result<&Self::Item, Error>;

    /// Only available while [`on_index`](Cursor::on_index).
    fn element_mut(&mut self) -> Result<&mut Self::Item, Error>;

    /// Overwrites the current element, returning the previous value.
    fn set_element(&mut self, value: Self::Item) -> Result<Self::Item, Error>;

    fn index(&self) -> Result<usize, Error>;

    /// Removes the current element. The removed value stays readable through
    /// [`element`](Cursor::element) until the cursor moves.
    fn remove_at(&mut self) -> Result<(), Error>;

    /// Inserts directly in front of the cursor's position.
    fn insert_before(&mut self, value: Self::Item) -> Result<(), Error>;

    /// Inserts directly behind the cursor's position.
    fn insert_after(&mut self, value: Self::Item) -> Result<(), Error>;

    /// Moves one step towards the end. From the start this lands on the
    /// first element.
    ///
    /// Fails with [`InvalidPosition::PastEnd`] when already at the end of a
    /// non-empty sequence. On an empty sequence the move always succeeds and
    /// the cursor stays at both the start and the end.
    fn to_next(&mut self) -> Result<(), Error>;

    /// Moves one step towards the start. From the end this lands on the
    /// last element.
    ///
    /// Fails with [`InvalidPosition::BeforeStart`] when already at the start
    /// of a non-empty sequence. On an empty sequence the move always succeeds
    /// and the cursor stays at both the start and the end.
    fn to_previous(&mut self) -> Result<(), Error>;
}

/// Observable state of a [`Traverser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Start,
    Element,
    Ghost,
    Boundary,
    End,
}

#[derive(Debug)]
enum Position<T> {
    Start,
    Element(usize),
    // Between `gap - 1` and `gap`, never at either edge.
    Boundary(usize),
    // `gap` is where the removed element used to be.
    Ghost { gap: usize, value: T },
    End,
}

impl<T> Position<T> {
    fn state(&self) -> State {
        match self {
            Position::Start => State::Start,
            Position::Element(_) => State::Element,
            Position::Boundary(_) => State::Boundary,
            Position::Ghost { .. } => State::Ghost,
            Position::End => State::End,
        }
    }

    fn boundary(gap: usize, len: usize) -> Self {
        if gap == 0 {
            Position::Start
        } else if gap >= len {
            Position::End
        } else {
            Position::Boundary(gap)
        }
    }

    fn landing(index: usize, len: usize) -> Self {
        if index < len {
            Position::Element(index)
        } else {
            Position::End
        }
    }
}

/// A [`Cursor`] over any [`Sequence`].
///
/// The traverser borrows its sequence mutably for its whole lifetime, so
/// every structural change goes through it and it can never observe edits it
/// did not make.
pub struct Traverser<'a, S: Sequence> {
    sequence: &'a mut S,
    position: Position<S::Item>,
}

impl<'a, S: Sequence> Traverser<'a, S> {
    /// On the element at index 0, or at the end when the sequence is empty.
    pub fn new(sequence: &'a mut S) -> Self {
        let position = Position::landing(0, sequence.len());
        Self { sequence, position }
    }

    pub fn start(sequence: &'a mut S) -> Self {
        Self {
            sequence,
            position: Position::Start,
        }
    }

    pub fn end(sequence: &'a mut S) -> Self {
        Self {
            sequence,
            position: Position::End,
        }
    }

    pub fn first(sequence: &'a mut S) -> Result<Self, Error> {
        if sequence.is_empty() {
            return Err(InvalidPosition::EmptySequence.into());
        }
        Ok(Self {
            sequence,
            position: Position::Element(0),
        })
    }

    pub fn last(sequence: &'a mut S) -> Result<Self, Error> {
        let Some(last) = sequence.len().checked_sub(1) else {
            return Err(InvalidPosition::EmptySequence.into());
        };
        Ok(Self {
            sequence,
            position: Position::Element(last),
        })
    }

    pub fn at_index(sequence: &'a mut S, index: usize) -> Result<Self, Error> {
        sequence.get(index)?;
        Ok(Self {
            sequence,
            position: Position::Element(index),
        })
    }

    pub fn state(&self) -> State {
        self.position.state()
    }

    /// Read access to the sequence being traversed.
    pub fn sequence(&self) -> &S {
        self.sequence
    }

    // Where an insertion lands when the cursor is not on an element.
    fn gap(&self) -> usize {
        match self.position {
            Position::Start => 0,
            Position::Element(index) => index,
            Position::Boundary(gap) | Position::Ghost { gap, .. } => gap,
            Position::End => self.sequence.len(),
        }
    }

    fn current_index(&self) -> Result<usize, Error> {
        match self.position {
            Position::Element(index) => Ok(index),
            Position::Ghost { .. } => Err(InvalidPosition::Removed.into()),
            _ => Err(InvalidPosition::NotOnIndex.into()),
        }
    }

    fn move_to(&mut self, next: Position<S::Item>) {
        tracing::trace!(from = ?self.position.state(), to = ?next.state(), "cursor moved");
        self.position = next;
    }
}

impl<S: Sequence> Cursor for Traverser<'_, S> {
    type Item = S::Item;

    fn at_start(&self) -> bool {
        self.sequence.is_empty()
            || matches!(
                self.position,
                Position::Start | Position::Ghost { gap: 0, .. }
            )
    }

    fn at_end(&self) -> bool {
        let len = self.sequence.len();
        len == 0
            || match self.position {
                Position::End => true,
                Position::Ghost { gap, .. } => gap == len,
                _ => false,
            }
    }

    fn on_element(&self) -> bool {
        matches!(
            self.position,
            Position::Element(_) | Position::Ghost { .. }
        )
    }

    fn on_index(&self) -> bool {
        matches!(self.position, Position::Element(_))
    }

    fn element(&self) -> Result<&S::Item, Error> {
        match &self.position {
            Position::Element(index) => Ok(self.sequence.get(*index)?),
            Position::Ghost { value, .. } => Ok(value),
            _ => Err(InvalidPosition::NotOnElement.into()),
        }
    }

    fn element_mut(&mut self) -> Result<&mut S::Item, Error> {
        let index = self.current_index()?;
        Ok(self.sequence.get_mut(index)?)
    }

    fn set_element(&mut self, value: S::Item) -> Result<S::Item, Error> {
        let index = self.current_index()?;
        Ok(self.sequence.set(index, value)?)
    }

    fn index(&self) -> Result<usize, Error> {
        self.current_index()
    }

    fn remove_at(&mut self) -> Result<(), Error> {
        let index = self.current_index()?;
        let value = self.sequence.remove_at(index)?;
        tracing::debug!(index, len = self.sequence.len(), "removed element under cursor");
        self.position = Position::Ghost { gap: index, value };
        Ok(())
    }

    fn insert_before(&mut self, value: S::Item) -> Result<(), Error> {
        let at = self.gap();
        self.sequence.insert(at, value)?;
        tracing::debug!(index = at, len = self.sequence.len(), "inserted before cursor");
        self.position = Position::boundary(at + 1, self.sequence.len());
        Ok(())
    }

    fn insert_after(&mut self, value: S::Item) -> Result<(), Error> {
        let at = match self.position {
            Position::Element(index) => index + 1,
            _ => self.gap(),
        };
        self.sequence.insert(at, value)?;
        tracing::debug!(index = at, len = self.sequence.len(), "inserted after cursor");
        self.position = Position::boundary(at, self.sequence.len());
        Ok(())
    }

    fn to_next(&mut self) -> Result<(), Error> {
        let len = self.sequence.len();
        let next = match self.position {
            _ if len == 0 => Position::End,
            Position::End => return Err(InvalidPosition::PastEnd.into()),
            Position::Start => Position::Element(0),
            Position::Element(index) => Position::landing(index + 1, len),
            Position::Boundary(gap) | Position::Ghost { gap, .. } => Position::landing(gap, len),
        };
        self.move_to(next);
        Ok(())
    }

    fn to_previous(&mut self) -> Result<(), Error> {
        let len = self.sequence.len();
        let next = match self.position {
            _ if len == 0 => Position::Start,
            Position::Start => return Err(InvalidPosition::BeforeStart.into()),
            Position::End => Position::Element(len - 1),
            Position::Element(index)
            | Position::Boundary(index)
            | Position::Ghost { gap: index, .. } => match index.checked_sub(1) {
                Some(previous) => Position::Element(previous),
                None => Position::Start,
            },
        };
        self.move_to(next);
        Ok(())
    }
}

impl<S> fmt::Debug for Traverser<'_, S>
where
    S: Sequence,
    S::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Traverser")
            .field("position", &self.position)
            .field("len", &self.sequence.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;
