//! Error types for sequence and cursor operations.
//!
//! Every failure is detected before anything is mutated, so a failed call
//! leaves both the sequence and the cursor exactly as they were.

pub use traversal_growable_array::OutOfRange;

/// Error type for all cursor and sequence operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An index or range argument fell outside the sequence.
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),

    /// A cursor operation was attempted from a state that does not support it.
    #[error(transparent)]
    InvalidPosition(#[from] InvalidPosition),
}

impl Error {
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange(_))
    }

    pub fn is_invalid_position(&self) -> bool {
        matches!(self, Error::InvalidPosition(_))
    }
}

/// Why a cursor could not perform the requested operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidPosition {
    #[error("cursor is not on an element")]
    NotOnElement,

    #[error("cursor is not on a valid index")]
    NotOnIndex,

    /// The element under the cursor was removed through it; only reading the
    /// removed value is allowed until the cursor moves.
    #[error("element under the cursor has already been removed")]
    Removed,

    #[error("cursor cannot move past the end")]
    PastEnd,

    #[error("cursor cannot move before the start")]
    BeforeStart,

    #[error("sequence is empty")]
    EmptySequence,
}

static_assertions::assert_impl_all!(Error: Send, Sync, Copy, core::error::Error);
static_assertions::assert_impl_all!(InvalidPosition: Send, Sync, Copy, core::error::Error);
