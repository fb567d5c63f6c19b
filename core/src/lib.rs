#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

//! Positional sequences and the cursors that walk and edit them.
//!
//! The crate is organised around three capabilities:
//!
//! - [`Sequence`]: an ordered, 0-indexed container with checked access,
//!   insertion and removal. Implemented for [`GrowableArray`], `Vec` and
//!   `VecDeque`.
//! - [`Cursor`]: a position inside a sequence that can move in both
//!   directions and insert or remove around itself. [`Traverser`] is the
//!   implementation for every [`Sequence`].
//! - [`Traversable`]: something that mints cursors at its start, end, first
//!   element or last element. [`TraversableSequence`] wraps any [`Sequence`].
//!
//! ```
//! use traversal_core::{Cursor, Traversable, TraversableArray, SequenceExt, Sequence};
//!
//! let mut list = TraversableArray::new();
//! list.add_range([1, 2, 3, 4, 5]);
//!
//! let mut cursor = list.cursor();
//! while !cursor.at_end() {
//!     if *cursor.element()? % 2 == 0 {
//!         *cursor.element_mut()? *= 10;
//!     }
//!     cursor.to_next()?;
//! }
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 20, 3, 40, 5]);
//! # Ok::<(), traversal_core::Error>(())
//! ```

extern crate alloc;

pub mod cursor;
pub mod error;
pub mod extensions;
pub mod sequence;
pub mod traversable;

pub use cursor::{Cursor, State, Traverser};
pub use error::{Error, InvalidPosition};
pub use extensions::SequenceExt;
pub use sequence::Sequence;
pub use traversable::{Traversable, TraversableArray, TraversableSequence};
pub use traversal_growable_array::{ArrayOptions, DEFAULT_CAPACITY, GrowableArray, OutOfRange};
