//! Traversal - positional sequences with bidirectional, editing cursors
//!
//! # Overview
//!
//! Traversal pairs an ordered, index-addressable container with a cursor that
//! can walk it in both directions while inserting and removing elements
//! around itself. Common use cases include:
//!
//! - Filtering a list in place during a single pass
//! - Interleaving new elements next to existing ones
//! - Editing a buffer around a moving insertion point
//!
//! # Quick Start
//!
//! ```
//! use traversal::{Cursor, Sequence, SequenceExt, Traversable, TraversableArray};
//!
//! let mut list = TraversableArray::new();
//! list.add_range(1..=10);
//!
//! // Drop every multiple of three in one pass.
//! let mut cursor = list.cursor();
//! while !cursor.at_end() {
//!     if cursor.element().is_ok_and(|value| value % 3 == 0) {
//!         cursor.remove_at()?;
//!     }
//!     cursor.to_next()?;
//! }
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 4, 5, 7, 8, 10]);
//! # Ok::<(), traversal::Error>(())
//! ```
//!
//! # Cursor States
//!
//! A cursor is always in exactly one of five states:
//!
//! 1. **Start**: before the first element
//! 2. **Element**: on a live element with a valid index
//! 3. **Ghost**: on an element just removed through this cursor; the value can
//!    still be read until the cursor moves
//! 4. **Boundary**: between two elements, right after an insertion
//! 5. **End**: after the last element
//!
//! Moving from a Ghost or Boundary lands on the neighbouring element, so a
//! removal or insertion followed by `to_next` continues the walk without
//! skipping or revisiting anything.
//!
//! ```
//! use traversal::{Cursor, State, Traversable, TraversableArray};
//!
//! let mut list: TraversableArray<char> = "abc".chars().collect();
//! let mut cursor = list.first_element_cursor()?;
//!
//! cursor.insert_after('x')?;
//! assert_eq!(cursor.state(), State::Boundary);
//!
//! cursor.to_next()?;
//! assert_eq!(cursor.element(), Ok(&'x'));
//! # Ok::<(), traversal::Error>(())
//! ```
//!
//! # Backends
//!
//! Any [`Sequence`] can be traversed. [`GrowableArray`] is the native
//! backend; `Vec` and `VecDeque` work through the same traits:
//!
//! ```
//! use std::collections::VecDeque;
//! use traversal::{Cursor, Traversable, TraversableSequence};
//!
//! let mut list = TraversableSequence::from(VecDeque::from([1, 2, 3]));
//! let mut cursor = list.last_element_cursor()?;
//! cursor.set_element(30)?;
//!
//! assert_eq!(list.into_inner(), [1, 2, 30]);
//! # Ok::<(), traversal::Error>(())
//! ```

pub use traversal_core::{
    ArrayOptions, Cursor, DEFAULT_CAPACITY, Error, GrowableArray, InvalidPosition, OutOfRange,
    Sequence, SequenceExt, State, Traversable, TraversableArray, TraversableSequence, Traverser,
};

// Modules are re-exported for the less common types (iterators and the like).
pub use traversal_core::{cursor, error, extensions, sequence, traversable};
