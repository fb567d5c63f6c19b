//! Tests for the Traverser state machine

use super::*;
use crate::test_utils::init_test_logging;
use alloc::vec::Vec;
use pretty_assertions::assert_eq;
use traversal_growable_array::{GrowableArray, OutOfRange};

fn array(items: &[i32]) -> GrowableArray<i32> {
    items.iter().copied().collect()
}

fn contents(array: &GrowableArray<i32>) -> Vec<i32> {
    array.iter().copied().collect()
}

fn assert_nothing_readable<C: Cursor<Item = i32>>(cursor: &mut C) {
    assert!(cursor.index().is_err());
    assert!(cursor.element().is_err());
    assert!(cursor.set_element(1).is_err());
    assert!(cursor.element_mut().is_err());
    assert!(cursor.remove_at().is_err());
}

fn assert_empty_state<C: Cursor<Item = i32>>(cursor: &mut C) {
    assert!(cursor.at_start());
    assert!(cursor.at_end());
    assert!(!cursor.on_element());
    assert!(!cursor.on_index());
    assert_nothing_readable(cursor);
}

// ============================================================================
// Empty sequence
// ============================================================================

#[test]
fn test_cursors_on_empty_sequence() {
    let mut empty = array(&[]);
    assert_empty_state(&mut Traverser::new(&mut empty));
    assert_empty_state(&mut Traverser::end(&mut empty));

    let mut cursor = Traverser::start(&mut empty);
    assert_empty_state(&mut cursor);
    cursor.to_next().unwrap();
    assert_empty_state(&mut cursor);
    cursor.to_previous().unwrap();
    assert_empty_state(&mut cursor);
}

#[test]
fn test_end_cursor_on_empty_sequence_moves_freely() {
    let mut empty = array(&[]);
    let mut cursor = Traverser::end(&mut empty);
    assert_empty_state(&mut cursor);
    cursor.to_previous().unwrap();
    assert_empty_state(&mut cursor);
    cursor.to_next().unwrap();
    assert_empty_state(&mut cursor);
}

#[test]
fn test_repeated_moves_on_empty_sequence_never_fail() {
    let mut empty = array(&[]);
    let mut cursor = Traverser::start(&mut empty);
    for _ in 0..3 {
        assert_eq!(cursor.to_next(), Ok(()));
    }
    assert_eq!(cursor.state(), State::End);
    for _ in 0..3 {
        assert_eq!(cursor.to_previous(), Ok(()));
    }
    assert_eq!(cursor.state(), State::Start);
    assert_empty_state(&mut cursor);
}

#[test]
fn test_first_and_last_fail_on_empty_sequence() {
    let mut empty = array(&[]);
    assert_eq!(
        Traverser::first(&mut empty).unwrap_err(),
        Error::InvalidPosition(InvalidPosition::EmptySequence)
    );
    assert_eq!(
        Traverser::last(&mut empty).unwrap_err(),
        Error::InvalidPosition(InvalidPosition::EmptySequence)
    );
}

#[test]
fn test_at_index_out_of_range() {
    let mut sequence = array(&[1, 2]);
    assert_eq!(
        Traverser::at_index(&mut sequence, 2).unwrap_err(),
        Error::OutOfRange(OutOfRange::Index { index: 2, len: 2 })
    );
    let cursor = Traverser::at_index(&mut sequence, 1).unwrap();
    assert_eq!(cursor.index(), Ok(1));
}

// ============================================================================
// Single element
// ============================================================================

fn assert_on_single_element<C: Cursor<Item = i32>>(cursor: &C) {
    assert!(!cursor.at_start());
    assert!(!cursor.at_end());
    assert!(cursor.on_element());
    assert!(cursor.on_index());
    assert_eq!(cursor.index(), Ok(0));
    assert_eq!(cursor.element(), Ok(&1));
}

#[test]
fn test_element_cursors_on_single_element() {
    let mut sequence = array(&[1]);
    assert_on_single_element(&Traverser::new(&mut sequence));
    assert_on_single_element(&Traverser::first(&mut sequence).unwrap());
    assert_on_single_element(&Traverser::last(&mut sequence).unwrap());
}

#[test]
fn test_end_cursor_on_single_element() {
    let mut sequence = array(&[1]);
    let mut cursor = Traverser::end(&mut sequence);
    assert!(!cursor.at_start());
    assert!(cursor.at_end());
    assert_nothing_readable(&mut cursor);

    assert_eq!(
        cursor.to_next(),
        Err(Error::InvalidPosition(InvalidPosition::PastEnd))
    );
    assert!(cursor.at_end());
    assert_eq!(cursor.state(), State::End);
}

#[test]
fn test_start_cursor_on_single_element() {
    let mut sequence = array(&[1]);
    let mut cursor = Traverser::start(&mut sequence);
    assert!(cursor.at_start());
    assert!(!cursor.at_end());
    assert_nothing_readable(&mut cursor);

    assert_eq!(
        cursor.to_previous(),
        Err(Error::InvalidPosition(InvalidPosition::BeforeStart))
    );
    assert!(cursor.at_start());
    assert_eq!(cursor.state(), State::Start);
}

#[test]
fn test_replace_then_insert_around_single_element() {
    let mut sequence = array(&[1]);
    let mut cursor = Traverser::new(&mut sequence);

    assert_eq!(cursor.set_element(7), Ok(1));
    assert_eq!(cursor.element(), Ok(&7));
    assert_eq!(cursor.index(), Ok(0));

    cursor.insert_before(4).unwrap();
    assert_eq!(cursor.state(), State::Boundary);
    assert!(!cursor.on_element());
    assert!(!cursor.on_index());
    assert!(!cursor.at_start());
    assert!(!cursor.at_end());
    assert_eq!(contents(cursor.sequence()), [4, 7]);

    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&7));
    assert_eq!(cursor.index(), Ok(1));

    cursor.insert_after(10).unwrap();
    assert_eq!(cursor.state(), State::Boundary);
    assert_eq!(contents(cursor.sequence()), [4, 7, 10]);

    cursor.to_previous().unwrap();
    assert_eq!(cursor.element(), Ok(&7));
    assert_eq!(cursor.index(), Ok(1));
}

#[test]
fn test_remove_only_element_leaves_ghost() {
    init_test_logging();

    let mut sequence = array(&[1]);
    let mut cursor = Traverser::first(&mut sequence).unwrap();
    cursor.remove_at().unwrap();

    assert!(cursor.sequence().is_empty());
    assert_eq!(cursor.state(), State::Ghost);
    assert!(cursor.on_element());
    assert!(!cursor.on_index());
    assert_eq!(cursor.element(), Ok(&1));

    cursor.to_next().unwrap();
    assert_empty_state(&mut cursor);
}

// ============================================================================
// Traversal
// ============================================================================

fn walk_forward<S: Sequence<Item = i32>>(cursor: &mut Traverser<'_, S>) {
    for i in 0..5 {
        assert_eq!(cursor.index(), Ok(i));
        assert_eq!(cursor.element(), Ok(&(i as i32 + 1)));
        cursor.to_next().unwrap();
    }
    assert!(cursor.at_end());
    assert_nothing_readable(cursor);
}

fn walk_backward<S: Sequence<Item = i32>>(cursor: &mut Traverser<'_, S>) {
    for i in (0..5).rev() {
        assert_eq!(cursor.index(), Ok(i));
        assert_eq!(cursor.element(), Ok(&(i as i32 + 1)));
        cursor.to_previous().unwrap();
    }
    assert!(cursor.at_start());
    assert_nothing_readable(cursor);
}

#[test]
fn test_traversal_from_default_cursor() {
    let mut sequence = array(&[1, 2, 3, 4, 5]);
    let mut cursor = Traverser::new(&mut sequence);
    walk_forward(&mut cursor);
    cursor.to_previous().unwrap();
    walk_backward(&mut cursor);
}

#[test]
fn test_traversal_from_last_element() {
    let mut sequence = array(&[1, 2, 3, 4, 5]);
    let mut cursor = Traverser::last(&mut sequence).unwrap();
    walk_backward(&mut cursor);
    cursor.to_next().unwrap();
    walk_forward(&mut cursor);
}

#[test]
fn test_traversal_from_start_and_end() {
    let mut sequence = array(&[1, 2, 3, 4, 5]);

    let mut cursor = Traverser::start(&mut sequence);
    cursor.to_next().unwrap();
    walk_forward(&mut cursor);

    let mut cursor = Traverser::end(&mut sequence);
    cursor.to_previous().unwrap();
    walk_backward(&mut cursor);
}

#[test]
fn test_moving_past_end_fails() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::start(&mut sequence);
    for _ in 0..3 {
        cursor.to_next().unwrap();
    }
    // Three moves from the start land on the last element, not past it.
    assert_eq!(cursor.element(), Ok(&3));
    assert!(!cursor.at_end());

    cursor.to_next().unwrap();
    assert!(cursor.at_end());
    assert_eq!(
        cursor.to_next(),
        Err(Error::InvalidPosition(InvalidPosition::PastEnd))
    );
    assert!(cursor.at_end());
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_remove_twice_fails() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::first(&mut sequence).unwrap();
    cursor.remove_at().unwrap();
    assert_eq!(
        cursor.remove_at(),
        Err(Error::InvalidPosition(InvalidPosition::Removed))
    );
    assert_eq!(contents(&sequence), [2, 3]);
}

#[test]
fn test_state_after_remove() {
    let mut sequence = array(&[1, 2, 3, 4, 5]);
    let mut cursor = Traverser::at_index(&mut sequence, 1).unwrap();
    cursor.remove_at().unwrap();

    assert_eq!(contents(cursor.sequence()), [1, 3, 4, 5]);
    assert_eq!(cursor.element(), Ok(&2));
    assert_eq!(
        cursor.index(),
        Err(Error::InvalidPosition(InvalidPosition::Removed))
    );
    assert_eq!(
        cursor.set_element(7),
        Err(Error::InvalidPosition(InvalidPosition::Removed))
    );
    assert!(!cursor.at_start());
    assert!(!cursor.at_end());
    assert_eq!(contents(&sequence), [1, 3, 4, 5]);
}

#[test]
fn test_to_next_after_remove_visits_shifted_element() {
    let mut sequence = array(&[1, 2, 3, 4, 5]);
    let mut cursor = Traverser::at_index(&mut sequence, 1).unwrap();
    cursor.remove_at().unwrap();
    cursor.to_next().unwrap();
    assert_eq!(cursor.index(), Ok(1));
    assert_eq!(cursor.element(), Ok(&3));
}

#[test]
fn test_to_previous_after_remove() {
    let mut sequence = array(&[1, 2, 3, 4, 5]);
    let mut cursor = Traverser::at_index(&mut sequence, 1).unwrap();
    cursor.remove_at().unwrap();
    cursor.to_previous().unwrap();
    assert_eq!(cursor.index(), Ok(0));
    assert_eq!(cursor.element(), Ok(&1));
}

#[test]
fn test_remove_first_element_ghost_is_at_start() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::first(&mut sequence).unwrap();
    cursor.remove_at().unwrap();
    assert!(cursor.at_start());
    assert!(!cursor.at_end());

    cursor.to_previous().unwrap();
    assert_eq!(cursor.state(), State::Start);
    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&2));
}

#[test]
fn test_remove_last_element_ghost_is_at_end() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::last(&mut sequence).unwrap();
    cursor.remove_at().unwrap();
    assert!(!cursor.at_start());
    assert!(cursor.at_end());
    assert_eq!(cursor.element(), Ok(&3));

    cursor.to_next().unwrap();
    assert_eq!(cursor.state(), State::End);
    cursor.to_previous().unwrap();
    assert_eq!(cursor.element(), Ok(&2));
    assert_eq!(cursor.index(), Ok(1));
}

// ============================================================================
// Insertion
// ============================================================================

#[test]
fn test_insert_before_keeps_conceptual_element() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::at_index(&mut sequence, 1).unwrap();
    cursor.insert_before(10).unwrap();
    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&2));
    assert_eq!(cursor.index(), Ok(2));
    assert_eq!(contents(&sequence), [1, 10, 2, 3]);
}

#[test]
fn test_insert_after_keeps_conceptual_element() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::at_index(&mut sequence, 1).unwrap();
    cursor.insert_after(10).unwrap();
    assert_eq!(cursor.state(), State::Boundary);

    cursor.to_previous().unwrap();
    assert_eq!(cursor.element(), Ok(&2));
    assert_eq!(cursor.index(), Ok(1));
    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&10));
    assert_eq!(contents(&sequence), [1, 2, 10, 3]);
}

#[test]
fn test_insert_before_at_start() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::start(&mut sequence);
    cursor.insert_before(0).unwrap();

    assert_eq!(contents(cursor.sequence()), [0, 1, 2, 3]);
    assert!(cursor.index().is_err());
    assert!(!cursor.on_element());
    assert!(!cursor.on_index());
    assert!(!cursor.at_start());

    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&1));
}

#[test]
fn test_insert_after_at_start() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::start(&mut sequence);
    cursor.insert_after(0).unwrap();

    assert_eq!(contents(cursor.sequence()), [0, 1, 2, 3]);
    assert!(cursor.index().is_err());
    assert!(!cursor.on_element());
    assert!(cursor.at_start());

    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&0));
}

#[test]
fn test_insert_before_at_end() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::end(&mut sequence);
    cursor.insert_before(4).unwrap();

    assert_eq!(contents(cursor.sequence()), [1, 2, 3, 4]);
    assert!(cursor.index().is_err());
    assert!(!cursor.on_element());
    assert!(cursor.at_end());

    cursor.to_previous().unwrap();
    assert_eq!(cursor.element(), Ok(&4));
}

#[test]
fn test_insert_after_at_end() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::end(&mut sequence);
    cursor.insert_after(4).unwrap();

    assert_eq!(contents(cursor.sequence()), [1, 2, 3, 4]);
    assert!(cursor.index().is_err());
    assert!(!cursor.on_element());
    assert!(!cursor.at_end());

    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&4));
    assert_eq!(cursor.index(), Ok(3));
}

#[test]
fn test_insert_after_remove() {
    let mut sequence = array(&[1, 2, 3, 4, 5]);
    let mut cursor = Traverser::at_index(&mut sequence, 1).unwrap();
    cursor.remove_at().unwrap();

    cursor.insert_before(10).unwrap();
    cursor.insert_before(20).unwrap();
    cursor.insert_after(30).unwrap();

    assert_eq!(contents(cursor.sequence()), [1, 10, 20, 30, 3, 4, 5]);
    assert_eq!(
        cursor.element(),
        Err(Error::InvalidPosition(InvalidPosition::NotOnElement))
    );
    assert_eq!(
        cursor.set_element(7),
        Err(Error::InvalidPosition(InvalidPosition::NotOnIndex))
    );

    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&30));
    assert_eq!(contents(&sequence), [1, 10, 20, 30, 3, 4, 5]);
}

#[test]
fn test_build_from_empty_with_insertions() {
    let mut sequence = array(&[]);
    let mut cursor = Traverser::start(&mut sequence);

    cursor.insert_before(1).unwrap();
    assert!(!cursor.at_start());
    assert!(cursor.at_end());
    assert!(!cursor.on_element());
    assert_eq!(contents(cursor.sequence()), [1]);

    cursor.insert_after(2).unwrap();
    assert!(!cursor.at_start());
    assert!(!cursor.at_end());
    assert!(!cursor.on_element());
    assert_eq!(contents(cursor.sequence()), [1, 2]);

    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&2));
    assert_eq!(cursor.index(), Ok(1));

    cursor.to_next().unwrap();
    assert!(cursor.at_end());

    cursor.insert_before(3).unwrap();
    assert!(cursor.at_end());
    cursor.insert_after(4).unwrap();
    assert!(!cursor.at_end());
    assert_eq!(contents(cursor.sequence()), [1, 2, 3, 4]);

    cursor.to_previous().unwrap();
    assert_eq!(cursor.element(), Ok(&3));
    assert_eq!(cursor.index(), Ok(2));

    cursor.to_next().unwrap();
    assert_eq!(cursor.element(), Ok(&4));
    assert_eq!(cursor.index(), Ok(3));

    cursor.to_next().unwrap();
    assert!(cursor.at_end());
    cursor.to_previous().unwrap();
    cursor.remove_at().unwrap();
    assert!(cursor.at_end());
    assert_eq!(cursor.element(), Ok(&4));
    assert_eq!(contents(cursor.sequence()), [1, 2, 3]);
}

#[test]
fn test_element_mut_edits_in_place() {
    let mut sequence = array(&[1, 2, 3]);
    let mut cursor = Traverser::new(&mut sequence);
    while !cursor.at_end() {
        *cursor.element_mut().unwrap() *= 10;
        cursor.to_next().unwrap();
    }
    assert_eq!(contents(&sequence), [10, 20, 30]);
}

#[test]
fn test_debug_shows_position() {
    let mut sequence = array(&[1, 2]);
    let cursor = Traverser::at_index(&mut sequence, 1).unwrap();
    assert_eq!(
        alloc::format!("{cursor:?}"),
        "Traverser { position: Element(1), len: 2 }"
    );
}
