//! Bulk helpers built on the primitive [`Sequence`] operations.

use crate::Sequence;
use traversal_growable_array::OutOfRange;

pub trait SequenceExt: Sequence {
    /// Appends every item in iteration order.
    fn add_range<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = Self::Item>,
    {
        for item in items {
            self.push(item);
        }
    }

    /// Removes `count` consecutive elements starting at `index`.
    ///
    /// The whole range is validated first; on failure nothing is removed.
    /// An empty range is valid anywhere in `0..=len`.
    fn remove_range(&mut self, index: usize, count: usize) -> Result<(), OutOfRange> {
        let len = self.len();
        let out_of_range = OutOfRange::Range {
            start: index,
            count,
            len,
        };
        match index.checked_add(count) {
            Some(end) if end <= len => {}
            _ => return Err(out_of_range),
        }

        for _ in 0..count {
            self.remove_at(index)?;
        }
        tracing::debug!(index, count, len = self.len(), "removed range");
        Ok(())
    }

    /// Clones every element into `dest`, starting at `offset`.
    ///
    /// Fails without touching `dest` if the elements do not fit.
    fn copy_to(&self, dest: &mut [Self::Item], offset: usize) -> Result<(), OutOfRange>
    where
        Self::Item: Clone,
    {
        let len = self.len();
        let target = match offset.checked_add(len) {
            Some(end) if end <= dest.len() => &mut dest[offset..end],
            _ => {
                return Err(OutOfRange::Range {
                    start: offset,
                    count: len,
                    len: dest.len(),
                });
            }
        };

        for (index, slot) in target.iter_mut().enumerate() {
            *slot = self.get(index)?.clone();
        }
        Ok(())
    }
}

impl<S: Sequence + ?Sized> SequenceExt for S {}

#[cfg(test)]
#[path = "extensions_test.rs"]
mod extensions_test;
