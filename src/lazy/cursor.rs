use crate::{Sequence, SeqError, error::Result};

use super::LazyList;

/// A position in a [`LazyList`], read as a [`Sequence`].
///
/// Cursors only borrow the list, so any number of them can walk it at once;
/// elements are produced by whichever cursor reaches them first and replayed
/// from the cache for the rest.
pub struct Cursor<'l, 'a, T> {
    list: &'l LazyList<'a, T>,
    pos: usize,
}

impl<'l, 'a, T> Cursor<'l, 'a, T> {
    pub(super) fn new(list: &'l LazyList<'a, T>) -> Self {
        Self { list, pos: 0 }
    }

    /// Index of the element `current` would return.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<T> Clone for Cursor<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            pos: self.pos,
        }
    }
}

impl<T> Sequence for Cursor<'_, '_, T>
where
    T: Clone,
{
    type Item = T;

    /// `false` only when the position is out of range. Any other failure to
    /// produce it counts as "more", so that `current` can hand out the error.
    fn has_more(&mut self) -> bool {
        !matches!(
            self.list.force(self.pos),
            Err(SeqError::IndexOutOfRange { .. })
        )
    }

    fn current(&mut self) -> Result<Self::Item> {
        self.list.get(self.pos).map_err(|err| match err {
            SeqError::IndexOutOfRange { .. } => SeqError::EndOfSequence,
            other => other,
        })
    }

    /// Stays put on a position that failed to produce.
    fn advance(&mut self) {
        if self.list.force(self.pos).is_ok() {
            self.pos += 1;
        }
    }
}
