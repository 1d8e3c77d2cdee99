use std::iter::Peekable;

use crate::{Sequence, SeqError, error::Result};

/// A standard iterator viewed as a [`Sequence`].
///
/// Keeps one element of lookahead so `has_more` can be answered without
/// losing it. Cloning duplicates the position along with the iterator.
pub struct IterSeq<I>
where
    I: Iterator,
{
    iter: Peekable<I>,
}

impl<I> Clone for IterSeq<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
        }
    }
}

/// Wrap anything iterable as a base sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let owned = seq(vec![1, 2, 3]);
/// let borrowed = seq(&[4, 5]).map(|x| *x);
/// let all: Vec<i32> = owned.chain(borrowed).into_iter().collect();
/// assert_eq!(all, vec![1, 2, 3, 4, 5]);
/// ```
pub fn seq<I>(iterable: I) -> IterSeq<I::IntoIter>
where
    I: IntoIterator,
{
    IterSeq {
        iter: iterable.into_iter().peekable(),
    }
}

/// The sequence with no elements.
pub fn empty<T>() -> IterSeq<std::iter::Empty<T>> {
    seq(std::iter::empty())
}

impl<I> Sequence for IterSeq<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn has_more(&mut self) -> bool {
        self.iter.peek().is_some()
    }

    fn current(&mut self) -> Result<Self::Item> {
        self.iter.peek().cloned().ok_or(SeqError::EndOfSequence)
    }

    fn advance(&mut self) {
        self.iter.next();
    }
}
