//! Bridging sequences into standard iterators.
//!
//! [`SeqIter`] drives any [`Sequence`] through `has_more`/`current`/`advance`
//! and swallows the routine end-of-sequence signal, so pipelines can be used
//! with `for` loops and the whole `Iterator` toolbox. Any other error ends the
//! iteration and is kept for [`SeqIter::take_error`]; use
//! [`try_collect`](crate::drive::try_collect) to get it as a `Result`.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut total = 0;
//! for x in seq([1, 2, 3]).chain(seq([4, 5])).into_iter() {
//!     total += x;
//! }
//! assert_eq!(total, 15);
//! ```

use crate::{SeqError, Sequence};

/// Iterator adapter for any [`Sequence`].
///
/// Calls [`Sequence::current`] exactly once per produced element. Both
/// `SeqIter` and `&mut SeqIter` implement `Iterator`, so a partially consumed
/// iterator can be handed back with [`into_inner`](SeqIter::into_inner).
#[derive(Clone)]
pub struct SeqIter<S> {
    seq: S,
    error: Option<SeqError>,
}

impl<S> SeqIter<S>
where
    S: Sequence,
{
    pub fn new(seq: S) -> Self {
        Self { seq, error: None }
    }

    /// Whether the underlying sequence is exhausted.
    pub fn is_complete(&mut self) -> bool {
        !self.seq.has_more()
    }

    /// Give back the sequence, positioned after the last yielded element.
    pub fn into_inner(self) -> S {
        self.seq
    }

    pub fn get_ref(&self) -> &S {
        &self.seq
    }

    /// The error that ended iteration early, if any.
    ///
    /// Once an error is recorded the iterator yields nothing more until it
    /// is taken.
    pub fn take_error(&mut self) -> Option<SeqError> {
        self.error.take()
    }
}

impl<S> Iterator for SeqIter<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() || !self.seq.has_more() {
            return None;
        }
        match self.seq.current() {
            Ok(item) => {
                self.seq.advance();
                Some(item)
            }
            Err(err) => {
                if !err.is_end() {
                    tracing::debug!(%err, "sequence failed during iteration");
                    self.error = Some(err);
                }
                None
            }
        }
    }
}
