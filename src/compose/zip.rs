//! Walking two sequences side by side.

use crate::{Sequence, SeqError, error::Result};

/// Pairs elements of two sequences advanced in lockstep.
///
/// Exhausted as soon as either side is.
#[derive(Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Create a sequence of `(a, b)` pairs.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = zip(seq(['a', 'b', 'c']), seq(1..));
/// assert_eq!(
///     pairs.into_iter().collect::<Vec<_>>(),
///     vec![('a', 1), ('b', 2), ('c', 3)]
/// );
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    Zip { a, b }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);

    fn has_more(&mut self) -> bool {
        self.a.has_more() && self.b.has_more()
    }

    fn current(&mut self) -> Result<Self::Item> {
        if !self.has_more() {
            return Err(SeqError::EndOfSequence);
        }
        Ok((self.a.current()?, self.b.current()?))
    }

    fn advance(&mut self) {
        if self.has_more() {
            self.a.advance();
            self.b.advance();
        }
    }
}
