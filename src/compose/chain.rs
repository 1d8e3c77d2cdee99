use crate::{Sequence, error::Result};

/// Yield every element of `a`, then every element of `b`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let xs = chain(seq([1, 2]), chain(seq([3]), seq([4, 5])));
/// assert_eq!(xs.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn chain<A, B>(a: A, b: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Chain(Some(a), b)
}

/// Two sequences back to back.
///
/// Created via [`chain`] or [`Sequence::chain`]. The first sequence is
/// dropped as soon as it is found exhausted.
#[derive(Clone)]
pub struct Chain<A, B>(Option<A>, B);

impl<A, B> Chain<A, B>
where
    A: Sequence,
{
    /// The first sequence while it still has elements.
    fn front(&mut self) -> Option<&mut A> {
        if self.0.as_mut().is_some_and(|a| !a.has_more()) {
            self.0 = None; // we drop the first sequence when it's done
        }
        self.0.as_mut()
    }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;

    fn has_more(&mut self) -> bool {
        self.front().is_some() || self.1.has_more()
    }

    fn current(&mut self) -> Result<Self::Item> {
        if let Some(a) = self.front() {
            return a.current();
        }
        self.1.current()
    }

    fn advance(&mut self) {
        match self.front() {
            Some(a) => a.advance(),
            None => self.1.advance(),
        }
    }
}
