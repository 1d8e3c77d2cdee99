//! Transforming the elements of a sequence.

use crate::{Sequence, error::Result};

/// Applies a function to every element of the wrapped sequence.
///
/// Nothing is buffered: `f` runs once per [`current`](Sequence::current)
/// call. [`SeqIter`](crate::SeqIter) and the [`drive`](crate::drive)
/// functions ask for each element once, so `f` runs once per element there;
/// an outer [`TakeWhile`](crate::TakeWhile) asks twice (once to test, once
/// to hand the element out).
#[derive(Clone)]
pub struct Map<S, F> {
    f: F,
    seq: S,
}

/// Create a sequence that yields `f(x)` for each `x` of `seq`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares = map(|x: i32| x * x, seq(1..=4));
/// assert_eq!(squares.into_iter().collect::<Vec<_>>(), vec![1, 4, 9, 16]);
/// ```
pub fn map<B, S, F>(f: F, seq: S) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    Map { f, seq }
}

impl<B, S, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item) -> B,
{
    type Item = B;

    fn has_more(&mut self) -> bool {
        self.seq.has_more()
    }

    fn current(&mut self) -> Result<Self::Item> {
        self.seq.current().map(&mut self.f)
    }

    fn advance(&mut self) {
        self.seq.advance()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SeqError, build::seq};
    use std::cell::Cell;

    #[test]
    fn test_map_preserves_order_and_length() {
        let words = map(|s: &str| s.len(), seq(["a", "bb", "", "dddd"]));
        assert_eq!(words.into_iter().collect::<Vec<_>>(), vec![1, 2, 0, 4]);
    }

    #[test]
    fn test_map_calls_once_per_element_when_iterated() {
        let calls = Cell::new(0);
        let doubled = seq(0..5).map(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });

        assert_eq!(doubled.into_iter().sum::<i32>(), 20);
        assert_eq!(calls.get(), 5);
    }

    #[test]
    fn test_map_calls_once_per_current() {
        let calls = Cell::new(0);
        let mut m = seq([3]).map(|x| {
            calls.set(calls.get() + 1);
            x
        });

        assert!(m.has_more());
        assert_eq!(calls.get(), 0);
        m.current().unwrap();
        m.current().unwrap();
        assert_eq!(calls.get(), 2);
        m.advance();
        assert_eq!(m.current(), Err(SeqError::EndOfSequence));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_clone_duplicates_position_not_source() {
        let mut squares = seq(1..=4).map(|x| x * x);
        squares.advance();
        let copy = squares.clone();

        assert_eq!(squares.into_iter().collect::<Vec<_>>(), vec![4, 9, 16]);
        assert_eq!(copy.into_iter().collect::<Vec<_>>(), vec![4, 9, 16]);
    }
}
