//! Dropping elements by predicate.

use crate::{Sequence, SeqError, error::Result};

/// Yields only the elements for which the predicate holds.
///
/// Looks ahead by exactly one passing element so [`has_more`] can be
/// answered without losing it; the predicate runs once per element of the
/// wrapped sequence.
///
/// [`has_more`]: Sequence::has_more
pub struct Filter<S, P>
where
    S: Sequence,
{
    pred: P,
    seq: S,
    next: Option<S::Item>,
}

/// Create a sequence of the elements of `seq` satisfying `pred`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let odds = filter(|x: &i32| x % 2 == 1, seq(1..=9));
/// assert_eq!(odds.into_iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
/// ```
pub fn filter<S, P>(pred: P, seq: S) -> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    Filter {
        pred,
        seq,
        next: None,
    }
}

impl<S, P> Clone for Filter<S, P>
where
    S: Sequence + Clone,
    S::Item: Clone,
    P: Clone,
{
    fn clone(&self) -> Self {
        Self {
            pred: self.pred.clone(),
            seq: self.seq.clone(),
            next: self.next.clone(),
        }
    }
}

impl<S, P> Filter<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    fn fill(&mut self) -> Result<()> {
        while self.next.is_none() && self.seq.has_more() {
            let item = self.seq.current()?;
            self.seq.advance();
            if (self.pred)(&item) {
                self.next = Some(item);
            }
        }
        Ok(())
    }
}

impl<S, P> Sequence for Filter<S, P>
where
    S: Sequence,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        match self.fill() {
            Ok(()) => self.next.is_some(),
            Err(err) => !err.is_end(),
        }
    }

    fn current(&mut self) -> Result<Self::Item> {
        self.fill()?;
        self.next.clone().ok_or(SeqError::EndOfSequence)
    }

    fn advance(&mut self) {
        if self.fill().is_ok() {
            self.next = None;
        }
    }
}

/// Yields elements until the predicate first fails, then nothing ever again.
///
/// The predicate runs at most once per position. The element that failed it
/// is discarded along with everything after it.
#[derive(Clone)]
pub struct TakeWhile<S, P> {
    pred: P,
    seq: S,
    checked: bool,
    stopped: bool,
}

/// Create a sequence of the longest prefix of `seq` satisfying `pred`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let small = take_while(|x: &i32| *x < 4, seq([1, 2, 3, 4, 1, 2]));
/// assert_eq!(small.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// ```
pub fn take_while<S, P>(pred: P, seq: S) -> TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile {
        pred,
        seq,
        checked: false,
        stopped: false,
    }
}

impl<S, P> Sequence for TakeWhile<S, P>
where
    S: Sequence,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        if self.stopped || !self.seq.has_more() {
            return false;
        }
        if !self.checked {
            let passes = match self.seq.current() {
                Ok(item) => (self.pred)(&item),
                // left unchecked so `current` hands the error out
                Err(err) => return !err.is_end(),
            };
            self.checked = true;
            self.stopped = !passes;
        }
        !self.stopped
    }

    fn current(&mut self) -> Result<Self::Item> {
        if self.stopped {
            return Err(SeqError::EndOfSequence);
        }
        let item = self.seq.current()?;
        if !self.checked {
            self.checked = true;
            self.stopped = !(self.pred)(&item);
            if self.stopped {
                return Err(SeqError::EndOfSequence);
            }
        }
        Ok(item)
    }

    fn advance(&mut self) {
        if self.has_more() {
            self.seq.advance();
            self.checked = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Step, build::seq, generator};
    use std::cell::Cell;

    #[test]
    fn test_filter_buffers_one_element() {
        let pulled = Cell::new(0);
        let mut evens = seq((1..=10).inspect(|_| pulled.set(pulled.get() + 1)))
            .filter(|x| x % 2 == 0);

        assert!(evens.has_more());
        assert!(evens.has_more());
        assert_eq!(evens.current(), Ok(2));
        assert_eq!(pulled.get(), 2); // nothing past the buffered 2
        evens.advance();
        assert_eq!(evens.current(), Ok(4));
    }

    #[test]
    fn test_filter_predicate_once_per_element() {
        let calls = Cell::new(0);
        let kept = seq(0..10).filter(|x| {
            calls.set(calls.get() + 1);
            *x > 6
        });

        assert_eq!(kept.into_iter().collect::<Vec<_>>(), vec![7, 8, 9]);
        assert_eq!(calls.get(), 10);
    }

    #[test]
    fn test_filter_nothing_passes() {
        let mut none = seq([1, 3, 5]).filter(|x| x % 2 == 0);
        assert!(!none.has_more());
        assert_eq!(none.current(), Err(SeqError::EndOfSequence));
    }

    #[test]
    fn test_take_while_does_not_resume_after_cut() {
        let xs = seq([2, 4, 5, 6, 8]).take_while(|x| x % 2 == 0);
        assert_eq!(xs.into_iter().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_take_while_stops_pulling_infinite_source() {
        let mut n = 0u64;
        let naturals = generator(move || {
            n += 1;
            Step::<_, ()>::Yielded(n)
        });
        let small = naturals.take_while(|x| *x <= 10);
        assert_eq!(small.into_iter().sum::<u64>(), 55);
    }

    #[test]
    fn test_take_while_predicate_once_per_position() {
        let calls = Cell::new(0);
        let mut xs = seq([1, 2, 3]).take_while(|x| {
            calls.set(calls.get() + 1);
            *x < 3
        });

        assert!(xs.has_more());
        assert!(xs.has_more());
        assert_eq!(xs.current(), Ok(1));
        assert_eq!(calls.get(), 1);

        let rest: Vec<_> = xs.by_ref().into_iter().collect();
        assert_eq!(rest, vec![1, 2]);
        assert_eq!(calls.get(), 3);
        assert!(!xs.has_more());
        assert_eq!(calls.get(), 3);
    }

    /// Fails once on its first element, then behaves like `seq([2, 4])`.
    struct FlakyHead {
        failed: bool,
        rest: crate::IterSeq<std::array::IntoIter<i32, 2>>,
    }

    impl Sequence for FlakyHead {
        type Item = i32;

        fn has_more(&mut self) -> bool {
            !self.failed || self.rest.has_more()
        }

        fn current(&mut self) -> Result<i32> {
            if !self.failed {
                self.failed = true;
                return Err(SeqError::TooLate);
            }
            self.rest.current()
        }

        fn advance(&mut self) {
            if self.failed {
                self.rest.advance();
            }
        }
    }

    fn flaky() -> FlakyHead {
        FlakyHead {
            failed: false,
            rest: seq([2, 4]),
        }
    }

    #[test]
    fn test_filter_hands_out_source_error() {
        let mut evens = flaky().filter(|x| x % 2 == 0);
        assert_eq!(evens.current(), Err(SeqError::TooLate));
        assert!(evens.has_more());
        assert_eq!(evens.into_iter().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn test_take_while_error_does_not_cut_for_good() {
        let mut xs = flaky().take_while(|x| *x < 10);
        assert_eq!(xs.current(), Err(SeqError::TooLate));
        assert!(xs.has_more());
        assert_eq!(xs.into_iter().collect::<Vec<_>>(), vec![2, 4]);
    }
}
