//! The pull protocol every sequence in this crate speaks.
//!
//! A [`Sequence`] answers three questions: is there another element
//! ([`has_more`](Sequence::has_more)), what is it
//! ([`current`](Sequence::current)), and move past it
//! ([`advance`](Sequence::advance)). Nothing is computed until one of these
//! is asked, which is what keeps adaptor pipelines lazy even over infinite
//! inputs.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut squares = seq([1, 2, 3]).map(|x| x * x);
//! assert!(squares.has_more());
//! assert_eq!(squares.current(), Ok(1));
//! squares.advance();
//! assert_eq!(squares.into_iter().collect::<Vec<_>>(), vec![4, 9]);
//! ```

use std::{cell::RefCell, rc::Rc};

use crate::{
    compose::{Chain, Filter, Map, Slice, TakeWhile, Zip, chain, filter, map, slice, take_while, zip},
    error::Result,
    iter::SeqIter,
};

/// A stateful, single-pass source of elements.
///
/// Sequences are not restartable: once exhausted they stay exhausted. Use a
/// [`LazyList`](crate::LazyList) when elements must be replayed.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let evens = seq(1..=10).filter(|x| x % 2 == 0).slice_to(3).unwrap();
/// assert_eq!(evens.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
pub trait Sequence {
    type Item;

    /// Whether another element is available.
    ///
    /// Calling this repeatedly without advancing is idempotent. Buffered
    /// sequences may compute one element ahead to answer.
    fn has_more(&mut self) -> bool;

    /// The element at the cursor, without advancing.
    ///
    /// Fails with [`SeqError::EndOfSequence`](crate::SeqError::EndOfSequence)
    /// when [`has_more`](Sequence::has_more) is false.
    fn current(&mut self) -> Result<Self::Item>;

    /// Move past the current element. A no-op once exhausted.
    fn advance(&mut self);

    /// Yield all of `self`, then all of `r`.
    fn chain<R>(self, r: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Sequence<Item = Self::Item>,
    {
        chain(self, r)
    }

    /// Transform each element with `f`.
    fn map<B, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> B,
    {
        map(f, self)
    }

    /// Keep only elements for which `p` holds.
    fn filter<P>(self, p: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        filter(p, self)
    }

    /// Yield elements until `p` first fails, then stop for good.
    fn take_while<P>(self, p: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        take_while(p, self)
    }

    /// Every `step`-th element from position `start` up to (excluding) `stop`.
    ///
    /// `stop` may be [`UNBOUNDED`](crate::UNBOUNDED).
    fn slice(self, start: usize, stop: i64, step: i64) -> Result<Slice<Self>>
    where
        Self: Sized,
    {
        slice(self, start, stop, step)
    }

    /// The first `stop` elements, or all of them if `stop` is
    /// [`UNBOUNDED`](crate::UNBOUNDED).
    fn slice_to(self, stop: i64) -> Result<Slice<Self>>
    where
        Self: Sized,
    {
        slice(self, 0, stop, 1)
    }

    /// Pair elements with those of `r`, stopping at the shorter one.
    fn zip<R>(self, r: R) -> Zip<Self, R>
    where
        Self: Sized,
        R: Sequence,
    {
        zip(self, r)
    }

    /// Borrow this sequence so an adaptor can consume from it without taking
    /// ownership.
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }

    /// Erase the type, so pipelines of different shapes can share a binding.
    fn boxed<'a>(self) -> Box<dyn Sequence<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Drive this sequence as a standard [`Iterator`].
    fn into_iter(self) -> SeqIter<Self>
    where
        Self: Sized,
    {
        SeqIter::new(self)
    }
}

impl<S> Sequence for &'_ mut S
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    fn current(&mut self) -> Result<Self::Item> {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

impl<S> Sequence for Box<S>
where
    S: Sequence + ?Sized,
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        (**self).has_more()
    }

    fn current(&mut self) -> Result<Self::Item> {
        (**self).current()
    }

    fn advance(&mut self) {
        (**self).advance()
    }
}

/// `None` behaves as the empty sequence.
impl<S> Sequence for Option<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.as_mut().is_some_and(|s| s.has_more())
    }

    fn current(&mut self) -> Result<Self::Item> {
        match self {
            Some(s) => s.current(),
            None => Err(crate::SeqError::EndOfSequence),
        }
    }

    fn advance(&mut self) {
        if let Some(s) = self {
            s.advance();
        }
    }
}

impl<L, R> Sequence for either::Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;

    fn has_more(&mut self) -> bool {
        match self {
            either::Either::Left(l) => l.has_more(),
            either::Either::Right(r) => r.has_more(),
        }
    }

    fn current(&mut self) -> Result<Self::Item> {
        match self {
            either::Either::Left(l) => l.current(),
            either::Either::Right(r) => r.current(),
        }
    }

    fn advance(&mut self) {
        match self {
            either::Either::Left(l) => l.advance(),
            either::Either::Right(r) => r.advance(),
        }
    }
}

/// One cursor shared by several consumers on the same thread.
impl<S> Sequence for Rc<RefCell<S>>
where
    S: Sequence,
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.borrow_mut().has_more()
    }

    fn current(&mut self) -> Result<Self::Item> {
        self.borrow_mut().current()
    }

    fn advance(&mut self) {
        self.borrow_mut().advance()
    }
}
