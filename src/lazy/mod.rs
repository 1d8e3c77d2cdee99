//! A memoizing, optionally self-extending list.
//!
//! A [`LazyList`] caches every element it ever produces. Elements come first
//! from a finite source sequence and then, once that runs dry, from a bound
//! continuation. The continuation is handed the list itself, so it can read
//! earlier elements while the list is being extended:
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut fibs = lazy_list(seq([0u64, 1]));
//! fibs.append(|fibs, n| Ok(Step::Yielded(fibs.get(n - 2)? + fibs.get(n - 1)?)))
//!     .unwrap();
//!
//! assert_eq!(fibs.get(10), Ok(55));
//! let first: Vec<_> = fibs.slice(0, 10, 1).unwrap().into_iter().collect();
//! assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
//! ```
//!
//! Self-reference is an index read into the same cache, not a stored
//! back-pointer. The caller is responsible for only reading indices below the
//! one being produced; a continuation that asks for its own index (or a later
//! one) gets [`SeqError::IndexOutOfRange`] from that inner lookup.

mod cursor;

use std::cell::{Cell, Ref, RefCell};
use std::fmt;

pub use cursor::Cursor;

use crate::{
    Sequence, SeqError, Step,
    compose::{Slice, slice},
    error::Result,
};

/// Where a [`LazyList`] is in its binding lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListState {
    /// No continuation yet; elements come from the source only.
    Unbound,
    /// A lookup ran past the drained source with nothing bound. Terminal for
    /// binding: [`LazyList::append`] now fails with [`SeqError::TooLate`].
    AwaitingBinding,
    /// A continuation is attached and has not signalled the end.
    Bound,
    /// The continuation signalled the end; the cache is final.
    Exhausted,
}

type Source<'a, T> = Box<dyn Sequence<Item = T> + 'a>;
type Continuation<'a, T> = Box<dyn FnMut(&LazyList<'a, T>, usize) -> Result<Step<T, ()>> + 'a>;

/// A producer slot that is vacated while its producer runs.
enum Slot<P> {
    Ready(P),
    Busy,
    Empty,
}

impl<P> Slot<P> {
    fn take(&mut self) -> Option<P> {
        match std::mem::replace(self, Slot::Busy) {
            Slot::Ready(p) => Some(p),
            other => {
                *self = other;
                None
            }
        }
    }
}

/// An append-only cache over a source sequence and an optional continuation.
///
/// Every position is produced by exactly one call into the source or the
/// continuation over the lifetime of the list; later lookups are plain index
/// reads. Single-threaded: the list uses interior mutability and is neither
/// `Send` nor `Sync`.
pub struct LazyList<'a, T> {
    cache: RefCell<Vec<T>>,
    source: RefCell<Slot<Source<'a, T>>>,
    continuation: RefCell<Slot<Continuation<'a, T>>>,
    state: Cell<ListState>,
}

/// Build a lazy list seeded from `source`.
pub fn lazy_list<'a, S>(source: S) -> LazyList<'a, S::Item>
where
    S: Sequence + 'a,
{
    LazyList::new(source)
}

impl<'a, T> LazyList<'a, T> {
    pub fn new<S>(source: S) -> Self
    where
        S: Sequence<Item = T> + 'a,
    {
        Self {
            cache: RefCell::new(Vec::new()),
            source: RefCell::new(Slot::Ready(Box::new(source))),
            continuation: RefCell::new(Slot::Empty),
            state: Cell::new(ListState::Unbound),
        }
    }

    /// A list with no source; every element comes from the continuation.
    pub fn empty() -> Self {
        Self {
            cache: RefCell::new(Vec::new()),
            source: RefCell::new(Slot::Empty),
            continuation: RefCell::new(Slot::Empty),
            state: Cell::new(ListState::Unbound),
        }
    }

    /// Bind the continuation that grows the list past its source.
    ///
    /// `next` receives the list and the index it is producing, and returns
    /// `Step::Yielded` with that element or `Step::Complete` to end the list.
    /// Errors it returns propagate out of the lookup that triggered it.
    ///
    /// May be called once, before any lookup has failed for lack of a
    /// binding: fails with [`SeqError::AlreadyBound`] after a previous bind
    /// and with [`SeqError::TooLate`] in [`ListState::AwaitingBinding`].
    ///
    /// ```rust
    /// use lazyseq::prelude::*;
    ///
    /// let mut xs = LazyList::empty();
    /// xs.append(|_, n| Ok(Step::Yielded(n * n))).unwrap();
    /// assert_eq!(xs.get(7), Ok(49));
    /// assert_eq!(
    ///     xs.append(|_, n| Ok(Step::Yielded(n))).err(),
    ///     Some(SeqError::AlreadyBound)
    /// );
    /// ```
    pub fn append<F>(&mut self, next: F) -> Result<&mut Self>
    where
        F: FnMut(&LazyList<'a, T>, usize) -> Result<Step<T, ()>> + 'a,
    {
        match self.state.get() {
            ListState::Unbound => {
                *self.continuation.get_mut() = Slot::Ready(Box::new(next));
                self.state.set(ListState::Bound);
                tracing::debug!(cached = self.cache.get_mut().len(), "lazy list continuation bound");
                Ok(self)
            }
            ListState::AwaitingBinding => Err(SeqError::TooLate),
            ListState::Bound | ListState::Exhausted => Err(SeqError::AlreadyBound),
        }
    }

    pub fn state(&self) -> ListState {
        self.state.get()
    }

    /// Number of elements produced so far. Never forces anything.
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// The elements produced so far. Never forces anything.
    ///
    /// The returned guard must be dropped before the list is forced again.
    pub fn cached(&self) -> Ref<'_, [T]> {
        Ref::map(self.cache.borrow(), Vec::as_slice)
    }

    /// Make sure position `index` is cached, producing elements as needed.
    pub fn force(&self, index: usize) -> Result<()> {
        if index < self.cached_len() {
            return Ok(());
        }

        self.pull_source(index)?;
        if index < self.cached_len() {
            return Ok(());
        }

        match self.state.get() {
            ListState::Unbound if self.source_drained() => {
                self.state.set(ListState::AwaitingBinding);
                tracing::debug!(index, "lazy list ran past its source with nothing bound");
                Err(self.out_of_range(index))
            }
            ListState::Bound if self.source_drained() => self.pull_continuation(index),
            _ => Err(self.out_of_range(index)),
        }
    }

    fn source_drained(&self) -> bool {
        matches!(*self.source.borrow(), Slot::Empty)
    }

    fn out_of_range(&self, index: usize) -> SeqError {
        SeqError::IndexOutOfRange {
            index,
            available: self.cached_len(),
        }
    }

    fn pull_source(&self, index: usize) -> Result<()> {
        let taken = self.source.borrow_mut().take();
        let Some(mut source) = taken else {
            return Ok(());
        };

        let mut result = Ok(());
        let mut drained = false;
        while self.cached_len() <= index {
            if !source.has_more() {
                drained = true;
                break;
            }
            match source.current() {
                Ok(item) => {
                    source.advance();
                    self.cache.borrow_mut().push(item);
                }
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }
        tracing::trace!(index, cached = self.cached_len(), drained, "pulled from source");

        *self.source.borrow_mut() = if drained {
            Slot::Empty
        } else {
            Slot::Ready(source)
        };
        result
    }

    fn pull_continuation(&self, index: usize) -> Result<()> {
        let taken = self.continuation.borrow_mut().take();
        let Some(mut next) = taken else {
            // the continuation is running and asked for an element it has
            // not produced yet
            return Err(self.out_of_range(index));
        };

        let mut result = Ok(());
        let mut exhausted = false;
        loop {
            let produced = self.cached_len();
            if produced > index {
                break;
            }
            match next(self, produced) {
                Ok(Step::Yielded(item)) => self.cache.borrow_mut().push(item),
                Ok(Step::Complete(())) => {
                    exhausted = true;
                    break;
                }
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }
        tracing::trace!(index, cached = self.cached_len(), "pulled from continuation");

        if exhausted {
            *self.continuation.borrow_mut() = Slot::Empty;
            self.state.set(ListState::Exhausted);
            tracing::debug!(len = self.cached_len(), "lazy list continuation exhausted");
        } else {
            *self.continuation.borrow_mut() = Slot::Ready(next);
        }

        result?;
        if index < self.cached_len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }
}

impl<'a, T> LazyList<'a, T>
where
    T: Clone,
{
    /// The element at `index`, producing it (and everything before it) first
    /// if it is not cached yet.
    ///
    /// Fails with [`SeqError::IndexOutOfRange`] when neither the source nor
    /// the continuation can reach `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.force(index)?;
        Ok(self.cache.borrow()[index].clone())
    }

    /// A sequence over the list from position 0.
    ///
    /// Iterating is equivalent to calling [`get`](LazyList::get) with
    /// increasing indices until one is out of range. Any other error from the
    /// source or continuation is handed out by the cursor's `current`.
    pub fn iter(&self) -> Cursor<'_, 'a, T> {
        Cursor::new(self)
    }

    /// A [`Slice`] over the list's elements; see [`slice`](crate::slice).
    pub fn slice(&self, start: usize, stop: i64, step: i64) -> Result<Slice<Cursor<'_, 'a, T>>> {
        slice(self.iter(), start, stop, step)
    }

    /// The first `stop` elements; shorthand for `slice(0, stop, 1)`.
    pub fn slice_to(&self, stop: i64) -> Result<Slice<Cursor<'_, 'a, T>>> {
        self.slice(0, stop, 1)
    }
}

impl<'l, 'a, T> IntoIterator for &'l LazyList<'a, T>
where
    T: Clone,
{
    type Item = T;
    type IntoIter = crate::SeqIter<Cursor<'l, 'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        crate::SeqIter::new(self.iter())
    }
}

impl<T> fmt::Debug for LazyList<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyList")
            .field("state", &self.state.get())
            .field("cached", &&*self.cache.borrow())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build::seq, generator};
    use std::rc::Rc;

    fn fibs<'a>() -> LazyList<'a, u64> {
        let mut fibs = lazy_list(seq([0u64, 1]));
        fibs.append(|fibs, n| Ok(Step::Yielded(fibs.get(n - 2)? + fibs.get(n - 1)?)))
            .unwrap();
        fibs
    }

    #[test]
    fn test_fibonacci_by_index_and_slice() {
        let fibs = fibs();
        assert_eq!(fibs.get(10), Ok(55));
        assert_eq!(fibs.cached_len(), 11);

        let first: Vec<_> = fibs.slice(0, 10, 1).unwrap().into_iter().collect();
        assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);

        let evens: Vec<_> = fibs.slice(0, 17, 2).unwrap().into_iter().collect();
        assert_eq!(evens, vec![0, 1, 3, 8, 21, 55, 144, 377, 987]);
    }

    #[test]
    fn test_bounded_replay_of_endless_list_stays_bounded() {
        let fibs = fibs();
        fibs.force(90).unwrap();
        let sum: u64 = fibs.slice_to(91).unwrap().into_iter().sum();
        assert_eq!(sum, 7_540_113_804_746_346_428);
        assert_eq!(fibs.cached_len(), 91);
    }

    #[test]
    fn test_source_only_list() {
        let squares = lazy_list(seq(1..=10).map(|x| x * x));
        assert_eq!(squares.get(3), Ok(16));
        assert_eq!(squares.get(6), Ok(49));
        assert_eq!(squares.cached_len(), 7);
        assert_eq!(squares.state(), ListState::Unbound);

        let all: Vec<_> = squares.iter().into_iter().collect();
        assert_eq!(all.len(), 10);
        assert_eq!(squares.state(), ListState::AwaitingBinding);
    }

    #[test]
    fn test_out_of_range_reports_available() {
        let xs = lazy_list(seq([1, 2, 3]));
        assert_eq!(
            xs.get(5),
            Err(SeqError::IndexOutOfRange {
                index: 5,
                available: 3
            })
        );
    }

    #[test]
    fn test_append_after_failed_lookup_is_too_late() {
        let mut xs = lazy_list(seq([1, 2]));
        assert!(xs.get(2).is_err());
        assert_eq!(xs.state(), ListState::AwaitingBinding);
        assert_eq!(
            xs.append(|_, _| Ok(Step::Yielded(0))).err(),
            Some(SeqError::TooLate)
        );
    }

    #[test]
    fn test_append_after_draining_without_failure_is_allowed() {
        let mut xs = lazy_list(seq([1, 2]));
        assert_eq!(xs.get(1), Ok(2));
        xs.append(|_, n| Ok(Step::Yielded(n + 1))).unwrap();
        assert_eq!(xs.get(4), Ok(5));
    }

    #[test]
    fn test_append_twice_is_already_bound() {
        let mut xs = fibs();
        assert_eq!(
            xs.append(|_, _| Ok(Step::Yielded(0))).err(),
            Some(SeqError::AlreadyBound)
        );
    }

    #[test]
    fn test_append_after_exhaustion_is_already_bound() {
        let mut xs = LazyList::empty();
        xs.append(|_, n| Ok(if n < 3 { Step::Yielded(n) } else { Step::Complete(()) }))
            .unwrap();

        assert_eq!(xs.iter().into_iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(xs.state(), ListState::Exhausted);
        assert!(xs.get(3).is_err());
        assert_eq!(
            xs.append(|_, _| Ok(Step::Yielded(9))).err(),
            Some(SeqError::AlreadyBound)
        );
    }

    #[test]
    fn test_each_position_produced_once() {
        let source_pulls = Rc::new(Cell::new(0));
        let continuation_calls = Rc::new(Cell::new(0));

        let pulls = Rc::clone(&source_pulls);
        let mut xs = lazy_list(seq((0..3).inspect(move |_| pulls.set(pulls.get() + 1))));
        let calls = Rc::clone(&continuation_calls);
        xs.append(move |_, n| {
            calls.set(calls.get() + 1);
            Ok(Step::Yielded(n * 10))
        })
        .unwrap();

        for _ in 0..3 {
            assert_eq!(xs.get(5), Ok(50));
            assert_eq!(xs.get(1), Ok(1));
            let prefix: Vec<_> = xs.slice_to(6).unwrap().into_iter().collect();
            assert_eq!(prefix, vec![0, 1, 2, 30, 40, 50]);
        }
        assert_eq!(source_pulls.get(), 3);
        assert_eq!(continuation_calls.get(), 3);
    }

    #[test]
    fn test_continuation_reading_its_own_index_fails_instead_of_recursing() {
        let mut xs = lazy_list(seq([1]));
        xs.append(|xs, n| Ok(Step::Yielded(xs.get(n)?))).unwrap();

        assert_eq!(
            xs.get(1),
            Err(SeqError::IndexOutOfRange {
                index: 1,
                available: 1
            })
        );
        assert_eq!(xs.state(), ListState::Bound);
        assert_eq!(xs.get(0), Ok(1));
    }

    #[test]
    fn test_list_over_a_list() {
        let fibs = fibs();
        let squares = lazy_list(fibs.iter().map(|x| x * x));
        let first: Vec<_> = squares.slice_to(10).unwrap().into_iter().collect();
        assert_eq!(first, vec![0, 1, 1, 4, 9, 25, 64, 169, 441, 1156]);

        let again = lazy_list(fibs.iter());
        let copy: Vec<_> = again.slice_to(15).unwrap().into_iter().collect();
        let original: Vec<_> = fibs.slice_to(15).unwrap().into_iter().collect();
        assert_eq!(copy, original);
    }

    #[test]
    fn test_counter_continuation_with_external_state() {
        let mut x = 0;
        let mut xs = LazyList::empty();
        xs.append(move |_, _| {
            x += 1;
            Ok(if x > 10 { Step::Complete(()) } else { Step::Yielded(x) })
        })
        .unwrap();

        let upto_ten: Vec<_> = (&xs).into_iter().collect();
        assert_eq!(upto_ten, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_generator_source() {
        let mut n = 0;
        let xs = lazy_list(generator(move || {
            n += 1;
            Step::<_, ()>::Yielded(n)
        }));
        assert_eq!(xs.get(99), Ok(100));
        assert_eq!(xs.cached()[..3], [1, 2, 3]);
    }

    #[test]
    fn test_debug_shows_state_and_cache() {
        let xs = lazy_list(seq([7, 8]));
        xs.force(0).unwrap();
        assert_eq!(format!("{xs:?}"), "LazyList { state: Unbound, cached: [7], .. }");
    }
}
