//! Functions for pulling sequences to completion.
//!
//! These are the iteration drivers: they ask each element exactly once and
//! treat the end of the sequence as normal termination. The `try_` drivers
//! hand any other error back to the caller; the plain ones stop at it.

use crate::{Sequence, Step, error::Result, iter::SeqIter};

/// Drive a sequence, handing each element to `handler` until it asks to stop.
///
/// `handler` returns `Step::Yielded(())` to keep going or `Step::Complete(d)`
/// to stop early; `try_drive` returns `Ok(Some(d))` in that case and
/// `Ok(None)` if the sequence ran out first. Errors other than the end of the
/// sequence are returned as they are.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut xs = lazy_list(seq([1, 2]));
/// xs.append(|_, _| Err(SeqError::InvalidArgument("no more input"))).unwrap();
///
/// let mut total = 0;
/// let result = try_drive(xs.iter(), |x| -> Step<(), ()> {
///     total += x;
///     Step::Yielded(())
/// });
/// assert_eq!(result, Err(SeqError::InvalidArgument("no more input")));
/// assert_eq!(total, 3);
/// ```
pub fn try_drive<S, D, H>(mut seq: S, mut handler: H) -> Result<Option<D>>
where
    S: Sequence,
    H: FnMut(S::Item) -> Step<(), D>,
{
    while seq.has_more() {
        let item = match seq.current() {
            Ok(item) => item,
            Err(err) if err.is_end() => break,
            Err(err) => return Err(err),
        };
        seq.advance();
        if let Step::Complete(done) = handler(item) {
            return Ok(Some(done));
        }
    }
    Ok(None)
}

/// Like [`try_drive`], but stops quietly at an error.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut n = 0;
/// let naturals = generator(move || {
///     n += 1;
///     Step::<_, ()>::Yielded(n)
/// });
///
/// let mut seen = Vec::new();
/// let stopped_at = drive(naturals, |x| {
///     if x > 10 {
///         return Step::Complete(x);
///     }
///     seen.push(x);
///     Step::Yielded(())
/// });
/// assert_eq!(stopped_at, Some(11));
/// assert_eq!(seen, (1..=10).collect::<Vec<_>>());
/// ```
pub fn drive<S, D, H>(seq: S, handler: H) -> Option<D>
where
    S: Sequence,
    H: FnMut(S::Item) -> Step<(), D>,
{
    try_drive(seq, handler).unwrap_or_else(|err| {
        tracing::debug!(%err, "sequence failed while driven");
        None
    })
}

/// Hand every element to `f`, stopping at the first error.
pub fn try_for_each<S, F>(seq: S, mut f: F) -> Result<()>
where
    S: Sequence,
    F: FnMut(S::Item),
{
    try_drive(seq, |item| -> Step<(), ()> {
        f(item);
        Step::Yielded(())
    })
    .map(|_| ())
}

/// Hand every element to `f`.
pub fn for_each<S, F>(seq: S, mut f: F)
where
    S: Sequence,
    F: FnMut(S::Item),
{
    drive(seq, |item| -> Step<(), ()> {
        f(item);
        Step::Yielded(())
    });
}

/// Collect the remaining elements, or the first error that is not the end of
/// the sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares: Vec<i32> = try_collect(seq(1..=4).map(|x| x * x)).unwrap();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub fn try_collect<S, C>(seq: S) -> Result<C>
where
    S: Sequence,
    C: FromIterator<S::Item>,
{
    let mut iter = SeqIter::new(seq);
    let collected = (&mut iter).collect();
    match iter.take_error() {
        Some(err) => Err(err),
        None => Ok(collected),
    }
}

/// Number of elements left in `seq`, consuming them.
pub fn count<S>(seq: S) -> usize
where
    S: Sequence,
{
    let mut n = 0;
    for_each(seq, |_| n += 1);
    n
}
