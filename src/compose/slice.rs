//! Positional selection: start, stop and step over a sequence.

use crate::{Sequence, SeqError, error::Result};

/// The `stop` value meaning "no upper bound".
pub const UNBOUNDED: i64 = -1;

/// Yields the elements at positions `start, start + step, ...` below `stop`.
///
/// Positions count elements of the wrapped sequence from zero. Skipping to
/// `start` happens on the first pull, not at construction, and the element
/// at position `stop` is never pulled, so a bounded slice over an infinite
/// sequence terminates.
#[derive(Clone)]
pub struct Slice<S> {
    seq: S,
    skip: usize,
    stop: Option<usize>,
    step: usize,
    pos: usize,
}

/// Create a slice of `seq`.
///
/// `stop` is exclusive; pass [`UNBOUNDED`] to run until `seq` is exhausted.
/// Fails with [`SeqError::InvalidArgument`] when `step < 1` or
/// `stop < UNBOUNDED`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let every_other = slice(seq(1..=10), 0, UNBOUNDED, 2).unwrap();
/// assert_eq!(every_other.into_iter().collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
///
/// assert!(slice(seq(1..=10), 0, -2, 1).is_err());
/// ```
pub fn slice<S>(seq: S, start: usize, stop: i64, step: i64) -> Result<Slice<S>>
where
    S: Sequence,
{
    if step < 1 {
        return Err(SeqError::InvalidArgument("slice step must be at least 1"));
    }
    if stop < UNBOUNDED {
        return Err(SeqError::InvalidArgument(
            "slice stop must be non-negative or UNBOUNDED",
        ));
    }
    let step = usize::try_from(step)
        .map_err(|_| SeqError::InvalidArgument("slice step does not fit in usize"))?;
    let stop = match stop {
        UNBOUNDED => None,
        stop => Some(
            usize::try_from(stop)
                .map_err(|_| SeqError::InvalidArgument("slice stop does not fit in usize"))?,
        ),
    };

    Ok(Slice {
        seq,
        skip: start,
        stop,
        step,
        pos: 0,
    })
}

/// The first `stop` elements of `seq`; shorthand for `slice(seq, 0, stop, 1)`.
pub fn slice_to<S>(seq: S, stop: i64) -> Result<Slice<S>>
where
    S: Sequence,
{
    slice(seq, 0, stop, 1)
}

impl<S> Slice<S>
where
    S: Sequence,
{
    fn in_bounds(&mut self) -> bool {
        let pos = self.pos;
        self.stop.is_none_or(|stop| pos < stop) && self.seq.has_more()
    }

    fn skip_to_start(&mut self) {
        while self.skip > 0 && self.in_bounds() {
            self.seq.advance();
            self.pos += 1;
            self.skip -= 1;
        }
    }
}

impl<S> Sequence for Slice<S>
where
    S: Sequence,
{
    type Item = S::Item;

    fn has_more(&mut self) -> bool {
        self.skip_to_start();
        self.in_bounds()
    }

    fn current(&mut self) -> Result<Self::Item> {
        if self.has_more() {
            self.seq.current()
        } else {
            Err(SeqError::EndOfSequence)
        }
    }

    fn advance(&mut self) {
        self.skip_to_start();
        for _ in 0..self.step {
            if !self.in_bounds() {
                break;
            }
            self.seq.advance();
            self.pos += 1;
        }
    }
}
