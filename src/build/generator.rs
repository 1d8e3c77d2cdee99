//! Step functions driven as sequences.
//!
//! A [`Resumable`] is anything that can be resumed repeatedly, producing one
//! element per call until it reports [`Step::Complete`]. Closures over
//! mutable state are the common case ([`from_fn`]); state machines with
//! several suspension points implement the trait directly, keeping their
//! resume point and live locals in `self`:
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! // yields 37, then 1, 3, .., 19, then 42
//! enum At { Start, Loop(i32), Done }
//!
//! struct Odds(At);
//!
//! impl Resumable for Odds {
//!     type Yield = i32;
//!     type Return = ();
//!
//!     fn resume(&mut self) -> Step<i32, ()> {
//!         match self.0 {
//!             At::Start => {
//!                 self.0 = At::Loop(1);
//!                 Step::Yielded(37)
//!             }
//!             At::Loop(i) if i < 20 => {
//!                 self.0 = At::Loop(i + 2);
//!                 Step::Yielded(i)
//!             }
//!             At::Loop(_) => {
//!                 self.0 = At::Done;
//!                 Step::Yielded(42)
//!             }
//!             At::Done => Step::Complete(()),
//!         }
//!     }
//! }
//!
//! let values: Vec<_> = Generator::new(Odds(At::Start)).into_iter().collect();
//! assert_eq!(values.first(), Some(&37));
//! assert_eq!(values.last(), Some(&42));
//! assert_eq!(values.len(), 12);
//! ```

use crate::{Sequence, SeqError, Step, error::Result};

/// A step function that can be re-entered after every element it produces.
///
/// Each call continues exactly where the previous one left off. Once
/// `Complete` has been returned the [`Generator`] driving it never calls
/// `resume` again.
pub trait Resumable {
    type Yield;
    type Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return>;
}

pub struct FromFn<F>(F);

impl<Y, D, F> Resumable for FromFn<F>
where
    F: FnMut() -> Step<Y, D>,
{
    type Yield = Y;
    type Return = D;

    fn resume(&mut self) -> Step<Y, D> {
        (self.0)()
    }
}

/// Create a resumable step function from a closure.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut i = 0;
/// let mut tick = from_fn(move || {
///     i += 1;
///     if i < 3 { Step::Yielded(i) } else { Step::Complete(i) }
/// });
/// assert_eq!(tick.resume(), Step::Yielded(1));
/// assert_eq!(tick.resume(), Step::Yielded(2));
/// assert_eq!(tick.resume(), Step::Complete(3));
/// ```
pub fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<R> Resumable for &'_ mut R
where
    R: Resumable + ?Sized,
{
    type Yield = R::Yield;
    type Return = R::Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (**self).resume()
    }
}

impl<R> Resumable for Box<R>
where
    R: Resumable + ?Sized,
{
    type Yield = R::Yield;
    type Return = R::Return;

    fn resume(&mut self) -> Step<Self::Yield, Self::Return> {
        (**self).resume()
    }
}

enum GeneratorState<Y, D> {
    /// Nothing buffered; the next question resumes the step function.
    Pending,
    Peeked(Y),
    Complete(D),
}

/// A [`Resumable`] viewed as a [`Sequence`].
///
/// At most one element is produced ahead of the consumer, so `has_more` can
/// be asked any number of times without resuming the step function twice.
/// The value carried by `Step::Complete` is kept and can be read back with
/// [`return_value`](Generator::return_value).
pub struct Generator<R>
where
    R: Resumable,
{
    step: R,
    state: GeneratorState<R::Yield, R::Return>,
}

/// Drive a closure as a sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let mut i = 10;
/// let countdown = generator(move || {
///     if i == 0 {
///         return Step::Complete(());
///     }
///     i -= 1;
///     Step::Yielded(i + 1)
/// });
/// assert_eq!(countdown.into_iter().collect::<Vec<_>>(), (1..=10).rev().collect::<Vec<_>>());
/// ```
pub fn generator<Y, D, F>(f: F) -> Generator<FromFn<F>>
where
    F: FnMut() -> Step<Y, D>,
{
    Generator::new(from_fn(f))
}

impl<R> Generator<R>
where
    R: Resumable,
{
    pub fn new(step: R) -> Self {
        Self {
            step,
            state: GeneratorState::Pending,
        }
    }

    fn peek(&mut self) {
        if let GeneratorState::Pending = self.state {
            self.state = match self.step.resume() {
                Step::Yielded(y) => GeneratorState::Peeked(y),
                Step::Complete(d) => {
                    tracing::debug!("generator completed");
                    GeneratorState::Complete(d)
                }
            };
        }
    }

    /// Whether the step function has reported completion.
    ///
    /// Does not resume the step function.
    pub fn is_complete(&self) -> bool {
        matches!(self.state, GeneratorState::Complete(_))
    }

    /// The completion value, once the step function has finished.
    pub fn return_value(&self) -> Option<&R::Return> {
        match &self.state {
            GeneratorState::Complete(d) => Some(d),
            _ => None,
        }
    }

    /// Consume the generator and return the completion value if finished.
    pub fn into_return(self) -> Option<R::Return> {
        match self.state {
            GeneratorState::Complete(d) => Some(d),
            _ => None,
        }
    }
}

impl<R> Sequence for Generator<R>
where
    R: Resumable,
    R::Yield: Clone,
{
    type Item = R::Yield;

    fn has_more(&mut self) -> bool {
        self.peek();
        matches!(self.state, GeneratorState::Peeked(_))
    }

    fn current(&mut self) -> Result<Self::Item> {
        self.peek();
        match &self.state {
            GeneratorState::Peeked(y) => Ok(y.clone()),
            _ => Err(SeqError::EndOfSequence),
        }
    }

    fn advance(&mut self) {
        self.peek();
        if let GeneratorState::Peeked(_) = self.state {
            self.state = GeneratorState::Pending;
        }
    }
}
