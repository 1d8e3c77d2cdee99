/// Result of resuming a step function: either a produced value or completion.
///
/// `Step` is what [`Resumable`](crate::Resumable) step functions and lazy-list
/// continuations return. `Yielded` hands the next element to the consumer,
/// `Complete` signals that no more elements follow and carries a final value
/// (usually `()`).
///
/// # Examples
///
/// ```rust
/// use lazyseq::Step;
///
/// let produced: Step<i32, ()> = Step::Yielded(42);
/// let finished: Step<i32, ()> = Step::Complete(());
///
/// assert_eq!(produced.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(finished.is_complete());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, D> {
    /// Produced the next element
    Yielded(Y),
    /// No more elements; carries the final value
    Complete(D),
}

impl<Y, D> Step<Y, D> {
    /// Returns `true` if the step is `Yielded`.
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Complete`.
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }

    /// Converts into the yielded element, discarding a completion value.
    ///
    /// ```rust
    /// use lazyseq::Step;
    ///
    /// assert_eq!(Step::<i32, &str>::Yielded(7).yielded_value(), Some(7));
    /// assert_eq!(Step::<i32, &str>::Complete("done").yielded_value(), None);
    /// ```
    #[inline]
    pub fn yielded_value(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Complete(_) => None,
        }
    }

    /// Converts into the completion value, discarding a yielded element.
    #[inline]
    pub fn complete_value(self) -> Option<D> {
        match self {
            Step::Yielded(_) => None,
            Step::Complete(d) => Some(d),
        }
    }

    /// Maps the yielded element, leaving a completion untouched.
    #[inline]
    pub fn map_yielded<Y2, F>(self, f: F) -> Step<Y2, D>
    where
        F: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(f(y)),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    /// Maps the completion value, leaving a yielded element untouched.
    #[inline]
    pub fn map_complete<D2, F>(self, f: F) -> Step<Y, D2>
    where
        F: FnOnce(D) -> D2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(f(d)),
        }
    }

    #[inline]
    pub const fn as_ref(&self) -> Step<&Y, &D> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Complete(d) => Step::Complete(d),
        }
    }

    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Complete(_) => panic!("called `Step::unwrap_yielded()` on a `Complete` value"),
        }
    }

    #[inline]
    pub fn unwrap_complete(self) -> D {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_complete()` on a `Yielded` value"),
            Step::Complete(d) => d,
        }
    }
}

/// `Some(y)` yields, `None` completes.
///
/// Lets closures written against `Option` serve as step functions:
///
/// ```rust
/// use lazyseq::Step;
///
/// let mut n = 3;
/// let mut countdown = move || -> Step<i32, ()> {
///     let cur = n;
///     n -= 1;
///     (cur > 0).then_some(cur).into()
/// };
/// assert_eq!(countdown(), Step::Yielded(3));
/// ```
impl<Y> From<Option<Y>> for Step<Y, ()> {
    fn from(value: Option<Y>) -> Self {
        match value {
            Some(y) => Step::Yielded(y),
            None => Step::Complete(()),
        }
    }
}
