//! # lazyseq: composable lazy sequences
//!
//! Build pipelines over sequences that compute each element only when it is
//! asked for, and cache them when they must be replayed or refer to
//! themselves.
//!
//! ## Core Pieces
//!
//! - **[`Sequence`]**: the pull protocol (`has_more`, `current`, `advance`)
//! - **Adaptors**: [`chain`], [`map`], [`filter`], [`take_while`], [`slice`], [`zip`]
//! - **[`Generator`]**: drives a [`Resumable`] step function as a sequence
//! - **[`LazyList`]**: memoizing list that can grow from a continuation reading
//!   its own earlier elements
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let mut fibs = lazy_list(seq([0u64, 1]));
//! fibs.append(|fibs, n| Ok(Step::Yielded(fibs.get(n - 2)? + fibs.get(n - 1)?)))
//!     .unwrap();
//!
//! let even_squares: Vec<_> = fibs
//!     .iter()
//!     .take_while(|x| *x < 1000)
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * x)
//!     .into_iter()
//!     .collect();
//! assert_eq!(even_squares, vec![0, 4, 64, 1156, 20736, 372100]);
//! ```
//!
//! Everything here is single-threaded and pull-based: nothing runs ahead of
//! the consumer, and an infinite sequence only terminates when something
//! downstream (a bounded [`slice`] or a [`take_while`]) stops asking.

pub mod build;
pub mod compose;
pub mod drive;
mod error;
mod iter;
pub mod lazy;
pub mod prelude;
mod sequence;
mod step;

pub use build::*;
pub use compose::*;
pub use error::{Result, SeqError};
pub use iter::SeqIter;
pub use lazy::{Cursor, LazyList, ListState, lazy_list};
pub use sequence::Sequence;
pub use step::Step;
