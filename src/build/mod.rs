//! Building sequences from scratch
//!
//! Base sequences come from standard iterables ([`seq`]) or from step
//! functions driven as generators ([`generator`], [`Generator::new`]).

mod generator;
mod source;

pub use generator::{FromFn, Generator, Resumable, from_fn, generator};
pub use source::{IterSeq, empty, seq};
