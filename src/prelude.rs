//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{Resumable, SeqError, Sequence, Step};

// Base sequences
pub use crate::build::{Generator, empty, from_fn, generator, seq};

// Adaptors
pub use crate::compose::{UNBOUNDED, chain, filter, map, slice, slice_to, take_while, zip};

// Memoization
pub use crate::lazy::{LazyList, ListState, lazy_list};

// Drivers
pub use crate::drive::{count, drive, for_each, try_collect, try_drive, try_for_each};
