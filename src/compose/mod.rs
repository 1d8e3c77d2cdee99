//! Combining sequences together
//!
//! Every adaptor wraps one or two sequences and is itself a
//! [`Sequence`](crate::Sequence). Adaptors own what they wrap; pass
//! `&mut seq` to let one consume from a sequence you keep using afterwards.

mod chain;
mod filter;
mod map;
mod slice;
mod zip;

pub use chain::{Chain, chain};
pub use filter::{Filter, TakeWhile, filter, take_while};
pub use map::{Map, map};
pub use slice::{Slice, UNBOUNDED, slice, slice_to};
pub use zip::{Zip, zip};
