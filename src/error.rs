//! Errors raised by sequences, slices and lazy lists.

/// Everything that can go wrong while pulling from a sequence.
///
/// [`SeqError::EndOfSequence`] is routine: it is what [`Sequence::current`]
/// reports past the end, and iteration drivers swallow it. The other kinds
/// are caller mistakes and are meant to propagate.
///
/// [`Sequence::current`]: crate::Sequence::current
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqError {
    #[error("end of sequence reached")]
    EndOfSequence,

    #[error("index {index} out of range: only {available} elements can be produced")]
    IndexOutOfRange { index: usize, available: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("a continuation is already bound to this lazy list")]
    AlreadyBound,

    #[error("too late to bind a continuation: the source ran out and a lookup already failed")]
    TooLate,
}

impl SeqError {
    /// `true` for the routine end-of-sequence signal.
    pub fn is_end(&self) -> bool {
        matches!(self, SeqError::EndOfSequence)
    }
}

pub type Result<T, E = SeqError> = std::result::Result<T, E>;
