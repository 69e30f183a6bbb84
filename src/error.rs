//! Defines the error type used internally by the skip engine, and its mapping onto the
//! numeric sentinel contract callers compiled separately from this crate rely on.

use failure::Fail;

/// Reasons a call to [`skip`](crate::skip) can fail.
///
/// All three are non-recoverable by the engine itself: the caller decides whether to retry
/// (only ever sensible for [`SkipError::ShortBuffer`]) or abort.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Fail)]
pub enum SkipError {
    /// A tag byte was encountered that does not name one of the recognized wire types.
    #[fail(display = "tag 0x{:02X} is not a recognized wire type", tag)]
    BadTag {
        /// The offending byte.
        tag: u8,
    },
    /// The input ended before a complete value could be read.
    ///
    /// Not necessarily corrupt: the caller may refill its buffer and retry the call from the
    /// original offset.
    #[fail(display = "input ended mid-value")]
    ShortBuffer,
    /// Nesting depth exceeded the capacity of the supplied [`StackBuf`](crate::stack::StackBuf).
    #[fail(display = "nesting depth exceeded stack capacity")]
    StackOverflow,
}

impl SkipError {
    /// The negative sentinel value defined by the external `skip` contract.
    pub fn code(self) -> i32 {
        match self {
            SkipError::BadTag { .. } => -1,
            SkipError::ShortBuffer => -2,
            SkipError::StackOverflow => -3,
        }
    }
}

impl From<SkipError> for i32 {
    fn from(err: SkipError) -> i32 {
        err.code()
    }
}
