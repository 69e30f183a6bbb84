//! A type-directed binary skip engine for a Thrift-compatible wire format.
//!
//! Given the wire type of a value and a buffer positioned at its start, [`skip`] advances past
//! exactly that value without decoding it, using an explicit, caller-owned work stack
//! ([`StackBuf`]) instead of native recursion. This bounds worst-case stack usage to the
//! caller's chosen capacity regardless of how deeply an adversarial input nests containers.

#![warn(missing_debug_implementations)]

pub mod error;
pub mod skip;
pub mod stack;
pub mod wire;

pub use error::SkipError;
pub use skip::{skip, skip_checked};
pub use stack::StackBuf;
pub use wire::WireType;
