//! The wire-type table: the fixed, protocol-defined set of tag bytes this engine understands,
//! and the two 256-entry lookup tables derived from it.
//!
//! There is exactly one place that lists "tag -> (name, width)" (the `WireType` enum below plus
//! its `fixed_width` method); [`RECOGNIZED`] and [`FIXED_WIDTH`] are computed from that single
//! source at compile time so the two tables can never drift apart.

use num_derive::FromPrimitive;

/// One of the 11 wire types this protocol recognizes.
///
/// Mirrors the tag byte values fixed by the protocol; these are not ours to renumber.
#[allow(bad_style)]
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, FromPrimitive)]
pub enum WireType {
    Bool = 2,
    I8 = 3,
    Double = 4,
    I16 = 6,
    I32 = 8,
    I64 = 10,
    String = 11,
    Struct = 12,
    Map = 13,
    Set = 14,
    List = 15,
}

impl WireType {
    /// On-wire width in bytes for fixed-size primitives, or `0` for variable/composite types.
    pub const fn fixed_width(self) -> u8 {
        match self {
            WireType::Bool => 1,
            WireType::I8 => 1,
            WireType::Double => 8,
            WireType::I16 => 2,
            WireType::I32 => 4,
            WireType::I64 => 8,
            WireType::String | WireType::Struct | WireType::Map | WireType::Set | WireType::List => 0,
        }
    }
}

/// Every `WireType` variant, used to build the lookup tables below.
const ALL: [WireType; 11] = [
    WireType::Bool,
    WireType::I8,
    WireType::Double,
    WireType::I16,
    WireType::I32,
    WireType::I64,
    WireType::String,
    WireType::Struct,
    WireType::Map,
    WireType::Set,
    WireType::List,
];

/// Legal value of a struct field tag that marks the end of the field list.
///
/// Only valid in that one position; never a recognized standalone wire type.
pub const STRUCT_END: u8 = 0;

/// Internal-only sentinel used by the work stack to interleave map key/value obligations.
///
/// Never appears as an externally-supplied tag and is deliberately excluded from
/// [`RECOGNIZED`] so a hostile payload can never smuggle it in.
pub const MAP_PAIR: u8 = 0xFF;

const fn build_recognized() -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < ALL.len() {
        table[ALL[i] as usize] = true;
        i += 1;
    }
    table
}

const fn build_fixed_width() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < ALL.len() {
        table[ALL[i] as usize] = ALL[i].fixed_width();
        i += 1;
    }
    table
}

/// `RECOGNIZED[tag]` is `true` iff `tag` is one of the 11 wire types in §3.
///
/// A single lookup both validates externally-supplied tags and, combined with
/// [`FIXED_WIDTH`], selects the fast paths in the skip driver.
pub static RECOGNIZED: [bool; 256] = build_recognized();

/// `FIXED_WIDTH[tag]` is the on-wire width of `tag` if it is a fixed-size primitive, `0`
/// otherwise (including for unrecognized tags).
pub static FIXED_WIDTH: [u8; 256] = build_fixed_width();

/// Shorthand for `RECOGNIZED[tag as usize]`.
#[inline]
pub fn is_recognized(tag: u8) -> bool {
    RECOGNIZED[tag as usize]
}

/// Shorthand for `FIXED_WIDTH[tag as usize]`; `0` means "variable-width or composite".
#[inline]
pub fn fixed_width(tag: u8) -> u8 {
    FIXED_WIDTH[tag as usize]
}
