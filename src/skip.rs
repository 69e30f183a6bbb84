//! The skip driver: the dispatch loop that advances past exactly one value of a known wire
//! type, recursing through the explicit [`StackBuf`] instead of the native call stack.

use byteorder::{BigEndian, ByteOrder};

use crate::error::SkipError;
use crate::stack::{Frame, StackBuf, StackStep};
use crate::wire::{self, MAP_PAIR, STRUCT_END};

/// Advances past exactly one value of wire type `top_type` at the start of `input`.
///
/// Returns the number of bytes consumed (`>= 0`) on success, or one of the negative sentinels
/// documented on [`SkipError`]: `-1` ([`SkipError::BadTag`]), `-2` ([`SkipError::ShortBuffer`]),
/// `-3` ([`SkipError::StackOverflow`]).
///
/// `stack` is reset at the start of the call; its contents from any previous call (successful
/// or not) are irrelevant. On any error return the consumed count is meaningless and the
/// caller must not advance its own cursor.
///
/// This function performs no logging and no allocation; both would undermine the bounded,
/// adversarial-input-safe guarantees this engine exists to provide.
pub fn skip(stack: &mut StackBuf, input: &[u8], top_type: u8) -> i32 {
    match skip_checked(stack, input, top_type) {
        Ok(consumed) => consumed as i32,
        Err(e) => e.code(),
    }
}

/// [`skip`] with the richer internal error type, for use by this crate's own tests and by
/// callers linked directly against the crate (as opposed to across an FFI-style boundary,
/// where the numeric contract in [`skip`] is what matters).
pub fn skip_checked(stack: &mut StackBuf, input: &[u8], top_type: u8) -> Result<usize, SkipError> {
    stack.reset(top_type);
    let mut sp: isize = 0;
    let mut consumed: usize = 0;

    while sp >= 0 {
        let frame = stack.current(sp);
        let buf = &input[consumed..];
        let cur = frame.t;

        if cur != MAP_PAIR {
            let w = wire::fixed_width(cur);
            if w > 0 {
                // Fixed-width primitive leaf: bool, i8, double, i16, i32, i64.
                need(buf, w as usize)?;
                stack.pop_or_dec(&mut sp);
                consumed += w as usize;
                continue;
            }
        }

        match cur {
            MAP_PAIR => {
                let kt = frame.k;
                let mut vt = frame.v;
                if let StackStep::Stayed = stack.pop_or_dec(&mut sp) {
                    if stack.current(sp).n % 2 == 0 {
                        vt = kt;
                    }
                }
                stack.push(&mut sp, vt)?;
            }

            t if t == wire::WireType::String as u8 => {
                need(buf, 4)?;
                let len = BigEndian::read_u32(&buf[..4]) as u64;
                let total = need_total(buf.len(), 4 + len)?;
                stack.pop_or_dec(&mut sp);
                consumed += total;
            }

            t if t == wire::WireType::Struct as u8 => {
                need(buf, 1)?;
                let vt = buf[0];
                if vt == STRUCT_END {
                    stack.pop_or_dec(&mut sp);
                    consumed += 1;
                    continue;
                }
                if !wire::is_recognized(vt) {
                    return Err(SkipError::BadTag { tag: vt });
                }
                let w = wire::fixed_width(vt);
                if w > 0 {
                    // Fast path: skip tag + 2-byte field id + fixed-width value in one step,
                    // without ever pushing a child frame.
                    let total = w as usize + 3;
                    need(buf, total)?;
                    consumed += total;
                } else {
                    // Composite field: fields cannot have a zero-byte body, so we need more
                    // than the 3 header bytes (tag + field id).
                    need(buf, 4)?;
                    stack.push(&mut sp, vt)?;
                    consumed += 3;
                }
            }

            t if t == wire::WireType::Map as u8 => {
                need(buf, 6)?;
                let kt = buf[0];
                let vt = buf[1];
                let n = BigEndian::read_u32(&buf[2..6]) as u64;
                if !wire::is_recognized(kt) {
                    return Err(SkipError::BadTag { tag: kt });
                }
                if !wire::is_recognized(vt) {
                    return Err(SkipError::BadTag { tag: vt });
                }
                if n == 0 {
                    stack.pop_or_dec(&mut sp);
                    consumed += 6;
                    continue;
                }

                let wk = wire::fixed_width(kt) as u64;
                let wv = wire::fixed_width(vt) as u64;
                if wk != 0 && wv != 0 {
                    // Fast path: both key and value are fixed-width, so the whole map's size
                    // is a single multiplication away.
                    let total = need_total(buf.len(), 6 + n * (wk + wv))?;
                    stack.pop_or_dec(&mut sp);
                    consumed += total;
                } else {
                    // Interleave key/value obligations into a single frame rather than
                    // pushing 2*n children.
                    stack.overwrite(
                        sp,
                        Frame {
                            t: MAP_PAIR,
                            k: kt,
                            v: vt,
                            n: 2 * n - 1,
                        },
                    );
                    consumed += 6;
                }
            }

            t if t == wire::WireType::Set as u8 || t == wire::WireType::List as u8 => {
                need(buf, 5)?;
                let et = buf[0];
                let n = BigEndian::read_u32(&buf[1..5]) as u64;
                if !wire::is_recognized(et) {
                    return Err(SkipError::BadTag { tag: et });
                }
                if n == 0 {
                    stack.pop_or_dec(&mut sp);
                    consumed += 5;
                    continue;
                }

                let w = wire::fixed_width(et) as u64;
                if w != 0 {
                    let total = need_total(buf.len(), 5 + n * w)?;
                    stack.pop_or_dec(&mut sp);
                    consumed += total;
                } else {
                    // Reuse the current frame: "one set/list obligation" becomes "n element
                    // obligations at this slot", keeping stack depth equal to nesting depth.
                    stack.overwrite(
                        sp,
                        Frame {
                            t: et,
                            k: 0,
                            v: 0,
                            n: n - 1,
                        },
                    );
                    consumed += 5;
                }
            }

            tag => return Err(SkipError::BadTag { tag }),
        }
    }

    Ok(consumed)
}

/// Asserts that at least `k` bytes remain in `buf`, else fails with `ShortBuffer`.
#[inline]
fn need(buf: &[u8], k: usize) -> Result<(), SkipError> {
    if buf.len() < k {
        Err(SkipError::ShortBuffer)
    } else {
        Ok(())
    }
}

/// Checks a 64-bit-widened byte total against the buffer length, returning it narrowed to
/// `usize` on success.
///
/// All the multiplicative length computations in this module (`n * (wk + wv)`, `n * w`,
/// `4 + len`) are done in `u64` specifically so that a hostile, maximal 32-bit count can never
/// wrap around before this check runs.
#[inline]
fn need_total(buf_len: usize, total: u64) -> Result<usize, SkipError> {
    if total > buf_len as u64 {
        Err(SkipError::ShortBuffer)
    } else {
        Ok(total as usize)
    }
}
