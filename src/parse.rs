//! The dispatcher: sign and special tokens, hex routing, then the
//! fast -> Lemire -> big-decimal pipeline for decimal literals.

use crate::common::ByteSlice;
use crate::float::Float;
use crate::hex::parse_hex_float;
use crate::lemire::compute_float;
use crate::lexer::parse_number;
use crate::slow::parse_long_mantissa;
use crate::{msg, Error, Result};

/// Case-insensitive `inf`, `infinity` or `nan`, exactly three or eight
/// letters. The cursor is known to start with one of `iInN`.
#[inline]
fn parse_special<F: Float>(s: &[u8]) -> Result<(F, usize)> {
    if s.len() >= 3 {
        if s.eq_ignore_case(b"nan") {
            return Ok((F::NAN, 3));
        } else if s.eq_ignore_case(b"inf") {
            if s.len() >= 8 && s.advance(3).eq_ignore_case(b"inity") {
                return Ok((F::INFINITY, 8));
            }
            return Ok((F::INFINITY, 3));
        }
    }
    Err(Error(msg::BAD_SPECIAL))
}

/// Parses a float off the front of `s`, returning the value and the
/// number of bytes consumed.
#[inline]
pub fn parse_float<F: Float>(s: &[u8]) -> Result<(F, usize)> {
    if s.is_empty() {
        return Err(Error(msg::CONVERSION));
    }
    let start_len = s.len();
    let mut s = s;

    let c = s.get_first();
    let negative = c == b'-';
    if c == b'-' || c == b'+' {
        s = s.advance(1);
        if s.is_empty() {
            return Err(Error(msg::UNEXPECTED_END));
        }
    }

    match s.get_first() {
        b'i' | b'I' | b'n' | b'N' => {
            let (value, n) = parse_special::<F>(s)?;
            let value = if negative { -value } else { value };
            return Ok((value, start_len - s.len() + n));
        }
        b'0' if s.len() >= 2 && (s.get_at(1) == b'x' || s.get_at(1) == b'X') => {
            let (value, n) = parse_hex_float::<F>(s)?;
            let value = if negative { -value } else { value };
            return Ok((value, start_len - s.len() + n));
        }
        _ => {}
    }

    let (num, rest) = parse_number(s).ok_or(Error(msg::NO_DIGITS))?;
    let consumed = start_len - rest.len();

    if let Some(value) = num.try_fast_path::<F>() {
        let value = if negative { -value } else { value };
        return Ok((value, consumed));
    }

    let mut fp = compute_float::<F>(num.exponent, num.mantissa);
    if num.many_digits && fp != compute_float::<F>(num.exponent, num.mantissa + 1) {
        // the truncated tail could swing the rounding either way
        fp.e = -1;
    }
    if fp.e < 0 {
        fp = parse_long_mantissa::<F>(s);
    }

    let mut word = fp.f;
    word |= (fp.e as u64) << F::MANTISSA_EXPLICIT_BITS;
    if negative {
        word |= 1_u64 << F::SIGN_INDEX;
    }
    Ok((F::from_u64_bits(word), consumed))
}
