//! Hexadecimal float literals: `0x` HEX+ (`.` HEX*)? (`p`|`P`) [sign] D+.
//!
//! Hex digits map onto binary exactly, so none of the correctly-rounded
//! decimal machinery is needed: accumulate the mantissa, keep a sticky
//! bit for excess precision, then scale by the binary exponent and round
//! once at the target width.

use crate::common::{parse_digits, ByteSlice, EXPONENT_CLAMP};
use crate::float::Float;
use crate::{msg, Error, Result};

#[inline]
fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses a hex literal positioned at the `0x`/`0X` prefix. The sign has
/// already been consumed. Returns the value and the bytes consumed.
#[inline]
pub fn parse_hex_float<F: Float>(s: &[u8]) -> Result<(F, usize)> {
    let start_len = s.len();
    debug_assert!(s.len() >= 2);
    let mut s = s.advance(2);
    if s.is_empty() {
        return Err(Error(msg::UNEXPECTED_END));
    }

    // Mantissa digits accumulate until the top nibble would be pushed
    // out; from then on only a sticky bit is kept.
    let mut mantissa = 0u64;
    let mut exponent = 0i64;
    let mut sticky = false;
    let mut any_digits = false;

    while !s.is_empty() {
        match hex_digit(s.get_first()) {
            Some(d) => {
                any_digits = true;
                if mantissa < (1 << 60) {
                    mantissa = (mantissa << 4) | d as u64;
                } else {
                    exponent += 4;
                    sticky |= d != 0;
                }
                s = s.advance(1);
            }
            None => break,
        }
    }
    if !any_digits {
        return Err(Error(msg::NO_HEX_DIGITS));
    }
    if s.check_first(b'.') {
        s = s.advance(1);
        while !s.is_empty() {
            match hex_digit(s.get_first()) {
                Some(d) => {
                    if mantissa < (1 << 60) {
                        mantissa = (mantissa << 4) | d as u64;
                        exponent -= 4;
                    } else {
                        sticky |= d != 0;
                    }
                    s = s.advance(1);
                }
                None => break,
            }
        }
    }

    // the base-2 exponent is mandatory
    if s.is_empty() {
        return Err(Error(msg::UNEXPECTED_END));
    }
    if !s.check_first2(b'p', b'P') {
        return Err(Error(msg::CONVERSION));
    }
    s = s.advance(1);
    let mut neg_exp = false;
    if s.check_first2(b'-', b'+') {
        neg_exp = s.get_first() == b'-';
        s = s.advance(1);
    }
    if s.is_empty() {
        return Err(Error(msg::UNEXPECTED_END));
    }
    if !s.get_first().is_ascii_digit() {
        return Err(Error(msg::CONVERSION));
    }
    let mut exp_num = 0i64;
    parse_digits(&mut s, |d| {
        if exp_num < EXPONENT_CLAMP {
            exp_num = 10 * exp_num + d as i64;
        }
    });
    exponent += if neg_exp { -exp_num } else { exp_num };
    let consumed = start_len - s.len();

    if mantissa == 0 {
        return Ok((F::from_u64_bits(0), consumed));
    }
    let value = scale_to_float::<F>(mantissa, exponent, sticky)?;
    Ok((value, consumed))
}

/// Rounds `mantissa * 2^exponent` to the nearest representable value,
/// ties to even, `sticky` standing in for discarded low bits.
fn scale_to_float<F: Float>(mantissa: u64, exponent: i64, sticky: bool) -> Result<F> {
    debug_assert!(mantissa != 0);
    let lz = mantissa.leading_zeros() as i64;
    let m = mantissa << lz;
    // value = m * 2^(exponent - lz), m in [2^63, 2^64)
    let e = 63 - lz + exponent;
    let mut biased = e - F::MINIMUM_EXPONENT as i64;
    if biased >= F::INFINITE_POWER as i64 {
        return Ok(F::INFINITY);
    }

    // keep MANTISSA_EXPLICIT_BITS + 1 bits, more for subnormals
    let norm_shift = 63 - F::MANTISSA_EXPLICIT_BITS as i64;
    let shift = if biased <= 0 {
        biased = 0;
        norm_shift + 1 - (e - F::MINIMUM_EXPONENT as i64)
    } else {
        norm_shift
    };
    let (mut f, round, sticky) = if shift >= 65 {
        (0_u64, false, true)
    } else if shift == 64 {
        (0_u64, true, (m << 1) != 0 || sticky)
    } else {
        debug_assert!(shift > 1);
        let f = m >> shift;
        let round = (m >> (shift - 1)) & 1 != 0;
        (f, round, (m << (65 - shift)) != 0 || sticky)
    };
    if round && (sticky || f & 1 != 0) {
        f += 1;
    }
    if f >= (2_u64 << F::MANTISSA_EXPLICIT_BITS) {
        // rounding carried into the next binade
        f = 1_u64 << F::MANTISSA_EXPLICIT_BITS;
        biased += 1;
        if biased >= F::INFINITE_POWER as i64 {
            return Ok(F::INFINITY);
        }
    }
    if biased == 0 && f >= (1_u64 << F::MANTISSA_EXPLICIT_BITS) {
        // the subnormal rounded up into the smallest normal
        biased = 1;
    }
    if f == 0 {
        // a nonzero literal collapsed to zero
        return Err(Error(msg::RANGE));
    }
    f &= (1_u64 << F::MANTISSA_EXPLICIT_BITS) - 1;
    Ok(F::from_u64_bits(f | ((biased as u64) << F::MANTISSA_EXPLICIT_BITS)))
}
