//! Correctly rounded decimal and hexadecimal float parsing.
//!
//! Given a textual literal, [`parse`] produces the unique `f32`/`f64`
//! resulting from round-to-nearest, ties-to-even of the real number the
//! text denotes, across the full dynamic range (subnormals, overflow to
//! infinity, ties at half-ULP).
//!
//! Short inputs take a fast path built on a single exact native float
//! operation; the rest go through the Eisel-Lemire 128-bit approximation,
//! with an arbitrary-precision decimal fallback for the rare literals the
//! approximation cannot decide.

use std::error::Error as StdError;
use std::fmt::{self, Display};

mod common;
mod decimal;
mod float;
mod hex;
mod lemire;
mod lexer;
mod parse;
mod slow;
mod table;

#[doc(hidden)]
pub use crate::float::Float;

/// Error messages surfaced through [`Error`].
pub(crate) mod msg {
    pub const CONVERSION: &str = "Floating point conversion error";
    pub const BAD_SPECIAL: &str = "error converting input to floating point";
    pub const NO_DIGITS: &str = "No digits seen.";
    pub const NO_HEX_DIGITS: &str = "no digits seen";
    pub const UNEXPECTED_END: &str = "Unexpected end of input";
    pub const RANGE: &str = "Range error";
}

/// Error raised when a literal cannot be converted to a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Error(pub(crate) &'static str);

impl Error {
    /// The message describing what went wrong.
    #[inline]
    pub fn message(&self) -> &'static str {
        self.0
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl StdError for Error {}

/// Result type alias for parsing functions.
pub type Result<T> = std::result::Result<T, Error>;

/// Floats that can be parsed from a decimal or hexadecimal literal.
pub trait ParseFloat: float::Float {
    /// Parses a literal, requiring the whole input to be consumed.
    #[inline]
    fn parse_float<S: AsRef<[u8]>>(s: S) -> Result<Self> {
        let s = s.as_ref();
        let (value, n) = Self::parse_float_partial(s)?;
        if n == s.len() {
            Ok(value)
        } else {
            Err(Error(msg::CONVERSION))
        }
    }

    /// Parses a literal from the start of the input, returning the value
    /// along with the number of bytes consumed.
    #[inline]
    fn parse_float_partial<S: AsRef<[u8]>>(s: S) -> Result<(Self, usize)> {
        parse::parse_float(s.as_ref())
    }
}

impl ParseFloat for f32 {}
impl ParseFloat for f64 {}

/// Parses the entire input into a float; trailing bytes are an error.
#[inline]
pub fn parse<T: ParseFloat, S: AsRef<[u8]>>(s: S) -> Result<T> {
    T::parse_float(s)
}

/// Parses a float off the front of the input, returning the consumed count.
#[inline]
pub fn parse_partial<T: ParseFloat, S: AsRef<[u8]>>(s: S) -> Result<(T, usize)> {
    T::parse_float_partial(s)
}
