//! # Error Types
//!
//! This module defines the error types used throughout the GGA parsing library.
//!
//! Only whole-sentence failures are errors. A field that is empty or fails its
//! grammar is recorded in the [`FieldSet`](crate::gga::FieldSet)s of a
//! [`Parsed`](crate::gga::Parsed) value instead.

use core::fmt;

use nom::error::{ErrorKind, FromExternalError, ParseError};

/// Holds the result of parsing functions.
///
/// It depends on the input type `I`, the output type `O`, and the error type `E`
/// (by default `nom::error::Error<I>`).
///
/// The `Ok` side is a pair containing the remainder of the input (the part of the data that
/// was not parsed) and the produced value. The `Err` side contains an instance of `nom::Err`.
///
/// Outside of the parsing code, you can use the [nom::Finish::finish] method to convert
/// it to a more common result type.
pub type IResult<I, O, E = nom::error::Error<I>> = nom::IResult<I, O, Error<I, E>>;

/// The error returned by [`parse`](crate::parse()) and the accessors for a `&str` sentence.
pub type GgaError<'a> = Error<&'a str, nom::error::Error<&'a str>>;

/// Represents all possible errors that can occur while parsing a GGA sentence.
///
/// Every variant except [`Error::BufferExhausted`] means the sentence was
/// rejected as a whole: the caller should discard it and wait for the next one.
#[derive(Debug, PartialEq)]
pub enum Error<I, E> {
    /// The provided input buffer is empty.
    EmptySentence,

    /// The provided input contains non-ASCII characters.
    ///
    /// NMEA sentences must be ASCII-only for proper parsing and checksum calculation.
    NonAscii,

    /// The text before the first delimiter is not an accepted GGA tag.
    ///
    /// Contains the tag that was found, e.g. `$GPGSA`.
    UnrecognizedMessage(I),

    /// The checksum of the sentence was corrupt or incorrect.
    ChecksumMismatch {
        /// The checksum calculated from the sentence body
        expected: u8,
        /// The checksum found after the `*` marker
        found: u8,
    },

    /// The sentence framing could not be parsed, e.g. the `*CC` suffix is
    /// missing, too long or not hexadecimal.
    ParsingError(E),

    /// The sentence carries fewer data fields than a GGA sentence requires.
    MissingFields {
        /// Number of data fields found before the sentence ran out
        found: usize,
    },

    /// The sentence is too long for the fixed-capacity normalization buffer.
    ///
    /// This is a capacity limit on input length: the sentence was framed
    /// correctly but its fields were never examined, so it is not reported
    /// as a rejection. Anything longer than
    /// [`MAX_SENTENCE_LEN`](crate::gga::MAX_SENTENCE_LEN) may hit it.
    BufferExhausted {
        /// Capacity of the normalization buffer in bytes
        capacity: usize,
    },
}

impl<I, E> Error<I, E> {
    /// Returns `true` when the error means "sentence rejected", as opposed to
    /// a sentence too long to be examined.
    ///
    /// ```rust
    /// use nmea0183_gga::GgaError;
    ///
    /// assert!(GgaError::EmptySentence.is_rejection());
    /// assert!(!GgaError::BufferExhausted { capacity: 111 }.is_rejection());
    /// ```
    pub fn is_rejection(&self) -> bool {
        !matches!(self, Error::BufferExhausted { .. })
    }
}

impl<I, E> fmt::Display for Error<I, E>
where
    I: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySentence => f.write_str("empty sentence"),
            Error::NonAscii => f.write_str("sentence contains non-ASCII characters"),
            Error::UnrecognizedMessage(tag) => write!(f, "unrecognized message {tag:?}"),
            Error::ChecksumMismatch { expected, found } => write!(
                f,
                "checksum mismatch: calculated {expected:02X}, found {found:02X}"
            ),
            Error::ParsingError(e) => write!(f, "malformed sentence: {e:?}"),
            Error::MissingFields { found } => {
                write!(f, "sentence carries only {found} of 14 data fields")
            }
            Error::BufferExhausted { capacity } => {
                write!(f, "sentence does not fit into {capacity} bytes once normalized")
            }
        }
    }
}

impl<I, E> ParseError<I> for Error<I, E>
where
    E: ParseError<I>,
{
    fn from_error_kind(input: I, kind: ErrorKind) -> Self {
        Error::ParsingError(E::from_error_kind(input, kind))
    }

    fn append(_: I, _: ErrorKind, other: Self) -> Self {
        other
    }
}

impl<I, E, EX> FromExternalError<I, EX> for Error<I, E>
where
    E: FromExternalError<I, EX>,
{
    fn from_external_error(input: I, kind: ErrorKind, e: EX) -> Self {
        Error::ParsingError(E::from_external_error(input, kind, e))
    }
}
