//! # GGA Sentence Framing
//!
//! This module confirms that a sentence is a GGA report and that its trailing
//! checksum matches its body. It handles the NMEA 0183 frame
//! `$TTGGA,D1,D2,...,D14*CC[\r\n]` and never looks inside the data fields.
//!
//! The checks run in a fixed order, and the first failure rejects the sentence:
//! 1. the buffer is not empty and is ASCII-only
//! 2. the line ending matches the configured [`LineEndingMode`]
//! 3. the tag before the first `,` or `*` is accepted by the configured [`TalkerMode`]
//! 4. a `*` followed by exactly two hex digits closes the sentence
//! 5. the XOR of every byte strictly between `$` and `*` equals those digits

use nom::{
    AsBytes, Err, Input, Parser,
    branch::alt,
    bytes::complete::{take, take_till, take_until},
    character::complete::{char, hex_digit0},
    combinator::rest,
    error::{ErrorKind, ParseError},
    number::complete::hex_u32,
};

use crate::{Error, IResult, parsing::consumed};

/// Sentence formatter shared by every accepted tag.
pub const SENTENCE_TYPE: &str = "GGA";

/// The only tag accepted by [`TalkerMode::Gps`].
pub const GPS_TAG: &str = "$GPGGA";

/// Defines which talker identifiers are accepted in front of `GGA`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum TalkerMode {
    #[default]
    /// Only the literal `$GPGGA` tag is accepted.
    Gps,

    /// Any two-letter uppercase talker is accepted, e.g. `$GNGGA` or `$GLGGA`.
    ///
    /// Use this mode with multi-constellation receivers. Other sentence
    /// types are still rejected.
    Any,
}

impl TalkerMode {
    /// Returns `true` if `tag` (including the leading `$`) names a GGA
    /// sentence under this mode.
    ///
    /// ```rust
    /// use nmea0183_gga::TalkerMode;
    ///
    /// assert!(TalkerMode::Gps.accepts("$GPGGA"));
    /// assert!(!TalkerMode::Gps.accepts("$GNGGA"));
    /// assert!(TalkerMode::Any.accepts("$GNGGA"));
    /// assert!(!TalkerMode::Any.accepts("$GPGSA"));
    /// ```
    pub fn accepts(self, tag: &str) -> bool {
        match self {
            TalkerMode::Gps => tag == GPS_TAG,
            TalkerMode::Any => {
                let bytes = tag.as_bytes();

                bytes.len() == GPS_TAG.len()
                    && bytes[0] == b'$'
                    && bytes[1..3].iter().all(u8::is_ascii_uppercase)
                    && tag.ends_with(SENTENCE_TYPE)
            }
        }
    }
}

/// Defines how the parser should handle the line terminator.
///
/// A sentence read from a serial stream usually ends with `\r\n`, while one
/// that was already split into lines usually carries no terminator at all.
/// A lone `\n` is accepted wherever `\r\n` is.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum LineEndingMode {
    /// The sentence must end with a line terminator.
    Required,

    #[default]
    /// A single trailing line terminator is stripped when present.
    Optional,

    /// The sentence must not end with a line terminator.
    Forbidden,
}

/// A sentence that passed tag and checksum validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame<'a> {
    /// The sentence without its line terminator, starting at `$`.
    pub sentence: &'a str,
    /// Every byte strictly between `$` and `*`.
    pub body: &'a str,
    /// The checksum carried by the sentence, equal to the XOR of `body`.
    pub checksum: u8,
}

/// Creates a parser that validates the frame of a GGA sentence.
///
/// On success the parser consumes the whole input and yields a [`Frame`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::{Error, IResult, LineEndingMode, TalkerMode, frame};
///
/// let parser = frame(TalkerMode::Gps, LineEndingMode::Optional);
///
/// let result: IResult<_, _> = parser("$GPGGA,data*6A\r\n");
/// let (_, f) = result.unwrap();
/// assert_eq!(f.body, "GPGGA,data");
/// assert_eq!(f.checksum, 0x6A);
///
/// let result: IResult<_, _> = parser("$GPGSA,data*6A");
/// assert!(matches!(result, Err(nom::Err::Error(Error::UnrecognizedMessage("$GPGSA")))));
///
/// let result: IResult<_, _> = parser("$GPGGA,data*6B");
/// assert!(matches!(
///     result,
///     Err(nom::Err::Error(Error::ChecksumMismatch { expected: 0x6A, found: 0x6B }))
/// ));
/// ```
pub fn frame<'a>(
    talker: TalkerMode,
    line_ending: LineEndingMode,
) -> impl Fn(&'a str) -> IResult<&'a str, Frame<'a>> {
    move |i: &'a str| {
        if i.is_empty() {
            return Err(Err::Error(Error::EmptySentence));
        }

        if !i.as_bytes().is_ascii() {
            return Err(Err::Error(Error::NonAscii));
        }

        let (sentence, _) = crlf(line_ending).parse(i)?;

        let (_, tag) = take_till(|c: char| c == ',' || c == '*').parse(sentence)?;
        if !talker.accepts(tag) {
            return Err(Err::Error(Error::UnrecognizedMessage(tag)));
        }

        let (i, _) = char('$').parse(sentence)?;
        let (cc, body) = alt((take_until("*"), rest)).parse(i)?;
        let (_, found) = checksum_suffix(cc)?;
        let (body, expected) = checksum(body);

        if found != expected {
            return Err(Err::Error(Error::ChecksumMismatch { expected, found }));
        }

        Ok((
            "",
            Frame {
                sentence,
                body,
                checksum: found,
            },
        ))
    }
}

/// Returns `true` if `sentence` is a `$GPGGA` sentence with a correct checksum.
///
/// The sentence may carry one trailing line terminator. Nothing beyond the
/// frame is inspected: a sentence with malformed fields still validates.
///
/// ```rust
/// use nmea0183_gga::validate;
///
/// assert!(validate("$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E"));
/// assert!(!validate("$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5F"));
/// assert!(!validate(""));
/// ```
pub fn validate(sentence: &str) -> bool {
    frame(TalkerMode::default(), LineEndingMode::default())(sentence).is_ok()
}

/// Parses the `*CC` suffix of a sentence.
///
/// `CC` must be exactly two hexadecimal digits, in either case.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::{IResult, checksum_suffix};
///
/// let result: IResult<_, _> = checksum_suffix("*5e");
/// assert_eq!(result, Ok(("", 0x5E)));
///
/// let result: IResult<_, _> = checksum_suffix("*5E1");
/// assert!(result.is_err());
/// ```
pub fn checksum_suffix<'a, E: ParseError<&'a str>>(i: &'a str) -> nom::IResult<&'a str, u8, E> {
    let (cc, _) = char('*').parse(i)?;
    let (_, cc) = consumed(take(2u8), ErrorKind::Count).parse(cc)?;
    let (_, cc) = consumed(hex_digit0, ErrorKind::IsA).parse(cc)?;
    let (i, cc) = hex_u32(cc)?;

    Ok((i, cc as u8))
}

/// Strips the line terminator according to `mode`.
///
/// The parser yields the sentence without its terminator as the remaining input.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::{LineEndingMode, crlf};
/// use nom::{IResult, Parser};
///
/// let result: IResult<_, _> = crlf(LineEndingMode::Required).parse("data\r\n");
/// assert_eq!(result, Ok(("data", ())));
///
/// let result: IResult<_, _> = crlf(LineEndingMode::Optional).parse("data");
/// assert_eq!(result, Ok(("data", ())));
///
/// let result: IResult<_, _> = crlf(LineEndingMode::Forbidden).parse("data\n");
/// assert!(result.is_err());
/// ```
pub fn crlf<'a, E: ParseError<&'a str>>(
    mode: LineEndingMode,
) -> impl Fn(&'a str) -> nom::IResult<&'a str, (), E> {
    move |i: &'a str| {
        let data = i.strip_suffix("\r\n").or_else(|| i.strip_suffix('\n'));

        match (mode, data) {
            (LineEndingMode::Required, None) | (LineEndingMode::Forbidden, Some(_)) => {
                Err(Err::Error(E::from_error_kind(i, ErrorKind::CrLf)))
            }
            (_, Some(data)) => Ok((data, ())),
            (_, None) => Ok((i, ())),
        }
    }
}

/// Calculates the NMEA 0183 checksum for the given sentence body.
///
/// The checksum is the XOR of every byte of the body, which is everything
/// between the `$` prefix and the `*` delimiter, both excluded. The
/// accumulator is a `u8`, so the result is always an 8-bit value and is
/// compared byte-for-byte with the transmitted checksum.
///
/// # Returns
///
/// A tuple of `(input, checksum)` where `input` is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::checksum;
///
/// let (_, cc) = checksum("GPGGA,123456,data");
/// assert_eq!(cc, 0x41);
/// ```
pub fn checksum<I>(input: I) -> (I, u8)
where
    I: Input + AsBytes,
{
    let calculated_checksum = input
        .as_bytes()
        .iter()
        .fold(0u8, |accumulated_xor, &byte| accumulated_xor ^ byte);

    (input, calculated_checksum)
}

/// Formats a checksum value as a two-digit uppercase hexadecimal string.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::format_checksum;
///
/// assert_eq!(format_checksum(0x5E), "5E");
/// assert_eq!(format_checksum(0x0A), "0A");
/// ```
pub fn format_checksum(checksum: u8) -> String {
    format!("{checksum:02X}")
}
