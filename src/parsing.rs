//! # Parsing Utilities
//!
//! Grammar combinators for GGA field tokens, together with the length checks
//! they are built on.
//!
//! Every grammar here is *complete*: it fails unless it consumes the whole
//! token. A field's text is only converted into a value after its grammar has
//! accepted it, so a malformed token can never produce a partial value.

use nom::{
    Err, Input, Mode, OutputMode, PResult, Parser, ToUsize,
    bytes::complete::{take_while_m_n, take_while1},
    character::complete::char,
    combinator::{opt, recognize, verify},
    error::{ErrorKind, ParseError},
};

/// Verifies that the remaining input length matches the expected length after parsing.
///
/// This combinator runs the provided parser and then checks if the remaining input
/// has exactly `n` bytes/characters left.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::parsing::verify_rest_length;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = verify_rest_length(take(2u8), 1u8, ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// // This would fail because 2 bytes remain
/// let result: IResult<_, _> = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn verify_rest_length<I, N, E: ParseError<I>, F>(
    f: F,
    n: N,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    N: ToUsize,
    F: Parser<I, Error = E>,
{
    VerifyRestLength {
        f,
        n: n.to_usize(),
        e,
    }
}

/// Ensures that the parser consumes all input (shorthand for `verify_rest_length(f, 0, e)`).
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::parsing::consumed;
/// use nom::{IResult, Parser, bytes::complete::take, error::ErrorKind};
///
/// let mut parser = consumed(take(3u8), ErrorKind::Count);
/// let result: IResult<_, _> = parser.parse("abc");
/// assert!(result.is_ok());
///
/// let result: IResult<_, _> = parser.parse("abcd");
/// assert!(result.is_err());
/// ```
pub fn consumed<I, E: ParseError<I>, F>(
    f: F,
    e: ErrorKind,
) -> impl Parser<I, Output = <F as Parser<I>>::Output, Error = E>
where
    I: Input,
    F: Parser<I, Error = E>,
{
    VerifyRestLength { f, n: 0, e }
}

struct VerifyRestLength<F> {
    f: F,
    n: usize,
    e: ErrorKind,
}

impl<I, F> Parser<I> for VerifyRestLength<F>
where
    I: Input,
    F: Parser<I>,
{
    type Output = <F as Parser<I>>::Output;
    type Error = <F as Parser<I>>::Error;

    fn process<OM: OutputMode>(&mut self, i: I) -> PResult<OM, I, Self::Output, Self::Error> {
        let (i, o) = self.f.process::<OM>(i)?;

        if i.input_len() != self.n {
            return Err(Err::Error(OM::Error::bind(|| {
                <F as Parser<I>>::Error::from_error_kind(i, self.e)
            })));
        }

        Ok((i, o))
    }
}

fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Recognizes a fixed-point token such as `hhmmss.sss` or `ddmm.mmmm`.
///
/// The token must hold exactly `point` digits, a `.` at index `point`, and
/// then digits up to a total length of `max_len`.
///
/// ```rust
/// use nmea0183_gga::parsing::fixed_point;
/// use nom::{IResult, Parser};
///
/// let result: IResult<_, _> = fixed_point(4, 9).parse("3342.6618");
/// assert_eq!(result, Ok(("", "3342.6618")));
///
/// let result: IResult<_, _> = fixed_point(4, 9).parse("342.6618");
/// assert!(result.is_err());
/// ```
pub fn fixed_point<'a, E: ParseError<&'a str>>(
    point: usize,
    max_len: usize,
) -> impl Parser<&'a str, Output = &'a str, Error = E> {
    let fraction = max_len.saturating_sub(point + 1);

    consumed(
        recognize((
            take_while_m_n(point, point, is_digit),
            char('.'),
            take_while_m_n(0, fraction, is_digit),
        )),
        ErrorKind::Eof,
    )
}

/// Recognizes an unsigned decimal such as `1.2` or `27.0`.
///
/// Digits with at most one `.`, at least one digit, and no more than
/// `max_len` characters.
///
/// ```rust
/// use nmea0183_gga::parsing::unsigned_decimal;
/// use nom::{IResult, Parser};
///
/// let result: IResult<_, _> = unsigned_decimal(14).parse("1.2");
/// assert_eq!(result, Ok(("", "1.2")));
///
/// assert!((unsigned_decimal(14).parse(".") as IResult<_, _>).is_err());
/// assert!((unsigned_decimal(14).parse("1.2.3") as IResult<_, _>).is_err());
/// assert!((unsigned_decimal(14).parse("-1.2") as IResult<_, _>).is_err());
/// ```
pub fn unsigned_decimal<'a, E: ParseError<&'a str>>(
    max_len: usize,
) -> impl Parser<&'a str, Output = &'a str, Error = E> {
    consumed(
        verify(
            take_while1(|c: char| is_digit(c) || c == '.'),
            move |text: &str| {
                text.len() <= max_len
                    && text.bytes().filter(|&b| b == b'.').count() <= 1
                    && text.bytes().any(|b| b.is_ascii_digit())
            },
        ),
        ErrorKind::Digit,
    )
}

/// Recognizes a decimal with an optional leading `-`.
///
/// The sign is recorded separately from the magnitude, which must satisfy
/// [`unsigned_decimal`]. The output is `(negative, magnitude)`.
///
/// ```rust
/// use nmea0183_gga::parsing::signed_decimal;
/// use nom::{IResult, Parser};
///
/// let result: IResult<_, _> = signed_decimal(14).parse("-034.2");
/// assert_eq!(result, Ok(("", (true, "034.2"))));
///
/// assert!((signed_decimal(14).parse("--34.2") as IResult<_, _>).is_err());
/// ```
pub fn signed_decimal<'a, E: ParseError<&'a str>>(
    max_len: usize,
) -> impl Parser<&'a str, Output = (bool, &'a str), Error = E> {
    (
        opt(char('-')).map(|sign| sign.is_some()),
        unsigned_decimal(max_len),
    )
}

/// Recognizes between `min` and `max` decimal digits and nothing else.
///
/// ```rust
/// use nmea0183_gga::parsing::digits;
/// use nom::{IResult, Parser};
///
/// let result: IResult<_, _> = digits(4, 4).parse("0000");
/// assert_eq!(result, Ok(("", "0000")));
///
/// assert!((digits(1, 2).parse("123") as IResult<_, _>).is_err());
/// ```
pub fn digits<'a, E: ParseError<&'a str>>(
    min: usize,
    max: usize,
) -> impl Parser<&'a str, Output = &'a str, Error = E> {
    consumed(take_while_m_n(min, max, is_digit), ErrorKind::Digit)
}
