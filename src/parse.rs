use nom::{
    AsBytes, AsChar, Compare, Input, Offset, ParseTo, Parser, ToUsize,
    bytes::complete::take,
    character::complete::anychar,
    error::ParseError,
};

use crate::{Error, IResult};

/// Trait for converting the text of an already validated GGA field into a value.
///
/// The field decoders first check a token against its grammar (see
/// [`parsing`](crate::parsing)) and only then hand the recognized text to a
/// `NmeaParse` implementation, so conversions never see malformed input in
/// practice. Implementations are provided for the primitive integer and float
/// types and for `char`.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::{IResult, NmeaParse};
///
/// let result: IResult<_, _> = u8::parse("12");
/// assert_eq!(result, Ok(("", 12)));
///
/// let result: IResult<_, _> = f32::parse("27.0");
/// assert_eq!(result, Ok(("", 27.0)));
/// ```
pub trait NmeaParse<I, E = nom::error::Error<I>>
where
    I: Input,
    E: ParseError<I>,
    Self: Sized,
{
    /// Parses the input and returns a result.
    ///
    /// # Returns
    ///
    /// Returns an [`IResult`] containing:
    /// - On success: A tuple of `(remaining_input, parsed_value)`.
    /// - On failure: An [`Error`] indicating the parsing error.
    fn parse(i: I) -> IResult<I, Self, E>;
}

macro_rules! impl_uints_type {
    ($($t:tt),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::character::complete::$t.parse(i)
            }
        }
    )*)
}

macro_rules! impl_ints_type {
    ($($t:tt),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input + for<'a> Compare<&'a [u8]>,
            <I as Input>::Item: AsChar,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::character::complete::$t.parse(i)
            }
        }

    )*)
}

impl_uints_type!(u8, u16, u32);
impl_ints_type!(i8, i16, i32);

macro_rules! impl_float_type {
    ($($t:ty, $p:ident),*) => ($(
        impl<I, E> NmeaParse<I, E> for $t
        where
            I: Input + Offset + ParseTo<$t> + AsBytes,
            I: Compare<&'static str> + for<'a> Compare<&'a [u8]>,
            <I as Input>::Item: AsChar,
            <I as Input>::Iter: Clone,
            E: ParseError<I>,
        {
            fn parse(i: I) -> IResult<I, Self, E> {
                nom::number::complete::$p.parse(i)
            }
        }
    )*)
}

impl_float_type!(f32, float, f64, double);

impl<I, E> NmeaParse<I, E> for char
where
    I: Input,
    <I as Input>::Item: AsChar,
    E: ParseError<I>,
{
    fn parse(i: I) -> IResult<I, Self, E> {
        anychar.parse(i)
    }
}

/// Takes exactly `count` characters and converts them with `T`'s [`NmeaParse`]
/// implementation.
///
/// Used to split fixed-width sub-fields such as the `hh` and `mm` of a UTC time
/// or the `dd` of a latitude.
///
/// ```rust
/// use nmea0183_gga::{IResult, parse::with_take};
/// use nom::Parser;
///
/// let result: IResult<_, u8> = with_take(2u8).parse("3342.6618");
/// assert_eq!(result, Ok(("42.6618", 33)));
/// ```
pub fn with_take<I, E, T, C>(count: C) -> impl Parser<I, Output = T, Error = Error<I, E>>
where
    T: NmeaParse<I, E>,
    I: Input,
    <I as Input>::Item: AsChar,
    E: ParseError<I>,
    C: ToUsize,
{
    take(count).and_then(T::parse)
}
