//! # Field Decoders
//!
//! One parser per GGA data field. Each parser accepts a single token and
//! either consumes it completely or fails. A field's text is checked against
//! its grammar before it is converted, so a failing token never leaves a
//! partial value behind.
//!
//! | Field | Grammar | Range |
//! |---|---|---|
//! | UTC time | `hhmmss.` + up to 3 digits | hour `0..=24`, minute `0..=59`, second `0..60` |
//! | Latitude | `ddmm.` + up to 4 digits | |
//! | Longitude | `dddmm.` + up to 4 digits | |
//! | Hemispheres | `N`/`S`, `E`/`W` | |
//! | Quality | one digit | `0..=8` |
//! | Satellites | one or two digits | `0..=12` |
//! | HDOP, DGPS age | unsigned decimal | non-negative |
//! | Altitude, geoid separation | decimal with optional `-` | |
//! | Units | `M` | |
//! | Station ID | four digits | `0..=1023` |

use log::{debug, warn};
use nom::{
    Parser,
    character::complete::{char, one_of},
    combinator::{recognize, verify},
    error::ErrorKind,
};

use crate::{
    GgaError, IResult, NmeaParse,
    gga::{
        DATA_FIELDS, Field, FieldSet, GgaRecord, Parsed, SENTINEL,
        record::{StationId, Time},
    },
    parse::with_take,
    parsing::{consumed, digits, fixed_point, signed_decimal, unsigned_decimal},
};

/// Highest GPS quality indicator.
pub const MAX_QUALITY: u8 = 8;

/// Highest number of satellites in use.
pub const MAX_SATELLITES: u8 = 12;

/// Highest differential reference station ID.
pub const MAX_STATION_ID: u16 = 1023;

/// Longest variable-width numeric token, sign excluded.
pub const MAX_NUMBER_LEN: usize = 14;

/// Parses a `hhmmss.sss` UTC time.
///
/// Only the format is checked here; see [`Time::is_in_range`] for the
/// range check.
///
/// ```rust
/// use nmea0183_gga::{IResult, gga::{decode::utc_time, Time}};
///
/// let result: IResult<_, _> = utc_time("002153.000");
/// let (_, time) = result.unwrap();
/// assert_eq!((time.hour, time.minute, time.second), (0, 21, 53.0));
///
/// assert!(utc_time("2153.000").is_err());
/// ```
pub fn utc_time(i: &str) -> IResult<&str, Time> {
    fixed_point(6, 10)
        .and_then((with_take(2u8), with_take(2u8), f64::parse))
        .map(|(hour, minute, second)| Time {
            hour,
            minute,
            second,
        })
        .parse(i)
}

/// Parses a `ddmm.mmmm` latitude into whole degrees and decimal minutes.
pub fn latitude(i: &str) -> IResult<&str, (u8, f32)> {
    fixed_point(4, 9)
        .and_then((with_take(2u8), f32::parse))
        .parse(i)
}

/// Parses a `dddmm.mmmm` longitude into whole degrees and decimal minutes.
pub fn longitude(i: &str) -> IResult<&str, (u16, f32)> {
    fixed_point(5, 10)
        .and_then((with_take(3u8), f32::parse))
        .parse(i)
}

pub fn north_south(i: &str) -> IResult<&str, char> {
    consumed(one_of("NS"), ErrorKind::OneOf).parse(i)
}

pub fn east_west(i: &str) -> IResult<&str, char> {
    consumed(one_of("EW"), ErrorKind::OneOf).parse(i)
}

/// Parses the `M` (meters) unit indicator.
pub fn meters(i: &str) -> IResult<&str, char> {
    consumed(char('M'), ErrorKind::Char).parse(i)
}

/// Parses a single-digit GPS quality indicator, `0` through [`MAX_QUALITY`].
pub fn fix_quality(i: &str) -> IResult<&str, u8> {
    verify(digits(1, 1).and_then(u8::parse), |quality: &u8| {
        *quality <= MAX_QUALITY
    })
    .parse(i)
}

/// Parses a one- or two-digit satellite count, `0` through [`MAX_SATELLITES`].
pub fn satellites_tracked(i: &str) -> IResult<&str, u8> {
    verify(digits(1, 2).and_then(u8::parse), |count: &u8| {
        *count <= MAX_SATELLITES
    })
    .parse(i)
}

/// Parses a non-negative decimal such as an HDOP or a DGPS age.
///
/// A leading `-` fails the grammar, so negative values are invalid.
pub fn non_negative(i: &str) -> IResult<&str, f32> {
    unsigned_decimal(MAX_NUMBER_LEN)
        .and_then(f32::parse)
        .parse(i)
}

/// Parses a decimal with an optional leading `-`.
///
/// The sign is split off before the magnitude is checked, and applied after
/// it is converted.
///
/// ```rust
/// use nmea0183_gga::{IResult, gga::decode::signed};
///
/// let result: IResult<_, _> = signed("-034.2");
/// assert_eq!(result, Ok(("", -34.2)));
///
/// assert!(signed("-").is_err());
/// assert!(signed("-x4.2").is_err());
/// ```
pub fn signed(i: &str) -> IResult<&str, f32> {
    let (i, (negative, magnitude)) = signed_decimal(MAX_NUMBER_LEN).parse(i)?;
    let (_, value) = f32::parse(magnitude)?;

    Ok((i, if negative { -value } else { value }))
}

/// Parses a four-digit station ID, `0000` through [`MAX_STATION_ID`].
///
/// The ID keeps its leading zeros.
pub fn station_id(i: &str) -> IResult<&str, StationId> {
    recognize(verify(digits(4, 4).and_then(u16::parse), |id: &u16| {
        *id <= MAX_STATION_ID
    }))
    .map_res(|id: &str| id.parse::<StationId>())
    .parse(i)
}

/// Decodes the fourteen tokens of a sentence into a record and its status sets.
///
/// Fields are decoded independently, in wire order. A blank or failing field
/// leaves its slot at the canonical default and is recorded in
/// [`Parsed::empty`] or [`Parsed::invalid`].
pub fn decode(tokens: &[&str; DATA_FIELDS]) -> Parsed {
    let mut decoder = Decoder {
        tokens,
        empty: FieldSet::empty(),
        invalid: FieldSet::empty(),
    };
    let mut record = GgaRecord::default();

    if let Some(time) = decoder.field(Field::Time, utc_time) {
        if time.is_in_range() {
            record.time = time;
        } else {
            warn!("{} out of range: {time}", Field::Time.name());
            decoder.invalid |= FieldSet::TIME;
        }
    }

    let lat = &mut record.position.latitude;
    if let Some((degrees, minutes)) = decoder.field(Field::Latitude, latitude) {
        lat.degrees = degrees;
        lat.minutes = minutes;
    }
    if let Some(hemisphere) = decoder.field(Field::LatitudeHemisphere, north_south) {
        lat.hemisphere = hemisphere;
    }

    let lon = &mut record.position.longitude;
    if let Some((degrees, minutes)) = decoder.field(Field::Longitude, longitude) {
        lon.degrees = degrees;
        lon.minutes = minutes;
    }
    if let Some(hemisphere) = decoder.field(Field::LongitudeHemisphere, east_west) {
        lon.hemisphere = hemisphere;
    }

    if let Some(quality) = decoder.field(Field::FixQuality, fix_quality) {
        record.fix_quality = quality;
    }
    if let Some(count) = decoder.field(Field::SatellitesTracked, satellites_tracked) {
        record.satellites_tracked = count;
    }
    if let Some(hdop) = decoder.field(Field::Hdop, non_negative) {
        record.hdop = hdop;
    }

    let altitude = &mut record.position.altitude;
    if let Some(value) = decoder.field(Field::Altitude, signed) {
        altitude.value = value;
    }
    if let Some(unit) = decoder.field(Field::AltitudeUnit, meters) {
        altitude.unit = unit;
    }

    let separation = &mut record.geoid_separation;
    if let Some(value) = decoder.field(Field::GeoidSeparation, signed) {
        separation.value = value;
    }
    if let Some(unit) = decoder.field(Field::GeoidSeparationUnit, meters) {
        separation.unit = unit;
    }

    if let Some(age) = decoder.field(Field::DgpsAge, non_negative) {
        record.dgps_age = age;
    }
    if let Some(id) = decoder.field(Field::StationId, station_id) {
        record.station_id = id;
    }

    Parsed {
        record,
        empty: decoder.empty,
        invalid: decoder.invalid,
    }
}

struct Decoder<'a, 't> {
    tokens: &'t [&'a str; DATA_FIELDS],
    empty: FieldSet,
    invalid: FieldSet,
}

impl<'a> Decoder<'a, '_> {
    /// Runs `parser` over the token of `field`, recording a blank or failing token.
    fn field<O, P>(&mut self, field: Field, mut parser: P) -> Option<O>
    where
        P: Parser<&'a str, Output = O, Error = GgaError<'a>>,
    {
        let token = self.tokens[field.index()];

        if token.strip_prefix(SENTINEL) == Some("") {
            debug!("{} field is empty", field.name());
            self.empty |= field.flag();
            return None;
        }

        match parser.parse(token) {
            Ok((_, value)) => Some(value),
            Err(_) => {
                warn!("{} field is invalid: {token:?}", field.name());
                self.invalid |= field.flag();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gga::FieldState;

    const EXAMPLE: [&str; DATA_FIELDS] = [
        "002153.000",
        "3342.6618",
        "N",
        "11751.3858",
        "W",
        "1",
        "10",
        "1.2",
        "27.0",
        "M",
        "-34.2",
        "M",
        "@",
        "0000",
    ];

    fn with_token(field: Field, token: &'static str) -> [&'static str; DATA_FIELDS] {
        let mut tokens = EXAMPLE;
        tokens[field.index()] = token;
        tokens
    }

    #[test]
    fn test_decode_example() {
        let parsed = decode(&EXAMPLE);
        let record = &parsed.record;

        assert_eq!(parsed.empty, FieldSet::DGPS_AGE);
        assert!(parsed.invalid.is_empty());

        assert_eq!(record.time.hour, 0);
        assert_eq!(record.time.minute, 21);
        assert_eq!(record.time.second, 53.0);
        assert_eq!(record.position.latitude.degrees, 33);
        assert!((record.position.latitude.minutes - 42.6618).abs() < 1e-4);
        assert_eq!(record.position.latitude.hemisphere, 'N');
        assert_eq!(record.position.longitude.degrees, 117);
        assert!((record.position.longitude.minutes - 51.3858).abs() < 1e-4);
        assert_eq!(record.position.longitude.hemisphere, 'W');
        assert_eq!(record.fix_quality, 1);
        assert_eq!(record.satellites_tracked, 10);
        assert_eq!(record.hdop, 1.2);
        assert_eq!(record.position.altitude.value, 27.0);
        assert_eq!(record.position.altitude.unit, 'M');
        assert_eq!(record.geoid_separation.value, -34.2);
        assert_eq!(record.geoid_separation.unit, 'M');
        assert_eq!(record.dgps_age, 999.99);
        assert_eq!(record.station_id.as_str(), "0000");
    }

    #[test]
    fn test_decode_invalid_field_keeps_default() {
        let cases = [
            (Field::Time, "0021.53000"),
            (Field::Time, "002153.0000"),
            (Field::Latitude, "33426618"),
            (Field::Latitude, "3342.66181"),
            (Field::LatitudeHemisphere, "E"),
            (Field::Longitude, "1751.3858"),
            (Field::LongitudeHemisphere, "WW"),
            (Field::FixQuality, "-1"),
            (Field::FixQuality, "A"),
            (Field::FixQuality, "10"),
            (Field::SatellitesTracked, "123"),
            (Field::SatellitesTracked, "1a"),
            (Field::Hdop, "-1.2"),
            (Field::Hdop, "1.2.3"),
            (Field::Altitude, "--27.0"),
            (Field::Altitude, "27.0M"),
            (Field::AltitudeUnit, "F"),
            (Field::GeoidSeparation, "-"),
            (Field::GeoidSeparationUnit, "m"),
            (Field::DgpsAge, "-3.0"),
            (Field::StationId, "000"),
            (Field::StationId, "00000"),
        ];

        for (field, token) in cases {
            let parsed = decode(&with_token(field, token));
            assert_eq!(parsed.invalid, field.flag(), "{token:?}");
            assert_eq!(parsed.state(field), FieldState::Invalid);
            assert_eq!(parsed.empty, FieldSet::DGPS_AGE);

            // an invalid token leaves the same slot untouched as a blank one
            let blank = decode(&with_token(field, "@"));
            assert_eq!(parsed.record, blank.record, "{token:?}");
        }
    }

    #[test]
    fn test_decode_time_out_of_range() {
        for token in ["500213.000", "006000.000", "002160.000", "250000.000"] {
            let parsed = decode(&with_token(Field::Time, token));
            assert_eq!(parsed.invalid, FieldSet::TIME, "{token:?}");
            assert_eq!(parsed.record.time, Time::default());
        }

        let parsed = decode(&with_token(Field::Time, "240000.000"));
        assert!(parsed.invalid.is_empty());
        assert_eq!(parsed.record.time.hour, 24);
    }

    #[test]
    fn test_decode_boundaries() {
        let cases = [
            (Field::SatellitesTracked, "12", true),
            (Field::SatellitesTracked, "13", false),
            (Field::SatellitesTracked, "0", true),
            (Field::StationId, "1023", true),
            (Field::StationId, "1024", false),
            (Field::FixQuality, "8", true),
            (Field::FixQuality, "9", false),
            (Field::FixQuality, "0", true),
        ];

        for (field, token, valid) in cases {
            let parsed = decode(&with_token(field, token));
            assert_eq!(!parsed.invalid.has(field), valid, "{field:?} {token:?}");
        }
    }

    #[test]
    fn test_decode_every_field_empty() {
        let parsed = decode(&["@"; DATA_FIELDS]);
        assert_eq!(parsed.empty, FieldSet::all());
        assert!(parsed.invalid.is_empty());
        assert_eq!(parsed.record, GgaRecord::default());
    }

    #[test]
    fn test_signed_fields() {
        let result: IResult<_, _> = signed("27.0");
        assert_eq!(result, Ok(("", 27.0)));

        let result: IResult<_, _> = signed("-0.5");
        assert_eq!(result, Ok(("", -0.5)));

        let result: IResult<_, _> = signed("-.5");
        assert_eq!(result, Ok(("", -0.5)));

        let too_long = "-123456789012345";
        assert!(signed(too_long).is_err());
    }

    #[test]
    fn test_decimal_fields_keep_their_fraction() {
        let result: IResult<_, _> = non_negative("1.2");
        assert_eq!(result, Ok(("", 1.2)));

        let mut tokens = with_token(Field::DgpsAge, "3.75");
        tokens[Field::Altitude.index()] = "-12.5";
        let record = decode(&tokens).record;

        assert_eq!(record.hdop, 1.2);
        assert_eq!(record.dgps_age, 3.75);
        assert_eq!(record.position.altitude.value, -12.5);
        assert_eq!(record.geoid_separation.value, -34.2);
    }

    #[test]
    fn test_decimal_length_limit() {
        let result: IResult<_, _> = non_negative("1234567890.123");
        assert!(result.is_ok());

        assert!(non_negative("12345678901.123").is_err());
    }

    #[test]
    fn test_station_id_keeps_leading_zeros() {
        let result: IResult<_, _> = station_id("0042");
        let (_, id) = result.unwrap();
        assert_eq!(id.as_str(), "0042");
    }
}
