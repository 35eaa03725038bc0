use bitflags::bitflags;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of data fields in a GGA sentence.
pub const DATA_FIELDS: usize = 14;

/// The data fields of a GGA sentence, in wire order.
///
/// ```text
///                                                      11
///         1         2       3 4        5 6 7  8   9  10 |  12 13  14
///         |         |       | |        | | |  |   |   | |   | |   |
///  $--GGA,hhmmss.ss,ddmm.mm,a,dddmm.mm,a,x,xx,x.x,x.x,M,x.x,M,x.x,xxxx*hh<CR><LF>
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// 1 - UTC time, `hhmmss.sss`
    Time,
    /// 2 - Latitude, `ddmm.mmmm`
    Latitude,
    /// 3 - Latitude hemisphere, `N` or `S`
    LatitudeHemisphere,
    /// 4 - Longitude, `dddmm.mmmm`
    Longitude,
    /// 5 - Longitude hemisphere, `E` or `W`
    LongitudeHemisphere,
    /// 6 - GPS quality indicator, `0`-`8`
    FixQuality,
    /// 7 - Number of satellites in use, `0`-`12`
    SatellitesTracked,
    /// 8 - Horizontal dilution of precision
    Hdop,
    /// 9 - Antenna altitude above mean sea level
    Altitude,
    /// 10 - Altitude unit, `M`
    AltitudeUnit,
    /// 11 - Geoidal separation
    GeoidSeparation,
    /// 12 - Geoidal separation unit, `M`
    GeoidSeparationUnit,
    /// 13 - Age of differential GPS data in seconds
    DgpsAge,
    /// 14 - Differential reference station ID, `0000`-`1023`
    StationId,
}

impl Field {
    /// Every field, in wire order.
    pub const ALL: [Field; DATA_FIELDS] = [
        Field::Time,
        Field::Latitude,
        Field::LatitudeHemisphere,
        Field::Longitude,
        Field::LongitudeHemisphere,
        Field::FixQuality,
        Field::SatellitesTracked,
        Field::Hdop,
        Field::Altitude,
        Field::AltitudeUnit,
        Field::GeoidSeparation,
        Field::GeoidSeparationUnit,
        Field::DgpsAge,
        Field::StationId,
    ];

    /// Zero-based position of the field among the data fields.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The single-field [`FieldSet`] for this field.
    pub const fn flag(self) -> FieldSet {
        FieldSet::from_bits_retain(1 << self as u16)
    }

    /// Human-readable field name.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Time => "UTC time",
            Field::Latitude => "latitude",
            Field::LatitudeHemisphere => "latitude hemisphere",
            Field::Longitude => "longitude",
            Field::LongitudeHemisphere => "longitude hemisphere",
            Field::FixQuality => "GPS quality indicator",
            Field::SatellitesTracked => "satellites tracked",
            Field::Hdop => "HDOP",
            Field::Altitude => "altitude",
            Field::AltitudeUnit => "altitude unit",
            Field::GeoidSeparation => "geoidal separation",
            Field::GeoidSeparationUnit => "geoidal separation unit",
            Field::DgpsAge => "age of DGPS data",
            Field::StationId => "differential reference station ID",
        }
    }
}

bitflags! {
    /// A set of GGA fields.
    ///
    /// [`Parsed`](super::Parsed) carries two of these: the fields whose token
    /// was empty and the fields whose token failed its grammar or range check.
    #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FieldSet: u16 {
        const TIME = 1 << 0;
        const LATITUDE = 1 << 1;
        const LATITUDE_HEMISPHERE = 1 << 2;
        const LONGITUDE = 1 << 3;
        const LONGITUDE_HEMISPHERE = 1 << 4;
        const FIX_QUALITY = 1 << 5;
        const SATELLITES_TRACKED = 1 << 6;
        const HDOP = 1 << 7;
        const ALTITUDE = 1 << 8;
        const ALTITUDE_UNIT = 1 << 9;
        const GEOID_SEPARATION = 1 << 10;
        const GEOID_SEPARATION_UNIT = 1 << 11;
        const DGPS_AGE = 1 << 12;
        const STATION_ID = 1 << 13;
    }
}

impl FieldSet {
    /// Returns `true` if `field` is a member of the set.
    pub fn has(&self, field: Field) -> bool {
        self.contains(field.flag())
    }

    /// Iterates over the member fields in wire order.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(|field| self.has(*field))
    }
}

/// The outcome of decoding a single field.
///
/// Exactly one state holds per field of an accepted sentence.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldState {
    #[default]
    /// The field held a well-formed, in-range value.
    Valid,
    /// The field was left blank between its delimiters.
    Empty,
    /// The field was present but failed its grammar or range check.
    Invalid,
}

impl FieldState {
    /// Combines the states of fields that make up one quantity.
    ///
    /// `Invalid` outranks `Empty`, which outranks `Valid`.
    ///
    /// ```rust
    /// use nmea0183_gga::gga::FieldState;
    ///
    /// assert_eq!(FieldState::Valid.worst(FieldState::Empty), FieldState::Empty);
    /// assert_eq!(FieldState::Invalid.worst(FieldState::Empty), FieldState::Invalid);
    /// ```
    pub fn worst(self, other: FieldState) -> FieldState {
        match (self, other) {
            (FieldState::Invalid, _) | (_, FieldState::Invalid) => FieldState::Invalid,
            (FieldState::Empty, _) | (_, FieldState::Empty) => FieldState::Empty,
            _ => FieldState::Valid,
        }
    }
}
