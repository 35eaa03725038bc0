use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Placeholder for a hemisphere or unit indicator that was not decoded.
pub const DEFAULT_INDICATOR: char = '#';

/// Placeholder for a station ID that was not decoded.
pub const DEFAULT_STATION_ID: &str = "####";

/// Differential reference station ID, four ASCII digits.
pub type StationId = heapless::String<4>;

/// UTC time of the position fix.
///
/// The default is `99:99:99.999`, which no valid sentence can produce.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Time {
    pub hour: u8,
    pub minute: u8,
    pub second: f64,
}

impl Default for Time {
    fn default() -> Self {
        Time {
            hour: 99,
            minute: 99,
            second: 99.999,
        }
    }
}

impl Time {
    /// Returns `true` if hour, minute and second lie in `0..=24`, `0..=59`
    /// and `0.0..60.0` respectively.
    ///
    /// A well-formed `hhmmss.sss` token can still fail this check, e.g. `500213.000`.
    pub fn is_in_range(&self) -> bool {
        self.hour <= 24 && self.minute <= 59 && (0.0..60.0).contains(&self.second)
    }

    /// Converts to a [`time::Time`] with millisecond precision.
    ///
    /// Returns `None` for hour `24`, which GGA admits but [`time::Time`] does not.
    #[cfg(feature = "time")]
    pub fn to_time(&self) -> Option<time::Time> {
        let milliseconds = self.second.fract() * 1000.0;
        let second = self.second.trunc();

        time::Time::from_hms_milli(
            self.hour,
            self.minute,
            second as u8,
            milliseconds.round() as u16,
        )
        .ok()
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:06.3}", self.hour, self.minute, self.second)
    }
}

/// Latitude as transmitted: whole degrees, decimal minutes and hemisphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latitude {
    pub degrees: u8,
    pub minutes: f32,
    /// `N`, `S`, or [`DEFAULT_INDICATOR`]
    pub hemisphere: char,
}

impl Default for Latitude {
    fn default() -> Self {
        Latitude {
            degrees: 99,
            minutes: 99.9999,
            hemisphere: DEFAULT_INDICATOR,
        }
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {:.4}' ({})", self.degrees, self.minutes, self.hemisphere)
    }
}

/// Longitude as transmitted: whole degrees, decimal minutes and hemisphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Longitude {
    pub degrees: u16,
    pub minutes: f32,
    /// `E`, `W`, or [`DEFAULT_INDICATOR`]
    pub hemisphere: char,
}

impl Default for Longitude {
    fn default() -> Self {
        Longitude {
            degrees: 99,
            minutes: 999.9999,
            hemisphere: DEFAULT_INDICATOR,
        }
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {:.4}' ({})", self.degrees, self.minutes, self.hemisphere)
    }
}

/// Antenna altitude above mean sea level.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Altitude {
    pub value: f32,
    /// `M`, or [`DEFAULT_INDICATOR`]
    pub unit: char,
}

impl Default for Altitude {
    fn default() -> Self {
        Altitude {
            value: 999.9,
            unit: DEFAULT_INDICATOR,
        }
    }
}

impl fmt::Display for Altitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({})", self.value, self.unit)
    }
}

/// Position of the fix.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Position {
    pub latitude: Latitude,
    pub longitude: Longitude,
    pub altitude: Altitude,
}

/// Difference between the WGS-84 ellipsoid and mean sea level.
///
/// Negative values mean the geoid is below the ellipsoid.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoidSeparation {
    pub value: f32,
    /// `M`, or [`DEFAULT_INDICATOR`]
    pub unit: char,
}

impl Default for GeoidSeparation {
    fn default() -> Self {
        GeoidSeparation {
            value: 999.9,
            unit: DEFAULT_INDICATOR,
        }
    }
}

impl fmt::Display for GeoidSeparation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} ({})", self.value, self.unit)
    }
}

/// GGA - Global Positioning System Fix Data
///
/// <https://gpsd.gitlab.io/gpsd/NMEA.html#_gga_global_positioning_system_fix_data>
///
/// Every slot starts at a canonical default that no valid sentence can
/// produce, and keeps it unless its field decodes successfully.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct GgaRecord {
    /// Fix time in UTC
    pub time: Time,
    /// Latitude, longitude and altitude
    pub position: Position,
    /// Geoidal separation
    pub geoid_separation: GeoidSeparation,
    /// GPS quality indicator, `0`-`8`, default `9`
    pub fix_quality: u8,
    /// Number of satellites in use, `0`-`12`, default `99`
    pub satellites_tracked: u8,
    /// Horizontal dilution of precision, default `999.9`
    pub hdop: f32,
    /// Age of differential GPS data in seconds, default `999.99`
    pub dgps_age: f32,
    /// Differential reference station ID, `0000`-`1023`, default `####`
    pub station_id: StationId,
}

impl Default for GgaRecord {
    fn default() -> Self {
        GgaRecord {
            time: Time::default(),
            position: Position::default(),
            geoid_separation: GeoidSeparation::default(),
            fix_quality: 9,
            satellites_tracked: 99,
            hdop: 999.9,
            dgps_age: 999.99,
            station_id: default_station_id(),
        }
    }
}

impl GgaRecord {
    /// Typed view of [`GgaRecord::fix_quality`], `None` while it holds its default.
    pub fn quality(&self) -> Option<Quality> {
        Quality::from_indicator(self.fix_quality)
    }
}

/// Returns the `####` placeholder station ID.
pub fn default_station_id() -> StationId {
    DEFAULT_STATION_ID.parse().unwrap_or_default()
}

macro_rules! indicator_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $value:literal => $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Maps a wire value onto a variant.
            pub fn from_indicator(value: u8) -> Option<Self> {
                match value {
                    $($value => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// The wire value of the variant.
            pub fn indicator(self) -> u8 {
                match self {
                    $(Self::$variant => $value,)*
                }
            }
        }
    };
}

indicator_enum! {
    /// Quality of the GPS fix
    pub enum Quality {
        /// 0 - Fix not available
        0 => NoFix,
        /// 1 - GPS fix
        1 => GPSFix,
        /// 2 - Differential GPS fix
        2 => DGPSFix,
        /// 3 - PPS fix
        3 => PPSFix,
        /// 4 - Real Time Kinematic
        4 => RTK,
        /// 5 - Float RTK
        5 => FloatRTK,
        /// 6 - estimated (dead reckoning)
        6 => Estimated,
        /// 7 - Manual input mode
        7 => Manual,
        /// 8 - Simulation mode
        8 => Simulation,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults_are_out_of_range() {
        let record = GgaRecord::default();

        assert!(!record.time.is_in_range());
        assert_eq!(record.position.latitude.hemisphere, DEFAULT_INDICATOR);
        assert_eq!(record.position.longitude.minutes, 999.9999);
        assert_eq!(record.fix_quality, 9);
        assert_eq!(record.quality(), None);
        assert_eq!(record.satellites_tracked, 99);
        assert_eq!(record.station_id.as_str(), "####");
    }

    #[test]
    fn test_time_range() {
        let time = |hour, minute, second| Time {
            hour,
            minute,
            second,
        };

        assert!(time(0, 0, 0.0).is_in_range());
        assert!(time(24, 59, 59.999).is_in_range());
        assert!(!time(25, 0, 0.0).is_in_range());
        assert!(!time(12, 60, 0.0).is_in_range());
        assert!(!time(12, 0, 60.0).is_in_range());
    }

    #[test]
    fn test_quality() {
        assert_eq!(Quality::from_indicator(0), Some(Quality::NoFix));
        assert_eq!(Quality::from_indicator(8), Some(Quality::Simulation));
        assert_eq!(Quality::from_indicator(9), None);
        assert_eq!(Quality::DGPSFix.indicator(), 2);
    }

    #[test]
    fn test_display() {
        let time = Time {
            hour: 0,
            minute: 21,
            second: 53.0,
        };
        assert_eq!(time.to_string(), "00:21:53.000");

        let altitude = Altitude {
            value: -34.2,
            unit: 'M',
        };
        assert_eq!(altitude.to_string(), "-34.2 (M)");
    }

    #[cfg(feature = "time")]
    #[test]
    fn test_to_time() {
        let time = Time {
            hour: 0,
            minute: 21,
            second: 53.5,
        };
        assert_eq!(
            time.to_time(),
            Some(time::Time::from_hms_milli(0, 21, 53, 500).unwrap())
        );

        let midnight = Time {
            hour: 24,
            minute: 0,
            second: 0.0,
        };
        assert_eq!(midnight.to_time(), None);
    }
}
