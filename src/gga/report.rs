use core::fmt;

use crate::gga::{FieldState, Parsed, Reading};

/// One line per quantity, each ending with a newline.
///
/// A quantity shows its value, or a warning when it was left blank, or an
/// error when it failed to decode.
///
/// ```rust
/// use nmea0183_gga::parse;
///
/// let parsed = parse("$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E").unwrap();
/// let report = parsed.to_string();
///
/// assert!(report.contains("UTC time: 00:21:53.000\n"));
/// assert!(report.contains("DGPS age: WARNING: field is empty\n"));
/// ```
impl fmt::Display for Parsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        line(f, "UTC time", self.time())?;
        line(f, "Latitude", self.latitude())?;
        line(f, "Longitude", self.longitude())?;
        line(f, "GPS quality indicator", self.fix_quality())?;
        line(f, "Satellites tracked", self.satellites_tracked())?;
        line(f, "HDOP", self.hdop())?;
        line(f, "Altitude", self.altitude())?;
        line(f, "Geoidal separation", self.geoid_separation())?;
        line(f, "DGPS age", self.dgps_age())?;
        line(f, "Station ID", self.station_id())
    }
}

fn line<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    reading: Reading<T>,
) -> fmt::Result {
    match reading.state {
        FieldState::Valid => writeln!(f, "{label}: {}", reading.value),
        FieldState::Empty => writeln!(f, "{label}: WARNING: field is empty"),
        FieldState::Invalid => writeln!(f, "{label}: ERROR: field is invalid"),
    }
}
