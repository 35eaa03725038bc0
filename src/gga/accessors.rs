use crate::{
    GgaError,
    gga::{
        Altitude, Field, FieldState, GeoidSeparation, Latitude, Longitude, Parsed, StationId,
        Time, parse,
    },
};

/// A single quantity of a parsed sentence together with its classification.
///
/// `value` is the decoded value when `state` is [`FieldState::Valid`] and the
/// canonical default otherwise.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading<T> {
    pub value: T,
    pub state: FieldState,
}

impl<T> Reading<T> {
    pub fn is_valid(&self) -> bool {
        self.state == FieldState::Valid
    }

    /// Returns the value if it was decoded, `None` if it is a default.
    pub fn ok(self) -> Option<T> {
        self.is_valid().then_some(self.value)
    }
}

impl Parsed {
    fn reading<T>(&self, value: T, field: Field) -> Reading<T> {
        Reading {
            value,
            state: self.state(field),
        }
    }

    /// Reading of a quantity spread over a value and a qualifier field.
    ///
    /// The state is the worse of the two. Unless both fields are valid the
    /// value is the whole quantity's default, never a half-decoded one.
    fn combined<T: Default>(&self, value: T, fields: [Field; 2]) -> Reading<T> {
        let state = self.state(fields[0]).worst(self.state(fields[1]));
        let value = match state {
            FieldState::Valid => value,
            _ => T::default(),
        };

        Reading { value, state }
    }

    pub fn time(&self) -> Reading<Time> {
        self.reading(self.record.time, Field::Time)
    }

    /// Latitude, classified from both the value and the hemisphere field.
    pub fn latitude(&self) -> Reading<Latitude> {
        self.combined(
            self.record.position.latitude,
            [Field::Latitude, Field::LatitudeHemisphere],
        )
    }

    /// Longitude, classified from both the value and the hemisphere field.
    pub fn longitude(&self) -> Reading<Longitude> {
        self.combined(
            self.record.position.longitude,
            [Field::Longitude, Field::LongitudeHemisphere],
        )
    }

    /// Altitude, classified from both the value and the unit field.
    pub fn altitude(&self) -> Reading<Altitude> {
        self.combined(
            self.record.position.altitude,
            [Field::Altitude, Field::AltitudeUnit],
        )
    }

    /// Geoidal separation, classified from both the value and the unit field.
    pub fn geoid_separation(&self) -> Reading<GeoidSeparation> {
        self.combined(
            self.record.geoid_separation,
            [Field::GeoidSeparation, Field::GeoidSeparationUnit],
        )
    }

    pub fn hdop(&self) -> Reading<f32> {
        self.reading(self.record.hdop, Field::Hdop)
    }

    pub fn dgps_age(&self) -> Reading<f32> {
        self.reading(self.record.dgps_age, Field::DgpsAge)
    }

    pub fn satellites_tracked(&self) -> Reading<u8> {
        self.reading(self.record.satellites_tracked, Field::SatellitesTracked)
    }

    pub fn fix_quality(&self) -> Reading<u8> {
        self.reading(self.record.fix_quality, Field::FixQuality)
    }

    pub fn station_id(&self) -> Reading<StationId> {
        self.reading(self.record.station_id.clone(), Field::StationId)
    }
}

macro_rules! sentence_accessors {
    ($($name:ident -> $t:ty),* $(,)?) => ($(
        #[doc = concat!(
            "Parses `sentence` and returns its [`Parsed::", stringify!($name), "`] reading."
        )]
        pub fn $name(sentence: &str) -> Result<Reading<$t>, GgaError<'_>> {
            parse(sentence).map(|parsed| parsed.$name())
        }
    )*)
}

sentence_accessors! {
    time -> Time,
    latitude -> Latitude,
    longitude -> Longitude,
    altitude -> Altitude,
    geoid_separation -> GeoidSeparation,
    hdop -> f32,
    dgps_age -> f32,
    satellites_tracked -> u8,
    fix_quality -> u8,
    station_id -> StationId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, checksum, format_checksum};

    fn sentence(body: &str) -> String {
        let (_, cc) = checksum(body);
        format!("${body}*{}", format_checksum(cc))
    }

    #[test]
    fn test_accessors_on_example() {
        let sentence =
            "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E";

        let time = time(sentence).unwrap();
        assert!(time.is_valid());
        assert_eq!(time.value.to_string(), "00:21:53.000");

        let latitude = latitude(sentence).unwrap().ok().unwrap();
        assert_eq!((latitude.degrees, latitude.hemisphere), (33, 'N'));

        let longitude = longitude(sentence).unwrap().ok().unwrap();
        assert_eq!((longitude.degrees, longitude.hemisphere), (117, 'W'));

        assert_eq!(altitude(sentence).unwrap().ok().map(|a| a.value), Some(27.0));
        assert_eq!(
            geoid_separation(sentence).unwrap().ok().map(|g| g.value),
            Some(-34.2)
        );
        assert_eq!(hdop(sentence).unwrap().ok(), Some(1.2));
        assert_eq!(satellites_tracked(sentence).unwrap().ok(), Some(10));
        assert_eq!(fix_quality(sentence).unwrap().ok(), Some(1));
        assert_eq!(station_id(sentence).unwrap().value.as_str(), "0000");

        let age = dgps_age(sentence).unwrap();
        assert_eq!(age.state, FieldState::Empty);
        assert_eq!(age.value, 999.99);
        assert_eq!(age.ok(), None);
    }

    #[test]
    fn test_composite_state_checks_both_fields() {
        let blank_hemisphere =
            sentence("GPGGA,002153.000,3342.6618,,11751.3858,X,1,10,1.2,27.0,,-34.2,M,,0000");

        let latitude = latitude(&blank_hemisphere).unwrap();
        assert_eq!(latitude.state, FieldState::Empty);
        assert_eq!(latitude.value, Latitude::default());

        let longitude = longitude(&blank_hemisphere).unwrap();
        assert_eq!(longitude.state, FieldState::Invalid);
        assert_eq!(longitude.value, Longitude::default());

        let altitude = altitude(&blank_hemisphere).unwrap();
        assert_eq!(altitude.state, FieldState::Empty);
        assert_eq!(altitude.value, Altitude::default());

        let separation = geoid_separation(&blank_hemisphere).unwrap();
        assert_eq!(separation.state, FieldState::Valid);
        assert_eq!(separation.value.value, -34.2);
    }

    #[test]
    fn test_composite_value_is_never_half_decoded() {
        let sentence =
            sentence("GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,x,M,,0000");
        let parsed = parse(&sentence).unwrap();

        // the unit decoded, the value did not
        assert_eq!(parsed.record.geoid_separation.unit, 'M');

        let separation = parsed.geoid_separation();
        assert_eq!(separation.state, FieldState::Invalid);
        assert_eq!(separation.value, GeoidSeparation::default());
        assert_eq!(separation.ok(), None);
    }

    #[test]
    fn test_invalid_outranks_empty() {
        let sentence = sentence("GPGGA,002153.000,,Q,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000");
        assert_eq!(latitude(&sentence).unwrap().state, FieldState::Invalid);
    }

    #[test]
    fn test_accessors_propagate_rejection() {
        let sentence =
            "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5F";
        assert_eq!(
            hdop(sentence),
            Err(Error::ChecksumMismatch {
                expected: 0x5E,
                found: 0x5F
            })
        );
    }
}
