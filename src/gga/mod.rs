//! # GGA Sentence Parsing
//!
//! [`parse`] runs the whole pipeline over one sentence:
//!
//! 1. [`frame`](crate::frame) checks the tag and the checksum. A failure rejects the sentence.
//! 2. [`normalize`] writes a [`SENTINEL`] into every blank field.
//! 3. [`tokenize`] splits the data into fourteen tokens. Fewer tokens reject the sentence.
//! 4. [`decode`](decode::decode) decodes every token on its own, recording
//!    blank and failing fields in two [`FieldSet`]s.
//!
//! Nothing is kept between calls: every call starts from a fresh
//! [`GgaRecord::default`] and empty status sets.

use log::{debug, error, warn};
use nom::Finish;

use crate::{Error, GgaError, LineEndingMode, TalkerMode, frame};

mod accessors;
pub mod decode;
mod normalize;
mod record;
mod report;
mod status;
mod tokenize;

pub use accessors::*;
pub use normalize::{MAX_SENTENCE_LEN, NORMALIZED_CAPACITY, NormalizedBody, SENTINEL, normalize};
pub use record::*;
pub use status::*;
pub use tokenize::tokenize;

/// The outcome of parsing an accepted GGA sentence.
///
/// Every field of the sentence is in exactly one of three states: its slot in
/// [`record`](Parsed::record) holds the decoded value, or the field is a member
/// of [`empty`](Parsed::empty), or it is a member of [`invalid`](Parsed::invalid).
/// The slot of an empty or invalid field holds its canonical default.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed {
    /// The decoded reading
    pub record: GgaRecord,
    /// Fields whose token was blank
    pub empty: FieldSet,
    /// Fields whose token failed its grammar or range check
    pub invalid: FieldSet,
}

impl Parsed {
    /// Returns the state `field` ended up in.
    ///
    /// ```rust
    /// use nmea0183_gga::{gga::{Field, FieldState}, parse};
    ///
    /// let parsed = parse("$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E").unwrap();
    /// assert_eq!(parsed.state(Field::Time), FieldState::Valid);
    /// assert_eq!(parsed.state(Field::DgpsAge), FieldState::Empty);
    /// ```
    pub fn state(&self, field: Field) -> FieldState {
        if self.invalid.has(field) {
            FieldState::Invalid
        } else if self.empty.has(field) {
            FieldState::Empty
        } else {
            FieldState::Valid
        }
    }

    /// Returns `true` if every field decoded to a value.
    pub fn is_complete(&self) -> bool {
        self.empty.is_empty() && self.invalid.is_empty()
    }
}

/// A configured GGA parser.
///
/// Build one with [`GgaParserBuilder`]. The free functions [`parse`] and
/// [`validate`] use [`GgaParser::default`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GgaParser {
    talker_mode: TalkerMode,
    line_ending_mode: LineEndingMode,
}

impl GgaParser {
    /// Returns `true` if the tag and the checksum of `sentence` are accepted.
    ///
    /// The data fields are not inspected.
    pub fn validate(&self, sentence: &str) -> bool {
        frame(self.talker_mode, self.line_ending_mode)(sentence).is_ok()
    }

    /// Parses one sentence into a [`Parsed`] value.
    ///
    /// Failures of single fields never reject the sentence.
    ///
    /// A rejected sentence yields an [`Error`] instead of an all-default
    /// record: there is no [`Parsed`] and no per-field status to inspect. A
    /// caller that wants the all-default record substitutes
    /// [`GgaRecord::default`] itself and waits for the next sentence:
    ///
    /// ```rust
    /// use nmea0183_gga::{GgaParser, GgaRecord};
    ///
    /// let record = GgaParser::default()
    ///     .parse("$GPGSA,A,3,10,07,05,02,29,04,08,13,,,,,1.72,1.03,1.38*0A")
    ///     .map(|parsed| parsed.record)
    ///     .unwrap_or_default();
    /// assert_eq!(record, GgaRecord::default());
    /// ```
    pub fn parse<'a>(&self, sentence: &'a str) -> Result<Parsed, GgaError<'a>> {
        self.try_parse(sentence).inspect_err(|e| match e {
            Error::BufferExhausted { capacity } => error!(
                "sentence of {} bytes does not fit the {capacity}-byte normalization buffer",
                sentence.len()
            ),
            e => warn!("rejected {sentence:?}: {e}"),
        })
    }

    fn try_parse<'a>(&self, sentence: &'a str) -> Result<Parsed, GgaError<'a>> {
        let (_, framed) = frame(self.talker_mode, self.line_ending_mode)(sentence).finish()?;
        let body = normalize(framed.sentence)?;

        let tokens = match tokenize(&body).finish() {
            Ok((_, tokens)) => tokens,
            Err(Error::MissingFields { found }) => return Err(Error::MissingFields { found }),
            Err(e) => {
                return Err(Error::ParsingError(nom::error::Error::new(
                    framed.sentence,
                    match e {
                        Error::ParsingError(e) => e.code,
                        _ => nom::error::ErrorKind::Fail,
                    },
                )));
            }
        };

        let parsed = decode::decode(&tokens);
        debug!(
            "accepted {:?} with {} empty and {} invalid fields",
            framed.sentence,
            parsed.empty.iter().count(),
            parsed.invalid.iter().count()
        );

        Ok(parsed)
    }
}

/// Builder for a [`GgaParser`].
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::{GgaParserBuilder, LineEndingMode, TalkerMode};
///
/// let sentence = "$GNGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*40";
///
/// let strict = GgaParserBuilder::new().build();
/// assert!(strict.parse(sentence).is_err());
///
/// let multi_gnss = GgaParserBuilder::new()
///     .talker_mode(TalkerMode::Any)
///     .line_ending_mode(LineEndingMode::Forbidden)
///     .build();
/// assert!(multi_gnss.parse(sentence).is_ok());
/// assert!(multi_gnss.parse(&format!("{sentence}\r\n")).is_err());
/// ```
#[must_use]
#[derive(Debug, Default, Clone, Copy)]
pub struct GgaParserBuilder {
    talker_mode: TalkerMode,
    line_ending_mode: LineEndingMode,
}

impl GgaParserBuilder {
    /// Creates a builder with the default settings:
    /// - Talker mode: [`TalkerMode::Gps`]
    /// - Line ending mode: [`LineEndingMode::Optional`]
    pub fn new() -> Self {
        GgaParserBuilder {
            talker_mode: TalkerMode::Gps,
            line_ending_mode: LineEndingMode::Optional,
        }
    }

    /// Sets which talker identifiers are accepted.
    pub fn talker_mode(mut self, mode: TalkerMode) -> Self {
        self.talker_mode = mode;
        self
    }

    /// Sets how a trailing line terminator is treated.
    pub fn line_ending_mode(mut self, mode: LineEndingMode) -> Self {
        self.line_ending_mode = mode;
        self
    }

    pub fn build(self) -> GgaParser {
        GgaParser {
            talker_mode: self.talker_mode,
            line_ending_mode: self.line_ending_mode,
        }
    }
}

/// Parses one `$GPGGA` sentence with the default settings.
///
/// # Examples
///
/// ```rust
/// use nmea0183_gga::{Error, gga::FieldSet, parse};
///
/// let parsed = parse("$GPGGA,002153.000,3342.6618,N,11751.3858,W,-1,10,1.2,27.0,M,34.2,M,,0000*5E").unwrap();
/// assert_eq!(parsed.invalid, FieldSet::FIX_QUALITY);
/// assert_eq!(parsed.record.fix_quality, 9);
/// assert_eq!(parsed.record.satellites_tracked, 10);
///
/// let result = parse("$GPGSA,A,3,10,07,05,02,29,04,08,13,,,,,1.72,1.03,1.38*0A");
/// assert_eq!(result, Err(Error::UnrecognizedMessage("$GPGSA")));
/// ```
pub fn parse(sentence: &str) -> Result<Parsed, GgaError<'_>> {
    GgaParser::default().parse(sentence)
}
