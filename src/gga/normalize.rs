use core::{fmt, ops::Deref};

use crate::{Error, GgaError, gga::DATA_FIELDS};

/// Marker written into every field left blank between its delimiters.
pub const SENTINEL: char = '@';

/// Longest sentence the normalizer accepts, line terminator excluded.
///
/// NMEA 0183 caps a sentence at 82 characters; the slack admits
/// receivers that pad fields beyond the standard widths.
pub const MAX_SENTENCE_LEN: usize = 96;

/// Capacity of a [`NormalizedBody`]: the longest sentence plus one sentinel
/// per data field and one spare byte.
pub const NORMALIZED_CAPACITY: usize = MAX_SENTENCE_LEN + DATA_FIELDS + 1;

/// A copy of a sentence in which every blank field holds [`SENTINEL`].
///
/// The buffer lives on the stack and is dropped once the sentence has been
/// tokenized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedBody(heapless::String<NORMALIZED_CAPACITY>);

impl NormalizedBody {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Deref for NormalizedBody {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for NormalizedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Makes every field position of `sentence` explicit.
///
/// Wherever a `,` is immediately followed by another `,`, by the `*`
/// checksum marker or by the end of the input, a [`SENTINEL`] is written
/// right after it. The input is left untouched.
///
/// Fails with [`Error::BufferExhausted`] if the result does not fit into
/// [`NORMALIZED_CAPACITY`] bytes.
///
/// ```rust
/// use nmea0183_gga::gga::normalize;
///
/// let body = normalize("$GPGGA,,3342.6618,N,,W,1*00").unwrap();
/// assert_eq!(body.as_str(), "$GPGGA,@,3342.6618,N,@,W,1*00");
///
/// let body = normalize("$GPGGA,-34.2,M,,*5E").unwrap();
/// assert_eq!(body.as_str(), "$GPGGA,-34.2,M,@,@*5E");
/// ```
pub fn normalize(sentence: &str) -> Result<NormalizedBody, GgaError<'_>> {
    let mut body = heapless::String::new();
    let mut chars = sentence.chars().peekable();

    while let Some(c) = chars.next() {
        body.push(c).map_err(exhausted)?;

        if c == ',' && matches!(chars.peek().copied(), None | Some(',') | Some('*')) {
            body.push(SENTINEL).map_err(exhausted)?;
        }
    }

    Ok(NormalizedBody(body))
}

fn exhausted<'a>(_: ()) -> GgaError<'a> {
    Error::BufferExhausted {
        capacity: NORMALIZED_CAPACITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_leaves_filled_fields_alone() {
        let sentence =
            "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,5.0,0000*5E";
        let body = normalize(sentence).unwrap();
        assert_eq!(body.as_str(), sentence);
    }

    #[test]
    fn test_normalize_marks_every_blank_field() {
        let body = normalize("$GPGGA,,,,,,,,,,,,,,*56").unwrap();
        assert_eq!(body.matches(SENTINEL).count(), DATA_FIELDS);
        assert_eq!(body.as_str(), "$GPGGA,@,@,@,@,@,@,@,@,@,@,@,@,@,@*56");

        let body = normalize("$GPGGA,1,").unwrap();
        assert_eq!(body.as_str(), "$GPGGA,1,@");
    }

    #[test]
    fn test_normalize_growth_is_bounded() {
        let sentence = "$GPGGA,,,,,,,,,,,,,,*56";
        let body = normalize(sentence).unwrap();
        assert!(body.len() <= sentence.len() + DATA_FIELDS);
    }

    #[test]
    fn test_normalize_buffer_exhausted() {
        let sentence = "$GPGGA,".to_string() + &"0".repeat(NORMALIZED_CAPACITY);
        assert_eq!(
            normalize(&sentence),
            Err(Error::BufferExhausted {
                capacity: NORMALIZED_CAPACITY
            })
        );
    }
}
