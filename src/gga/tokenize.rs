use nom::{
    Err, Parser,
    branch::alt,
    bytes::complete::{take_till, take_until},
    character::complete::char,
    combinator::{opt, rest},
};

use crate::{Error, IResult, gga::DATA_FIELDS};

/// Splits a normalized sentence into its fourteen data fields.
///
/// Everything from the `*` checksum marker onward and the leading tag are
/// discarded. The fourteenth token extends to the end of the data, so surplus
/// fields end up in it instead of being dropped.
///
/// Blank fields must already hold a sentinel (see [`normalize`](super::normalize)):
/// the tokenizer itself treats an empty token like any other text.
///
/// Fails with [`Error::MissingFields`] when the sentence carries fewer than
/// fourteen data fields.
///
/// ```rust
/// use nmea0183_gga::{Error, gga::tokenize};
///
/// let (_, tokens) = tokenize("$GPGGA,1,2,3,4,5,6,7,8,9,10,11,12,13,14*00").unwrap();
/// assert_eq!(tokens[0], "1");
/// assert_eq!(tokens[13], "14");
///
/// let result = tokenize("$GPGGA,1,2,3*00");
/// assert_eq!(result, Err(nom::Err::Error(Error::MissingFields { found: 3 })));
/// ```
pub fn tokenize(body: &str) -> IResult<&str, [&str; DATA_FIELDS]> {
    let (suffix, data) = alt((take_until("*"), rest)).parse(body)?;
    let (mut i, _tag) = take_till(|c: char| c == ',').parse(data)?;

    let mut tokens = [""; DATA_FIELDS];
    for (found, token) in tokens.iter_mut().enumerate() {
        let (next, delimiter) = opt(char(',')).parse(i)?;
        if delimiter.is_none() {
            return Err(Err::Error(Error::MissingFields { found }));
        }

        let (next, text) = if found + 1 == DATA_FIELDS {
            rest(next)?
        } else {
            take_till(|c: char| c == ',').parse(next)?
        };

        *token = text;
        i = next;
    }

    Ok((suffix, tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gga::normalize;

    #[test]
    fn test_tokenize_example_sentence() {
        let body = normalize(
            "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E",
        )
        .unwrap();

        let (rest, tokens) = tokenize(&body).unwrap();
        assert_eq!(rest, "*5E");
        assert_eq!(
            tokens,
            [
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
                "0000"
            ]
        );
    }

    #[test]
    fn test_tokenize_surplus_fields_stay_in_last_token() {
        let (_, tokens) = tokenize("GPGGA,1,2,3,4,5,6,7,8,9,10,11,12,13,14,15").unwrap();
        assert_eq!(tokens[13], "14,15");
    }

    #[test]
    fn test_tokenize_missing_fields() {
        let result = tokenize("$GPGGA*00");
        assert_eq!(result, Err(Err::Error(Error::MissingFields { found: 0 })));

        let result = tokenize("$GPGGA,1,2,3,4,5,6,7,8,9,10,11,12,13*00");
        assert_eq!(result, Err(Err::Error(Error::MissingFields { found: 13 })));
    }
}
