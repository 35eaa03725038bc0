use nom::{Err, IResult, Parser, error::ErrorKind};

use crate::{Error, LineEndingMode, TalkerMode, checksum_suffix, crlf, frame, validate};

const EXAMPLE: &str =
    "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E";

fn suffix_error(i: &str) -> ErrorKind {
    let res: IResult<_, _> = checksum_suffix(i);

    match res {
        Err(Err::Error(error)) => error.code,
        other => panic!("Unexpected result: {other:?}"),
    }
}

#[test]
fn test_checksum_suffix_ok() {
    let res: IResult<_, _> = checksum_suffix("*1F");
    assert_eq!(res, Ok(("", 0x1F)));

    let res: IResult<_, _> = checksum_suffix("*1f");
    assert_eq!(res, Ok(("", 0x1F)));
}

#[test]
fn test_checksum_suffix_large_hex() {
    assert_eq!(suffix_error("*1F43"), ErrorKind::Count);
}

#[test]
fn test_checksum_suffix_large_text() {
    assert_eq!(suffix_error("*1Fzz"), ErrorKind::Count);
}

#[test]
fn test_checksum_suffix_small() {
    assert_eq!(suffix_error("*1"), ErrorKind::Eof);
}

#[test]
fn test_checksum_suffix_not_hex() {
    assert_eq!(suffix_error("*zz"), ErrorKind::IsA);
}

#[test]
fn test_checksum_suffix_missing_marker() {
    assert_eq!(suffix_error("1F"), ErrorKind::Char);
    assert_eq!(suffix_error(""), ErrorKind::Char);
}

#[test]
fn test_crlf_modes() {
    let cases = [
        (LineEndingMode::Required, "data\r\n", Some("data")),
        (LineEndingMode::Required, "data\n", Some("data")),
        (LineEndingMode::Required, "data", None),
        (LineEndingMode::Optional, "data\r\n", Some("data")),
        (LineEndingMode::Optional, "data", Some("data")),
        (LineEndingMode::Forbidden, "data", Some("data")),
        (LineEndingMode::Forbidden, "data\r\n", None),
    ];

    for (mode, input, expected) in cases {
        let res: IResult<_, _> = crlf(mode).parse(input);
        assert_eq!(res.ok().map(|(rest, _)| rest), expected, "{mode:?} {input:?}");
    }
}

#[test]
fn test_frame_checks_run_in_order() {
    let parser = frame(TalkerMode::Gps, LineEndingMode::Optional);

    assert_eq!(parser(""), Err(Err::Error(Error::EmptySentence)));
    assert_eq!(parser("$GPGGA,°*00"), Err(Err::Error(Error::NonAscii)));

    // the tag is checked before the checksum is looked at
    assert_eq!(
        parser("$GPGSA,A,3*FF"),
        Err(Err::Error(Error::UnrecognizedMessage("$GPGSA")))
    );
    assert_eq!(
        parser("GPGGA,002153.000*00"),
        Err(Err::Error(Error::UnrecognizedMessage("GPGGA")))
    );

    assert!(matches!(
        parser("$GPGGA,002153.000"),
        Err(Err::Error(Error::ParsingError(_)))
    ));
}

#[test]
fn test_frame_example() {
    let parser = frame(TalkerMode::Gps, LineEndingMode::Optional);

    let (rest, f) = parser(EXAMPLE).unwrap();
    assert_eq!(rest, "");
    assert_eq!(f.sentence, EXAMPLE);
    assert_eq!(f.checksum, 0x5E);
    assert!(f.body.starts_with("GPGGA,002153.000"));
    assert!(f.body.ends_with(",,0000"));
}

#[test]
fn test_validate() {
    assert!(validate(EXAMPLE));
    assert!(validate(&EXAMPLE.replace("*5E", "*5e")));
    assert!(validate(&format!("{EXAMPLE}\r\n")));

    // a body edit that keeps the XOR is not detected
    assert!(validate(&EXAMPLE.replace(",1,10,", ",-1,10,").replace(",-34.2,", ",34.2,")));

    assert!(!validate(&EXAMPLE.replace("*5E", "*5D")));
    assert!(!validate(&EXAMPLE.replace("11751.3858", "1751.3858")));
    assert!(!validate(&EXAMPLE.replace("$GPGGA", "$GNGGA")));
    assert!(!validate(&EXAMPLE.replace("*5E", "")));
    assert!(!validate(""));
}

#[test]
fn test_any_talker() {
    let sentence = EXAMPLE.replace("$GPGGA", "$GNGGA").replace("*5E", "*40");
    let lowercase = sentence.replace("$GNGGA", "$gnGGA");
    let other_type = sentence.replace("$GNGGA", "$GNRMC");

    let parser = frame(TalkerMode::Any, LineEndingMode::Forbidden);
    assert!(parser(&sentence).is_ok());
    assert!(parser(&lowercase).is_err());
    assert!(parser(&other_type).is_err());
}

#[test]
fn test_tag_ends_at_checksum_marker() {
    let parser = frame(TalkerMode::Gps, LineEndingMode::Optional);

    let (_, f) = parser("$GPGGA*56").unwrap();
    assert_eq!(f.body, "GPGGA");
    assert_eq!(
        parser("$GPGSA*56"),
        Err(Err::Error(Error::UnrecognizedMessage("$GPGSA")))
    );
}
