//! # NMEA 0183 GGA Parser
//!
//! This library parses GGA sentences (GPS fix data) of the form:
//! `$GPGGA,hhmmss.sss,ddmm.mmmm,N,dddmm.mmmm,W,q,ss,h.h,a.a,M,g.g,M,d.d,ssss*CC`
//!
//! Unlike a fail-fast parser it keeps going when a single field is malformed.
//! A sentence is either:
//! - rejected as a whole (wrong tag, checksum mismatch, too few fields), or
//! - accepted, in which case every one of its fourteen fields is reported as
//!   valid, empty or invalid on its own.
//!
//! The parser is configurable to handle:
//! - `$GPGGA` only, or any talker (`$GNGGA`, `$GLGGA`, ...)
//! - Required, optional or forbidden line endings
//!
//! ## Usage
//!
//! ```rust
//! use nmea0183_gga::{gga::FieldState, parse};
//!
//! let sentence = "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E";
//!
//! match parse(sentence) {
//!     Ok(parsed) => {
//!         let hdop = parsed.hdop();
//!         assert_eq!(hdop.state, FieldState::Valid);
//!         assert_eq!(hdop.value, 1.2);
//!
//!         assert_eq!(parsed.dgps_age().state, FieldState::Empty);
//!     }
//!     Err(e) => panic!("sentence rejected: {e}"),
//! }
//! ```

pub mod error;
pub mod gga;
mod nmea0183;
pub mod parse;
pub mod parsing;

pub use error::{Error, GgaError, IResult};
pub use gga::{GgaParser, GgaParserBuilder, GgaRecord, Parsed, parse};
pub use nmea0183::*;
pub use parse::NmeaParse;

#[cfg(doctest)]
#[doc = include_str!("../README.md")]
struct README;

#[cfg(test)]
mod tests {
    mod framing;
    mod sentences;
}
