//! Parses GGA sentences and prints a report for each of them.
//!
//! Sentences are read line by line from stdin when it is piped, e.g.
//! `cat capture.nmea | cargo run --example parse_sentences`. Otherwise a set
//! of built-in samples is used. Set `LOG_LEVEL=debug` to see every field
//! decision.

use std::io::{self, BufRead, IsTerminal};

use nmea0183_gga::{
    GgaRecord, Parsed,
    gga::{FieldState, Reading},
    parse,
};

const SAMPLES: [&str; 5] = [
    // valid
    "$GPGGA,002153.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E",
    // not a GGA sentence
    "$GPGSA,A,3,10,07,05,02,29,04,08,13,,,,,1.72,1.03,1.38*0A",
    // negative quality indicator, the sign was moved from the geoidal separation
    "$GPGGA,002153.000,3342.6618,N,11751.3858,W,-1,10,1.2,27.0,M,34.2,M,,0000*5E",
    // hour out of range
    "$GPGGA,500213.000,3342.6618,N,11751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E",
    // truncated longitude
    "$GPGGA,002153.000,3342.6618,N,1751.3858,W,1,10,1.2,27.0,M,-34.2,M,,0000*5E",
];

fn main() {
    env_logger::Builder::new()
        .format_timestamp(None)
        .format_target(false)
        .filter_level(log::LevelFilter::Warn)
        .parse_env("LOG_LEVEL")
        .init();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        for sentence in SAMPLES {
            report(sentence);
        }
        return;
    }

    for line in stdin.lock().lines() {
        match line {
            Ok(line) if line.trim().is_empty() => {}
            Ok(line) => report(line.trim_end()),
            Err(e) => {
                log::error!("failed to read stdin: {e}");
                break;
            }
        }
    }
}

fn report(sentence: &str) {
    println!("{sentence}");

    match parse(sentence) {
        Ok(parsed) => {
            print!("{parsed}");
            accessors(&parsed);
        }
        Err(e) if e.is_rejection() => {
            println!("Sentence rejected: {e}");
            println!("Falling back to {:?}", GgaRecord::default());
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    println!();
}

fn accessors(parsed: &Parsed) {
    fn show<T: std::fmt::Debug>(name: &str, reading: Reading<T>) {
        match reading.state {
            FieldState::Valid => println!("  {name}() = {:?}", reading.value),
            state => println!("  {name}() = {state:?}"),
        }
    }

    println!("Accessors:");
    show("time", parsed.time());
    show("latitude", parsed.latitude());
    show("longitude", parsed.longitude());
    show("altitude", parsed.altitude());
    show("geoid_separation", parsed.geoid_separation());
    show("dgps_age", parsed.dgps_age());
    show("satellites_tracked", parsed.satellites_tracked());
    show("fix_quality", parsed.fix_quality());
    show("hdop", parsed.hdop());
    show("station_id", parsed.station_id());
}
