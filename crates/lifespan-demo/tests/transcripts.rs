//! Integration test: exact console transcripts of both demo programs.
//!
//! The demo sequences are run against in-memory writers and compared line
//! by line with the reference output, which fixes both the text and the
//! relative order of lifecycle notifications and ordinary output.

use std::sync::Arc;

use lifespan_core::ConsoleSink;
use lifespan_demo::{destructors, polymorphism};

fn lines(bytes: Vec<u8>) -> Vec<String> {
    String::from_utf8(bytes)
        .expect("transcript is UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn destructors_transcript_matches_reference() {
    let console = Arc::new(ConsoleSink::new(Vec::new()));
    destructors::run(&console).unwrap();

    // Every buffer has been released, so this is the last handle.
    let console = Arc::try_unwrap(console).unwrap_or_else(|_| panic!("sink still shared"));
    assert_eq!(
        lines(console.into_inner()),
        vec![
            "MAIN STARTED",
            "Constructed Array of size 5",
            "SpecialArray constructor called",
            "0",
            "1",
            "4",
            "9",
            "16",
            "SpecialArray destructor called",
            "Array destroyed",
            "Constructed Array of size 15",
            "Array destroyed",
            "Constructed Array of size 10",
            "Array destroyed",
            "Constructed Array of size 0",
            "SpecialArray constructor called",
            "specialArray is empty",
            "MAIN ENDED",
            "SpecialArray destructor called",
            "Array destroyed",
        ]
    );
}

#[test]
fn destructors_releases_every_buffer_once() {
    let console = Arc::new(ConsoleSink::new(Vec::new()));
    destructors::run(&console).unwrap();
    let text = console.with_output(|buf| lines(buf.clone()));

    let constructed = text.iter().filter(|l| l.starts_with("Constructed Array")).count();
    let destroyed = text.iter().filter(|l| *l == "Array destroyed").count();
    assert_eq!(constructed, 4);
    assert_eq!(destroyed, constructed);
}

#[test]
fn polymorphism_transcript_matches_reference() {
    let mut out = Vec::new();
    polymorphism::run(&mut out).unwrap();
    assert_eq!(
        lines(out),
        vec!["12", "12", "Area: 12", "Area: 78.5397", "Area: 78.5397"]
    );
}
