//! Parsing, editing and writing back a subtitle script.
//!
//! Run with: cargo run --example roundtrip [path/to/script.ass]
//!
//! Set `RUST_LOG=serde_ass=trace` to see section-level decoding.

use serde_ass::text::decode_line_breaks;
use serde_ass::{from_str, to_string, AssTime, EVENTS};
use std::error::Error;
use std::{env, fs};

const SAMPLE: &str = "[Script Info]\r\n\
Title: Sample\r\n\
PlayResX: 1280\r\n\
PlayResY: 720\r\n\
\r\n\
[Events]\r\n\
Format: Layer, Start, End, Style, Name, MarginL, MarginR, MarginV, Effect, Text\r\n\
Dialogue: 0,0:00:01.00,0:00:03.20,Default,Alice,0,0,0,,Good morning.\\NDid you sleep?\r\n\
Dialogue: 0,0:00:03.50,0:00:05.00,Default,Bob,0,0,0,,Not at all, sadly.\r\n";

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let text = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?,
        None => SAMPLE.to_string(),
    };

    let mut doc = from_str(&text)?;

    println!("Sections:");
    for (name, _) in &doc {
        println!("  [{}]", name);
    }

    if let Some(events) = doc.events() {
        println!("\n{} events:", events.len());
        for event in events {
            let start = event.start().map(ToString::to_string).unwrap_or_default();
            let end = event.end().map(ToString::to_string).unwrap_or_default();
            let line = decode_line_breaks(event.text().unwrap_or_default()).replace('\n', " / ");
            println!("  {} {} -> {}  {}", event.kind(), start, end, line);
        }
    }

    // Delay every event by half a second
    if let Some(events) = doc.records_mut(EVENTS) {
        for event in events.iter_mut() {
            for column in ["Start", "End"] {
                if let Some(time) = event.get(column).and_then(|v| v.as_time()).copied() {
                    let shifted = AssTime::from_seconds(time.to_seconds() + 0.5)?;
                    event.set(column, shifted);
                }
            }
        }
    }

    println!("\nShifted script:\n{}", to_string(&doc)?);
    Ok(())
}
