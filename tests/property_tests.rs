//! Property-based tests - pragmatic approach testing core roundtrip guarantees
//!
//! Generated values stay within what the text format can represent: no
//! leading/trailing whitespace (lines and fields are trimmed), no commas
//! outside the last column, no line breaks.

use proptest::prelude::*;
use serde_ass::{
    from_str, to_string, AssColor, AssTime, Document, FieldMap, Record, Section, Value, EVENTS,
};

fn time() -> impl Strategy<Value = AssTime> {
    (0u32..1000, 0u32..60, 0u32..60, 0u32..100)
        .prop_map(|(h, m, s, cs)| AssTime::new(h, m, s, cs).unwrap())
}

fn event() -> impl Strategy<Value = Record> {
    (
        prop_oneof![Just("Dialogue"), Just("Comment")],
        0i32..10,
        time(),
        time(),
        "[A-Za-z0-9]{0,10}",
        0i32..100,
        "[A-Za-z0-9,:{}\\\\]{0,30}",
    )
        .prop_map(|(kind, layer, start, end, style, margin, text)| {
            Record::new(kind)
                .with_field("Layer", layer)
                .with_field("Start", start)
                .with_field("End", end)
                .with_field("Style", style)
                .with_field("MarginL", margin)
                .with_field("Text", text)
        })
}

fn raw_fields() -> impl Strategy<Value = FieldMap> {
    prop::collection::vec(("[A-Za-z][A-Za-z0-9 ]{0,8}[A-Za-z0-9]", "[A-Za-z0-9:,.]{0,12}"), 0..6)
        .prop_map(|pairs| {
            pairs
                .into_iter()
                .map(|(key, value)| (key, Value::Text(value)))
                .collect()
        })
}

proptest! {
    #[test]
    fn prop_time_text_roundtrip(t in time()) {
        let text = t.to_string();
        prop_assert_eq!(AssTime::parse(&text).unwrap(), t);
    }

    #[test]
    fn prop_time_to_seconds(h in 0u32..10_000, m in 0u32..60, s in 0u32..60, cs in 0u32..100) {
        let t = AssTime::new(h, m, s, cs).unwrap();
        let expected = f64::from(h) * 3600.0 + f64::from(m) * 60.0 + f64::from(s) + f64::from(cs) / 100.0;
        prop_assert!((t.to_seconds() - expected).abs() < 1e-6);
        prop_assert_eq!(AssTime::from_centiseconds(t.total_centiseconds()).unwrap(), t);
    }

    #[test]
    fn prop_time_bounded_components(m in 60u32..1000) {
        prop_assert!(AssTime::new(0, m, 0, 0).is_err());
        prop_assert!(AssTime::new(0, 0, m, 0).is_err());
        prop_assert!(AssTime::new(0, 0, 0, m + 40).is_err());
    }

    #[test]
    fn prop_color_text_roundtrip(b: u8, g: u8, r: u8, a: u8) {
        let color = AssColor::new(b, g, r, a);
        prop_assert_eq!(AssColor::parse(&color.to_string()), color);
    }

    #[test]
    fn prop_events_roundtrip(events in prop::collection::vec(event(), 0..8)) {
        let mut doc = Document::new();
        doc.insert(EVENTS, Section::Array(events));

        let text = to_string(&doc).unwrap();
        prop_assert_eq!(from_str(&text).unwrap(), doc);
    }

    #[test]
    fn prop_unknown_section_roundtrip(fields in raw_fields()) {
        let mut doc = Document::new();
        doc.insert("Custom Stuff", Section::Object(fields));

        let text = to_string(&doc).unwrap();
        prop_assert_eq!(from_str(&text).unwrap(), doc);
    }
}
