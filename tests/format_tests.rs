//! Line-level behavior of the text format: headers, blank lines, comments,
//! separators and field encodings.

use serde_ass::{from_str, to_string, AssColor, AssTime, Error, Value};

#[test]
fn test_header_must_be_bracketed() {
    for bad in ["Script Info", "[Script Info", "Script Info]", "Title: x"] {
        let err = from_str(bad).unwrap_err();
        assert!(matches!(err, Error::Syntax { line: 1, .. }), "{bad:?} gave {err:?}");
    }
}

#[test]
fn test_empty_section_name() {
    let doc = from_str("[]\nkey: value\n").unwrap();
    assert!(doc.object("").is_some());
}

#[test]
fn test_whitespace_around_lines_is_trimmed() {
    let doc = from_str("  [Script Info]  \n\tTitle:   spaced out   \n").unwrap();
    let info = doc.object("Script Info").unwrap();
    assert_eq!(info.get("Title"), Some(&Value::from("spaced out")));
}

#[test]
fn test_comments_are_not_round_tripped() {
    let doc = from_str("[Script Info]\n; first\nTitle: x\n;second\n").unwrap();
    assert_eq!(to_string(&doc).unwrap(), "[Script Info]\r\nTitle: x\r\n");
}

#[test]
fn test_blank_line_ends_section() {
    // a body line after the blank line is outside any section
    let err = from_str("[Script Info]\nTitle: x\n\nPlayResX: 1\n").unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 4, .. }));
}

#[test]
fn test_missing_colon_in_object_section() {
    let err = from_str("[Script Info]\nTitle x\n").unwrap_err();
    match err {
        Error::Syntax { line, context, expected, .. } => {
            assert_eq!(line, 2);
            assert_eq!(context, "Title x");
            assert_eq!(expected, "Key: Value");
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn test_missing_colon_in_array_section() {
    let err = from_str("[Events]\nFormat: Text\nDialogue hello\n").unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 3, .. }));
}

#[test]
fn test_too_few_fields() {
    let err = from_str("[Events]\nFormat: Layer,Start,End,Text\nDialogue: 0,0:00:01.00\n").unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 3, ref msg, .. } if msg == "expected 4 fields, found 2"));
}

#[test]
fn test_last_field_keeps_commas_and_colons() {
    let doc = from_str("[Events]\nFormat: Layer,Text\nDialogue: 0,a, b,: c\n").unwrap();
    assert_eq!(doc.events().unwrap()[0].text(), Some("a, b,: c"));
}

#[test]
fn test_format_cannot_be_redeclared() {
    let err = from_str("[Events]\nFormat: Text\nDialogue: a,b\nFormat: Layer,Text\nDialogue: 1,c\n").unwrap_err();
    match err {
        Error::Syntax { line, msg, context, .. } => {
            assert_eq!(line, 4);
            assert_eq!(msg, "duplicate 'Format:' line");
            assert_eq!(context, "Format: Layer,Text");
        }
        other => panic!("unexpected error {other:?}"),
    }

    // back to back, before any record
    let err = from_str("[Events]\nFormat: Text\nFormat: Text\n").unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 3, .. }));
}

#[test]
fn test_format_in_separate_sections_is_independent() {
    let doc = from_str("[Events]\nFormat: Text\nDialogue: a\n\n[V4+ Styles]\nFormat: Name\nStyle: Default\n").unwrap();
    assert_eq!(doc.events().unwrap()[0].text(), Some("a"));
    assert!(to_string(&doc).is_ok());
}

#[test]
fn test_duplicate_section_last_body_wins() {
    let doc = from_str("[A]\nx: 1\n\n[B]\ny: 2\n\n[A]\nz: 3\n").unwrap();
    let names: Vec<_> = doc.names().map(String::as_str).collect();
    assert_eq!(names, vec!["A", "B"]);
    let a = doc.object("A").unwrap();
    assert!(a.get("x").is_none());
    assert_eq!(a.get("z"), Some(&Value::from("3")));
}

#[test]
fn test_permissive_numbers() {
    let doc = from_str("[Script Info]\nPlayResX: 1280px\nPlayResY: wide\nTimer: 100.0000\n").unwrap();
    let info = doc.object("Script Info").unwrap();
    assert_eq!(info.get("PlayResX"), Some(&Value::Number(1280.0)));
    assert!(info.get("PlayResY").and_then(Value::as_f64).unwrap().is_nan());
    assert_eq!(info.get("Timer"), Some(&Value::Number(100.0)));

    let text = to_string(&doc).unwrap();
    assert_eq!(text, "[Script Info]\r\nPlayResX: 1280\r\nPlayResY: NaN\r\nTimer: 100\r\n");
}

#[test]
fn test_time_text_form() {
    let doc = from_str("[Events]\nFormat: Start,End\nDialogue: 10:05:09.07,0:00:00.00\n").unwrap();
    let event = &doc.events().unwrap()[0];
    assert_eq!(event.start(), Some(&AssTime::new(10, 5, 9, 7).unwrap()));
    assert!(to_string(&doc).unwrap().contains("Dialogue: 10:05:09.07,0:00:00.00\r\n"));
}

#[test]
fn test_color_text_form() {
    let doc = from_str("[V4+ Styles]\nFormat: Name,OutlineColour,BackColour\nStyle: A,&H0000FF,&h7F102030\n").unwrap();
    let style = &doc.records("V4+ Styles").unwrap()[0];
    assert_eq!(style.get("OutlineColour"), Some(&Value::Color(AssColor::new(0, 0, 255, 0))));
    assert_eq!(style.get("BackColour"), Some(&Value::Color(AssColor::new(0x10, 0x20, 0x30, 0x7f))));
    assert!(to_string(&doc).unwrap().contains("Style: A,&H0000ff,&H7f102030\r\n"));
}

#[test]
fn test_boolean_text_form() {
    let doc = from_str("[V4+ Styles]\nFormat: Name,Bold,Italic,Underline\nStyle: A,-1,1,yes\n").unwrap();
    assert!(to_string(&doc).unwrap().contains("Style: A,-1,0,0\r\n"));
}
