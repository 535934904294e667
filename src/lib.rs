//! # serde_ass
//!
//! A round-tripping codec for Advanced SubStation Alpha (`.ass`) subtitle scripts.
//!
//! ## What is ASS?
//!
//! ASS is a line-oriented text format made of bracketed sections. Some sections
//! are flat `Key: Value` blocks, others are tables whose columns are declared by
//! a `Format:` line:
//!
//! ```text
//! [Script Info]
//! Title: My Show
//! PlayResX: 1920
//!
//! [Events]
//! Format: Layer, Start, End, Style, Text
//! Dialogue: 0,0:00:01.00,0:00:02.50,Default,Hello, world
//! ```
//!
//! ## Key Features
//!
//! - **Round-tripping**: `to_string(&from_str(text)?)` reproduces every section,
//!   field and record in order (comments are not kept)
//! - **Typed fields**: known fields decode to numbers, booleans, [`AssTime`] and
//!   [`AssColor`]; everything else stays raw text
//! - **Explicit schemas**: the section table is a value ([`DocumentSchema`]), with
//!   [`DEFAULT_SCHEMA`] covering `[Script Info]`, `[V4+ Styles]` and `[Events]`
//! - **Legacy-compatible leniency**: malformed colors become transparent black and
//!   numbers use permissive prefix parsing, while malformed times are errors
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_ass::{from_str, to_string, AssTime};
//!
//! let text = "[Events]\r\n\
//!             Format: Start,End,Text\r\n\
//!             Dialogue: 0:00:01.00,0:00:02.50,Hello\r\n";
//!
//! let doc = from_str(text).unwrap();
//! let event = &doc.events().unwrap()[0];
//! assert_eq!(event.start(), Some(&AssTime::new(0, 0, 1, 0).unwrap()));
//! assert_eq!(event.text(), Some("Hello"));
//!
//! assert_eq!(to_string(&doc).unwrap(), text);
//! ```
//!
//! ## Custom Sections
//!
//! ```rust
//! use serde_ass::{from_str_with_schema, DocumentSchema, FieldCodec, Schema, SectionCodec, Value};
//!
//! let schema = DocumentSchema::standard().with_section(
//!     "Aegisub Project Garbage",
//!     SectionCodec::object(Schema::new().field("Active Line", FieldCodec::Number)),
//! );
//!
//! let doc = from_str_with_schema("[Aegisub Project Garbage]\nActive Line: 12\n", &schema).unwrap();
//! let garbage = doc.object("Aegisub Project Garbage").unwrap();
//! assert_eq!(garbage.get("Active Line"), Some(&Value::Number(12.0)));
//! ```
//!
//! ## Thread Safety
//!
//! Parsing and writing are pure functions over owned or borrowed data. A
//! [`Document`] holds no references into the input and no call keeps references
//! into a caller's document, so documents can be cloned, edited and processed
//! on any thread.

pub mod codec;
pub mod color;
pub mod de;
pub mod document;
pub mod error;
pub mod map;
pub mod options;
pub mod reader;
pub mod schema;
pub mod section;
pub mod ser;
pub mod text;
pub mod time;
pub mod value;

pub use codec::FieldCodec;
pub use color::AssColor;
pub use de::Parser;
pub use document::{Document, Record, Section, EVENTS};
pub use error::{Error, Result};
pub use map::FieldMap;
pub use options::{AssOptions, ColumnPolicy, LineEnding};
pub use schema::{DocumentSchema, Schema, DEFAULT_SCHEMA};
pub use section::{ArraySection, ObjectSection, SectionCodec};
pub use ser::Writer;
pub use time::AssTime;
pub use value::Value;

use std::io;

/// Parses a script with [`DEFAULT_SCHEMA`].
///
/// # Errors
///
/// Returns an error on the first structural problem (a line outside any
/// section, a missing `:`, a record before its `Format:` line or with too few
/// fields) or on an invalid time. No partial document is returned.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str(s: &str) -> Result<Document> {
    from_str_with_schema(s, &DEFAULT_SCHEMA)
}

/// Parses a script with a caller-provided section table.
///
/// # Errors
///
/// See [`from_str`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str_with_schema(s: &str, schema: &DocumentSchema) -> Result<Document> {
    Parser::new(s, schema).parse()
}

/// Parses a script from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or the text is not a valid script.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice(v: &[u8]) -> Result<Document> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Reads and parses a whole script from an I/O stream.
///
/// # Errors
///
/// Returns an error if reading fails or the text is not a valid script.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Document> {
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Writes a document with [`DEFAULT_SCHEMA`] and default options (`\r\n`, strict columns).
///
/// # Errors
///
/// Returns an error if a section's content has the wrong shape for its codec,
/// an array section mixes records with different columns, a field contains a
/// line break (store hard breaks as `\N`, see [`text::encode_line_breaks`]) or
/// text placed in a time column is not a valid time.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(document: &Document) -> Result<String> {
    to_string_with_options(document, &DEFAULT_SCHEMA, AssOptions::default())
}

/// Writes a document with a caller-provided section table and options.
///
/// # Examples
///
/// ```rust
/// use serde_ass::{from_str, to_string_with_options, AssOptions, LineEnding, DEFAULT_SCHEMA};
///
/// let doc = from_str("[Script Info]\nTitle: x\n").unwrap();
/// let options = AssOptions::new().with_line_ending(LineEnding::Lf);
/// let text = to_string_with_options(&doc, &DEFAULT_SCHEMA, options).unwrap();
/// assert_eq!(text, "[Script Info]\nTitle: x\n");
/// ```
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(
    document: &Document,
    schema: &DocumentSchema,
    options: AssOptions,
) -> Result<String> {
    let mut writer = Writer::new(schema, options);
    writer.write_document(document)?;
    Ok(writer.into_inner())
}

/// Writes a document to an I/O stream with [`DEFAULT_SCHEMA`] and default options.
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W: io::Write>(mut writer: W, document: &Document) -> Result<()> {
    let text = to_string(document)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}
