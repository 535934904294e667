//! Section body codecs.
//!
//! A section body runs from the line after its `[Name]` header to the next
//! blank line (or end of input). Lines starting with `;` are comments and are
//! dropped. Two body shapes exist:
//!
//! ```text
//! [Script Info]                     <- ObjectSection
//! Title: My Show
//! PlayResX: 1920
//!
//! [Events]                          <- ArraySection
//! Format: Start,End,Text
//! Dialogue: 0:00:01.00,0:00:02.50,Hello, world
//! ```
//!
//! In both shapes the first colon separates key (or record tag) from the
//! rest. In array sections the rest is split into exactly as many fields as
//! the `Format:` line declares; the last field keeps any further commas.

use crate::codec::{decode_field, encode_field};
use crate::options::{AssOptions, ColumnPolicy};
use crate::reader::LineReader;
use crate::{Error, FieldMap, Record, Result, Schema, Section};
use log::trace;

const FORMAT_KEY: &str = "Format";

/// Splits at the first colon, trimming both halves.
fn split_key_value<'a>(line: &'a str, line_number: usize, expected: &str) -> Result<(&'a str, &'a str)> {
    line.split_once(':')
        .map(|(key, value)| (key.trim(), value.trim()))
        .ok_or_else(|| Error::syntax(line_number, "missing ':' separator", line, expected))
}

/// Rejects text that would split its line on output. Event text stores hard
/// breaks as `\N`, see [`crate::text::encode_line_breaks`].
fn ensure_single_line(section: &str, field: &str, text: &str) -> Result<()> {
    if text.contains(|c: char| c == '\r' || c == '\n') {
        return Err(Error::custom(format!(
            "section [{}] field '{}' contains a line break",
            section, field
        )));
    }
    Ok(())
}

/// Reads body lines up to a blank line or end of input, skipping comments.
fn body_lines<'r, 'a>(reader: &'r mut LineReader<'a>) -> impl Iterator<Item = (usize, &'a str)> + 'r {
    std::iter::from_fn(move || loop {
        let line = reader.next_line()?;
        if line.is_empty() {
            return None;
        }
        if !line.starts_with(';') {
            return Some((reader.line_number(), line));
        }
    })
}

/// Codec for `Key: Value` sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectSection {
    schema: Schema,
}

impl ObjectSection {
    pub fn new(schema: Schema) -> Self {
        ObjectSection { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Decodes a body; a repeated key keeps its first position and its last value.
    pub fn decode(&self, reader: &mut LineReader<'_>) -> Result<FieldMap> {
        let mut fields = FieldMap::new();

        for (line_number, line) in body_lines(reader) {
            let (key, value) = split_key_value(line, line_number, "Key: Value")?;
            let value = decode_field(self.schema.get(key), value)?;
            fields.insert(key.to_string(), value);
        }

        Ok(fields)
    }

    /// Encodes `fields` as the body of section `name`.
    ///
    /// Fails when a key or value contains a line break.
    pub fn encode(&self, name: &str, fields: &FieldMap, options: &AssOptions) -> Result<String> {
        let lines = fields
            .iter()
            .map(|(key, value)| -> Result<String> {
                let value = encode_field(self.schema.get(key), value)?;
                ensure_single_line(name, key, key)?;
                ensure_single_line(name, key, &value)?;
                Ok(format!("{}: {}", key, value))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(lines.join(options.line_ending.as_str()))
    }
}

/// Codec for `Format:`-declared record sections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArraySection {
    schema: Schema,
}

impl ArraySection {
    pub fn new(schema: Schema) -> Self {
        ArraySection { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Decodes a body. A record before the `Format:` line is an
    /// [`Error::MissingFormat`]; a second `Format:` line or a record with
    /// fewer fields than declared columns is an [`Error::Syntax`].
    pub fn decode(&self, name: &str, reader: &mut LineReader<'_>) -> Result<Vec<Record>> {
        let mut columns: Option<Vec<String>> = None;
        let mut records = Vec::new();

        for (line_number, line) in body_lines(reader) {
            let (kind, rest) = split_key_value(line, line_number, "Tag: field1,field2,...")?;

            if kind == FORMAT_KEY {
                if columns.is_some() {
                    return Err(Error::syntax(
                        line_number,
                        "duplicate 'Format:' line",
                        line,
                        "one 'Format:' line per section",
                    ));
                }
                columns = Some(rest.split(',').map(|column| column.trim().to_string()).collect());
                continue;
            }

            let columns = columns
                .as_ref()
                .ok_or_else(|| Error::missing_format(line_number, name))?;

            let values: Vec<&str> = rest.splitn(columns.len(), ',').collect();
            if values.len() != columns.len() {
                return Err(Error::syntax(
                    line_number,
                    &format!("expected {} fields, found {}", columns.len(), values.len()),
                    line,
                    &format!("{}: {}", kind, columns.join(",")),
                ));
            }

            let mut fields = FieldMap::with_capacity(columns.len());
            for (column, value) in columns.iter().zip(values) {
                let value = decode_field(self.schema.get(column), value.trim())?;
                fields.insert(column.clone(), value);
            }

            records.push(Record {
                kind: kind.to_string(),
                fields,
            });
        }

        Ok(records)
    }

    /// Encodes records under a `Format:` line built from the first record's
    /// fields. An empty record list encodes as an empty body. Fails when a
    /// column, tag or value contains a line break.
    pub fn encode(&self, name: &str, records: &[Record], options: &AssOptions) -> Result<String> {
        let Some(first) = records.first() else {
            return Ok(String::new());
        };
        let columns: Vec<&str> = first.fields.keys().map(String::as_str).collect();
        for column in &columns {
            ensure_single_line(name, column, column)?;
        }

        let mut lines = Vec::with_capacity(records.len() + 1);
        lines.push(format!("{}: {}", FORMAT_KEY, columns.join(",")));

        for (index, record) in records.iter().enumerate() {
            if options.column_policy == ColumnPolicy::Strict && !has_columns(record, &columns) {
                let found: Vec<&str> = record.fields.keys().map(String::as_str).collect();
                return Err(Error::column_mismatch(name, index, &columns, &found));
            }

            ensure_single_line(name, &record.kind, &record.kind)?;
            let values = columns
                .iter()
                .map(|column| -> Result<String> {
                    let Some(value) = record.fields.get(column) else {
                        return Ok(String::new());
                    };
                    let value = encode_field(self.schema.get(column), value)?;
                    ensure_single_line(name, column, &value)?;
                    Ok(value)
                })
                .collect::<Result<Vec<_>>>()?;

            lines.push(format!("{}: {}", record.kind, values.join(",")));
        }

        Ok(lines.join(options.line_ending.as_str()))
    }
}

fn has_columns(record: &Record, columns: &[&str]) -> bool {
    record.fields.len() == columns.len() && columns.iter().all(|column| record.fields.contains_key(column))
}

/// The codec for one section body, either shape.
#[derive(Clone, Debug, PartialEq)]
pub enum SectionCodec {
    Object(ObjectSection),
    Array(ArraySection),
}

impl SectionCodec {
    pub fn object(schema: Schema) -> Self {
        SectionCodec::Object(ObjectSection::new(schema))
    }

    pub fn array(schema: Schema) -> Self {
        SectionCodec::Array(ArraySection::new(schema))
    }

    /// Reads the body of section `name` from `reader`.
    pub fn decode(&self, name: &str, reader: &mut LineReader<'_>) -> Result<Section> {
        trace!("decoding section [{}] from line {}", name, reader.line_number() + 1);
        match self {
            SectionCodec::Object(codec) => codec.decode(reader).map(Section::Object),
            SectionCodec::Array(codec) => codec.decode(name, reader).map(Section::Array),
        }
    }

    /// Writes the body of section `name`.
    ///
    /// Content of the other shape is an [`Error::ShapeMismatch`].
    pub fn encode(&self, name: &str, section: &Section, options: &AssOptions) -> Result<String> {
        match (self, section) {
            (SectionCodec::Object(codec), Section::Object(fields)) => codec.encode(name, fields, options),
            (SectionCodec::Array(codec), Section::Array(records)) => codec.encode(name, records, options),
            (SectionCodec::Object(_), _) => Err(Error::shape_mismatch(name, "object")),
            (SectionCodec::Array(_), _) => Err(Error::shape_mismatch(name, "array")),
        }
    }
}
