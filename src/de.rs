//! Script parsing.
//!
//! [`Parser`] walks the input section by section: blank lines between
//! sections are skipped, every other line outside a body must be a
//! `[Section Name]` header, and each body is handed to the section codec the
//! [`DocumentSchema`] registers for that name (or the unknown-section codec).
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use serde_ass::from_str;
//!
//! let doc = from_str("[Script Info]\nTitle: My Show\nPlayResX: 1920\n").unwrap();
//! let info = doc.object("Script Info").unwrap();
//! assert_eq!(info.get("PlayResX").and_then(|v| v.as_f64()), Some(1920.0));
//! ```

use crate::reader::LineReader;
use crate::{Document, DocumentSchema, Error, Result};
use log::trace;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Strips the brackets of a `[Name]` header line.
fn section_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

/// The document parser.
///
/// Parsing is all-or-nothing: the first error aborts and no partial document
/// is returned.
pub struct Parser<'a, 's> {
    reader: LineReader<'a>,
    schema: &'s DocumentSchema,
}

impl<'a, 's> Parser<'a, 's> {
    /// Creates a parser over `input`; a leading byte order mark is ignored.
    pub fn new(input: &'a str, schema: &'s DocumentSchema) -> Self {
        let input = input.strip_prefix(BYTE_ORDER_MARK).unwrap_or(input);
        Parser {
            reader: LineReader::new(input),
            schema,
        }
    }

    pub fn parse(mut self) -> Result<Document> {
        let mut document = Document::new();

        while let Some(line) = self.reader.next_line() {
            if line.is_empty() {
                continue;
            }

            let name = section_name(line).ok_or_else(|| {
                Error::syntax(
                    self.reader.line_number(),
                    "expected a section header",
                    line,
                    "[Section Name]",
                )
            })?;

            let section = self.schema.codec_for(name).decode(name, &mut self.reader)?;
            if document.insert(name, section).is_some() {
                trace!("section [{}] appears more than once, keeping the last body", name);
            }
        }

        Ok(document)
    }
}
