//! Script writing.
//!
//! [`Writer`] emits, for every section in document order, the `[Name]`
//! header, the body produced by the section's codec and a blank separator
//! line. Lines are joined with the configured [`crate::LineEnding`].
//!
//! ```rust
//! use serde_ass::{from_str, to_string};
//!
//! let doc = from_str("[Script Info]\nTitle: My Show\n").unwrap();
//! assert_eq!(to_string(&doc).unwrap(), "[Script Info]\r\nTitle: My Show\r\n");
//! ```

use crate::{AssOptions, Document, DocumentSchema, Result};

/// The document writer.
pub struct Writer<'s> {
    output: String,
    schema: &'s DocumentSchema,
    options: AssOptions,
}

impl<'s> Writer<'s> {
    pub fn new(schema: &'s DocumentSchema, options: AssOptions) -> Self {
        Writer {
            output: String::with_capacity(256),
            schema,
            options,
        }
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        let eol = self.options.line_ending.as_str();

        for (index, (name, section)) in document.iter().enumerate() {
            let body = self.schema.codec_for(name).encode(name, section, &self.options)?;

            if index > 0 {
                self.output.push_str(eol);
            }
            self.output.push('[');
            self.output.push_str(name);
            self.output.push(']');
            self.output.push_str(eol);
            self.output.push_str(&body);
            self.output.push_str(eol);
        }

        Ok(())
    }

    pub fn into_inner(self) -> String {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldMap, LineEnding, Record, Section, Value};

    fn write(document: &Document, options: AssOptions) -> Result<String> {
        let schema = DocumentSchema::standard();
        let mut writer = Writer::new(&schema, options);
        writer.write_document(document)?;
        Ok(writer.into_inner())
    }

    #[test]
    fn test_sections_are_separated_by_blank_lines() {
        let mut info = FieldMap::new();
        info.insert("Title".to_string(), Value::from("x"));
        info.insert("PlayResX".to_string(), Value::from(640));

        let mut doc = Document::new();
        doc.insert("Script Info", Section::Object(info));
        doc.insert("Events", Section::Array(vec![Record::new("Dialogue").with_field("Text", "hi")]));

        assert_eq!(
            write(&doc, AssOptions::new()).unwrap(),
            "[Script Info]\r\nTitle: x\r\nPlayResX: 640\r\n\r\n[Events]\r\nFormat: Text\r\nDialogue: hi\r\n"
        );
    }

    #[test]
    fn test_lf_line_ending() {
        let mut doc = Document::new();
        doc.insert("A", Section::Object(FieldMap::new()));
        let options = AssOptions::new().with_line_ending(LineEnding::Lf);
        assert_eq!(write(&doc, options).unwrap(), "[A]\n\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(write(&Document::new(), AssOptions::new()).unwrap(), "");
    }

    #[test]
    fn test_unregistered_array_content_is_rejected() {
        let mut doc = Document::new();
        doc.insert("Custom", Section::Array(Vec::new()));
        assert!(write(&doc, AssOptions::new()).is_err());
    }
}
