//! Field and section schemas.
//!
//! - [`Schema`]: field name -> [`FieldCodec`] for one section
//! - [`DocumentSchema`]: section name -> [`SectionCodec`] for a whole script
//!
//! The schema is an explicit value passed to the parse/stringify entry points.
//! [`DEFAULT_SCHEMA`] (also [`DocumentSchema::standard`]) knows the three
//! sections of an ASS v4+ script; every other section is read and written by
//! the unknown-section codec, an object codec with an empty schema.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ass::{DocumentSchema, FieldCodec, Schema, SectionCodec};
//!
//! let schema = DocumentSchema::standard().with_section(
//!     "Aegisub Project Garbage",
//!     SectionCodec::object(Schema::new().field("Video Position", FieldCodec::Number)),
//! );
//! assert!(schema.get("Aegisub Project Garbage").is_some());
//! ```

use crate::codec::FieldCodec;
use crate::section::SectionCodec;
use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;

/// The schema used by [`crate::from_str`] and [`crate::to_string`].
pub static DEFAULT_SCHEMA: Lazy<DocumentSchema> = Lazy::new(DocumentSchema::standard);

static UNKNOWN_SECTION: Lazy<SectionCodec> = Lazy::new(|| SectionCodec::object(Schema::new()));

/// Field name -> codec for one section.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Schema(IndexMap<String, FieldCodec>);

impl Schema {
    #[must_use]
    pub fn new() -> Self {
        Schema(IndexMap::new())
    }

    /// Adds (or replaces) the codec for `name`.
    #[must_use]
    pub fn field(mut self, name: &str, codec: FieldCodec) -> Self {
        self.0.insert(name.to_string(), codec);
        self
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldCodec> {
        self.0.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn with_fields(fields: &[(&str, FieldCodec)]) -> Self {
        fields
            .iter()
            .fold(Schema::new(), |schema, (name, codec)| schema.field(name, *codec))
    }
}

/// Section name -> codec for a whole document.
///
/// `Default` is [`DocumentSchema::standard`]; use [`DocumentSchema::new`] for
/// an empty table.
#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSchema(IndexMap<String, SectionCodec>);

impl DocumentSchema {
    /// An empty table: every section is handled as unknown.
    #[must_use]
    pub fn new() -> Self {
        DocumentSchema(IndexMap::new())
    }

    /// `[Script Info]`, `[V4+ Styles]` and `[Events]`.
    #[must_use]
    pub fn standard() -> Self {
        use FieldCodec::{Boolean, Color, Number, Text, Time};

        let script_info = Schema::with_fields(&[
            ("Title", Text),
            ("Original Script", Text),
            ("Original Translation", Text),
            ("Original Editing", Text),
            ("Original Timing", Text),
            ("Script Updated By", Text),
            ("Update Details", Text),
            ("ScriptType", Text),
            ("Collisions", Text),
            ("PlayResY", Number),
            ("PlayResX", Number),
            ("PlayDepth", Number),
            ("Timer", Number),
            ("WrapStyle", Number),
        ]);

        let styles = Schema::with_fields(&[
            ("Name", Text),
            ("Fontname", Text),
            ("Fontsize", Number),
            ("PrimaryColour", Color),
            ("SecondaryColour", Color),
            ("OutlineColour", Color),
            ("BackColour", Color),
            ("Bold", Boolean),
            ("Italic", Boolean),
            ("Underline", Boolean),
            ("StrikeOut", Boolean),
            ("ScaleX", Number),
            ("ScaleY", Number),
            ("Spacing", Number),
            ("Angle", Number),
            ("BorderStyle", Number),
            ("Outline", Number),
            ("Shadow", Number),
            ("Alignment", Number),
            ("MarginL", Number),
            ("MarginR", Number),
            ("MarginV", Number),
        ]);

        let events = Schema::with_fields(&[
            ("Marked", Number),
            ("Layer", Number),
            ("Start", Time),
            ("End", Time),
            ("Style", Text),
            ("Name", Text),
            ("MarginL", Number),
            ("MarginR", Number),
            ("MarginV", Number),
            ("Effect", Text),
            ("Text", Text),
        ]);

        DocumentSchema::new()
            .with_section("Script Info", SectionCodec::object(script_info))
            .with_section("V4+ Styles", SectionCodec::array(styles))
            .with_section("Events", SectionCodec::array(events))
    }

    #[must_use]
    pub fn with_section(mut self, name: &str, codec: SectionCodec) -> Self {
        self.insert(name, codec);
        self
    }

    pub fn insert(&mut self, name: &str, codec: SectionCodec) -> Option<SectionCodec> {
        self.0.insert(name.to_string(), codec)
    }

    /// The codec registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SectionCodec> {
        self.0.get(name)
    }

    /// The codec registered under `name`, or the unknown-section codec.
    #[must_use]
    pub fn codec_for(&self, name: &str) -> &SectionCodec {
        match self.0.get(name) {
            Some(codec) => codec,
            None => {
                debug!("no codec registered for section [{}], keeping raw fields", name);
                &*UNKNOWN_SECTION
            }
        }
    }
}

impl Default for DocumentSchema {
    fn default() -> Self {
        DocumentSchema::standard()
    }
}
