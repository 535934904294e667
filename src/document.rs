//! The in-memory document.
//!
//! A [`Document`] is an ordered map from section name to [`Section`]. It is a
//! plain owned value: parsing produces a fresh one, stringifying only borrows
//! it, and editors that want immutable snapshots simply `clone()` and modify
//! the copy.
//!
//! ## Examples
//!
//! ```rust
//! use serde_ass::{AssTime, Document, Record, Section};
//!
//! let mut doc = Document::new();
//! doc.insert(
//!     "Events",
//!     Section::Array(vec![Record::new("Dialogue")
//!         .with_field("Start", AssTime::new(0, 0, 1, 0).unwrap())
//!         .with_field("End", AssTime::new(0, 0, 2, 50).unwrap())
//!         .with_field("Text", "Hello")]),
//! );
//!
//! let event = &doc.events().unwrap()[0];
//! assert_eq!(event.kind(), "Dialogue");
//! assert_eq!(event.text(), Some("Hello"));
//! ```

use crate::{AssTime, FieldMap, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Name of the section holding dialogue lines.
pub const EVENTS: &str = "Events";

/// One tagged row of an array section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The token before the first colon of the data line, e.g. `Dialogue` or `Style`.
    pub kind: String,
    /// Field values keyed by column name, in column order.
    pub fields: FieldMap,
}

impl Record {
    pub fn new(kind: &str) -> Self {
        Record {
            kind: kind.to_string(),
            fields: FieldMap::new(),
        }
    }

    /// Appends (or replaces) a field, builder style.
    #[must_use]
    pub fn with_field(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(column.to_string(), value.into());
        self
    }

    #[inline]
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub fn set(&mut self, column: &str, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(column.to_string(), value.into())
    }

    /// The `Start` column, when it holds a time.
    #[must_use]
    pub fn start(&self) -> Option<&AssTime> {
        self.get("Start").and_then(Value::as_time)
    }

    /// The `End` column, when it holds a time.
    #[must_use]
    pub fn end(&self) -> Option<&AssTime> {
        self.get("End").and_then(Value::as_time)
    }

    /// The `Text` column, when it holds text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.get("Text").and_then(Value::as_str)
    }
}

/// The content of one section.
///
/// Serializes untagged: an object section as a map, an array section as a list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Section {
    /// `Key: Value` lines.
    Object(FieldMap),
    /// A `Format:` line followed by records.
    Array(Vec<Record>),
}

impl Section {
    #[must_use]
    pub fn as_object(&self) -> Option<&FieldMap> {
        match self {
            Section::Object(fields) => Some(fields),
            Section::Array(_) => None,
        }
    }

    #[must_use]
    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            Section::Array(records) => Some(records),
            Section::Object(_) => None,
        }
    }
}

/// An ordered map from section name to section content.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(IndexMap<String, Section>);

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Document(IndexMap::new())
    }

    /// Inserts a section. A section that already exists keeps its position
    /// and has its content replaced; the old content is returned.
    pub fn insert(&mut self, name: &str, section: Section) -> Option<Section> {
        self.0.insert(name.to_string(), section)
    }

    /// Removes a section, keeping the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Section> {
        self.0.shift_remove(name)
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.0.get(name)
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.0.get_mut(name)
    }

    /// The fields of an object section.
    #[must_use]
    pub fn object(&self, name: &str) -> Option<&FieldMap> {
        self.section(name).and_then(Section::as_object)
    }

    /// The records of an array section.
    #[must_use]
    pub fn records(&self, name: &str) -> Option<&[Record]> {
        self.section(name).and_then(Section::as_records)
    }

    pub fn records_mut(&mut self, name: &str) -> Option<&mut Vec<Record>> {
        match self.section_mut(name) {
            Some(Section::Array(records)) => Some(records),
            _ => None,
        }
    }

    /// The records of the `[Events]` section.
    #[must_use]
    pub fn events(&self) -> Option<&[Record]> {
        self.records(EVENTS)
    }

    /// Section names in document order.
    pub fn names(&self) -> indexmap::map::Keys<'_, String, Section> {
        self.0.keys()
    }

    /// Sections in document order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Section> {
        self.0.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = (&'a String, &'a Section);
    type IntoIter = indexmap::map::Iter<'a, String, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Section)> for Document {
    fn from_iter<T: IntoIterator<Item = (String, Section)>>(iter: T) -> Self {
        Document(IndexMap::from_iter(iter))
    }
}
