//! Document model: ordered sequences of flat field-value records.
//!
//! A document is what the enrichment passes consume and produce: a JSON
//! array of objects, one per surviving input row, in input order. Field
//! order inside a record is insertion order (`serde_json` is built with
//! `preserve_order` for exactly this reason), and the serialized form
//! keeps non-ASCII text literal so values round-trip byte-for-byte.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Serializer, Value};
use std::fs;
use std::path::Path;

use crate::error::{ConvertError, ParseError, ReadError, WriteError};

/// A single flat record: an ordered mapping from document field name to
/// value. Absent fields are simply not keys, never null.
pub type Record = serde_json::Map<String, Value>;

/// An ordered sequence of records. Append-only during construction;
/// egress reads records without mutating them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record. Row order is preserved.
    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Decode a document from JSON text.
    ///
    /// The root must be an array and every entry an object; anything
    /// else is a [`ParseError`]. No recovery is attempted.
    pub fn from_json_str(text: &str) -> Result<Self, ParseError> {
        let value: Value = serde_json::from_str(text)?;
        let entries = match value {
            Value::Array(entries) => entries,
            _ => return Err(ParseError::NotAnArray),
        };

        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.into_iter().enumerate() {
            match entry {
                Value::Object(record) => records.push(record),
                _ => return Err(ParseError::NotAnObject { index }),
            }
        }
        Ok(Self { records })
    }

    /// Serialize to pretty-printed JSON bytes (4-space indentation,
    /// non-ASCII literal).
    pub fn to_json_vec(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = Serializer::with_formatter(&mut out, formatter);
        self.records.serialize(&mut serializer)?;
        Ok(out)
    }

    /// Load a document from a file.
    pub fn load(path: &Path) -> Result<Self, ConvertError> {
        let text = fs::read_to_string(path).map_err(ReadError::Io)?;
        Ok(Self::from_json_str(&text)?)
    }

    /// Write the document to a file.
    ///
    /// The document is serialized fully in memory first, then written
    /// in a single call, so a failure leaves no partial file behind.
    pub fn save(&self, path: &Path) -> Result<(), WriteError> {
        let bytes = self.to_json_vec()?;
        fs::write(path, bytes)?;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<Record> for Document {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
