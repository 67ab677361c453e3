//! Tabular to document conversion.
//!
//! Each surviving row becomes one record: column names are translated
//! through the ingest table (unknown columns pass through with their
//! original names), then the full default field set is merged in.
//! Defaults overwrite same-named keys unconditionally, so a source
//! column that already used a document field name loses its value to
//! the placeholder. Enrichment passes rely on the placeholders being
//! in a known state, so that overwrite is part of the contract.

use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::DOCUMENT_EXTENSION;
use crate::document::{Document, Record};
use crate::error::{ConvertError, ReadError, ReadResult};
use crate::tabular;
use crate::vocabulary::Vocabulary;

/// Document path for a tabular input path: extension swapped to the
/// document format's.
pub fn document_path(input: &Path) -> PathBuf {
    input.with_extension(DOCUMENT_EXTENSION)
}

/// Convert decoded tabular text into a document.
///
/// The header row determines field names before any data row is read.
/// Rows whose every raw cell trims to empty are dropped silently; all
/// other rows convert in input order.
pub fn records_from_csv(text: &str, vocabulary: &Vocabulary) -> ReadResult<Document> {
    let mut reader = tabular::reader_for(text);
    let headers = reader.headers()?.clone();

    let mut document = Document::new();
    for row in reader.records() {
        let row = row?;
        if tabular::is_blank_row(&row) {
            continue;
        }

        let mut record = Record::new();
        for (index, column) in headers.iter().enumerate() {
            let cell = row.get(index).unwrap_or("");
            record.insert(
                vocabulary.to_document(column).to_string(),
                Value::String(cell.to_string()),
            );
        }
        for (field, default) in vocabulary.default_fields() {
            record.insert(field.to_string(), Value::String(default.to_string()));
        }
        document.push(record);
    }
    Ok(document)
}

/// Convert a tabular file into a document file next to it.
///
/// Writes `input` with its extension replaced by `.json` and returns
/// the written path. The document is materialized fully in memory
/// before the single write, so failures leave no partial output.
pub fn csv_to_document(input: &Path, vocabulary: &Vocabulary) -> Result<PathBuf, ConvertError> {
    let bytes = fs::read(input).map_err(ReadError::Io)?;
    let text = tabular::decode(&bytes)?;
    let document = records_from_csv(&text, vocabulary)?;

    let output = document_path(input);
    document.save(&output)?;
    Ok(output)
}
