//! Tabular (CSV) plumbing shared by the converters and the counter.
//!
//! Input is UTF-8 with an optional leading byte-order marker, which is
//! stripped before parsing. Output written by egress carries a marker so
//! spreadsheet tools detect the encoding; that asymmetry is deliberate.

use std::borrow::Cow;

use crate::error::ReadError;

/// UTF-8 byte-order marker emitted at the start of tabular output.
pub const BOM: &[u8] = b"\xef\xbb\xbf";

/// Decode raw input bytes as UTF-8, stripping a leading byte-order
/// marker if present. Invalid byte sequences are a [`ReadError`], not
/// replaced.
pub fn decode(bytes: &[u8]) -> Result<Cow<'_, str>, ReadError> {
    let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
    if had_errors {
        return Err(ReadError::Encoding);
    }
    Ok(text)
}

/// Build a CSV reader over decoded text.
///
/// The first row is the header. Readers are flexible: rows shorter than
/// the header read missing cells as empty, surplus cells are dropped.
pub fn reader_for(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes())
}

/// A row is blank when every cell, trimmed, is empty.
///
/// Evaluated on raw cell values, before any remapping or default
/// injection. Used identically by ingest filtering and the record
/// counter so the pre-flight count matches what conversion keeps.
pub fn is_blank_row(row: &csv::StringRecord) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}
