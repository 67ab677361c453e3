//! Document to tabular conversion.
//!
//! Column order is computed from the data, not hardcoded: the union of
//! field names over all records is split into fields the egress table
//! knows (emitted first, in the table's declaration order, so known
//! columns land in predictable places no matter which record introduced
//! them) and pass-through fields (emitted after, in first-appearance
//! order). Records missing a column yield an empty cell.

use serde_json::Value;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use super::{ENHANCED_SUFFIX, TABULAR_EXTENSION};
use crate::document::Document;
use crate::error::{ConvertError, WriteError, WriteResult};
use crate::tabular;
use crate::vocabulary::Vocabulary;

/// Tabular output path for a document path: same directory, stem
/// suffixed with the enhancement marker.
pub fn enhanced_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or(Cow::Borrowed("document"));
    input.with_file_name(format!("{stem}{ENHANCED_SUFFIX}.{TABULAR_EXTENSION}"))
}

/// Compute the output column order for a document.
///
/// Returns document field names (not yet translated): first the union
/// members known to the egress table in declaration order, then the
/// remaining members in order of first appearance across the whole
/// record sequence. Deterministic for any two documents with the same
/// field union, regardless of which record introduces which field.
pub fn column_order(document: &Document, vocabulary: &Vocabulary) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut first_appearance: Vec<&str> = Vec::new();
    for record in document {
        for field in record.keys() {
            if seen.insert(field.as_str()) {
                first_appearance.push(field.as_str());
            }
        }
    }

    let known: HashSet<&str> = vocabulary.egress_fields().collect();

    let mut columns: Vec<String> = vocabulary
        .egress_fields()
        .filter(|field| seen.contains(field))
        .map(String::from)
        .collect();
    columns.extend(
        first_appearance
            .into_iter()
            .filter(|field| !known.contains(field))
            .map(String::from),
    );
    columns
}

/// Render a document value as a tabular cell.
///
/// Ingest only ever writes strings, but enrichment passes are free to
/// put other scalars into records; those are stringified rather than
/// rejected. Null renders as an empty cell.
fn cell_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Null => Cow::Borrowed(""),
        Value::Bool(flag) => Cow::Owned(flag.to_string()),
        Value::Number(number) => Cow::Owned(number.to_string()),
        container => Cow::Owned(container.to_string()),
    }
}

/// Encode a document as tabular bytes: byte-order marker, translated
/// header row, then one row per record in document order.
pub fn csv_from_document(document: &Document, vocabulary: &Vocabulary) -> WriteResult<Vec<u8>> {
    let columns = column_order(document, vocabulary);

    let mut buffer = tabular::BOM.to_vec();
    {
        let mut writer = csv::Writer::from_writer(&mut buffer);
        writer.write_record(columns.iter().map(|field| vocabulary.to_tabular(field)))?;

        for record in document {
            let row: Vec<Cow<'_, str>> = columns
                .iter()
                .map(|field| record.get(field).map(cell_text).unwrap_or(Cow::Borrowed("")))
                .collect();
            writer.write_record(row.iter().map(|cell| cell.as_ref()))?;
        }
        writer.flush()?;
    }
    Ok(buffer)
}

/// Convert a document file into a tabular file next to it.
///
/// Writes the document's stem suffixed with the enhancement marker and
/// returns the written path. Output bytes are materialized fully before
/// the single write, so failures leave no partial file.
pub fn document_to_csv(input: &Path, vocabulary: &Vocabulary) -> Result<PathBuf, ConvertError> {
    let document = Document::load(input)?;
    let bytes = csv_from_document(&document, vocabulary)?;

    let output = enhanced_path(input);
    fs::write(&output, bytes).map_err(WriteError::Io)?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Record;
    use crate::error::ParseError;

    fn record(fields: &[(&str, &str)]) -> Record {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    fn doc(records: Vec<Record>) -> Document {
        records.into_iter().collect()
    }

    fn output_lines(document: &Document) -> Vec<String> {
        let bytes = csv_from_document(document, Vocabulary::standard()).unwrap();
        let text = tabular::decode(&bytes).unwrap();
        text.lines().map(String::from).collect()
    }

    #[test]
    fn test_known_fields_ordered_by_table_declaration() {
        // The record introduces status fields before the company name;
        // the output still leads with the company column.
        let document = doc(vec![record(&[
            ("errorMessage", ""),
            ("enrichmentStatus", "Success"),
            ("companyName", "Acme"),
        ])]);
        let lines = output_lines(&document);
        assert_eq!(
            lines[0],
            "Supplier Company,Enrichment Status,Error Message"
        );
        assert_eq!(lines[1], "Acme,Success,");
    }

    #[test]
    fn test_column_order_deterministic_across_introduction_order() {
        let forward = doc(vec![
            record(&[("companyName", "Acme")]),
            record(&[("companyName", "Globex"), ("personId", "7")]),
        ]);
        let backward = doc(vec![
            record(&[("personId", "7")]),
            record(&[("companyName", "Acme")]),
        ]);
        let order_a = column_order(&forward, Vocabulary::standard());
        let order_b = column_order(&backward, Vocabulary::standard());
        assert_eq!(order_a, order_b);
        assert_eq!(order_a, ["companyName", "personId"]);
    }

    #[test]
    fn test_pass_through_fields_follow_known_in_first_appearance_order() {
        let document = doc(vec![
            record(&[("zeta", "1"), ("companyName", "Acme")]),
            record(&[("alpha", "2")]),
        ]);
        let order = column_order(&document, Vocabulary::standard());
        assert_eq!(order, ["companyName", "zeta", "alpha"]);
    }

    #[test]
    fn test_missing_keys_yield_empty_cells() {
        let document = doc(vec![
            record(&[("companyName", "Acme"), ("personId", "7")]),
            record(&[("companyName", "Globex")]),
        ]);
        let lines = output_lines(&document);
        assert_eq!(lines[0], "Supplier Company,Contact Person ID");
        assert_eq!(lines[1], "Acme,7");
        assert_eq!(lines[2], "Globex,");
    }

    #[test]
    fn test_output_starts_with_bom() {
        let document = doc(vec![record(&[("companyName", "Acme")])]);
        let bytes = csv_from_document(&document, Vocabulary::standard()).unwrap();
        assert!(bytes.starts_with(tabular::BOM));
    }

    #[test]
    fn test_non_string_values_stringified() {
        let mut rec = Record::new();
        rec.insert("companyName".to_string(), Value::String("Acme".into()));
        rec.insert("zi_c_employees".to_string(), Value::Number(250.into()));
        rec.insert("newContactFound".to_string(), Value::Bool(true));
        rec.insert("personId".to_string(), Value::Null);
        let document = doc(vec![rec]);

        let lines = output_lines(&document);
        assert_eq!(lines[1], "Acme,250,true,");
    }

    #[test]
    fn test_cells_with_delimiters_are_quoted() {
        let document = doc(vec![record(&[("companyName", "Acme, Inc.")])]);
        let lines = output_lines(&document);
        assert_eq!(lines[1], "\"Acme, Inc.\"");
    }

    #[test]
    fn test_enhanced_path_naming() {
        assert_eq!(
            enhanced_path(Path::new("/data/suppliers.json")),
            Path::new("/data/suppliers - Enhanced.csv")
        );
    }

    #[test]
    fn test_empty_document_emits_no_data_rows() {
        let bytes = csv_from_document(&Document::new(), Vocabulary::standard()).unwrap();
        assert!(bytes.starts_with(tabular::BOM));
        let text = tabular::decode(&bytes).unwrap();
        assert!(text.lines().all(|line| line.trim_matches('"').is_empty()));
    }

    #[test]
    fn test_file_conversion_writes_enhanced_csv() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("suppliers.json");
        fs::write(&input, r#"[{"companyName": "Acme"}]"#).unwrap();

        let output = document_to_csv(&input, Vocabulary::standard()).unwrap();
        assert_eq!(output, dir.path().join("suppliers - Enhanced.csv"));

        let bytes = fs::read(&output).unwrap();
        let text = tabular::decode(&bytes).unwrap();
        assert_eq!(text.lines().next(), Some("Supplier Company"));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(&input, r#"{"not": "an array"}"#).unwrap();

        let err = document_to_csv(&input, Vocabulary::standard()).unwrap_err();
        assert!(matches!(err, ConvertError::Parse(ParseError::NotAnArray)));
    }
}
