//! Conversion module.
//!
//! Both directions of the transcoder, plus the pre-flight counter:
//! - Ingest: tabular file -> document (blank rows dropped, headers
//!   remapped, defaults injected)
//! - Egress: document -> tabular file (deterministic column order,
//!   headers mapped back)
//! - Counter: non-blank data rows of a tabular file

pub mod counter;
pub mod egress;
pub mod ingest;

pub use counter::count_records;
pub use egress::{column_order, csv_from_document, document_to_csv, enhanced_path};
pub use ingest::{csv_to_document, document_path, records_from_csv};

/// File extension of the document format.
pub const DOCUMENT_EXTENSION: &str = "json";

/// File extension of the tabular format.
pub const TABULAR_EXTENSION: &str = "csv";

/// Marker appended to the stem of egress output files.
pub const ENHANCED_SUFFIX: &str = " - Enhanced";
