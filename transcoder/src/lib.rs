//! # Enrichkit - supplier data transcoder
//!
//! Enrichkit translates supplier contact CSV files into the document
//! format consumed by the data enrichment pipeline, and enriched
//! documents back into spreadsheet-friendly CSV files.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   CSV File  │────▶│   Ingest    │────▶│  Enrichment  │────▶│ Enhanced CSV│
//! │ (UTF-8/BOM) │     │ (remap +    │     │   passes     │     │ (stable col │
//! │             │     │  defaults)  │     │  (external)  │     │  order, BOM)│
//! └─────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! The enrichment passes in the middle are external: they read and write
//! the same document format, and this crate makes no assumptions about
//! which fields they add or modify beyond the placeholder defaults it
//! injects on ingest.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use enrichkit::{csv_to_document, document_to_csv, Vocabulary};
//! use std::path::Path;
//!
//! fn main() -> Result<(), enrichkit::ConvertError> {
//!     let vocabulary = Vocabulary::standard();
//!     let document = csv_to_document(Path::new("suppliers.csv"), vocabulary)?;
//!     // ... enrichment passes run on the document ...
//!     let enhanced = document_to_csv(&document, vocabulary)?;
//!     println!("wrote {}", enhanced.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per concern
//! - [`vocabulary`] - Fixed header translation tables and default fields
//! - [`document`] - Ordered record sequences and their JSON form
//! - [`tabular`] - CSV-side plumbing (decoding, blank-row predicate)
//! - [`convert`] - Ingest, egress, and the pre-flight counter

// Core modules
pub mod error;
pub mod vocabulary;

// Data model
pub mod document;

// Tabular plumbing
pub mod tabular;

// Conversions
pub mod convert;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConvertError,
    ConvertResult,
    ParseError,
    ReadError,
    VocabularyError,
    WriteError,
};

// =============================================================================
// Re-exports - Vocabulary
// =============================================================================

pub use vocabulary::Vocabulary;

// =============================================================================
// Re-exports - Document model
// =============================================================================

pub use document::{Document, Record};

// =============================================================================
// Re-exports - Conversions
// =============================================================================

pub use convert::{
    column_order,
    count_records,
    csv_from_document,
    csv_to_document,
    document_path,
    document_to_csv,
    enhanced_path,
    records_from_csv,
};
