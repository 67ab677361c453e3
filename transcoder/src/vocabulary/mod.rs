//! Field vocabulary: header translation tables and default fields.
//!
//! Conversion in each direction is driven by a fixed, ordered lookup
//! table. The two tables are deliberately not inverses of each other:
//!
//! - the **ingest** table maps tabular column names to document field
//!   names and covers only the supplier/contact columns of the intake
//!   template;
//! - the **egress** table maps document field names back to tabular
//!   column names and is a superset, additionally covering the fields
//!   that enrichment passes write into records (company firmographics,
//!   contact-match metadata, status fields).
//!
//! The **default** table lists the document fields injected into every
//! record on ingest, as placeholders for the enrichment passes to fill.
//!
//! Declaration order is significant throughout: egress order decides
//! output column order, and default order decides the field order of
//! freshly created records. The tables are declared independently;
//! deriving one from the other would lose the intentional asymmetry.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::VocabularyError;

/// Tabular column -> document field, applied on ingest.
const INGEST: &[(&str, &str)] = &[
    ("Supplier Company", "companyName"),
    ("Supplier First Name", "firstName"),
    ("Supplier Last Name", "lastName"),
    ("Supplier Email", "emailAddress"),
    ("Supplier Phone", "phone"),
    ("Supplier Street", "companyStreet"),
    ("Supplier City", "companyCity"),
    ("Supplier State", "companyState"),
    ("Supplier Zip Code", "companyZipCode"),
    ("Supplier Country", "companyCountry"),
    ("Site Name", "siteName"),
    ("Site ID", "siteID"),
    ("Additional Contact Info", "additionalContactInfo"),
];

/// Document field -> tabular column, applied on egress.
/// Declaration order is the output column order for known fields.
const EGRESS: &[(&str, &str)] = &[
    ("companyName", "Supplier Company"),
    ("companyStreet", "Supplier Street"),
    ("companyCity", "Supplier City"),
    ("companyState", "Supplier State"),
    ("companyZipCode", "Supplier Zip Code"),
    ("companyCountry", "Supplier Country"),
    ("firstName", "Supplier First Name"),
    ("lastName", "Supplier Last Name"),
    ("emailAddress", "Supplier Email"),
    ("phone", "Supplier Phone"),
    ("siteName", "Site Name"),
    ("siteID", "Site ID"),
    ("additionalContactInfo", "Additional Contact Info"),
    ("zi_c_name", "Zoominfo Company Name"),
    ("zi_c_company_id", "Zoominfo Company ID"),
    ("zi_c_company_name", "Company HQ Name"),
    ("zi_c_phone", "Company Phone"),
    ("zi_c_url", "Website"),
    ("zi_c_linkedin_url", "Company LinkedIn URL"),
    ("jobTitle", "Contact Job Title"),
    ("zi_c_naics6", "6-digit NAICS Code"),
    ("sectorTitle", "Sector Title"),
    ("primaryIndustry", "Primary Industry"),
    ("zi_c_employees", "Number of Employees"),
    ("zi_c_street", "Company Street"),
    ("zi_c_city", "Company City"),
    ("zi_c_state", "Company State"),
    ("zi_c_zip", "Company Zip Code"),
    ("zi_c_country", "Company Country"),
    ("zi_c_location_id", "Company Location ID"),
    ("needsContact", "Needs New Contact"),
    ("newContactFound", "New Contact Found"),
    ("personId", "Contact Person ID"),
    ("contactMatchCriteria", "Contact Match Criteria"),
    ("company_match_criteria", "Company Match Criteria"),
    ("enrichmentStatus", "Enrichment Status"),
    ("errorMessage", "Error Message"),
];

/// Document fields injected into every record on ingest.
/// `enrichmentStatus` starts as "Success"; enrichment passes downgrade
/// it on failure.
const DEFAULTS: &[(&str, &str)] = &[
    ("zi_c_name", ""),
    ("zi_c_company_id", ""),
    ("jobTitle", ""),
    ("zi_c_company_name", ""),
    ("zi_c_phone", ""),
    ("zi_c_url", ""),
    ("zi_c_linkedin_url", ""),
    ("zi_c_naics6", ""),
    ("sectorTitle", ""),
    ("primaryIndustry", ""),
    ("zi_c_employees", ""),
    ("zi_c_street", ""),
    ("zi_c_city", ""),
    ("zi_c_state", ""),
    ("zi_c_zip", ""),
    ("zi_c_country", ""),
    ("zi_c_location_id", ""),
    ("needsContact", ""),
    ("newContactFound", ""),
    ("personId", ""),
    ("contactMatchCriteria", ""),
    ("enrichmentStatus", "Success"),
    ("errorMessage", ""),
];

static STANDARD: Lazy<Vocabulary> = Lazy::new(|| Vocabulary {
    ingest: pairs(INGEST),
    egress: pairs(EGRESS),
    defaults: pairs(DEFAULTS),
});

fn pairs(table: &[(&str, &str)]) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The complete field vocabulary used by both conversion directions.
///
/// Constructed once and passed explicitly into each conversion; the
/// converters themselves hold no global state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vocabulary {
    /// Tabular column -> document field, applied on ingest.
    pub ingest: Vec<(String, String)>,

    /// Document field -> tabular column, applied on egress.
    pub egress: Vec<(String, String)>,

    /// Document field -> default value, injected into every record.
    pub defaults: Vec<(String, String)>,
}

impl Vocabulary {
    /// The built-in vocabulary for the supplier enrichment template.
    pub fn standard() -> &'static Vocabulary {
        &STANDARD
    }

    /// Parse a vocabulary from a JSON string and verify it.
    pub fn from_json(json: &str) -> Result<Self, VocabularyError> {
        let vocabulary: Vocabulary = serde_json::from_str(json)?;
        vocabulary.verify()?;
        Ok(vocabulary)
    }

    /// Load a vocabulary from a JSON file and verify it.
    pub fn from_file(path: &Path) -> Result<Self, VocabularyError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Translate a tabular column name to its document field name.
    /// Unknown names pass through unchanged.
    pub fn to_document<'a>(&'a self, column: &'a str) -> &'a str {
        translate(&self.ingest, column)
    }

    /// Translate a document field name to its tabular column name.
    /// Unknown names pass through unchanged.
    pub fn to_tabular<'a>(&'a self, field: &'a str) -> &'a str {
        translate(&self.egress, field)
    }

    /// Document fields known to the egress table, in declaration order.
    pub fn egress_fields(&self) -> impl Iterator<Item = &str> {
        self.egress.iter().map(|(field, _)| field.as_str())
    }

    /// Default fields and values, in declaration order.
    pub fn default_fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.defaults
            .iter()
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }

    /// Consistency check, run once at startup.
    ///
    /// Rejects duplicate keys within a table and any ingest target that
    /// the egress table cannot translate back. The two tables are never
    /// assumed consistent just because the built-in ones are.
    pub fn verify(&self) -> Result<(), VocabularyError> {
        no_duplicates(&self.ingest, "ingest")?;
        no_duplicates(&self.egress, "egress")?;
        no_duplicates(&self.defaults, "defaults")?;

        let egress_keys: HashSet<&str> = self.egress_fields().collect();
        for (_, target) in &self.ingest {
            if !egress_keys.contains(target.as_str()) {
                return Err(VocabularyError::UnmappedIngestTarget(target.clone()));
            }
        }
        Ok(())
    }
}

/// Pure table lookup with pass-through fallback. Total by construction:
/// unknown names are returned unchanged.
fn translate<'a>(table: &'a [(String, String)], name: &'a str) -> &'a str {
    table
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .unwrap_or(name)
}

fn no_duplicates(
    table: &[(String, String)],
    table_name: &'static str,
) -> Result<(), VocabularyError> {
    let mut seen = HashSet::new();
    for (key, _) in table {
        if !seen.insert(key.as_str()) {
            return Err(VocabularyError::DuplicateKey {
                table: table_name,
                key: key.clone(),
            });
        }
    }
    Ok(())
}
