//! Pre-flight record counter for tabular input.

use std::fs;
use std::path::Path;

use crate::error::ReadResult;
use crate::tabular;

/// Count the non-blank data rows of a tabular file.
///
/// Skips exactly one header row, then counts every row with at least
/// one non-empty cell after trimming. The blank-row predicate is the
/// same one ingest filtering uses, so the count reported before a
/// conversion matches the number of records the conversion produces.
/// Purely informational: no side effects.
pub fn count_records(input: &Path) -> ReadResult<usize> {
    let bytes = fs::read(input)?;
    let text = tabular::decode(&bytes)?;
    count_from_csv(&text)
}

/// Count non-blank data rows in decoded tabular text.
pub fn count_from_csv(text: &str) -> ReadResult<usize> {
    let mut reader = tabular::reader_for(text);
    let mut count = 0;
    for row in reader.records() {
        if !tabular::is_blank_row(&row?) {
            count += 1;
        }
    }
    Ok(count)
}
