//! Search stage: case-insensitive substring match over a set of fields

use crate::core::field::display_or_empty;
use crate::core::record::Record;

/// Keep the records where at least one searchable field contains `search`.
///
/// An empty `search` keeps every record in its original order. Missing and
/// null fields read as `""` and so never match a non-empty search; numbers
/// and booleans are matched on their string form. With no searchable fields
/// nothing can match.
pub fn filter<'a, R: Record>(records: &'a [R], search: &str, fields: &[&str]) -> Vec<&'a R> {
    if search.is_empty() {
        return records.iter().collect();
    }

    let needle = search.to_lowercase();
    records
        .iter()
        .filter(|record| matches(*record, &needle, fields))
        .collect()
}

/// Same as [`filter`] over an already borrowed sequence
pub fn filter_refs<'a, R: Record>(records: Vec<&'a R>, search: &str, fields: &[&str]) -> Vec<&'a R> {
    if search.is_empty() {
        return records;
    }

    let needle = search.to_lowercase();
    records
        .into_iter()
        .filter(|record| matches(*record, &needle, fields))
        .collect()
}

fn matches<R: Record>(record: &R, needle: &str, fields: &[&str]) -> bool {
    fields.iter().any(|field| {
        display_or_empty(record.field_value(field).as_ref())
            .to_lowercase()
            .contains(needle)
    })
}
