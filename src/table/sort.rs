//! Sort stage: stable multi-key ordering on string representations

use std::cmp::Ordering;

use deunicode::deunicode;

use crate::core::field::{FieldValue, display_or_empty};
use crate::core::query::SortKey;
use crate::core::record::Record;

/// Order records by the given keys, first key primary.
///
/// The sort is stable: records equal under every key keep their relative
/// order, and an empty key list leaves the input untouched.
pub fn sort<'a, R: Record>(mut records: Vec<&'a R>, keys: &[SortKey]) -> Vec<&'a R> {
    if keys.is_empty() {
        return records;
    }
    records.sort_by(|a, b| compare_by_keys(*a, *b, keys));
    records
}

/// Compares two records using a list of sort keys.
///
/// Falls through to the next key on a tie and returns `Equal` when every key
/// ties.
pub fn compare_by_keys<R: Record>(a: &R, b: &R, keys: &[SortKey]) -> Ordering {
    for key in keys {
        let ordering = compare_field(
            a.field_value(&key.id).as_ref(),
            b.field_value(&key.id).as_ref(),
        );
        let ordering = if key.desc { ordering.reverse() } else { ordering };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Compare two field values on their string form.
///
/// Strictly equal values tie without building strings. Missing and null
/// values read as `""`, so they come first in ascending order.
pub fn compare_field(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    match (a, b) {
        (None, None) => return Ordering::Equal,
        (Some(a), Some(b)) if a.strict_eq(b) => return Ordering::Equal,
        _ => {}
    }
    collate(&display_or_empty(a), &display_or_empty(b))
}

/// Dictionary order for display strings.
///
/// Letters compare without accents or case first (`Émile` sorts between
/// `bob` and `Zoé`), then accented after plain, then lowercase before
/// uppercase. Distinct strings never tie.
pub fn collate(a: &str, b: &str) -> Ordering {
    let (a_lower, b_lower) = (a.to_lowercase(), b.to_lowercase());
    deunicode(&a_lower)
        .cmp(&deunicode(&b_lower))
        .then_with(|| a_lower.cmp(&b_lower))
        .then_with(|| b.cmp(a))
}
