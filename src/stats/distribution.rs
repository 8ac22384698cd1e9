//! Category and status distributions

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::field::FieldValue;
use crate::core::record::Record;

/// One slice of a category chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryPoint {
    pub category: String,
    pub value: usize,
}

/// Count records per category, in first-seen order.
///
/// Records whose category is missing, null, empty, zero or `false` are left
/// out entirely; there is no "uncategorized" bucket.
pub fn distribution_by_category<R: Record>(
    records: &[R],
    category_field: &str,
) -> IndexMap<String, usize> {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in records {
        let Some(value) = record.field_value(category_field) else {
            continue;
        };
        if is_falsy(&value) {
            continue;
        }
        *counts.entry(value.to_display_string()).or_insert(0) += 1;
    }
    counts
}

/// Chart points for a category distribution
pub fn category_points(distribution: &IndexMap<String, usize>) -> Vec<CategoryPoint> {
    distribution
        .iter()
        .map(|(category, value)| CategoryPoint {
            category: category.clone(),
            value: *value,
        })
        .collect()
}

fn is_falsy(value: &FieldValue) -> bool {
    match value {
        FieldValue::Null => true,
        FieldValue::String(s) => s.is_empty(),
        FieldValue::Integer(i) => *i == 0,
        FieldValue::Float(f) => *f == 0.0 || f.is_nan(),
        FieldValue::Boolean(b) => !b,
        FieldValue::DateTime(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::DynamicRecord;

    #[test]
    fn test_counts_in_first_seen_order() {
        let records = vec![
            DynamicRecord::new().with("categorie", "Pilotage"),
            DynamicRecord::new().with("categorie", "Maintenance"),
            DynamicRecord::new().with("categorie", "Pilotage"),
        ];
        let dist = distribution_by_category(&records, "categorie");
        assert_eq!(
            dist.into_iter().collect::<Vec<_>>(),
            vec![("Pilotage".to_string(), 2), ("Maintenance".to_string(), 1)]
        );
    }

    // Known quirk, kept until product decides otherwise: uncategorized
    // records are dropped rather than counted under their own bucket.
    #[test]
    fn test_uncategorized_records_are_dropped() {
        let records = vec![
            DynamicRecord::new().with("categorie", "Cabine"),
            DynamicRecord::new().with("categorie", ""),
            DynamicRecord::new().with("categorie", None::<String>),
            DynamicRecord::new(),
        ];
        let dist = distribution_by_category(&records, "categorie");
        assert_eq!(dist.len(), 1);
        assert_eq!(dist.values().sum::<usize>(), 1);
        assert!(!dist.contains_key("Uncategorized"));
    }

    #[test]
    fn test_category_points() {
        let mut dist = IndexMap::new();
        dist.insert("Sol".to_string(), 4);
        assert_eq!(
            category_points(&dist),
            vec![CategoryPoint {
                category: "Sol".to_string(),
                value: 4
            }]
        );
    }
}
