//! Reductions over record collections for summary cards and totals rows.
//!
//! Whether a screen feeds the filtered or the unfiltered collection to these
//! is part of that screen's contract: the dashboard convention in this
//! product keeps summary cards on the full collection while totals rows
//! follow the filtered view.

use super::{FieldValue, ListRecord};
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary of one numeric field. `avg`/`min`/`max` are `None` when no record
/// contributed a value, so empty collections aggregate without raising.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NumericSummary {
    pub count: usize,
    pub sum: f64,
    pub avg: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Summarize `field` across the collection. Records lacking the field or
/// carrying a non-numeric value are skipped.
pub fn summarize<T: ListRecord>(records: &[T], field: &str) -> NumericSummary {
    let mut summary = NumericSummary::default();
    for record in records {
        let Some(value) = record.field(field).and_then(|v| v.as_number()) else {
            continue;
        };
        summary.count += 1;
        summary.sum += value;
        summary.min = Some(summary.min.map_or(value, |m: f64| m.min(value)));
        summary.max = Some(summary.max.map_or(value, |m: f64| m.max(value)));
    }
    if summary.count > 0 {
        summary.avg = Some(summary.sum / summary.count as f64);
    }
    summary
}

/// Sum of `value_field` grouped by the display value of `category_field`.
/// Categories appear in lexicographic order.
pub fn sum_by<T: ListRecord>(
    records: &[T],
    category_field: &str,
    value_field: &str,
) -> BTreeMap<String, f64> {
    let mut groups = BTreeMap::new();
    for record in records {
        let Some(category) = record.field(category_field) else {
            continue;
        };
        let value = record
            .field(value_field)
            .and_then(|v| v.as_number())
            .unwrap_or(0.0);
        *groups.entry(category.display()).or_insert(0.0) += value;
    }
    groups
}

/// Count records whose field displays as `value`.
pub fn count_where<T: ListRecord>(records: &[T], field: &str, value: &str) -> usize {
    records
        .iter()
        .filter(|record| {
            record
                .field(field)
                .map(|v| v.display() == value)
                .unwrap_or(false)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry {
        id: String,
        scheme: String,
        amount: f64,
    }

    impl Entry {
        fn new(id: &str, scheme: &str, amount: f64) -> Self {
            Self {
                id: id.to_string(),
                scheme: scheme.to_string(),
                amount,
            }
        }
    }

    impl ListRecord for Entry {
        const SEARCH_FIELDS: &'static [&'static str] = &["id"];

        fn record_id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(FieldValue::Text(self.id.clone())),
                "scheme" => Some(FieldValue::Text(self.scheme.clone())),
                "amount" => Some(FieldValue::Number(self.amount)),
                _ => None,
            }
        }
    }

    #[test]
    fn empty_collection_aggregates_to_zero() {
        let summary = summarize::<Entry>(&[], "amount");
        assert_eq!(summary.count, 0);
        assert_eq!(summary.sum, 0.0);
        assert_eq!(summary.avg, None);
        assert_eq!(summary.min, None);
        assert_eq!(summary.max, None);
        assert!(sum_by::<Entry>(&[], "scheme", "amount").is_empty());
    }

    #[test]
    fn summarize_basic() {
        let entries = vec![
            Entry::new("c1", "flat", 10.0),
            Entry::new("c2", "markup", 30.0),
            Entry::new("c3", "flat", 20.0),
        ];
        let summary = summarize(&entries, "amount");
        assert_eq!(summary.count, 3);
        assert_eq!(summary.sum, 60.0);
        assert_eq!(summary.avg, Some(20.0));
        assert_eq!(summary.min, Some(10.0));
        assert_eq!(summary.max, Some(30.0));
    }

    #[test]
    fn sum_by_groups_in_category_order() {
        let entries = vec![
            Entry::new("c1", "markup", 5.0),
            Entry::new("c2", "flat", 10.0),
            Entry::new("c3", "markup", 7.0),
        ];
        let groups = sum_by(&entries, "scheme", "amount");
        let pairs: Vec<(&str, f64)> = groups.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        assert_eq!(pairs, vec![("flat", 10.0), ("markup", 12.0)]);
    }

    #[test]
    fn count_where_matches_display_value() {
        let entries = vec![
            Entry::new("c1", "flat", 1.0),
            Entry::new("c2", "markup", 1.0),
            Entry::new("c3", "flat", 1.0),
        ];
        assert_eq!(count_where(&entries, "scheme", "flat"), 2);
        assert_eq!(count_where(&entries, "scheme", "interchange"), 0);
    }
}
