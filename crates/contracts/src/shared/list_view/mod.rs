//! Record list-view pipeline.
//!
//! Every list screen in the console (merchants, POS devices, fraud alerts,
//! commissions, cloud services, risk tables) derives its table from the same
//! computation: source collection + search + filters + sort -> ordered rows
//! plus "showing X of Y" metadata. The pipeline is pure and synchronous; it
//! never does I/O and is recomputed in full whenever one of its inputs
//! changes.

pub mod aggregate;
pub mod query;

pub use query::{FieldValue, FilterState, FilterValue, ListQuery, SortDirection, SortState};

use std::cmp::Ordering;
use thiserror::Error;

/// Row type pluggable into the pipeline.
///
/// `SEARCH_FIELDS` is the fixed set of fields the free-text search matches
/// for this record type; it is part of each screen's contract, not user
/// configurable.
pub trait ListRecord {
    const SEARCH_FIELDS: &'static [&'static str];

    /// Stable unique id.
    fn record_id(&self) -> &str;

    /// Named field access. `None` means the record does not carry the field.
    fn field(&self, name: &str) -> Option<FieldValue>;
}

/// Result of a pipeline run: the rows to render plus count metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<T> {
    pub rows: Vec<T>,
    /// Size of the source collection before search/filters.
    pub total: usize,
}

impl<T> ListView<T> {
    pub fn matched(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Raised by the strict entry point when a record cannot participate in the
/// active view. Keeps future real-data integration loud instead of silently
/// misordering rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecordError {
    #[error("record at position {index} has an empty id")]
    MissingId { index: usize },
    #[error("record {record_id} has no field \"{field}\" referenced by the active view")]
    MissingField { record_id: String, field: String },
}

/// Keep a record iff the term is blank or a case-insensitive substring of at
/// least one search field (OR across fields).
pub fn apply_search<T: ListRecord>(records: Vec<T>, term: &str) -> Vec<T> {
    let term = term.trim();
    if term.is_empty() {
        return records;
    }
    let needle = term.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            T::SEARCH_FIELDS.iter().any(|field| {
                record
                    .field(field)
                    .map(|value| value.display().to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .collect()
}

/// Keep records satisfying every active filter. A record lacking a filtered
/// field fails that filter.
pub fn apply_filters<T: ListRecord>(records: Vec<T>, filters: &FilterState) -> Vec<T> {
    if filters.active_count() == 0 {
        return records;
    }
    records
        .into_iter()
        .filter(|record| {
            filters.active().all(|(field, wanted)| {
                record
                    .field(field)
                    .map(|value| value.display() == wanted)
                    .unwrap_or(false)
            })
        })
        .collect()
}

/// Stable in-place sort. Descending reverses the comparator, not the output,
/// so ties keep their source order in both directions. A missing sort field
/// orders before any present value.
pub fn apply_sort<T: ListRecord>(records: &mut [T], sort: &SortState) {
    if sort.field.is_empty() {
        return;
    }
    records.sort_by(|a, b| {
        let cmp = compare_by_field(a, b, &sort.field);
        if sort.direction.is_ascending() {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

fn compare_by_field<T: ListRecord>(a: &T, b: &T, field: &str) -> Ordering {
    match (a.field(field), b.field(field)) {
        (Some(va), Some(vb)) => va.compare(&vb),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Strict pipeline entry point: validates the snapshot against the active
/// query, then search -> filters -> sort.
pub fn run<T: ListRecord + Clone>(
    records: &[T],
    query: &ListQuery,
) -> Result<ListView<T>, MalformedRecordError> {
    validate(records, query)?;
    let total = records.len();
    let rows = apply_search(records.to_vec(), query.search_term());
    let mut rows = apply_filters(rows, &query.filters);
    apply_sort(&mut rows, &query.sort);
    Ok(ListView { rows, total })
}

fn validate<T: ListRecord>(records: &[T], query: &ListQuery) -> Result<(), MalformedRecordError> {
    let mut referenced: Vec<&str> = query.filters.active().map(|(field, _)| field).collect();
    if !query.sort.field.is_empty() {
        referenced.push(query.sort.field.as_str());
    }
    for (index, record) in records.iter().enumerate() {
        if record.record_id().is_empty() {
            return Err(MalformedRecordError::MissingId { index });
        }
        for &field in &referenced {
            if record.field(field).is_none() {
                return Err(MalformedRecordError::MissingField {
                    record_id: record.record_id().to_string(),
                    field: field.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        status: String,
        revenue: f64,
    }

    impl Row {
        fn new(id: &str, name: &str, status: &str, revenue: f64) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
                status: status.to_string(),
                revenue,
            }
        }
    }

    impl ListRecord for Row {
        const SEARCH_FIELDS: &'static [&'static str] = &["name", "id"];

        fn record_id(&self) -> &str {
            &self.id
        }

        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "id" => Some(FieldValue::Text(self.id.clone())),
                "name" => Some(FieldValue::Text(self.name.clone())),
                "status" => Some(FieldValue::Text(self.status.clone())),
                "revenue" => Some(FieldValue::Number(self.revenue)),
                _ => None,
            }
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            Row::new("m1", "TechStore Italia", "active", 10.0),
            Row::new("m2", "Fashion Boutique", "active", 30.0),
            Row::new("m3", "Pizzeria Roma", "pending", 20.0),
            Row::new("m4", "Libreria Dante", "suspended", 20.0),
            Row::new("m5", "Gelato Milano", "active", 20.0),
        ]
    }

    #[test]
    fn empty_search_and_filters_are_identity() {
        let rows = sample();
        let searched = apply_search(rows.clone(), "");
        assert_eq!(searched, rows);
        let filtered = apply_filters(rows.clone(), &FilterState::new());
        assert_eq!(filtered, rows);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let rows = vec![
            Row::new("m1", "TechStore Italia", "active", 1.0),
            Row::new("m2", "Fashion Boutique", "active", 2.0),
        ];
        let out = apply_search(rows, "techstore");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "TechStore Italia");
    }

    #[test]
    fn search_matches_any_search_field() {
        let rows = sample();
        // "m4" only matches via the id field
        let out = apply_search(rows, "M4");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "m4");
    }

    #[test]
    fn status_filter_keeps_order_and_count() {
        let rows = sample();
        let mut filters = FilterState::new();
        filters.set_from_input("status", "active");
        let out = apply_filters(rows, &filters);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|r| r.status == "active"));
        let ids: Vec<&str> = out.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m5"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let mut filters = FilterState::new();
        filters.set_from_input("status", "active");
        let once = apply_filters(sample(), &filters);
        let twice = apply_filters(once.clone(), &filters);
        assert_eq!(once, twice);
    }

    #[test]
    fn filters_and_search_are_conjunctive() {
        let mut query = ListQuery::sorted_by("name", SortDirection::Ascending);
        query.search = "o".to_string();
        query.filters.set_from_input("status", "active");
        let view = run(&sample(), &query).unwrap();
        assert!(view
            .rows
            .iter()
            .all(|r| r.status == "active" && r.name.to_lowercase().contains('o')));
    }

    #[test]
    fn numeric_sort_descending_and_ascending() {
        let mut rows = vec![
            Row::new("a", "A", "active", 10.0),
            Row::new("b", "B", "active", 30.0),
            Row::new("c", "C", "active", 20.0),
        ];
        apply_sort(&mut rows, &SortState::new("revenue", SortDirection::Descending));
        let revs: Vec<f64> = rows.iter().map(|r| r.revenue).collect();
        assert_eq!(revs, vec![30.0, 20.0, 10.0]);
        apply_sort(&mut rows, &SortState::new("revenue", SortDirection::Ascending));
        let revs: Vec<f64> = rows.iter().map(|r| r.revenue).collect();
        assert_eq!(revs, vec![10.0, 20.0, 30.0]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys_both_directions() {
        let rows = sample();
        // m3, m4, m5 share revenue 20.0
        let mut asc = rows.clone();
        apply_sort(&mut asc, &SortState::new("revenue", SortDirection::Ascending));
        let asc_ids: Vec<&str> = asc.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(asc_ids, vec!["m1", "m3", "m4", "m5", "m2"]);

        let mut desc = rows;
        apply_sort(&mut desc, &SortState::new("revenue", SortDirection::Descending));
        let desc_ids: Vec<&str> = desc.iter().map(|r| r.id.as_str()).collect();
        // comparator is reversed, output is not: ties keep source order
        assert_eq!(desc_ids, vec!["m2", "m3", "m4", "m5", "m1"]);
    }

    #[test]
    fn double_direction_flip_round_trips() {
        let mut rows = sample();
        apply_sort(&mut rows, &SortState::new("revenue", SortDirection::Ascending));
        let before: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
        apply_sort(&mut rows, &SortState::new("revenue", SortDirection::Descending));
        apply_sort(&mut rows, &SortState::new("revenue", SortDirection::Ascending));
        let after: Vec<String> = rows.iter().map(|r| r.id.clone()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn filter_to_zero_results_yields_empty_view() {
        let mut query = ListQuery::sorted_by("name", SortDirection::Ascending);
        query.filters.set_from_input("status", "closed");
        let view = run(&sample(), &query).unwrap();
        assert!(view.is_empty());
        assert_eq!(view.matched(), 0);
        assert_eq!(view.total, 5);
    }

    #[test]
    fn run_reports_counts() {
        let mut query = ListQuery::sorted_by("revenue", SortDirection::Descending);
        query.filters.set_from_input("status", "active");
        let view = run(&sample(), &query).unwrap();
        assert_eq!(view.total, 5);
        assert_eq!(view.matched(), 3);
        assert_eq!(view.rows[0].id, "m2");
    }

    #[test]
    fn run_rejects_empty_id() {
        let rows = vec![Row::new("", "Ghost", "active", 1.0)];
        let query = ListQuery::sorted_by("name", SortDirection::Ascending);
        assert_eq!(
            run(&rows, &query),
            Err(MalformedRecordError::MissingId { index: 0 })
        );
    }

    #[test]
    fn run_rejects_unknown_sort_field() {
        let rows = sample();
        let query = ListQuery::sorted_by("nonexistent", SortDirection::Ascending);
        let err = run(&rows, &query).unwrap_err();
        assert_eq!(
            err,
            MalformedRecordError::MissingField {
                record_id: "m1".to_string(),
                field: "nonexistent".to_string(),
            }
        );
    }

    #[test]
    fn lenient_combinators_tolerate_unknown_fields() {
        // Direct combinator use keeps the documented lenient policy: a
        // missing filter field excludes the record, a missing sort field
        // orders first.
        let rows = sample();
        let mut filters = FilterState::new();
        filters.set_from_input("ghost_field", "x");
        assert!(apply_filters(rows.clone(), &filters).is_empty());

        let mut rows = rows;
        apply_sort(&mut rows, &SortState::new("ghost_field", SortDirection::Ascending));
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["m1", "m2", "m3", "m4", "m5"]);
    }
}
