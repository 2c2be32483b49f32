use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// Typed value of a record field as seen by the list-view pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// Display form, also used for filter equality (filters come from the UI
    /// as strings).
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            FieldValue::Timestamp(ts) => ts.to_rfc3339(),
        }
    }

    /// Total ordering used by the sorter. Text compares by code points
    /// (locale-naive), numbers by `total_cmp`. Mixed variants order by
    /// variant; well-formed records never hit that branch because a field
    /// keeps one type across a collection.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Text(_) => 1,
            FieldValue::Timestamp(_) => 2,
        }
    }

    /// Numeric view of the value, if it has one. Used by the aggregators.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// One filter slot: either unconstrained or an exact match on the field's
/// display value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FilterValue {
    All,
    Equals(String),
}

impl FilterValue {
    pub fn is_active(&self) -> bool {
        matches!(self, FilterValue::Equals(_))
    }
}

/// Conjunction of per-field equality constraints. `All` entries and fields
/// absent from the map impose no constraint. BTreeMap keeps iteration order
/// deterministic for display and serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState(BTreeMap<String, FilterValue>);

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter slot. The UI's "all" option maps to `FilterValue::All`.
    pub fn set(&mut self, field: impl Into<String>, value: FilterValue) {
        self.0.insert(field.into(), value);
    }

    /// Convenience for select inputs: an empty or `"all"` string clears the
    /// constraint.
    pub fn set_from_input(&mut self, field: impl Into<String>, raw: &str) {
        let value = if raw.is_empty() || raw == "all" {
            FilterValue::All
        } else {
            FilterValue::Equals(raw.to_string())
        };
        self.set(field, value);
    }

    pub fn get(&self, field: &str) -> &FilterValue {
        self.0.get(field).unwrap_or(&FilterValue::All)
    }

    /// Active (non-`All`) constraints, in field order.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().filter_map(|(field, value)| match value {
            FilterValue::Equals(v) => Some((field.as_str(), v.as_str())),
            FilterValue::All => None,
        })
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

// ---------------------------------------------------------------------------
// Sort
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Exactly one sort key at a time; no multi-key sort anywhere in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub field: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Header-click semantics: clicking the active column flips direction,
    /// clicking another column selects it ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field.to_string();
            self.direction = SortDirection::Ascending;
        }
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// The whole session-local view-model state of a list screen: free-text
/// search, filter slots, sort key. Serializable so it can be stashed or
/// logged; screens reset it to their default on construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListQuery {
    pub search: String,
    pub filters: FilterState,
    pub sort: SortState,
}

impl ListQuery {
    /// Query with no search, no filters, and the given default sort.
    pub fn sorted_by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            search: String::new(),
            filters: FilterState::new(),
            sort: SortState::new(field, direction),
        }
    }

    /// Search terms are matched trimmed; whitespace-only input is no search.
    pub fn search_term(&self) -> &str {
        self.search.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_state_defaults_to_all() {
        let filters = FilterState::new();
        assert_eq!(filters.get("status"), &FilterValue::All);
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn set_from_input_maps_all_sentinel() {
        let mut filters = FilterState::new();
        filters.set_from_input("status", "active");
        assert_eq!(
            filters.get("status"),
            &FilterValue::Equals("active".to_string())
        );
        filters.set_from_input("status", "all");
        assert_eq!(filters.get("status"), &FilterValue::All);
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn active_iterates_in_field_order() {
        let mut filters = FilterState::new();
        filters.set_from_input("status", "active");
        filters.set_from_input("country", "IT");
        let active: Vec<_> = filters.active().collect();
        assert_eq!(active, vec![("country", "IT"), ("status", "active")]);
    }

    #[test]
    fn sort_toggle_flips_then_resets() {
        let mut sort = SortState::new("name", SortDirection::Ascending);
        sort.toggle("name");
        assert_eq!(sort.direction, SortDirection::Descending);
        sort.toggle("revenue");
        assert_eq!(sort.field, "revenue");
        assert_eq!(sort.direction, SortDirection::Ascending);
    }

    #[test]
    fn field_value_ordering() {
        assert_eq!(
            FieldValue::Number(10.0).compare(&FieldValue::Number(30.0)),
            std::cmp::Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("a".into()).compare(&FieldValue::Text("b".into())),
            std::cmp::Ordering::Less
        );
        // NaN is ordered, not poisonous
        assert_eq!(
            FieldValue::Number(f64::NAN).compare(&FieldValue::Number(f64::NAN)),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn whitespace_search_is_no_search() {
        let mut query = ListQuery::sorted_by("name", SortDirection::Ascending);
        query.search = "   ".to_string();
        assert_eq!(query.search_term(), "");
    }
}
