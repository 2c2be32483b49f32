use contracts::shared::list_view::{ListQuery, SortDirection};
use leptos::prelude::*;

/// Newest alerts first by default.
pub fn create_state() -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery::sorted_by("created_at", SortDirection::Descending))
}
