use contracts::shared::list_view::{ListQuery, SortDirection};
use leptos::prelude::*;

/// Most expensive services first.
pub fn create_state() -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery::sorted_by("monthly_cost", SortDirection::Descending))
}
