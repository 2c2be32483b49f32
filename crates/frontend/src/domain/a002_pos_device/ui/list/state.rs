use contracts::shared::list_view::{ListQuery, SortDirection};
use leptos::prelude::*;

pub fn create_state() -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery::sorted_by("serial", SortDirection::Ascending))
}
