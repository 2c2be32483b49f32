use contracts::shared::list_view::{ListQuery, SortDirection};
use leptos::prelude::*;

/// Default view state: name ascending, no search, no filters. Recreated on
/// every mount, so navigating away resets the screen.
pub fn create_state() -> RwSignal<ListQuery> {
    RwSignal::new(ListQuery::sorted_by("name", SortDirection::Ascending))
}
