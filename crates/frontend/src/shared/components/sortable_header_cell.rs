use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_view::SortState;
use leptos::prelude::*;

/// Sortable table header cell with the ▲▼ indicator.
#[component]
pub fn SortableHeaderCell(
    /// Header text
    #[prop(into)]
    label: String,

    /// Field this column sorts by
    #[prop(into)]
    sort_field: String,

    /// Current sort state of the screen
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback when the header is clicked
    on_sort: Callback<String>,

    /// Header alignment (left/right)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let sort_field_for_click = sort_field.clone();
    let sort_field_for_indicator = sort_field.clone();
    let sort_field_for_class = sort_field.clone();

    let handle_click = move |_| {
        on_sort.run(sort_field_for_click.clone());
    };

    let header_class = if align == "right" {
        "table__header-cell table__header-cell--sortable table__header-cell--right"
    } else {
        "table__header-cell table__header-cell--sortable"
    };

    view! {
        <th class=header_class on:click=handle_click>
            {label}
            <span class=move || get_sort_class(&sort.get(), &sort_field_for_class)>
                {move || get_sort_indicator(&sort.get(), &sort_field_for_indicator)}
            </span>
        </th>
    }
}
