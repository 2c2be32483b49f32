/// UI helpers shared by every list screen: search input, filter selects,
/// sort header indicators. The actual filtering/sorting lives in
/// `contracts::shared::list_view`; nothing here touches record data.
use contracts::shared::list_view::{FilterValue, ListQuery, SortState};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::icons::icon;

/// Sort indicator for a header cell.
pub fn get_sort_indicator(sort: &SortState, field: &str) -> &'static str {
    if sort.field == field {
        if sort.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Class for the indicator span, dimmed on inactive columns.
pub fn get_sort_class(sort: &SortState, field: &str) -> &'static str {
    if sort.field == field {
        "sort-indicator sort-indicator--active"
    } else {
        "sort-indicator"
    }
}

/// Debounced free-text search box with a clear button.
#[component]
pub fn SearchInput(
    /// Current committed search value.
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired after the debounce window.
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Raw input state, ahead of the debounce.
    let (input_value, set_input_value) = signal(String::new());
    // Generation counter: only the latest pending edit commits.
    let generation = StoredValue::new(0u32);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let this_gen = generation.get_value() + 1;
        generation.set_value(this_gen);
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(300).await;
            // try_get_value: the component may have unmounted while waiting
            if generation.try_get_value() == Some(this_gen) {
                on_change.run(new_value);
            }
        });
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        generation.update_value(|g| *g += 1);
        on_change.run(String::new());
    };

    let is_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_active
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" title="Clear" on:click=clear_filter>
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Labelled select bound to one `FilterState` slot. The first option is the
/// "all" sentinel; the rest come from the screen's enum.
#[component]
pub fn FilterSelect(
    /// Label shown before the select.
    #[prop(into)]
    label: String,
    /// Current value, `"all"` when unconstrained.
    #[prop(into)]
    value: Signal<String>,
    /// `(value, label)` pairs for the options.
    options: Vec<(String, String)>,
    /// Raw selected value; feed it to `FilterState::set_from_input`.
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-select">
            <label class="filter-select__label">{label}</label>
            <select
                class="filter-select__input"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value="all">"All"</option>
                {options.into_iter().map(|(value, label)| {
                    view! { <option value={value}>{label}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}

/// Signal with the current raw value of one filter slot (for `FilterSelect`).
pub fn filter_value_signal(
    query: RwSignal<ListQuery>,
    field: &'static str,
) -> Signal<String> {
    Signal::derive(move || match query.get().filters.get(field) {
        FilterValue::All => "all".to_string(),
        FilterValue::Equals(v) => v.clone(),
    })
}

/// "Showing X of Y" line under a list header.
pub fn showing_line(matched: usize, total: usize) -> String {
    format!("Showing {} of {}", matched, total)
}
