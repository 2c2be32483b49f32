use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::data::DataSource;
use crate::shared::export::export_csv;
use crate::shared::format::format_thousands;
use crate::shared::icons::icon;
use crate::shared::list_utils::{showing_line, SearchInput};
use crate::shared::mock::GeoRiskApi;
use contracts::dashboards::d401_geo_risk::CountryRisk;
use contracts::shared::list_view::{self, ListQuery, ListView, SortDirection};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn risk_class(score: f64) -> &'static str {
    if score >= 70.0 {
        "table__cell table__cell--right risk--high"
    } else if score >= 40.0 {
        "table__cell table__cell--right risk--medium"
    } else {
        "table__cell table__cell--right risk--low"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn GeoRiskDashboard() -> impl IntoView {
    // Riskiest countries first; no filters on this table.
    let query = RwSignal::new(ListQuery::sorted_by("risk_score", SortDirection::Descending));
    let (items, set_items) = signal::<Vec<CountryRisk>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match GeoRiskApi.list().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };
    fetch();

    let current_view = move || {
        let snapshot = items.get();
        let q = query.get();
        match list_view::run(&snapshot, &q) {
            Ok(view) => view,
            Err(e) => {
                log::error!("geo risk table rejected snapshot: {}", e);
                ListView {
                    rows: Vec::new(),
                    total: snapshot.len(),
                }
            }
        }
    };

    let toggle_sort = move |field: String| {
        query.update(|q| q.sort.toggle(&field));
    };

    let handle_export = move |_| {
        if let Err(e) = export_csv(&current_view().rows, "geo-risk.csv") {
            log::warn!("export failed: {}", e);
        }
    };

    view! {
        <div class="content geo-risk-dashboard">
            <div class="header">
                <h2>"Geographic Risk"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=handle_export>
                        {icon("export")}
                        "CSV"
                    </button>
                    <button class="button button--secondary" on:click=move |_| fetch()>
                        {icon("refresh")}
                        "Refresh"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="filter-panel__row">
                <SearchInput
                    value=Signal::derive(move || query.get().search.clone())
                    on_change=Callback::new(move |term: String| {
                        query.update(|q| q.search = term);
                    })
                    placeholder="Search country...".to_string()
                />
                <span class="list-meta">
                    {move || {
                        let view = current_view();
                        showing_line(view.matched(), view.total)
                    }}
                </span>
            </div>

            {move || if loading.get() {
                view! { <div class="empty-state">"Loading risk data..."</div> }.into_any()
            } else if current_view().is_empty() {
                view! { <div class="empty-state">"No countries match the search"</div> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <SortableHeaderCell
                                        label="Country"
                                        sort_field="country_name"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Transactions"
                                        sort_field="transactions"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Fraud rate"
                                        sort_field="fraud_rate"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Risk score"
                                        sort_field="risk_score"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                </tr>
                            </thead>
                            <tbody>
                                {move || current_view().rows.into_iter().map(|row| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell">
                                                <span class="table__cell--mono">{row.country.clone()}</span>
                                                " "
                                                {row.country_name.clone()}
                                            </td>
                                            <td class="table__cell table__cell--right">{format_thousands(row.transactions as i64)}</td>
                                            <td class="table__cell table__cell--right">{format!("{:.2}%", row.fraud_rate)}</td>
                                            <td class=risk_class(row.risk_score)>{format!("{:.0}", row.risk_score)}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
