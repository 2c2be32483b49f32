pub mod state;

use self::state::create_state;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::data::DataSource;
use crate::shared::export::{export_csv, export_json};
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_value_signal, showing_line, FilterSelect, SearchInput};
use crate::shared::mock::CommissionApi;
use contracts::domain::a004_commission_entry::{
    CommissionEntry, CommissionScheme, SettlementStatus,
};
use contracts::shared::list_view::{self, aggregate, ListView};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_class(status: SettlementStatus) -> &'static str {
    match status {
        SettlementStatus::Settled => "badge badge--success",
        SettlementStatus::Pending => "badge badge--warning",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CommissionList() -> impl IntoView {
    let query = create_state();
    let (items, set_items) = signal::<Vec<CommissionEntry>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match CommissionApi.list().await {
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
                log::error!("commission list rejected snapshot: {}", e);
                ListView {
                    rows: Vec::new(),
                    total: snapshot.len(),
                }
            }
        }
    };

    // Unlike the merchant cards, this report's totals follow the filters:
    // the totals row and the scheme breakdown describe exactly what the
    // table shows.
    let filtered_totals = move || {
        let rows = current_view().rows;
        (
            aggregate::summarize(&rows, "volume").sum,
            aggregate::summarize(&rows, "commission").sum,
        )
    };
    let scheme_breakdown = move || {
        let rows = current_view().rows;
        aggregate::sum_by(&rows, "scheme", "commission")
    };

    let toggle_sort = move |field: String| {
        query.update(|q| q.sort.toggle(&field));
    };

    let handle_export_csv = move |_| {
        if let Err(e) = export_csv(&current_view().rows, "commissions.csv") {
            log::warn!("export failed: {}", e);
        }
    };
    let handle_export_json = move |_| {
        if let Err(e) = export_json(&current_view().rows, "commissions.json") {
            log::warn!("export failed: {}", e);
        }
    };

    view! {
        <div class="content commission-list">
            <div class="header">
                <h2>"Commissions"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=handle_export_csv>
                        {icon("export")}
                        "CSV"
                    </button>
                    <button class="button button--secondary" on:click=handle_export_json>
                        {icon("export")}
                        "JSON"
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
                    placeholder="Search merchant or id...".to_string()
                />
                <FilterSelect
                    label="Scheme"
                    value=filter_value_signal(query, "scheme")
                    options={CommissionScheme::all().iter()
                        .map(|s| (s.as_str().to_string(), s.label().to_string()))
                        .collect::<Vec<_>>()}
                    on_change=Callback::new(move |raw: String| {
                        query.update(|q| q.filters.set_from_input("scheme", &raw));
                    })
                />
                <FilterSelect
                    label="Status"
                    value=filter_value_signal(query, "status")
                    options={SettlementStatus::all().iter()
                        .map(|s| (s.as_str().to_string(), s.label().to_string()))
                        .collect::<Vec<_>>()}
                    on_change=Callback::new(move |raw: String| {
                        query.update(|q| q.filters.set_from_input("status", &raw));
                    })
                />
                <FilterSelect
                    label="Month"
                    value=filter_value_signal(query, "month")
                    options={["2026-05", "2026-06", "2026-07"].iter()
                        .map(|m| (m.to_string(), m.to_string()))
                        .collect::<Vec<_>>()}
                    on_change=Callback::new(move |raw: String| {
                        query.update(|q| q.filters.set_from_input("month", &raw));
                    })
                />
                <span class="list-meta">
                    {move || {
                        let view = current_view();
                        showing_line(view.matched(), view.total)
                    }}
                </span>
            </div>

            // Commission earned by scheme, over the filtered view.
            <div class="scheme-breakdown">
                {move || scheme_breakdown().into_iter().map(|(scheme, total)| {
                    view! {
                        <span class="scheme-breakdown__item">
                            <span class="scheme-breakdown__label">{scheme}</span>
                            <span class="scheme-breakdown__value">{format_money(total)}" EUR"</span>
                        </span>
                    }
                }).collect_view()}
            </div>

            {move || if loading.get() {
                view! { <div class="empty-state">"Loading commissions..."</div> }.into_any()
            } else if current_view().is_empty() {
                view! { <div class="empty-state">"No commission entries match the current filters"</div> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"ID"</th>
                                    <SortableHeaderCell
                                        label="Merchant"
                                        sort_field="merchant"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Scheme"
                                        sort_field="scheme"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Month"
                                        sort_field="month"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Volume"
                                        sort_field="volume"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Rate"
                                        sort_field="rate"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Commission"
                                        sort_field="commission"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Status"
                                        sort_field="status"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                </tr>
                            </thead>
                            <tbody>
                                {move || current_view().rows.into_iter().map(|entry| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--mono">{entry.id.clone()}</td>
                                            <td class="table__cell">{entry.merchant.clone()}</td>
                                            <td class="table__cell">{entry.scheme.label()}</td>
                                            <td class="table__cell table__cell--mono">{entry.month.clone()}</td>
                                            <td class="table__cell table__cell--right">{format_money(entry.volume)}</td>
                                            <td class="table__cell table__cell--right">{format!("{:.3}%", entry.rate)}</td>
                                            <td class="table__cell table__cell--right">{format_money(entry.commission)}</td>
                                            <td class="table__cell">
                                                <span class=status_class(entry.status)>{entry.status.label()}</span>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                            <tfoot>
                                <tr class="table__totals-row">
                                    <td class="table__cell" colspan="4">
                                        {move || format!("Totals ({} entries)", current_view().matched())}
                                    </td>
                                    <td class="table__cell table__cell--right">
                                        {move || format_money(filtered_totals().0)}
                                    </td>
                                    <td class="table__cell"></td>
                                    <td class="table__cell table__cell--right">
                                        {move || format_money(filtered_totals().1)}
                                    </td>
                                    <td class="table__cell"></td>
                                </tr>
                            </tfoot>
                        </table>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
