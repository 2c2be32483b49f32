pub mod state;

use self::state::create_state;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::data::DataSource;
use crate::shared::export::{export_csv, export_json};
use crate::shared::format::{format_date, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_value_signal, showing_line, FilterSelect, SearchInput};
use crate::shared::mock::MerchantApi;
use contracts::domain::a001_merchant::{Merchant, MerchantStatus};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_view::{self, aggregate, ListView};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::{Button, ButtonAppearance};

fn status_class(status: MerchantStatus) -> &'static str {
    match status {
        MerchantStatus::Active => "badge badge--success",
        MerchantStatus::Pending => "badge badge--warning",
        MerchantStatus::Suspended => "badge badge--error",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn MerchantList() -> impl IntoView {
    let query = create_state();
    let (items, set_items) = signal::<Vec<Merchant>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (selected, set_selected) = signal::<HashSet<String>>(HashSet::new());
    let (page, set_page) = signal(0usize);
    let (page_size, set_page_size) = signal(25usize);
    let filter_expanded = RwSignal::new(false);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match MerchantApi.list().await {
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

    // Filtered/sorted view, recomputed on any state change.
    let current_view = move || {
        let snapshot = items.get();
        let q = query.get();
        match list_view::run(&snapshot, &q) {
            Ok(view) => view,
            Err(e) => {
                log::error!("merchant list rejected snapshot: {}", e);
                ListView {
                    rows: Vec::new(),
                    total: snapshot.len(),
                }
            }
        }
    };

    // Summary cards use the full, unfiltered collection; only the table
    // follows the filters. Dashboard convention.
    let total_merchants = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(items.get().len() as f64)
        }
    });
    let active_merchants = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(aggregate::count_where(&items.get(), "status", "active") as f64)
        }
    });
    let total_revenue = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(aggregate::summarize(&items.get(), "revenue").sum)
        }
    });

    let total_pages = move || {
        let matched = current_view().matched();
        let ps = page_size.get();
        if matched == 0 {
            1
        } else {
            (matched + ps - 1) / ps
        }
    };

    let paginated = move || {
        let rows = current_view().rows;
        let start = page.get() * page_size.get();
        let end = (start + page_size.get()).min(rows.len());
        if start >= rows.len() {
            Vec::new()
        } else {
            rows[start..end].to_vec()
        }
    };

    let toggle_sort = move |field: String| {
        query.update(|q| q.sort.toggle(&field));
    };

    let toggle_select = move |id: String, checked: bool| {
        set_selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    };

    // Suspend/activate mutate local state only; the gateway API does not
    // exist yet.
    let set_status_for_selected = move |status: MerchantStatus| {
        let ids = selected.get();
        if ids.is_empty() {
            return;
        }
        set_items.update(|list| {
            for merchant in list.iter_mut() {
                if ids.contains(&merchant.id) {
                    merchant.status = status;
                }
            }
        });
        set_selected.set(HashSet::new());
    };

    let handle_export_csv = move |_| {
        if let Err(e) = export_csv(&current_view().rows, "merchants.csv") {
            log::warn!("export failed: {}", e);
        }
    };
    let handle_export_json = move |_| {
        if let Err(e) = export_json(&current_view().rows, "merchants.json") {
            log::warn!("export failed: {}", e);
        }
    };

    view! {
        <div class="content merchant-list">
            <div class="header">
                <h2>"Merchants"</h2>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| set_status_for_selected(MerchantStatus::Active) disabled=Signal::derive(move || selected.get().is_empty())>
                        "Activate"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| set_status_for_selected(MerchantStatus::Suspended) disabled=Signal::derive(move || selected.get().is_empty())>
                        "Suspend"
                    </Button>
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

            <div class="stat-card-grid">
                <StatCard
                    label="Total merchants".to_string()
                    icon_name="merchants".to_string()
                    value=total_merchants
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Active merchants".to_string()
                    icon_name="check".to_string()
                    value=active_merchants
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Total revenue".to_string()
                    icon_name="payments".to_string()
                    value=total_revenue
                    format={ValueFormat::Money { currency: "EUR".to_string() }}
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <FilterPanel
                is_expanded=filter_expanded
                active_filters_count=Signal::derive(move || query.get().filters.active_count())
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=page
                        total_pages=Signal::derive(total_pages)
                        total_count=Signal::derive(move || current_view().matched())
                        page_size=page_size
                        on_page_change=Callback::new(move |p| set_page.set(p))
                        on_page_size_change=Callback::new(move |ps| {
                            set_page_size.set(ps);
                            set_page.set(0);
                        })
                    />
                }.into_any()
                filter_content=move || view! {
                    <div class="filter-panel__row">
                        <SearchInput
                            value=Signal::derive(move || query.get().search.clone())
                            on_change=Callback::new(move |term: String| {
                                query.update(|q| q.search = term);
                                set_page.set(0);
                            })
                            placeholder="Search name, email or id...".to_string()
                        />
                        <FilterSelect
                            label="Status"
                            value=filter_value_signal(query, "status")
                            options={MerchantStatus::all().iter()
                                .map(|s| (s.as_str().to_string(), s.label().to_string()))
                                .collect::<Vec<_>>()}
                            on_change=Callback::new(move |raw: String| {
                                query.update(|q| q.filters.set_from_input("status", &raw));
                                set_page.set(0);
                            })
                        />
                        <FilterSelect
                            label="Country"
                            value=filter_value_signal(query, "country")
                            options={["IT", "FR", "DE", "ES", "PT", "AT", "NL"].iter()
                                .map(|c| (c.to_string(), c.to_string()))
                                .collect::<Vec<_>>()}
                            on_change=Callback::new(move |raw: String| {
                                query.update(|q| q.filters.set_from_input("country", &raw));
                                set_page.set(0);
                            })
                        />
                    </div>
                }.into_any()
            />

            <div class="list-meta">
                {move || {
                    let view = current_view();
                    showing_line(view.matched(), view.total)
                }}
            </div>

            {move || if loading.get() {
                view! { <div class="empty-state">"Loading merchants..."</div> }.into_any()
            } else if current_view().is_empty() {
                view! { <div class="empty-state">"No merchants match the current filters"</div> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell table__header-cell--checkbox">
                                        <input
                                            type="checkbox"
                                            class="table__checkbox"
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                if checked {
                                                    let visible = current_view().rows;
                                                    set_selected.update(|s| {
                                                        for merchant in visible {
                                                            s.insert(merchant.id);
                                                        }
                                                    });
                                                } else {
                                                    set_selected.set(HashSet::new());
                                                }
                                            }
                                        />
                                    </th>
                                    <th class="table__header-cell">"ID"</th>
                                    <SortableHeaderCell
                                        label="Name"
                                        sort_field="name"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <th class="table__header-cell">"Email"</th>
                                    <SortableHeaderCell
                                        label="Country"
                                        sort_field="country"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Status"
                                        sort_field="status"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Revenue"
                                        sort_field="revenue"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Commission"
                                        sort_field="commission_rate"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Created"
                                        sort_field="created_at"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                </tr>
                            </thead>
                            <tbody>
                                {move || paginated().into_iter().map(|merchant| {
                                    let id_for_checkbox = merchant.id.clone();
                                    let id_for_toggle = merchant.id.clone();
                                    let id_for_selected = merchant.id.clone();
                                    view! {
                                        <tr
                                            class="table__row"
                                            class:table__row--selected=move || selected.get().contains(&id_for_selected)
                                        >
                                            <TableCheckbox
                                                checked=Signal::derive(move || selected.get().contains(&id_for_checkbox))
                                                on_change=Callback::new(move |checked| toggle_select(id_for_toggle.clone(), checked))
                                            />
                                            <td class="table__cell table__cell--mono">{merchant.id.clone()}</td>
                                            <td class="table__cell">{merchant.name.clone()}</td>
                                            <td class="table__cell">{merchant.email.clone()}</td>
                                            <td class="table__cell">{merchant.country.clone()}</td>
                                            <td class="table__cell">
                                                <span class=status_class(merchant.status)>{merchant.status.label()}</span>
                                            </td>
                                            <td class="table__cell table__cell--right">{format_money(merchant.revenue)}</td>
                                            <td class="table__cell table__cell--right">{format!("{:.2}%", merchant.commission_rate)}</td>
                                            <td class="table__cell">{format_date(merchant.created_at)}</td>
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
