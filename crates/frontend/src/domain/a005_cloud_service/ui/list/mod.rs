pub mod state;

use self::state::create_state;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::DataSource;
use crate::shared::export::export_csv;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_value_signal, showing_line, FilterSelect, SearchInput};
use crate::shared::mock::CloudServiceApi;
use contracts::domain::a005_cloud_service::{CloudProvider, CloudService, ServiceStatus};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_view::{self, aggregate, ListView};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn status_class(status: ServiceStatus) -> &'static str {
    match status {
        ServiceStatus::Healthy => "badge badge--success",
        ServiceStatus::Degraded => "badge badge--warning",
        ServiceStatus::Down => "badge badge--error",
    }
}

/// Utilisation cell colouring: hot services stand out.
fn utilisation_class(pct: f64) -> &'static str {
    if pct >= 85.0 {
        "table__cell table__cell--right utilisation--hot"
    } else if pct >= 60.0 {
        "table__cell table__cell--right utilisation--warm"
    } else {
        "table__cell table__cell--right"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CloudServiceList() -> impl IntoView {
    let query = create_state();
    let (items, set_items) = signal::<Vec<CloudService>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match CloudServiceApi.list().await {
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
                log::error!("cloud service list rejected snapshot: {}", e);
                ListView {
                    rows: Vec::new(),
                    total: snapshot.len(),
                }
            }
        }
    };

    // Cards over the whole estate, not the filtered table.
    let monthly_spend = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(aggregate::summarize(&items.get(), "monthly_cost").sum)
        }
    });
    let services_down = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(aggregate::count_where(&items.get(), "status", "down") as f64)
        }
    });

    let toggle_sort = move |field: String| {
        query.update(|q| q.sort.toggle(&field));
    };

    let handle_export = move |_| {
        if let Err(e) = export_csv(&current_view().rows, "cloud-services.csv") {
            log::warn!("export failed: {}", e);
        }
    };

    view! {
        <div class="content cloud-service-list">
            <div class="header">
                <h2>"Cloud Services"</h2>
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

            <div class="stat-card-grid">
                <StatCard
                    label="Monthly spend".to_string()
                    icon_name="cloud".to_string()
                    value=monthly_spend
                    format={ValueFormat::Money { currency: "EUR".to_string() }}
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Services down".to_string()
                    icon_name="bell".to_string()
                    value=services_down
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if services_down.get().unwrap_or(0.0) > 0.0 {
                            IndicatorStatus::Bad
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                    change_percent=Signal::derive(|| None)
                />
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="filter-panel__row">
                <SearchInput
                    value=Signal::derive(move || query.get().search.clone())
                    on_change=Callback::new(move |term: String| {
                        query.update(|q| q.search = term);
                    })
                    placeholder="Search service or region...".to_string()
                />
                <FilterSelect
                    label="Provider"
                    value=filter_value_signal(query, "provider")
                    options={CloudProvider::all().iter()
                        .map(|p| (p.as_str().to_string(), p.label().to_string()))
                        .collect::<Vec<_>>()}
                    on_change=Callback::new(move |raw: String| {
                        query.update(|q| q.filters.set_from_input("provider", &raw));
                    })
                />
                <FilterSelect
                    label="Status"
                    value=filter_value_signal(query, "status")
                    options={ServiceStatus::all().iter()
                        .map(|s| (s.as_str().to_string(), s.label().to_string()))
                        .collect::<Vec<_>>()}
                    on_change=Callback::new(move |raw: String| {
                        query.update(|q| q.filters.set_from_input("status", &raw));
                    })
                />
                <span class="list-meta">
                    {move || {
                        let view = current_view();
                        showing_line(view.matched(), view.total)
                    }}
                </span>
            </div>

            {move || if loading.get() {
                view! { <div class="empty-state">"Loading services..."</div> }.into_any()
            } else if current_view().is_empty() {
                view! { <div class="empty-state">"No services match the current filters"</div> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <SortableHeaderCell
                                        label="Service"
                                        sort_field="service"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Provider"
                                        sort_field="provider"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Region"
                                        sort_field="region"
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
                                        label="Monthly cost"
                                        sort_field="monthly_cost"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="CPU"
                                        sort_field="cpu"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Memory"
                                        sort_field="memory"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                </tr>
                            </thead>
                            <tbody>
                                {move || current_view().rows.into_iter().map(|service| {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--mono">{service.service.clone()}</td>
                                            <td class="table__cell">{service.provider.label()}</td>
                                            <td class="table__cell table__cell--mono">{service.region.clone()}</td>
                                            <td class="table__cell">
                                                <span class=status_class(service.status)>{service.status.label()}</span>
                                            </td>
                                            <td class="table__cell table__cell--right">{format_money(service.monthly_cost)}</td>
                                            <td class=utilisation_class(service.cpu)>{format!("{:.0}%", service.cpu)}</td>
                                            <td class=utilisation_class(service.memory)>{format!("{:.0}%", service.memory)}</td>
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
