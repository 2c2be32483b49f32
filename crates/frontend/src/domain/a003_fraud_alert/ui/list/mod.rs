pub mod state;

use self::state::create_state;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::DataSource;
use crate::shared::export::{export_csv, export_json};
use crate::shared::format::{format_datetime, format_money};
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_value_signal, showing_line, FilterSelect, SearchInput};
use crate::shared::live::start_polling;
use crate::shared::mock::{incoming_fraud_alert, FraudAlertApi};
use crate::system::host_bridge;
use contracts::domain::a003_fraud_alert::{AlertSeverity, AlertStatus, FraudAlert};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_view::{self, ListView};
use leptos::prelude::*;
use leptos::task::spawn_local;

fn severity_class(severity: AlertSeverity) -> &'static str {
    match severity {
        AlertSeverity::Low => "badge",
        AlertSeverity::Medium => "badge badge--warning",
        AlertSeverity::High => "badge badge--error",
        AlertSeverity::Critical => "badge badge--critical",
    }
}

fn status_class(status: AlertStatus) -> &'static str {
    match status {
        AlertStatus::Open => "badge badge--error",
        AlertStatus::Investigating => "badge badge--warning",
        AlertStatus::Resolved => "badge badge--success",
    }
}

#[component]
#[allow(non_snake_case)]
pub fn FraudAlertList() -> impl IntoView {
    let query = create_state();
    let (items, set_items) = signal::<Vec<FraudAlert>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match FraudAlertApi.list().await {
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

    // Live feed: a new alert lands every few seconds while the screen is
    // mounted. The pipeline recomputes over the grown snapshot; stable sort
    // keeps existing rows from reshuffling.
    start_polling(6_000, move || {
        let alert = incoming_fraud_alert();
        if alert.severity == AlertSeverity::Critical {
            host_bridge::notify("Critical fraud alert", &alert.merchant);
        }
        set_items.update(|list| list.push(alert));
    });

    let current_view = move || {
        let snapshot = items.get();
        let q = query.get();
        match list_view::run(&snapshot, &q) {
            Ok(view) => view,
            Err(e) => {
                log::error!("fraud alert list rejected snapshot: {}", e);
                ListView {
                    rows: Vec::new(),
                    total: snapshot.len(),
                }
            }
        }
    };

    // Cards over the unfiltered collection.
    let open_alerts = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(
                items
                    .get()
                    .iter()
                    .filter(|a| a.status == AlertStatus::Open)
                    .count() as f64,
            )
        }
    });
    let critical_alerts = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(
                items
                    .get()
                    .iter()
                    .filter(|a| a.severity == AlertSeverity::Critical)
                    .count() as f64,
            )
        }
    });
    let amount_at_risk = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(
                items
                    .get()
                    .iter()
                    .filter(|a| a.status != AlertStatus::Resolved)
                    .map(|a| a.amount)
                    .sum(),
            )
        }
    });

    let toggle_sort = move |field: String| {
        query.update(|q| q.sort.toggle(&field));
    };

    let advance_status = move |id: String| {
        set_items.update(|list| {
            if let Some(alert) = list.iter_mut().find(|a| a.id == id) {
                alert.status = match alert.status {
                    AlertStatus::Open => AlertStatus::Investigating,
                    AlertStatus::Investigating => AlertStatus::Resolved,
                    AlertStatus::Resolved => AlertStatus::Resolved,
                };
            }
        });
    };

    let handle_export_csv = move |_| {
        if let Err(e) = export_csv(&current_view().rows, "fraud-alerts.csv") {
            log::warn!("export failed: {}", e);
        }
    };
    let handle_export_json = move |_| {
        if let Err(e) = export_json(&current_view().rows, "fraud-alerts.json") {
            log::warn!("export failed: {}", e);
        }
    };

    view! {
        <div class="content fraud-alert-list">
            <div class="header">
                <h2>"Fraud Alerts"</h2>
                <span class="header__live-dot" title="Live feed">"● live"</span>
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
                        "Reload"
                    </button>
                </div>
            </div>

            <div class="stat-card-grid">
                <StatCard
                    label="Open alerts".to_string()
                    icon_name="bell".to_string()
                    value=open_alerts
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if open_alerts.get().unwrap_or(0.0) > 10.0 {
                            IndicatorStatus::Bad
                        } else {
                            IndicatorStatus::Warning
                        }
                    })
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Critical".to_string()
                    icon_name="shield".to_string()
                    value=critical_alerts
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if critical_alerts.get().unwrap_or(0.0) > 0.0 {
                            IndicatorStatus::Bad
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Amount at risk".to_string()
                    icon_name="payments".to_string()
                    value=amount_at_risk
                    format={ValueFormat::Money { currency: "EUR".to_string() }}
                    status=Signal::derive(|| IndicatorStatus::Warning)
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
                    placeholder="Search merchant, rule or id...".to_string()
                />
                <FilterSelect
                    label="Severity"
                    value=filter_value_signal(query, "severity")
                    options={AlertSeverity::all().iter()
                        .map(|s| (s.as_str().to_string(), s.label().to_string()))
                        .collect::<Vec<_>>()}
                    on_change=Callback::new(move |raw: String| {
                        query.update(|q| q.filters.set_from_input("severity", &raw));
                    })
                />
                <FilterSelect
                    label="Status"
                    value=filter_value_signal(query, "status")
                    options={AlertStatus::all().iter()
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
                view! { <div class="empty-state">"Loading alerts..."</div> }.into_any()
            } else if current_view().is_empty() {
                view! { <div class="empty-state">"No alerts match the current filters"</div> }.into_any()
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
                                        label="Rule"
                                        sort_field="rule"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Severity"
                                        sort_field="severity_rank"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Amount"
                                        sort_field="amount"
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
                                    <SortableHeaderCell
                                        label="Created"
                                        sort_field="created_at"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || current_view().rows.into_iter().map(|alert| {
                                    let id_for_action = alert.id.clone();
                                    let is_resolved = alert.status == AlertStatus::Resolved;
                                    let action_label = match alert.status {
                                        AlertStatus::Open => "Investigate",
                                        AlertStatus::Investigating => "Resolve",
                                        AlertStatus::Resolved => "Resolved",
                                    };
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--mono">{alert.id.clone()}</td>
                                            <td class="table__cell">{alert.merchant.clone()}</td>
                                            <td class="table__cell table__cell--mono">{alert.rule.clone()}</td>
                                            <td class="table__cell">
                                                <span class=severity_class(alert.severity)>{alert.severity.label()}</span>
                                            </td>
                                            <td class="table__cell table__cell--right">{format_money(alert.amount)}</td>
                                            <td class="table__cell">
                                                <span class=status_class(alert.status)>{alert.status.label()}</span>
                                            </td>
                                            <td class="table__cell">{format_datetime(alert.created_at)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--small"
                                                    prop:disabled=is_resolved
                                                    on:click=move |_| advance_status(id_for_action.clone())
                                                >
                                                    {action_label}
                                                </button>
                                            </td>
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
