pub mod state;

use self::state::create_state;
use crate::shared::components::sortable_header_cell::SortableHeaderCell;
use crate::shared::components::stat_card::StatCard;
use crate::shared::data::DataSource;
use crate::shared::export::export_csv;
use crate::shared::format::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::{filter_value_signal, showing_line, FilterSelect, SearchInput};
use crate::shared::mock::PosDeviceApi;
use crate::system::host_bridge;
use chrono::Utc;
use contracts::domain::a002_pos_device::{DeviceStatus, PosDevice};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::list_view::{self, aggregate, ListView};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;

fn status_class(status: DeviceStatus) -> &'static str {
    match status {
        DeviceStatus::Online => "badge badge--success",
        DeviceStatus::Offline => "badge badge--error",
        DeviceStatus::Maintenance => "badge badge--warning",
    }
}

/// Control actions fired from a device row. All simulated: a short delay,
/// then a local state change.
#[derive(Clone, Copy, PartialEq)]
enum DeviceAction {
    Ping,
    Restart,
    PushFirmware,
}

#[component]
#[allow(non_snake_case)]
pub fn PosDeviceList() -> impl IntoView {
    let query = create_state();
    let (items, set_items) = signal::<Vec<PosDevice>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    // Devices with an action in flight; their buttons are disabled.
    let (busy, set_busy) = signal::<HashSet<String>>(HashSet::new());

    let fetch = move || {
        set_loading.set(true);
        spawn_local(async move {
            match PosDeviceApi.list().await {
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
                log::error!("pos device list rejected snapshot: {}", e);
                ListView {
                    rows: Vec::new(),
                    total: snapshot.len(),
                }
            }
        }
    };

    // Cards over the unfiltered fleet.
    let online_count = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(aggregate::count_where(&items.get(), "status", "online") as f64)
        }
    });
    let offline_count = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            Some(aggregate::count_where(&items.get(), "status", "offline") as f64)
        }
    });
    let avg_battery = Signal::derive(move || {
        if loading.get() {
            None
        } else {
            aggregate::summarize(&items.get(), "battery").avg
        }
    });

    let toggle_sort = move |field: String| {
        query.update(|q| q.sort.toggle(&field));
    };

    let run_action = move |id: String, action: DeviceAction| {
        set_busy.update(|b| {
            b.insert(id.clone());
        });
        spawn_local(async move {
            // Simulated round-trip to the terminal.
            TimeoutFuture::new(800).await;
            set_items.update(|list| {
                if let Some(device) = list.iter_mut().find(|d| d.id == id) {
                    match action {
                        DeviceAction::Ping => {
                            device.last_seen = Utc::now();
                        }
                        DeviceAction::Restart => {
                            device.status = DeviceStatus::Online;
                            device.last_seen = Utc::now();
                        }
                        DeviceAction::PushFirmware => {
                            device.firmware = "3.0.0".to_string();
                            device.status = DeviceStatus::Maintenance;
                            device.last_seen = Utc::now();
                        }
                    }
                }
            });
            set_busy.update(|b| {
                b.remove(&id);
            });
            if action == DeviceAction::Restart {
                host_bridge::notify("Device restarted", &id);
            }
        });
    };

    let handle_export = move |_| {
        if let Err(e) = export_csv(&current_view().rows, "pos-devices.csv") {
            log::warn!("export failed: {}", e);
        }
    };

    view! {
        <div class="content pos-device-list">
            <div class="header">
                <h2>"POS Devices"</h2>
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
                    label="Online".to_string()
                    icon_name="pos".to_string()
                    value=online_count
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Offline".to_string()
                    icon_name="bell".to_string()
                    value=offline_count
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if offline_count.get().unwrap_or(0.0) > 0.0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Good
                        }
                    })
                    change_percent=Signal::derive(|| None)
                />
                <StatCard
                    label="Avg battery".to_string()
                    icon_name="zap".to_string()
                    value=avg_battery
                    format={ValueFormat::Percent { decimals: 0 }}
                    status=Signal::derive(|| IndicatorStatus::Neutral)
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
                    placeholder="Search serial or merchant...".to_string()
                />
                <FilterSelect
                    label="Status"
                    value=filter_value_signal(query, "status")
                    options={DeviceStatus::all().iter()
                        .map(|s| (s.as_str().to_string(), s.label().to_string()))
                        .collect::<Vec<_>>()}
                    on_change=Callback::new(move |raw: String| {
                        query.update(|q| q.filters.set_from_input("status", &raw));
                    })
                />
                <FilterSelect
                    label="Model"
                    value=filter_value_signal(query, "model")
                    options={["PAX A920", "Ingenico Move/5000", "Verifone P400", "SumUp Solo"].iter()
                        .map(|m| (m.to_string(), m.to_string()))
                        .collect::<Vec<_>>()}
                    on_change=Callback::new(move |raw: String| {
                        query.update(|q| q.filters.set_from_input("model", &raw));
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
                view! { <div class="empty-state">"Loading devices..."</div> }.into_any()
            } else if current_view().is_empty() {
                view! { <div class="empty-state">"No devices match the current filters"</div> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <SortableHeaderCell
                                        label="Serial"
                                        sort_field="serial"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Merchant"
                                        sort_field="merchant"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <SortableHeaderCell
                                        label="Model"
                                        sort_field="model"
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
                                        label="Battery"
                                        sort_field="battery"
                                        align="right"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <th class="table__header-cell">"Firmware"</th>
                                    <SortableHeaderCell
                                        label="Last seen"
                                        sort_field="last_seen"
                                        sort=Signal::derive(move || query.get().sort.clone())
                                        on_sort=Callback::new(toggle_sort)
                                    />
                                    <th class="table__header-cell">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || current_view().rows.into_iter().map(|device| {
                                    let id_ping = device.id.clone();
                                    let id_restart = device.id.clone();
                                    let id_firmware = device.id.clone();
                                    let id_busy = device.id.clone();
                                    let is_busy = Signal::derive(move || busy.get().contains(&id_busy));
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--mono">{device.serial.clone()}</td>
                                            <td class="table__cell">{device.merchant.clone()}</td>
                                            <td class="table__cell">{device.model.clone()}</td>
                                            <td class="table__cell">
                                                <span class=status_class(device.status)>{device.status.label()}</span>
                                            </td>
                                            <td class="table__cell table__cell--right">{format!("{:.0}%", device.battery)}</td>
                                            <td class="table__cell table__cell--mono">{device.firmware.clone()}</td>
                                            <td class="table__cell">{format_datetime(device.last_seen)}</td>
                                            <td class="table__cell table__cell--actions">
                                                <button
                                                    class="button button--small"
                                                    prop:disabled=move || is_busy.get()
                                                    on:click=move |_| run_action(id_ping.clone(), DeviceAction::Ping)
                                                >
                                                    "Ping"
                                                </button>
                                                <button
                                                    class="button button--small"
                                                    prop:disabled=move || is_busy.get()
                                                    on:click=move |_| run_action(id_restart.clone(), DeviceAction::Restart)
                                                >
                                                    "Restart"
                                                </button>
                                                <button
                                                    class="button button--small"
                                                    prop:disabled=move || is_busy.get()
                                                    on:click=move |_| run_action(id_firmware.clone(), DeviceAction::PushFirmware)
                                                >
                                                    "Firmware"
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
