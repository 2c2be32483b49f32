use crate::shared::components::stat_card::StatCard;
use crate::shared::data::DataSource;
use crate::shared::icons::icon;
use crate::shared::live::start_polling;
use crate::shared::mock::{kpi_tick, InsightApi};
use contracts::dashboards::d400_overview::{kpi_catalog, AiInsight, InsightConfidence};
use contracts::shared::indicators::{IndicatorStatus, IndicatorValue};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;
use thaw::{Badge, BadgeAppearance, BadgeColor};

fn confidence_color(confidence: InsightConfidence) -> BadgeColor {
    match confidence {
        InsightConfidence::High => BadgeColor::Success,
        InsightConfidence::Medium => BadgeColor::Warning,
        InsightConfidence::Low => BadgeColor::Danger,
    }
}

/// Map one KPI sample onto indicator values, rolling change badges forward.
fn advance_values(values: &mut HashMap<String, IndicatorValue>) {
    let sample = kpi_tick();
    let entries = [
        (
            "volume",
            sample.volume,
            IndicatorStatus::Good,
        ),
        (
            "success_rate",
            sample.success_rate,
            if sample.success_rate < 97.0 {
                IndicatorStatus::Warning
            } else {
                IndicatorStatus::Good
            },
        ),
        (
            "fraud_rate",
            sample.fraud_rate,
            if sample.fraud_rate > 0.5 {
                IndicatorStatus::Bad
            } else {
                IndicatorStatus::Good
            },
        ),
        (
            "active_merchants",
            sample.active_merchants,
            IndicatorStatus::Neutral,
        ),
    ];
    for (id, value, status) in entries {
        let previous = values
            .get(id)
            .cloned()
            .unwrap_or_else(|| IndicatorValue::pending(contracts::shared::indicators::IndicatorId::new(id)));
        values.insert(id.to_string(), previous.advance(value, status));
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let (values, set_values) = signal::<HashMap<String, IndicatorValue>>(HashMap::new());
    let (insights, set_insights) = signal::<Vec<AiInsight>>(Vec::new());
    let (insights_loading, set_insights_loading) = signal(true);

    // First sample immediately, then refresh on a timer while mounted.
    set_values.update(advance_values);
    start_polling(8_000, move || set_values.update(advance_values));

    let load_insights = move || {
        set_insights_loading.set(true);
        spawn_local(async move {
            match InsightApi.list().await {
                Ok(list) => set_insights.set(list),
                Err(e) => log::error!("insight scoring failed: {}", e),
            }
            set_insights_loading.set(false);
        });
    };
    load_insights();

    view! {
        <div class="content overview-dashboard">
            <div class="header">
                <h2>"Overview"</h2>
                <div class="header__actions">
                    <button class="button button--secondary" on:click=move |_| load_insights()>
                        {icon("refresh")}
                        "Re-run insights"
                    </button>
                </div>
            </div>

            <div class="stat-card-grid">
                {kpi_catalog().into_iter().map(|meta| {
                    let id = meta.id.0.clone();
                    let id_for_status = id.clone();
                    let id_for_change = id.clone();
                    view! {
                        <StatCard
                            label=meta.label.clone()
                            icon_name=meta.icon.clone()
                            value=Signal::derive(move || {
                                values.get().get(&id).and_then(|v| v.value)
                            })
                            format=meta.format.clone()
                            status=Signal::derive(move || {
                                values.get().get(&id_for_status)
                                    .map(|v| v.status)
                                    .unwrap_or(IndicatorStatus::Neutral)
                            })
                            change_percent=Signal::derive(move || {
                                values.get().get(&id_for_change).and_then(|v| v.change_percent)
                            })
                        />
                    }
                }).collect_view()}
            </div>

            <div class="insight-panel">
                <div class="insight-panel__header">
                    {icon("zap")}
                    <h3>"AI Insights"</h3>
                </div>
                {move || if insights_loading.get() {
                    view! { <div class="empty-state">"Scoring model running..."</div> }.into_any()
                } else if insights.get().is_empty() {
                    view! { <div class="empty-state">"No insights for the current period"</div> }.into_any()
                } else {
                    view! {
                        <div class="insight-panel__list">
                            {insights.get().into_iter().map(|insight| {
                                view! {
                                    <div class="insight-card">
                                        <div class="insight-card__header">
                                            <span class="insight-card__title">{insight.title.clone()}</span>
                                            <span class="insight-card__category">{insight.category.clone()}</span>
                                            <Badge
                                                appearance=BadgeAppearance::Tint
                                                color=confidence_color(insight.confidence)
                                            >
                                                {insight.confidence.label()}
                                            </Badge>
                                        </div>
                                        <p class="insight-card__body">{insight.body.clone()}</p>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
