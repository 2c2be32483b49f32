use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::dashboards::d401_geo_risk::ui::GeoRiskDashboard;
use crate::domain::a001_merchant::ui::list::MerchantList;
use crate::domain::a002_pos_device::ui::list::PosDeviceList;
use crate::domain::a003_fraud_alert::ui::list::FraudAlertList;
use crate::domain::a004_commission_entry::ui::list::CommissionList;
use crate::domain::a005_cloud_service::ui::list::CloudServiceList;
use crate::layout::global_context::{AppGlobalContext, Screen};
use leptos::prelude::*;

/// Active-screen switch. Screens are remounted on every switch, which is
/// what resets their list state to defaults.
#[component]
pub fn Content() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <main class="app-content">
            {move || match ctx.active.get() {
                Screen::Overview => view! { <OverviewDashboard /> }.into_any(),
                Screen::Merchants => view! { <MerchantList /> }.into_any(),
                Screen::PosDevices => view! { <PosDeviceList /> }.into_any(),
                Screen::FraudAlerts => view! { <FraudAlertList /> }.into_any(),
                Screen::Commissions => view! { <CommissionList /> }.into_any(),
                Screen::CloudServices => view! { <CloudServiceList /> }.into_any(),
                Screen::GeoRisk => view! { <GeoRiskDashboard /> }.into_any(),
            }}
        </main>
    }
}
