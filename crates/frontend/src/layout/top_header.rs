use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::host_bridge;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Version string from the desktop wrapper; stays empty in the browser.
    let (host_version, set_host_version) = signal(None::<String>);
    spawn_local(async move {
        if let Some(info) = host_bridge::host_info().await {
            set_host_version.set(Some(info.version));
        }
    });

    view! {
        <header class="top-header">
            <button
                class="top-header__toggle"
                title="Toggle sidebar"
                on:click=move |_| ctx.toggle_sidebar()
            >
                {icon("menu")}
            </button>
            <div class="top-header__brand">
                <span class="top-header__logo">{icon("payments")}</span>
                <span class="top-header__title">"Gateway Console"</span>
                {move || host_version.get().map(|v| view! {
                    <span class="top-header__version">{format!("v{}", v)}</span>
                })}
            </div>
            <div class="top-header__screen">
                {move || ctx.active.get().title()}
            </div>
        </header>
    }
}
