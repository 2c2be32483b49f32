use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::icons::icon;
use leptos::prelude::*;

fn screen_icon(screen: Screen) -> &'static str {
    match screen {
        Screen::Overview => "overview",
        Screen::Merchants => "merchants",
        Screen::PosDevices => "pos",
        Screen::FraudAlerts => "shield",
        Screen::Commissions => "commissions",
        Screen::CloudServices => "cloud",
        Screen::GeoRisk => "globe",
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <nav class="sidebar">
            <ul class="sidebar__list">
                {Screen::all().iter().copied().map(|screen| {
                    view! {
                        <li class="sidebar__item">
                            <button
                                class="sidebar__link"
                                class:sidebar__link--active=move || ctx.active.get() == screen
                                on:click=move |_| ctx.open_screen(screen)
                            >
                                {icon(screen_icon(screen))}
                                <span>{screen.title()}</span>
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
