use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::routes::routes::AppRoutes;
use crate::system::host_bridge;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Desktop menu entries navigate by screen key ("merchants", ...).
    host_bridge::on_menu_event(move |event| {
        if let Some(screen) = Screen::from_key(&event) {
            ctx.open_screen(screen);
        } else {
            leptos::logging::log!("unhandled menu event: {}", event);
        }
    });

    view! {
        <AppRoutes />
    }
}
