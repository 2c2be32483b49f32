use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use web_sys::window;

/// Top-level screens of the console. Screen-local view state (search,
/// filters, sort) lives inside each screen component, so switching away and
/// back resets it to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Overview,
    Merchants,
    PosDevices,
    FraudAlerts,
    Commissions,
    CloudServices,
    GeoRisk,
}

impl Screen {
    pub fn key(&self) -> &'static str {
        match self {
            Screen::Overview => "overview",
            Screen::Merchants => "merchants",
            Screen::PosDevices => "pos-devices",
            Screen::FraudAlerts => "fraud-alerts",
            Screen::Commissions => "commissions",
            Screen::CloudServices => "cloud-services",
            Screen::GeoRisk => "geo-risk",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Merchants => "Merchants",
            Screen::PosDevices => "POS Devices",
            Screen::FraudAlerts => "Fraud Alerts",
            Screen::Commissions => "Commissions",
            Screen::CloudServices => "Cloud Services",
            Screen::GeoRisk => "Geographic Risk",
        }
    }

    pub fn from_key(key: &str) -> Option<Screen> {
        Screen::all().iter().copied().find(|s| s.key() == key)
    }

    pub fn all() -> &'static [Screen] {
        &[
            Screen::Overview,
            Screen::Merchants,
            Screen::PosDevices,
            Screen::FraudAlerts,
            Screen::Commissions,
            Screen::CloudServices,
            Screen::GeoRisk,
        ]
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Screen>,
    pub left_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Screen::Overview),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open_screen(&self, screen: Screen) {
        leptos::logging::log!("open_screen: {}", screen.key());
        self.active.set(screen);
    }

    pub fn toggle_sidebar(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Restore the active screen from `?screen=` and mirror changes back via
    /// `history.replaceState`, so a reload lands on the same screen.
    pub fn init_url_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(screen) = params.get("screen").and_then(|key| Screen::from_key(key)) {
            self.active.set(screen);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "screen".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}
