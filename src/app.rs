use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::components::{FilterPanel, GameList, default_card_registry, default_registry};
use crate::config::{FilterSettings, default_filter_configs};
use crate::filters::FilterStore;
use crate::logging;
use crate::models::Catalog;

#[component]
pub fn App(
    catalog: Catalog,
    settings: FilterSettings,
    /// Called as `on_params(params, queryString)` whenever the search parameters change
    on_params: Option<js_sys::Function>,
) -> impl IntoView {
    let configs = default_filter_configs(&catalog, &settings);
    let games = RwSignal::new(catalog.games);
    let store = FilterStore::new(games.into(), settings);

    let registry = StoredValue::new(default_registry());
    let cards = StoredValue::new(default_card_registry());
    // None falls back to the card registry's default layout
    let layout = RwSignal::new(None::<String>);

    Effect::new(move |_| {
        let Some(callback) = on_params.as_ref() else {
            return;
        };
        let params = store.api_params.get();
        let query = store.search_query(1).to_query_string();
        let value = match serde_wasm_bindgen::to_value(&params) {
            Ok(value) => value,
            Err(e) => {
                logging::error(&format!("Failed to convert search params: {}", e));
                return;
            }
        };
        if let Err(e) = callback.call2(&JsValue::NULL, &value, &JsValue::from_str(&query)) {
            logging::error(&format!("on_params callback failed: {:?}", e));
        }
    });

    view! {
        <div class="app-container">
            <div class="main-content">
                <FilterPanel store=store registry=registry configs=configs />
                <GameList games=store.filtered_games cards=cards layout=layout />
            </div>
        </div>
    }
}
