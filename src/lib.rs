mod app;
pub mod components;
pub mod config;
pub mod filters;
mod logging;
pub mod models;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::FilterSettings;
use crate::models::Catalog;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
}

/// Mount the filter panel and game list into `<body>`.
///
/// `catalog` is `{games, genres, platforms, stores, tags}`; `settings` may be
/// `null`/`undefined` for defaults.
#[wasm_bindgen]
pub fn mount_filters(
    catalog: JsValue,
    settings: JsValue,
    on_params: Option<js_sys::Function>,
) -> Result<(), JsValue> {
    let catalog: Catalog = serde_wasm_bindgen::from_value(catalog)?;
    let settings: FilterSettings = if settings.is_null() || settings.is_undefined() {
        FilterSettings::default()
    } else {
        serde_wasm_bindgen::from_value(settings)?
    };

    logging::debug(&format!("Mounting filters for {} games", catalog.games.len()));
    leptos::mount::mount_to_body(move || {
        view! { <App catalog=catalog settings=settings on_params=on_params /> }
    });
    Ok(())
}
